use anyhow::{Context, Result};
use serde::Serialize;
use zenspend_core::models::profile::{Registration, UserProfile};
use zenspend_core::ZenSpend;

use crate::cli::{LoginArgs, RegisterArgs};
use crate::utils::{maybe_print_json, pretty_table};

/// Profile as shown to the user (never includes the password hash).
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: Option<String>,
    pub currency: String,
    pub monthly_income: f64,
    pub has_password: bool,
    pub has_avatar: bool,
    pub logged_in: bool,
}

impl From<&UserProfile> for ProfileView {
    fn from(p: &UserProfile) -> Self {
        Self {
            name: p.name.clone(),
            email: p.email.clone(),
            currency: p.currency_code.clone(),
            monthly_income: p.monthly_income,
            has_password: p.password.is_some(),
            has_avatar: p.avatar.is_some(),
            logged_in: p.is_logged_in,
        }
    }
}

pub fn register(app: &mut ZenSpend, args: &RegisterArgs, json: bool) -> Result<()> {
    let mut registration = Registration::new(args.name.clone())
        .with_currency(args.currency.clone())
        .with_monthly_income(args.monthly_income);
    if let Some(email) = &args.email {
        registration = registration.with_email(email.clone());
    }
    if let Some(password) = &args.password {
        registration = registration.with_password(password.clone());
    }

    let view = ProfileView::from(app.register(registration).context("Registration failed")?);
    if !maybe_print_json(json, &view)? {
        println!("Welcome to ZenSpend, {}!", view.name);
    }
    Ok(())
}

pub fn login(app: &mut ZenSpend, args: &LoginArgs, json: bool) -> Result<()> {
    let view = ProfileView::from(
        app.login(&args.login, args.password.as_deref())
            .context("Login failed")?,
    );
    if !maybe_print_json(json, &view)? {
        println!("Signed in as {}", view.name);
    }
    Ok(())
}

pub fn logout(app: &mut ZenSpend) -> Result<()> {
    app.logout()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(app: &ZenSpend, json: bool) -> Result<()> {
    let Some(profile) = app.profile() else {
        println!("Not signed in");
        return Ok(());
    };
    let view = ProfileView::from(profile);
    if !maybe_print_json(json, &view)? {
        let rows = vec![
            vec!["Name".into(), view.name.clone()],
            vec!["Email".into(), view.email.clone().unwrap_or_default()],
            vec!["Currency".into(), app.currency().to_string()],
            vec!["Monthly income".into(), app.format_amount(view.monthly_income)],
            vec!["Password".into(), if view.has_password { "set" } else { "none" }.into()],
            vec!["Avatar".into(), if view.has_avatar { "set" } else { "none" }.into()],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}
