use anyhow::{bail, Result};
use zenspend_core::models::profile::ProfileUpdate;
use zenspend_core::ZenSpend;

use super::session::ProfileView;
use crate::cli::{ProfileCommand, ProfileSetArgs};
use crate::utils::maybe_print_json;

pub fn handle(app: &mut ZenSpend, cmd: &ProfileCommand, json: bool) -> Result<()> {
    match cmd {
        ProfileCommand::Set(args) => set(app, args, json),
    }
}

fn set(app: &mut ZenSpend, args: &ProfileSetArgs, json: bool) -> Result<()> {
    let update = ProfileUpdate {
        name: args.name.clone(),
        email: args.email.clone(),
        avatar: args.avatar.clone(),
        monthly_income: args.monthly_income,
        currency_code: args.currency.clone(),
    };
    if update.is_empty() {
        bail!("Nothing to update; pass at least one of --name, --email, --avatar, --monthly-income, --currency");
    }
    let view = ProfileView::from(app.update_profile(update)?);
    if !maybe_print_json(json, &view)? {
        println!("Profile updated");
    }
    Ok(())
}
