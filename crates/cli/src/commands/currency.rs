use anyhow::Result;
use zenspend_core::models::currency::CURRENCIES;
use zenspend_core::ZenSpend;

use crate::cli::CurrencyCommand;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(app: &mut ZenSpend, cmd: &CurrencyCommand, json: bool) -> Result<()> {
    match cmd {
        CurrencyCommand::List => {
            if !maybe_print_json(json, &CURRENCIES)? {
                let current = app.currency().code;
                let rows = CURRENCIES
                    .iter()
                    .map(|c| {
                        vec![
                            if c.code == current { "*".into() } else { String::new() },
                            c.code.to_string(),
                            c.symbol.to_string(),
                            c.name.to_string(),
                            c.locale.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["", "Code", "Symbol", "Name", "Locale"], rows)
                );
            }
        }
        CurrencyCommand::Set { code } => {
            let currency = app.change_currency(code)?;
            if !maybe_print_json(json, currency)? {
                println!("Display currency set to {}", currency);
            }
        }
    }
    Ok(())
}
