use anyhow::Result;
use zenspend_core::ZenSpend;

use crate::cli::ChartCommand;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(app: &ZenSpend, cmd: &ChartCommand, json: bool) -> Result<()> {
    match cmd {
        ChartCommand::Daily => {
            let data = app.daily_chart();
            if !maybe_print_json(json, &data)? {
                let rows = data
                    .iter()
                    .map(|p| {
                        vec![
                            p.name.clone(),
                            app.format_amount(p.income),
                            app.format_amount(p.expense),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Date", "Income", "Expense"], rows));
            }
        }
        ChartCommand::Categories => {
            let data = app.category_breakdown();
            if !maybe_print_json(json, &data)? {
                let total: f64 = data.iter().map(|p| p.value).sum();
                let rows = data
                    .iter()
                    .map(|p| {
                        let share = if total > 0.0 { p.value / total * 100.0 } else { 0.0 };
                        vec![
                            p.name.clone(),
                            app.format_amount(p.value),
                            format!("{share:.1}%"),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
            }
        }
    }
    Ok(())
}
