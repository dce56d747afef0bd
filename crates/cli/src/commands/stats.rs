use anyhow::Result;
use serde::Serialize;
use zenspend_core::models::stats::DashboardStats;
use zenspend_core::ZenSpend;

use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    currency: &'a str,
    #[serde(flatten)]
    stats: &'a DashboardStats,
    status: String,
    personality: String,
}

pub fn handle(app: &ZenSpend, json: bool) -> Result<()> {
    let stats = app.stats();
    let report = StatsReport {
        currency: app.currency().code,
        stats: &stats,
        status: stats.status().to_string(),
        personality: stats.personality().to_string(),
    };
    if maybe_print_json(json, &report)? {
        return Ok(());
    }

    let rows = vec![
        vec![
            "Available balance".into(),
            app.format_amount(stats.balance),
            stats.status().to_string(),
        ],
        vec![
            "Monthly base".into(),
            app.format_amount(stats.base_monthly_income),
            String::new(),
        ],
        vec![
            "Extra income".into(),
            app.format_amount(stats.extra_income),
            "base not included".into(),
        ],
        vec![
            "Total expenses".into(),
            app.format_amount(stats.expense),
            format!("{:.1}% of total budget used", stats.budget_used_pct),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount", "Note"], rows));
    println!("Budget  {}", budget_bar(stats.budget_bar_pct(), 30));

    let personality = stats.personality();
    println!("\nSpending personality: {}", personality.title());
    println!("{}", personality.blurb());
    Ok(())
}

/// Text progress bar, `width` cells wide.
pub fn budget_bar(pct: f64, width: usize) -> String {
    let pct = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 };
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:.1}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        pct
    )
}
