use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::chart::{CategoryDataPoint, ChartDataPoint};
use crate::models::transaction::{Transaction, TransactionType};

/// Generates chart-ready data sets from the transaction list.
///
/// Front ends only render these; all totals are computed here.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Income and expense totals per date, oldest first.
    /// Only dates with at least one transaction appear.
    pub fn daily_totals(&self, transactions: &[Transaction]) -> Vec<ChartDataPoint> {
        let mut by_date: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
        for t in transactions {
            let entry = by_date.entry(t.date).or_insert((0.0, 0.0));
            match t.kind {
                TransactionType::Income => entry.0 += t.amount,
                TransactionType::Expense => entry.1 += t.amount,
            }
        }

        by_date
            .into_iter()
            .map(|(date, (income, expense))| ChartDataPoint {
                name: date.to_string(),
                income,
                expense,
            })
            .collect()
    }

    /// Expense totals per category, largest first (ties broken by name).
    pub fn expense_by_category(&self, transactions: &[Transaction]) -> Vec<CategoryDataPoint> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for t in transactions.iter().filter(|t| t.kind == TransactionType::Expense) {
            *totals.entry(t.category.as_str()).or_insert(0.0) += t.amount;
        }

        let mut points: Vec<CategoryDataPoint> = totals
            .into_iter()
            .map(|(name, value)| CategoryDataPoint {
                name: name.to_string(),
                value,
            })
            .collect();
        points.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        points
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
