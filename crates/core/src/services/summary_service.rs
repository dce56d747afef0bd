use crate::models::profile::UserProfile;
use crate::models::stats::DashboardStats;
use crate::models::transaction::{Transaction, TransactionType};

use super::ledger_service::LedgerService;

/// Computes dashboard statistics from the transaction list and the profile.
///
/// Recomputed from the full list on every call; nothing is cached.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(
        &self,
        transactions: &[Transaction],
        profile: Option<&UserProfile>,
    ) -> DashboardStats {
        let ledger = LedgerService::new();
        let extra_income = ledger.total(transactions, TransactionType::Income);
        let expense = ledger.total(transactions, TransactionType::Expense);

        let base_monthly_income = profile
            .map(|p| p.monthly_income)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        let total_potential_income = base_monthly_income + extra_income;

        // With no income at all the ratio is taken against 1.
        let denominator = if total_potential_income == 0.0 {
            1.0
        } else {
            total_potential_income
        };
        let budget_used_pct = expense / denominator * 100.0;
        let budget_used_pct = if budget_used_pct.is_finite() {
            budget_used_pct
        } else {
            0.0
        };

        DashboardStats {
            balance: total_potential_income - expense,
            extra_income,
            expense,
            total_potential_income,
            base_monthly_income,
            budget_used_pct,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
