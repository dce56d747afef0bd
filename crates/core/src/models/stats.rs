use serde::{Deserialize, Serialize};

/// Summary figures shown on the dashboard, derived from the transaction list
/// and the profile's base monthly income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// total_potential_income - expense
    pub balance: f64,

    /// Sum of all income transactions (base income excluded)
    pub extra_income: f64,

    /// Sum of all expense transactions
    pub expense: f64,

    /// base_monthly_income + extra_income
    pub total_potential_income: f64,

    /// Profile's monthly income (0 without a profile)
    pub base_monthly_income: f64,

    /// Share of the total potential income already spent, in percent
    pub budget_used_pct: f64,
}

impl DashboardStats {
    /// `budget_used_pct` clamped for a progress bar.
    pub fn budget_bar_pct(&self) -> f64 {
        self.budget_used_pct.min(100.0)
    }

    pub fn status(&self) -> BalanceStatus {
        if self.balance >= 0.0 {
            BalanceStatus::Stable
        } else {
            BalanceStatus::Overdrawn
        }
    }

    pub fn personality(&self) -> SpendingPersonality {
        if self.balance > self.total_potential_income * 0.2 {
            SpendingPersonality::WealthArchitect
        } else if self.balance < 0.0 {
            SpendingPersonality::ExperienceCollector
        } else {
            SpendingPersonality::BalancedMinimalist
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceStatus {
    Stable,
    Overdrawn,
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceStatus::Stable => write!(f, "STABLE"),
            BalanceStatus::Overdrawn => write!(f, "OVERDRAWN"),
        }
    }
}

/// Light-hearted label for how the balance compares to income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpendingPersonality {
    /// Balance above 20% of the total potential income
    WealthArchitect,
    /// Negative balance
    ExperienceCollector,
    BalancedMinimalist,
}

impl SpendingPersonality {
    pub fn title(&self) -> &'static str {
        match self {
            SpendingPersonality::WealthArchitect => "Wealth Architect",
            SpendingPersonality::ExperienceCollector => "Experience Collector",
            SpendingPersonality::BalancedMinimalist => "Balanced Minimalist",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            SpendingPersonality::WealthArchitect => {
                "You have a solid financial foundation. Your current balance reflects good discipline."
            }
            _ => {
                "Life is about experiences, but consistent small outflows are impacting your safety net. ZenSpend AI can help!"
            }
        }
    }
}

impl std::fmt::Display for SpendingPersonality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
