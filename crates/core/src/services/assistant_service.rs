use crate::models::chart::CategoryDataPoint;
use crate::models::currency::Currency;
use crate::models::reference::FINANCIAL_TIPS;
use crate::models::stats::DashboardStats;

use super::currency_service::CurrencyService;

/// What the user is asking about, detected from keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Balance,
    Spending,
    Income,
    Savings,
    Tip,
    Help,
}

// Checked in order; the first list with a hit wins.
// Keywords shorter than `PREFIX_MIN_LEN` must match a whole word.
const INTENT_KEYWORDS: [(Intent, &[&str]); 6] = [
    (Intent::Tip, &["tip", "tips", "advice", "suggest", "how can i save", "help me save"]),
    (Intent::Savings, &["saving", "save", "budget"]),
    (Intent::Balance, &["balance", "left", "remaining", "available"]),
    (Intent::Spending, &["spend", "spent", "expense", "cost", "category", "where"]),
    (Intent::Income, &["income", "earn", "salary", "made"]),
    (Intent::Greeting, &["hello", "hi", "hey", "good morning", "good evening"]),
];

const PREFIX_MIN_LEN: usize = 4;

/// Everything the assistant may talk about, computed by the caller.
#[derive(Debug, Clone, Copy)]
pub struct AssistantContext<'a> {
    pub user_name: &'a str,
    pub stats: &'a DashboardStats,
    /// Expense totals per category, largest first
    pub categories: &'a [CategoryDataPoint],
    pub transaction_count: usize,
    pub currency: &'a Currency,
}

/// Canned, offline "AI" assistant. Answers are templates filled with the
/// user's own figures; no model and no network are involved.
pub struct AssistantService {
    currency_service: CurrencyService,
}

impl AssistantService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Opening line of a chat session.
    pub fn greeting(&self, user_name: &str) -> String {
        format!(
            "Hi {user_name}! I'm ZenSpend AI. Ask me about your balance, spending, income, savings or for a money tip."
        )
    }

    pub fn detect_intent(&self, question: &str) -> Intent {
        let q = question.to_lowercase();
        let words: Vec<&str> = q
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .collect();

        for (intent, keywords) in INTENT_KEYWORDS {
            let hit = keywords.iter().any(|k| {
                if k.contains(' ') {
                    q.contains(k)
                } else if k.len() < PREFIX_MIN_LEN {
                    words.iter().any(|w| w == k)
                } else {
                    words.iter().any(|w| w.starts_with(k))
                }
            });
            if hit {
                return intent;
            }
        }
        Intent::Help
    }

    pub fn reply(&self, ctx: &AssistantContext<'_>, question: &str) -> String {
        let fmt = |v: f64| self.currency_service.format_amount(v, ctx.currency);
        let stats = ctx.stats;

        match self.detect_intent(question) {
            Intent::Greeting => self.greeting(ctx.user_name),
            Intent::Balance => {
                let mood = if stats.balance >= 0.0 {
                    "You're in the green."
                } else {
                    "You're overdrawn, so it's time to slow down on spending."
                };
                format!(
                    "Your available balance is {} (base {} + extra income {} - expenses {}). {mood}",
                    fmt(stats.balance),
                    fmt(stats.base_monthly_income),
                    fmt(stats.extra_income),
                    fmt(stats.expense),
                )
            }
            Intent::Spending => match ctx.categories.first() {
                Some(top) => format!(
                    "You've spent {} so far ({:.1}% of your total budget). Your biggest category is {} at {}.",
                    fmt(stats.expense),
                    stats.budget_used_pct,
                    top.name,
                    fmt(top.value),
                ),
                None => "You haven't recorded any expenses yet. Nice and calm!".to_string(),
            },
            Intent::Income => format!(
                "Your base monthly income is {} and you've logged {} in extra income, for a total of {}.",
                fmt(stats.base_monthly_income),
                fmt(stats.extra_income),
                fmt(stats.total_potential_income),
            ),
            Intent::Savings => {
                let personality = stats.personality();
                let rate = if stats.total_potential_income > 0.0 {
                    stats.balance / stats.total_potential_income * 100.0
                } else {
                    0.0
                };
                format!(
                    "You're keeping {:.1}% of your income ({}). That makes you a {}. {}",
                    rate,
                    fmt(stats.balance),
                    personality.title(),
                    personality.blurb(),
                )
            }
            Intent::Tip => format!("Here's a tip: {}", self.tip_for(question)),
            Intent::Help => format!(
                "I can tell you about your balance, spending, income or savings across your {} transactions, or share a money tip. Try \"What's my balance?\"",
                ctx.transaction_count
            ),
        }
    }

    /// Pick a tip deterministically from the text of the question.
    pub fn tip_for(&self, seed: &str) -> &'static str {
        let idx = seed.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
        FINANCIAL_TIPS[idx % FINANCIAL_TIPS.len()]
    }

    /// Tip of the day: rotates through the list by day of the year.
    pub fn tip_of_the_day(&self, date: chrono::NaiveDate) -> &'static str {
        use chrono::Datelike;
        FINANCIAL_TIPS[date.ordinal0() as usize % FINANCIAL_TIPS.len()]
    }
}

impl Default for AssistantService {
    fn default() -> Self {
        Self::new()
    }
}
