//! Static reference data offered to the user when recording transactions.

use super::transaction::TransactionType;

pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Investment", "Gift", "Other"];

pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Rent",
    "Utilities",
    "Transport",
    "Entertainment",
    "Shopping",
    "Health",
    "Other",
];

pub const FINANCIAL_TIPS: [&str; 7] = [
    "Follow the 50/30/20 rule: 50% for needs, 30% for wants, and 20% for savings.",
    "Set a monthly budget for each category to avoid overspending.",
    "Track every small expense; they add up quickly over time.",
    "Review your subscriptions regularly and cancel what you don't use.",
    "Aim to build an emergency fund that covers 3-6 months of expenses.",
    "Automate your savings to pay yourself first before spending.",
    "Avoid impulse purchases by waiting 24 hours before buying non-essentials.",
];

/// Suggested categories for a transaction type.
pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}
