use crate::errors::CoreError;
use crate::models::transaction::{Transaction, TransactionDraft, TransactionType};

/// Manages the transaction list: insertion, deletion and filtering.
///
/// No I/O here. The list is kept newest-first: new
/// transactions are prepended, and deletion never reorders the rest.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a draft, give it an id and put it at the front of the list.
    pub fn add(
        &self,
        transactions: &mut Vec<Transaction>,
        draft: TransactionDraft,
    ) -> Result<String, CoreError> {
        self.validate(&draft)?;
        let transaction = Transaction::from_draft(draft);
        let id = transaction.id.clone();
        transactions.insert(0, transaction);
        Ok(id)
    }

    /// Remove the transaction with `id` and return it.
    pub fn remove(
        &self,
        transactions: &mut Vec<Transaction>,
        id: &str,
    ) -> Result<Transaction, CoreError> {
        let idx = transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;
        Ok(transactions.remove(idx))
    }

    pub fn by_type<'a>(
        &self,
        transactions: &'a [Transaction],
        kind: TransactionType,
    ) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| t.kind == kind).collect()
    }

    /// Case-insensitive category match.
    pub fn by_category<'a>(
        &self,
        transactions: &'a [Transaction],
        category: &str,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| t.category.eq_ignore_ascii_case(category.trim()))
            .collect()
    }

    /// Sum of amounts of the given type.
    pub fn total(&self, transactions: &[Transaction], kind: TransactionType) -> f64 {
        transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Rules:
    /// - Amount must be a finite, non-negative number
    /// - Category must not be blank
    fn validate(&self, draft: &TransactionDraft) -> Result<(), CoreError> {
        if !draft.amount.is_finite() {
            return Err(CoreError::ValidationError(
                "Transaction amount must be a finite number".into(),
            ));
        }
        if draft.amount < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Transaction amount must not be negative (got {})",
                draft.amount
            )));
        }
        if draft.category.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Transaction category must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
