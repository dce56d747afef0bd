pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use models::{
    chart::{CategoryDataPoint, ChartDataPoint},
    currency::Currency,
    profile::{ProfileUpdate, Registration, UserProfile},
    stats::DashboardStats,
    transaction::{Transaction, TransactionDraft, TransactionType},
};
use services::{
    assistant_service::{AssistantContext, AssistantService},
    auth_service::AuthService,
    chart_service::ChartService,
    currency_service::CurrencyService,
    export_service::ExportService,
    ledger_service::LedgerService,
    summary_service::SummaryService,
};
use storage::{
    file_store::FileStore, manager::StorageManager, memory_store::MemoryStore,
    traits::KeyValueStore,
};
use tracing::{debug, info};

use errors::CoreError;

/// Main entry point for the ZenSpend core library.
///
/// Holds the transaction list and the profile in memory and writes every
/// mutation straight through to the store (last write wins).
#[must_use]
pub struct ZenSpend {
    storage: StorageManager,
    transactions: Vec<Transaction>,
    profile: Option<UserProfile>,
    ledger_service: LedgerService,
    summary_service: SummaryService,
    currency_service: CurrencyService,
    chart_service: ChartService,
    export_service: ExportService,
    assistant_service: AssistantService,
    auth_service: AuthService,
}

impl std::fmt::Debug for ZenSpend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenSpend")
            .field("storage", &self.storage)
            .field("transactions", &self.transactions.len())
            .field("profile", &self.profile.as_ref().map(|p| &p.name))
            .finish()
    }
}

impl ZenSpend {
    /// Load state from any key-value backend.
    pub fn open(backend: Box<dyn KeyValueStore>) -> Result<Self, CoreError> {
        let storage = StorageManager::new(backend);
        let (transactions, profile) = storage.load()?;
        Ok(Self::build(storage, transactions, profile))
    }

    /// Load state from a data directory (created if missing).
    pub fn open_dir(dir: impl Into<std::path::PathBuf>) -> Result<Self, CoreError> {
        let store = FileStore::open(dir)?;
        Self::open(Box::new(store))
    }

    /// Fresh, empty state that is never written to disk.
    pub fn in_memory() -> Self {
        let storage = StorageManager::new(Box::new(MemoryStore::new()));
        Self::build(storage, Vec::new(), None)
    }

    /// Replace the password hasher (e.g., cheaper parameters in tests).
    pub fn with_auth_service(mut self, auth_service: AuthService) -> Self {
        self.auth_service = auth_service;
        self
    }

    #[must_use]
    pub fn storage(&self) -> &StorageManager {
        &self.storage
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record a transaction. It goes to the front of the list.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<String, CoreError> {
        self.require_session()?;
        let id = self.ledger_service.add(&mut self.transactions, draft)?;
        self.storage.save_transactions(&self.transactions)?;
        debug!(%id, "transaction added");
        Ok(id)
    }

    /// Delete a transaction by id, returning it.
    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction, CoreError> {
        self.require_session()?;
        let removed = self.ledger_service.remove(&mut self.transactions, id)?;
        self.storage.save_transactions(&self.transactions)?;
        debug!(%id, "transaction deleted");
        Ok(removed)
    }

    /// All transactions, newest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn get_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn transactions_by_type(&self, kind: TransactionType) -> Vec<&Transaction> {
        self.ledger_service.by_type(&self.transactions, kind)
    }

    #[must_use]
    pub fn transactions_in_category(&self, category: &str) -> Vec<&Transaction> {
        self.ledger_service.by_category(&self.transactions, category)
    }

    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    // ── Session & Profile ───────────────────────────────────────────

    /// Create a new profile and sign it in, replacing any existing profile.
    /// Existing transactions are kept.
    pub fn register(&mut self, registration: Registration) -> Result<&UserProfile, CoreError> {
        let name = registration.name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError("Name must not be empty".into()));
        }
        validate_income(registration.monthly_income)?;
        let currency = Currency::find(&registration.currency_code)
            .ok_or_else(|| CoreError::UnknownCurrency(registration.currency_code.clone()))?;

        let password = match registration.password.as_deref() {
            Some(pw) if !pw.is_empty() => Some(self.auth_service.hash_password(pw)?),
            _ => None,
        };

        let profile = UserProfile {
            name: name.to_string(),
            email: registration.email.filter(|e| !e.trim().is_empty()),
            password,
            currency_code: currency.code.to_string(),
            is_logged_in: true,
            avatar: None,
            monthly_income: registration.monthly_income,
        };
        self.storage.save_profile(Some(&profile))?;
        info!(name = %profile.name, "profile registered");
        Ok(self.profile.insert(profile))
    }

    /// Sign in to the stored profile.
    pub fn login(&mut self, login: &str, password: Option<&str>) -> Result<&UserProfile, CoreError> {
        let profile = self.profile.as_mut().ok_or(CoreError::NotRegistered)?;
        self.auth_service.authenticate(profile, login, password)?;
        profile.is_logged_in = true;
        self.storage.save_profile(Some(&*profile))?;
        info!(name = %profile.name, "logged in");
        Ok(profile)
    }

    /// Sign out. The profile is cleared; transactions are left untouched.
    pub fn logout(&mut self) -> Result<(), CoreError> {
        if self.profile.take().is_some() {
            info!("logged out");
        }
        self.storage.save_profile(None)
    }

    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_logged_in)
    }

    /// Merge a partial edit into the signed-in profile.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&UserProfile, CoreError> {
        self.require_session()?;
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(CoreError::ValidationError("Name must not be empty".into()));
            }
        }
        if let Some(income) = update.monthly_income {
            validate_income(income)?;
        }
        let currency = match &update.currency_code {
            Some(code) => Some(Currency::find(code).ok_or_else(|| CoreError::UnknownCurrency(code.clone()))?),
            None => None,
        };

        let profile = self.profile.as_mut().ok_or(CoreError::NotLoggedIn)?;
        if let Some(name) = update.name {
            profile.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            profile.email = Some(email).filter(|e| !e.trim().is_empty());
        }
        if let Some(avatar) = update.avatar {
            profile.avatar = Some(avatar).filter(|a| !a.is_empty());
        }
        if let Some(income) = update.monthly_income {
            profile.monthly_income = income;
        }
        if let Some(currency) = currency {
            profile.currency_code = currency.code.to_string();
        }
        self.storage.save_profile(Some(&*profile))?;
        debug!("profile updated");
        Ok(profile)
    }

    /// Switch the display currency. Stored amounts are not converted.
    pub fn change_currency(&mut self, code: &str) -> Result<&'static Currency, CoreError> {
        let currency = Currency::find(code).ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))?;
        self.update_profile(ProfileUpdate {
            currency_code: Some(currency.code.to_string()),
            ..ProfileUpdate::default()
        })?;
        Ok(currency)
    }

    /// Current display currency (USD without a profile or for unknown codes).
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        match &self.profile {
            Some(p) => Currency::resolve(&p.currency_code),
            None => Currency::default_currency(),
        }
    }

    // ── Analytics ───────────────────────────────────────────────────

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        self.summary_service
            .compute(&self.transactions, self.profile.as_ref())
    }

    /// Render an amount in the current display currency.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        self.currency_service.format_amount(amount, self.currency())
    }

    #[must_use]
    pub fn daily_chart(&self) -> Vec<ChartDataPoint> {
        self.chart_service.daily_totals(&self.transactions)
    }

    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryDataPoint> {
        self.chart_service.expense_by_category(&self.transactions)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// All transactions as CSV text (header + one row each).
    pub fn export_csv(&self) -> Result<String, CoreError> {
        self.export_service.to_csv(&self.transactions)
    }

    /// Write the CSV export to `path`. Returns the number of rows written.
    pub fn export_csv_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<usize, CoreError> {
        let csv = self.export_csv()?;
        std::fs::write(path.as_ref(), csv)?;
        info!(path = %path.as_ref().display(), rows = self.transactions.len(), "exported transactions");
        Ok(self.transactions.len())
    }

    #[must_use]
    pub fn default_export_file_name(&self, date: NaiveDate) -> String {
        self.export_service.default_file_name(date)
    }

    // ── Assistant ───────────────────────────────────────────────────

    #[must_use]
    pub fn assistant_greeting(&self) -> String {
        self.assistant_service.greeting(self.user_name())
    }

    /// Ask the canned assistant a question about the current figures.
    #[must_use]
    pub fn ask(&self, question: &str) -> String {
        let stats = self.stats();
        let categories = self.category_breakdown();
        let ctx = AssistantContext {
            user_name: self.user_name(),
            stats: &stats,
            categories: &categories,
            transaction_count: self.transactions.len(),
            currency: self.currency(),
        };
        self.assistant_service.reply(&ctx, question)
    }

    #[must_use]
    pub fn tip_of_the_day(&self, date: NaiveDate) -> &'static str {
        self.assistant_service.tip_of_the_day(date)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn user_name(&self) -> &str {
        self.profile.as_ref().map(|p| p.name.as_str()).unwrap_or("there")
    }

    fn require_session(&self) -> Result<(), CoreError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(CoreError::NotLoggedIn)
        }
    }

    fn build(
        storage: StorageManager,
        transactions: Vec<Transaction>,
        profile: Option<UserProfile>,
    ) -> Self {
        Self {
            storage,
            transactions,
            profile,
            ledger_service: LedgerService::new(),
            summary_service: SummaryService::new(),
            currency_service: CurrencyService::new(),
            chart_service: ChartService::new(),
            export_service: ExportService::new(),
            assistant_service: AssistantService::new(),
            auth_service: AuthService::new(),
        }
    }
}

fn validate_income(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CoreError::ValidationError(format!(
            "Monthly income must be a non-negative number (got {amount})"
        )));
    }
    Ok(())
}
