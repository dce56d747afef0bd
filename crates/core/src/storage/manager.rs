use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::profile::UserProfile;
use crate::models::transaction::Transaction;

use super::traits::KeyValueStore;

/// Key holding the JSON-encoded transaction array.
pub const TRANSACTIONS_KEY: &str = "zen_transactions";

/// Key holding the JSON-encoded user profile (absent when logged out).
pub const PROFILE_KEY: &str = "zen_user";

/// High-level storage operations: load/save the transaction list and the
/// profile as JSON documents in a key-value backend.
///
/// There is no schema version. A document that fails to parse is treated
/// as missing: an empty list or no profile.
pub struct StorageManager {
    backend: Box<dyn KeyValueStore>,
}

impl StorageManager {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Load both documents.
    pub fn load(&self) -> Result<(Vec<Transaction>, Option<UserProfile>), CoreError> {
        Ok((self.load_transactions()?, self.load_profile()?))
    }

    pub fn load_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        let Some(raw) = self.backend.get(TRANSACTIONS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(transactions) => {
                debug!(count = transactions.len(), backend = self.backend.name(), "loaded transactions");
                Ok(transactions)
            }
            Err(e) => {
                warn!(key = TRANSACTIONS_KEY, error = %e, "stored transactions unreadable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn load_profile(&self) -> Result<Option<UserProfile>, CoreError> {
        let Some(raw) = self.backend.get(PROFILE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(key = PROFILE_KEY, error = %e, "stored profile unreadable, treating as logged out");
                Ok(None)
            }
        }
    }

    pub fn save_transactions(&mut self, transactions: &[Transaction]) -> Result<(), CoreError> {
        let json = serde_json::to_string(transactions)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize transactions: {e}")))?;
        self.backend.set(TRANSACTIONS_KEY, &json)?;
        debug!(count = transactions.len(), "saved transactions");
        Ok(())
    }

    /// Save the profile, or remove the document when `None`.
    pub fn save_profile(&mut self, profile: Option<&UserProfile>) -> Result<(), CoreError> {
        match profile {
            Some(profile) => {
                let json = serde_json::to_string(profile)
                    .map_err(|e| CoreError::Serialization(format!("Failed to serialize profile: {e}")))?;
                self.backend.set(PROFILE_KEY, &json)?;
                debug!("saved profile");
            }
            None => {
                self.backend.remove(PROFILE_KEY)?;
                debug!("removed profile");
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for StorageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageManager")
            .field("backend", &self.backend.name())
            .finish()
    }
}
