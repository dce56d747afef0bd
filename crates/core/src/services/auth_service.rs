use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::errors::CoreError;
use crate::models::profile::UserProfile;

/// Argon2id cost parameters used when hashing a new password.
/// Verification reads the parameters back from the stored PHC string.
#[derive(Debug, Clone, Copy)]
pub struct HashParams {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    pub memory_cost: u32,
    /// Number of iterations (default: 2)
    pub time_cost: u32,
    /// Degree of parallelism (default: 1)
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_cost: 19_456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

/// Local-only sign-in. Passwords are stored as Argon2id PHC strings inside
/// the profile document; nothing leaves the machine.
pub struct AuthService {
    params: HashParams,
}

impl AuthService {
    pub fn new() -> Self {
        Self::with_params(HashParams::default())
    }

    pub fn with_params(params: HashParams) -> Self {
        Self { params }
    }

    /// Hash a password with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let params = Params::new(
            self.params.memory_cost,
            self.params.time_cost,
            self.params.parallelism,
            None,
        )
        .map_err(|e| CoreError::PasswordHash(format!("Invalid Argon2 params: {e}")))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = SaltString::encode_b64(&generate_salt()?)
            .map_err(|e| CoreError::PasswordHash(format!("Failed to encode salt: {e}")))?;
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CoreError::PasswordHash(format!("Argon2 hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// Check `password` against a stored PHC string.
    pub fn verify_password(&self, password: &str, stored: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| CoreError::PasswordHash(format!("Stored password hash is malformed: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Decide whether `login`/`password` may open `profile`.
    ///
    /// - The login must match the profile name or e-mail
    /// - If the profile has a password, it must be supplied and verify
    pub fn authenticate(
        &self,
        profile: &UserProfile,
        login: &str,
        password: Option<&str>,
    ) -> Result<(), CoreError> {
        if !profile.matches_login(login) {
            return Err(CoreError::InvalidCredentials);
        }
        match (&profile.password, password) {
            (None, _) => Ok(()),
            (Some(_), None) => Err(CoreError::InvalidCredentials),
            (Some(stored), Some(given)) => {
                if self.verify_password(given, stored)? {
                    Ok(())
                } else {
                    Err(CoreError::InvalidCredentials)
                }
            }
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate cryptographically secure random bytes for a salt.
fn generate_salt() -> Result<[u8; 16], CoreError> {
    let mut salt = [0u8; 16];
    getrandom::getrandom(&mut salt)
        .map_err(|e| CoreError::PasswordHash(format!("Failed to generate random salt: {e}")))?;
    Ok(salt)
}
