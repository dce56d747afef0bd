// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use zenspend_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn storage() {
        let err = CoreError::Storage("disk full".into());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad float".into());
        assert_eq!(err.to_string(), "Serialization error: bad float");
    }

    #[test]
    fn csv() {
        let err = CoreError::Csv("flush failed".into());
        assert_eq!(err.to_string(), "CSV export error: flush failed");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("amount must not be negative".into());
        assert_eq!(
            err.to_string(),
            "Transaction validation failed: amount must not be negative"
        );
    }

    #[test]
    fn transaction_not_found() {
        let err = CoreError::TransactionNotFound("abc".into());
        assert_eq!(err.to_string(), "Transaction not found: abc");
    }

    #[test]
    fn unknown_currency() {
        let err = CoreError::UnknownCurrency("EUR".into());
        assert_eq!(err.to_string(), "Unknown currency code: EUR");
    }

    #[test]
    fn session_errors() {
        assert_eq!(
            CoreError::NotRegistered.to_string(),
            "No profile registered — run `register` first"
        );
        assert_eq!(CoreError::NotLoggedIn.to_string(), "Not logged in");
        assert_eq!(CoreError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn password_hash() {
        let err = CoreError::PasswordHash("salt".into());
        assert_eq!(err.to_string(), "Password hashing failed: salt");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Storage(ref m) if m.contains("nope")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn read_missing() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string("/definitely/not/here/zen.json")?)
        }
        assert!(matches!(read_missing(), Err(CoreError::Storage(_))));
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&CoreError::NotLoggedIn);
    }
}
