// ═══════════════════════════════════════════════════════════════════
// Integration Tests — the ZenSpend facade end to end
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use zenspend_core::errors::CoreError;
use zenspend_core::models::profile::{ProfileUpdate, Registration};
use zenspend_core::models::transaction::{TransactionDraft, TransactionType};
use zenspend_core::services::auth_service::{AuthService, HashParams};
use zenspend_core::storage::manager::{PROFILE_KEY, TRANSACTIONS_KEY};
use zenspend_core::storage::memory_store::MemoryStore;
use zenspend_core::ZenSpend;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fast_auth() -> AuthService {
    AuthService::with_params(HashParams {
        memory_cost: 1024,
        time_cost: 1,
        parallelism: 1,
    })
}

/// In-memory app with a signed-in profile earning `income` a month.
fn signed_in(income: f64) -> ZenSpend {
    let mut app = ZenSpend::in_memory().with_auth_service(fast_auth());
    app.register(Registration::new("Asha").with_monthly_income(income))
        .unwrap();
    app
}

// ═══════════════════════════════════════════════════════════════════
// Ledger through the facade
// ═══════════════════════════════════════════════════════════════════

mod ledger {
    use super::*;

    #[test]
    fn balance_tracks_adds_and_deletes() {
        let mut app = signed_in(2000.0);
        assert_eq!(app.stats().balance, 2000.0);

        let salary = app
            .add_transaction(TransactionDraft::income(500.0, "Freelance", date(2025, 3, 1)))
            .unwrap();
        let rent = app
            .add_transaction(TransactionDraft::expense(1200.0, "Rent", date(2025, 3, 2)))
            .unwrap();
        app.add_transaction(TransactionDraft::expense(80.0, "Food", date(2025, 3, 3)))
            .unwrap();

        let stats = app.stats();
        assert_eq!(stats.balance, 2000.0 + 500.0 - 1280.0);
        assert_eq!(stats.balance, stats.total_potential_income - stats.expense);

        app.delete_transaction(&rent).unwrap();
        assert_eq!(app.stats().balance, 2000.0 + 500.0 - 80.0);

        app.delete_transaction(&salary).unwrap();
        assert_eq!(app.stats().balance, 2000.0 - 80.0);
        assert_eq!(app.transaction_count(), 1);
    }

    #[test]
    fn newest_first_and_delete_preserves_order() {
        let mut app = signed_in(0.0);
        let ids: Vec<String> = (1..=4)
            .map(|d| {
                app.add_transaction(TransactionDraft::expense(d as f64, "Food", date(2025, 1, d)))
                    .unwrap()
            })
            .collect();

        let listed: Vec<&str> = app.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(listed, vec![ids[3].as_str(), ids[2].as_str(), ids[1].as_str(), ids[0].as_str()]);

        app.delete_transaction(&ids[2]).unwrap();
        let listed: Vec<&str> = app.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(listed, vec![ids[3].as_str(), ids[1].as_str(), ids[0].as_str()]);
    }

    #[test]
    fn delete_unknown_id_leaves_list_alone() {
        let mut app = signed_in(0.0);
        app.add_transaction(TransactionDraft::expense(5.0, "Food", date(2025, 1, 1)))
            .unwrap();
        let err = app.delete_transaction("no-such-id").unwrap_err();
        assert!(matches!(err, CoreError::TransactionNotFound(_)));
        assert_eq!(app.transaction_count(), 1);
    }

    #[test]
    fn invalid_draft_is_not_stored() {
        let mut app = signed_in(0.0);
        let err = app
            .add_transaction(TransactionDraft::expense(-1.0, "Food", date(2025, 1, 1)))
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert_eq!(app.transaction_count(), 0);
    }

    #[test]
    fn filters() {
        let mut app = signed_in(0.0);
        let id = app
            .add_transaction(
                TransactionDraft::income(10.0, "Gift", date(2025, 1, 1)).with_description("birthday"),
            )
            .unwrap();
        app.add_transaction(TransactionDraft::expense(3.0, "Food", date(2025, 1, 1)))
            .unwrap();

        assert_eq!(app.transactions_by_type(TransactionType::Income).len(), 1);
        assert_eq!(app.transactions_in_category("food").len(), 1);
        assert_eq!(app.get_transaction(&id).unwrap().description, "birthday");
        assert!(app.get_transaction("no-such-id").is_none());
    }

    #[test]
    fn mutations_need_a_session() {
        let mut app = ZenSpend::in_memory();
        let err = app
            .add_transaction(TransactionDraft::expense(5.0, "Food", date(2025, 1, 1)))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotLoggedIn));
        assert!(matches!(
            app.delete_transaction("no-such-id"),
            Err(CoreError::NotLoggedIn)
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Session & profile
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    #[test]
    fn register_signs_in() {
        let mut app = ZenSpend::in_memory().with_auth_service(fast_auth());
        assert!(!app.is_logged_in());

        let profile = app
            .register(
                Registration::new("  Asha ")
                    .with_email("")
                    .with_currency("inr")
                    .with_monthly_income(50_000.0),
            )
            .unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.email, None);
        assert_eq!(profile.currency_code, "INR");
        assert!(profile.is_logged_in);
        assert!(app.is_logged_in());
        assert_eq!(app.currency().code, "INR");
    }

    #[test]
    fn register_validation() {
        let mut app = ZenSpend::in_memory();
        assert!(matches!(
            app.register(Registration::new(" ")),
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            app.register(Registration::new("A").with_monthly_income(-1.0)),
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            app.register(Registration::new("A").with_currency("EUR")),
            Err(CoreError::UnknownCurrency(_))
        ));
        assert!(app.profile().is_none());
    }

    #[test]
    fn password_is_never_stored_in_plain_text() {
        let mut app = ZenSpend::in_memory().with_auth_service(fast_auth());
        app.register(Registration::new("Asha").with_password("s3cret-pass"))
            .unwrap();

        let stored = app.profile().unwrap().password.clone().unwrap();
        assert!(stored.starts_with("$argon2id$"));

        let raw = app.storage().backend().get(PROFILE_KEY).unwrap().unwrap();
        assert!(!raw.contains("s3cret-pass"));
    }

    #[test]
    fn login_checks_password() {
        let mut app = ZenSpend::in_memory().with_auth_service(fast_auth());
        app.register(
            Registration::new("Asha")
                .with_email("asha@example.com")
                .with_password("pw"),
        )
        .unwrap();

        assert!(matches!(
            app.login("asha@example.com", Some("nope")),
            Err(CoreError::InvalidCredentials)
        ));
        assert!(matches!(
            app.login("someone-else", Some("pw")),
            Err(CoreError::InvalidCredentials)
        ));
        let profile = app.login("ASHA@example.com", Some("pw")).unwrap();
        assert!(profile.is_logged_in);
    }

    #[test]
    fn login_without_profile() {
        let mut app = ZenSpend::in_memory();
        assert!(matches!(app.login("x", None), Err(CoreError::NotRegistered)));
    }

    #[test]
    fn logout_keeps_transactions() {
        let mut app = signed_in(1000.0);
        app.add_transaction(TransactionDraft::expense(25.0, "Food", date(2025, 1, 1)))
            .unwrap();

        app.logout().unwrap();
        assert!(app.profile().is_none());
        assert!(!app.is_logged_in());
        assert_eq!(app.transaction_count(), 1);
        assert!(app.storage().backend().get(PROFILE_KEY).unwrap().is_none());
        assert!(app.storage().backend().get(TRANSACTIONS_KEY).unwrap().is_some());

        // Without a profile there is no base income
        assert_eq!(app.stats().balance, -25.0);
        assert!(matches!(app.login("Asha", None), Err(CoreError::NotRegistered)));
    }

    #[test]
    fn update_profile_merges_fields() {
        let mut app = signed_in(100.0);
        let profile = app
            .update_profile(ProfileUpdate {
                email: Some("asha@example.com".into()),
                avatar: Some("data:image/png;base64,AAAA".into()),
                monthly_income: Some(250.0),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.email.as_deref(), Some("asha@example.com"));
        assert_eq!(profile.monthly_income, 250.0);

        let profile = app
            .update_profile(ProfileUpdate {
                avatar: Some(String::new()),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(profile.avatar, None);
        assert_eq!(app.stats().base_monthly_income, 250.0);
    }

    #[test]
    fn update_profile_rejects_bad_values() {
        let mut app = signed_in(100.0);
        assert!(matches!(
            app.update_profile(ProfileUpdate {
                name: Some("   ".into()),
                ..ProfileUpdate::default()
            }),
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            app.update_profile(ProfileUpdate {
                monthly_income: Some(f64::NAN),
                ..ProfileUpdate::default()
            }),
            Err(CoreError::ValidationError(_))
        ));
        assert_eq!(app.profile().unwrap().monthly_income, 100.0);
    }

    #[test]
    fn update_profile_needs_session() {
        let mut app = ZenSpend::in_memory();
        assert!(matches!(
            app.update_profile(ProfileUpdate::default()),
            Err(CoreError::NotLoggedIn)
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Currency
// ═══════════════════════════════════════════════════════════════════

mod currency {
    use super::*;

    #[test]
    fn changing_currency_keeps_amounts() {
        let mut app = signed_in(0.0);
        app.add_transaction(TransactionDraft::expense(1234.5, "Shopping", date(2025, 1, 1)))
            .unwrap();
        assert_eq!(app.format_amount(1234.5), "$1,234.50");

        let inr = app.change_currency("INR").unwrap();
        assert_eq!(inr.code, "INR");
        assert_eq!(app.transactions()[0].amount, 1234.5);
        assert_eq!(app.stats().expense, 1234.5);
        assert_eq!(app.format_amount(1234.5), "₹1,234.50");

        app.change_currency("BDT").unwrap();
        assert_eq!(app.format_amount(1234.5), "১,২৩৪.৫০৳");
    }

    #[test]
    fn unknown_currency_rejected() {
        let mut app = signed_in(0.0);
        assert!(matches!(
            app.change_currency("GBP"),
            Err(CoreError::UnknownCurrency(_))
        ));
        assert_eq!(app.currency().code, "USD");
    }

    #[test]
    fn defaults_to_usd_without_profile() {
        let app = ZenSpend::in_memory();
        assert_eq!(app.currency().code, "USD");
        assert_eq!(app.format_amount(-3.0), "-$3.00");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Persistence
// ═══════════════════════════════════════════════════════════════════

mod persistence {
    use super::*;

    #[test]
    fn state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut app = ZenSpend::open_dir(dir.path()).unwrap().with_auth_service(fast_auth());
            app.register(Registration::new("Asha").with_currency("BDT").with_monthly_income(900.0))
                .unwrap();
            app.add_transaction(
                TransactionDraft::expense(40.0, "Transport", date(2025, 2, 1)).with_description("bus"),
            )
            .unwrap()
        };

        let app = ZenSpend::open_dir(dir.path()).unwrap();
        assert!(app.is_logged_in());
        assert_eq!(app.currency().code, "BDT");
        assert_eq!(app.transaction_count(), 1);
        let t = app.get_transaction(&id).unwrap();
        assert_eq!(t.description, "bus");
        assert_eq!(app.stats().balance, 860.0);
    }

    #[test]
    fn logout_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = ZenSpend::open_dir(dir.path()).unwrap().with_auth_service(fast_auth());
            app.register(Registration::new("Asha")).unwrap();
            app.add_transaction(TransactionDraft::income(5.0, "Gift", date(2025, 2, 1)))
                .unwrap();
            app.logout().unwrap();
        }
        let app = ZenSpend::open_dir(dir.path()).unwrap();
        assert!(app.profile().is_none());
        assert_eq!(app.transaction_count(), 1);
    }

    #[test]
    fn corrupt_documents_load_as_empty() {
        let store = MemoryStore::new()
            .with_entry(TRANSACTIONS_KEY, "[{not json")
            .with_entry(PROFILE_KEY, "{\"name\": 42}");
        let app = ZenSpend::open(Box::new(store)).unwrap();
        assert_eq!(app.transaction_count(), 0);
        assert!(app.profile().is_none());
    }

    #[test]
    fn keeps_entries_with_legacy_ids() {
        let transactions = r#"[
            {"id":"1712345678901","type":"INCOME","amount":40,"category":"Gift","description":"","date":"2024-04-05"},
            {"id":"6f1c2b9e-8a4d-4e2a-9b7c-1d2e3f4a5b6c","type":"EXPENSE","amount":10,"category":"Food","description":"","date":"2025-04-01"}
        ]"#;
        let profile = r#"{"name":"Asha","currencyCode":"USD","isLoggedIn":true}"#;
        let store = MemoryStore::new()
            .with_entry(TRANSACTIONS_KEY, transactions)
            .with_entry(PROFILE_KEY, profile);

        let mut app = ZenSpend::open(Box::new(store)).unwrap();
        assert_eq!(app.transaction_count(), 2);
        assert_eq!(app.get_transaction("1712345678901").unwrap().amount, 40.0);

        app.add_transaction(TransactionDraft::expense(5.0, "Food", date(2025, 4, 2)))
            .unwrap();
        app.delete_transaction("1712345678901").unwrap();
        assert_eq!(app.transaction_count(), 2);
        let raw = app.storage().backend().get(TRANSACTIONS_KEY).unwrap().unwrap();
        assert!(raw.contains("6f1c2b9e-8a4d-4e2a-9b7c-1d2e3f4a5b6c"));
        assert!(!raw.contains("1712345678901"));
    }

    #[test]
    fn loose_monthly_income_keeps_the_profile() {
        for (income, expected) in [("\"5000\"", 5000.0), ("null", 0.0), ("\"abc\"", 0.0)] {
            let profile = format!(
                r#"{{"name":"Asha","currencyCode":"USD","isLoggedIn":true,"monthlyIncome":{income}}}"#
            );
            let store = MemoryStore::new().with_entry(PROFILE_KEY, profile);
            let app = ZenSpend::open(Box::new(store)).unwrap();
            assert!(app.is_logged_in(), "income {income}");
            assert_eq!(app.stats().base_monthly_income, expected, "income {income}");
        }
    }

    #[test]
    fn reads_documents_written_by_the_dashboard() {
        let transactions = r#"[{"id":"6f1c2b9e-8a4d-4e2a-9b7c-1d2e3f4a5b6c","type":"EXPENSE","amount":12.5,"category":"Food","description":"Tea","date":"2025-04-01"}]"#;
        let profile = r#"{"name":"Asha","currencyCode":"INR","isLoggedIn":true,"monthlyIncome":100}"#;
        let store = MemoryStore::new()
            .with_entry(TRANSACTIONS_KEY, transactions)
            .with_entry(PROFILE_KEY, profile);

        let app = ZenSpend::open(Box::new(store)).unwrap();
        assert!(app.is_logged_in());
        assert_eq!(app.currency().code, "INR");
        assert_eq!(app.transactions()[0].kind, TransactionType::Expense);
        assert_eq!(app.stats().balance, 87.5);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Charts, export & assistant
// ═══════════════════════════════════════════════════════════════════

mod reporting {
    use super::*;

    #[test]
    fn chart_data() {
        let mut app = signed_in(0.0);
        app.add_transaction(TransactionDraft::expense(10.0, "Food", date(2025, 1, 2)))
            .unwrap();
        app.add_transaction(TransactionDraft::income(30.0, "Gift", date(2025, 1, 1)))
            .unwrap();

        let daily = app.daily_chart();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].name, "2025-01-01");
        assert_eq!(app.category_breakdown()[0].name, "Food");
    }

    #[test]
    fn export_to_file() {
        let mut app = signed_in(0.0);
        app.add_transaction(TransactionDraft::expense(10.0, "Food", date(2025, 1, 2)))
            .unwrap();
        app.add_transaction(TransactionDraft::income(30.0, "Gift", date(2025, 1, 1)))
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(app.default_export_file_name(date(2025, 1, 31)));
        let rows = app.export_csv_to_file(&path).unwrap();
        assert_eq!(rows, 2);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, app.export_csv().unwrap());
        assert_eq!(written.lines().count(), 3);
        assert!(path.ends_with("zenspend_transactions_2025-01-31.csv"));
    }

    #[test]
    fn assistant_answers_with_current_figures() {
        let mut app = signed_in(1000.0);
        app.add_transaction(TransactionDraft::expense(250.0, "Rent", date(2025, 1, 1)))
            .unwrap();

        assert!(app.assistant_greeting().contains("Asha"));
        assert!(app.ask("what's my balance?").contains("$750.00"));
        assert!(app.ask("where do I spend the most").contains("Rent"));

        let tip = app.tip_of_the_day(date(2025, 1, 1));
        assert!(!tip.is_empty());
    }

    #[test]
    fn assistant_without_profile() {
        let app = ZenSpend::in_memory();
        assert!(app.assistant_greeting().starts_with("Hi there!"));
    }
}
