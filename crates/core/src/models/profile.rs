use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The single user of this store.
///
/// Field names are camelCase on the wire so a profile written by the web
/// dashboard can be read back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Argon2id PHC string. Never the plain-text password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Display currency code (e.g., "USD", "INR", "BDT")
    pub currency_code: String,

    #[serde(default)]
    pub is_logged_in: bool,

    /// Encoded image data (e.g., a `data:` URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Base monthly income, counted towards the balance
    #[serde(default, deserialize_with = "lenient_amount")]
    pub monthly_income: f64,
}

/// Reads an amount the way the dashboard does: numbers as-is, numeric
/// strings parsed, anything else (null, garbage, non-finite) as 0.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|v| v.is_finite()).unwrap_or(0.0))
}

impl UserProfile {
    pub fn new(name: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            password: None,
            currency_code: currency_code.into(),
            is_logged_in: false,
            avatar: None,
            monthly_income: 0.0,
        }
    }

    /// True if `login` matches the name or the e-mail (case-insensitive).
    pub fn matches_login(&self, login: &str) -> bool {
        let login = login.trim();
        self.name.eq_ignore_ascii_case(login)
            || self
                .email
                .as_deref()
                .is_some_and(|e| e.eq_ignore_ascii_case(login))
    }
}

/// Partial profile edit. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub monthly_income: Option<f64>,
    pub currency_code: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Sign-up details for a new local profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: Option<String>,
    /// Plain-text password; hashed before it is stored
    pub password: Option<String>,
    pub currency_code: String,
    pub monthly_income: f64,
}

impl Registration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            password: None,
            currency_code: "USD".to_string(),
            monthly_income: 0.0,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn with_monthly_income(mut self, amount: f64) -> Self {
        self.monthly_income = amount;
        self
    }
}
