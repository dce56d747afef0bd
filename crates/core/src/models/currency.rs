use serde::Serialize;

/// Reference entry from the static currency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub locale: &'static str,
}

/// Supported display currencies. The first entry is the fallback.
pub const CURRENCIES: [Currency; 3] = [
    Currency {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
        locale: "en-US",
    },
    Currency {
        code: "INR",
        symbol: "₹",
        name: "Indian Rupee",
        locale: "en-IN",
    },
    Currency {
        code: "BDT",
        symbol: "৳",
        name: "Bangladeshi Taka",
        locale: "bn-BD",
    },
];

impl Currency {
    /// Exact lookup by code (case-insensitive).
    pub fn find(code: &str) -> Option<&'static Currency> {
        let code = code.trim();
        CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Lookup that falls back to the default currency for unknown codes.
    pub fn resolve(code: &str) -> &'static Currency {
        Self::find(code).unwrap_or(&CURRENCIES[0])
    }

    pub fn default_currency() -> &'static Currency {
        &CURRENCIES[0]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.symbol)
    }
}
