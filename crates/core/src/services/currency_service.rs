use crate::models::currency::Currency;

/// Digit grouping conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 — first group of three, then pairs
    Indian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Formatting rules derived from a locale tag.
#[derive(Debug, Clone, Copy)]
struct LocaleStyle {
    grouping: Grouping,
    symbol_position: SymbolPosition,
    bengali_digits: bool,
}

impl LocaleStyle {
    fn for_locale(locale: &str) -> Self {
        match locale {
            "en-IN" => Self {
                grouping: Grouping::Indian,
                symbol_position: SymbolPosition::Prefix,
                bengali_digits: false,
            },
            "bn-BD" | "bn-IN" => Self {
                grouping: Grouping::Indian,
                symbol_position: SymbolPosition::Suffix,
                bengali_digits: true,
            },
            _ => Self {
                grouping: Grouping::Thousands,
                symbol_position: SymbolPosition::Prefix,
                bengali_digits: false,
            },
        }
    }
}

/// Renders amounts in a display currency, following its locale's
/// grouping, digit set and symbol placement. Always two fraction digits.
///
/// Formatting never changes the stored amount; it is display only.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// `1234.5` in USD → `$1,234.50`; in INR `123456.78` → `₹1,23,456.78`;
    /// in BDT → `১,২৩,৪৫৬.৭৮৳`.
    pub fn format_amount(&self, amount: f64, currency: &Currency) -> String {
        let style = LocaleStyle::for_locale(currency.locale);

        let body = if amount.is_nan() {
            "NaN".to_string()
        } else if amount.is_infinite() {
            "∞".to_string()
        } else {
            let fixed = format!("{:.2}", amount.abs());
            let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
            let grouped = group_digits(int_part, style.grouping);
            let body = format!("{grouped}.{frac_part}");
            if style.bengali_digits {
                to_bengali_digits(&body)
            } else {
                body
            }
        };

        // -0.001 rounds to zero and is shown unsigned
        let negative = amount < 0.0 && body.chars().any(|c| c != '0' && c != '০' && c != '.' && c != ',');
        let sign = if negative { "-" } else { "" };

        match style.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{body}", currency.symbol),
            SymbolPosition::Suffix => format!("{sign}{body}{}", currency.symbol),
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}

fn group_digits(int_part: &str, grouping: Grouping) -> String {
    if int_part.len() <= 3 {
        return int_part.to_string();
    }
    let (mut rest, last) = int_part.split_at(int_part.len() - 3);
    let size = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups = vec![last];
    while rest.len() > size {
        let (head, tail) = rest.split_at(rest.len() - size);
        groups.push(tail);
        rest = head;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.join(",")
}

fn to_bengali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x09E6 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
