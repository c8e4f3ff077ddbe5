//! Free-text date-range normalization for the import-to-form adaptation.
//!
//! The parsed record keeps date strings verbatim; this module turns a
//! winning run like `"Jan 2020 – Present"` into structured start/end
//! values. Normalization is best-effort and never fails: anything that
//! does not fit the known shapes passes through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// A normalized date range. `start`/`end` are `YYYY-MM` when the raw text
/// could be mapped, the raw token otherwise, and empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    pub is_current: bool,
}

static START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+\s+\d{4}|\d{4})").unwrap());
static END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\s*(\w+\s+\d{4}|\d{4})").unwrap());
static YEAR_ONLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parse a raw date-range string into structured start/end values and an
/// "is current" flag.
pub fn normalize_date_range(raw: &str) -> DateRange {
    let lower = raw.to_lowercase();
    let is_current = lower.contains("present") || lower.contains("current");

    let start = START_RE
        .find(raw)
        .map(|m| normalize_token(m.as_str()))
        .unwrap_or_default();

    let end = if is_current {
        String::new()
    } else {
        END_RE
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| normalize_token(m.as_str()))
            .unwrap_or_default()
    };

    DateRange {
        start,
        end,
        is_current,
    }
}

/// Normalize a single matched token to `YYYY-MM`.
///
/// `"Jan 2020"` → `"2020-01"`, `"2020"` → `"2020-01"`; anything else is
/// returned unchanged.
fn normalize_token(token: &str) -> String {
    let token = token.trim();

    if YEAR_ONLY_RE.is_match(token) {
        return format!("{token}-01");
    }

    let mut parts = token.split_whitespace();
    if let (Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next()) {
        if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            let month_lower = month.to_lowercase();
            if let Some(idx) = MONTHS.iter().position(|abbr| month_lower.starts_with(abbr)) {
                return format!("{}-{:02}", year, idx + 1);
            }
        }
    }

    token.to_string()
}
