//! Date validation for exercise records.
//!
//! Dates are accepted in six layouts: day-first or year-first, each with
//! `/`, `-` or whitespace between the parts. Day and month take one or two
//! digits, the year two or four. Matching is purely syntactic, so
//! `31/02/2022` is a valid date here.

use crate::error::FieldError;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAY: &str = r"(0?[0-9]|[1-2][0-9]|3[0-1])";
const MONTH: &str = r"(0?[0-9]|1[0-2])";
const YEAR: &str = r"([0-9]{2})?[0-9]{2}";

const SLASH: &str = r"\s*/\s*";
const DASH: &str = r"\s*-\s*";
const SPACE: &str = r"\s+";

/// Accepted date layouts, compiled on first use
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [SLASH, DASH, SPACE]
        .iter()
        .flat_map(|sep| {
            [
                // 01/01/2022, 1/1/22
                format!("^{DAY}{sep}{MONTH}{sep}{YEAR}$"),
                // 2022/01/01, 22/1/1
                format!("^{YEAR}{sep}{MONTH}{sep}{DAY}$"),
            ]
        })
        .map(|pattern| Regex::new(&pattern).expect("date pattern is valid"))
        .collect()
});

/// Returns true if `raw` matches any accepted date layout
pub fn is_valid_date(raw: &str) -> bool {
    DATE_PATTERNS.iter().any(|re| re.is_match(raw))
}

/// A syntactically valid date, stored as entered with whitespace normalised
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(String);

impl Date {
    /// Validate and normalise a user-supplied date
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let normalised = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if is_valid_date(&normalised) {
            Ok(Date(normalised))
        } else {
            Err(FieldError::InvalidDate(raw.to_string()))
        }
    }

    /// Today's local date as `dd/mm/yyyy`
    pub fn today() -> Self {
        Date(Local::now().format("%d/%m/%Y").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Date {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_layouts() {
        for raw in [
            "01/01/2022", "01/1/2022", "1/01/2022", "1/1/2022", "01/01/22", "1/1/22",
            "01-01-2022", "1-1-22", "01 01 2022", "1 1 22",
        ] {
            assert!(is_valid_date(raw), "expected {raw:?} to be valid");
        }
    }

    #[test]
    fn test_year_first_layouts() {
        for raw in [
            "2022/01/01", "2022/1/1", "22/01/01", "2022-1-1", "2022-01-31", "2022 01 01",
            "22 1 1",
        ] {
            assert!(is_valid_date(raw), "expected {raw:?} to be valid");
        }
    }

    #[test]
    fn test_whitespace_around_separators() {
        assert!(is_valid_date("01 / 01 / 2022"));
        assert!(is_valid_date("2022 - 1 - 1"));
        assert!(is_valid_date("1  1  2022"));
    }

    #[test]
    fn test_rejects_non_numeric_parts() {
        assert!(!is_valid_date("Jan 1 2022"));
        assert!(!is_valid_date("01/Jan/2022"));
        assert!(!is_valid_date("01/01/20x2"));
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("today"));
    }

    #[test]
    fn test_rejects_malformed_layouts() {
        assert!(!is_valid_date("01/01/202"));
        assert!(!is_valid_date("01.01.2022"));
        assert!(!is_valid_date("01/01-2022x"));
        assert!(!is_valid_date("32/01/2022"));
        assert!(!is_valid_date("01/13/2022"));
        assert!(!is_valid_date("01012022"));
    }

    #[test]
    fn test_no_calendar_validation() {
        assert!(is_valid_date("31/02/2022"));
        assert!(is_valid_date("29/02/2023"));
    }

    #[test]
    fn test_parse_normalises_whitespace() {
        let date = Date::parse("  01   01  2022 ").unwrap();
        assert_eq!(date.as_str(), "01 01 2022");
        assert!(Date::parse("Jan 1 2022").is_err());
    }

    #[test]
    fn test_today_is_valid() {
        assert!(is_valid_date(Date::today().as_str()));
    }

    #[test]
    fn test_concurrent_validation() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| is_valid_date("2022-1-1")))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
