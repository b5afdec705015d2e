use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel label meaning "no office restriction".
pub const ALL_SENTINEL: &str = "all";

/// Office restriction applied to the roster: everything, or one exact
/// (case-sensitive) office label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum OfficeFilter {
    #[default]
    All,
    Office(String),
}

impl OfficeFilter {
    pub fn matches(&self, office_name: &str) -> bool {
        match self {
            OfficeFilter::All => true,
            OfficeFilter::Office(label) => label == office_name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, OfficeFilter::All)
    }
}

impl From<String> for OfficeFilter {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case(ALL_SENTINEL) {
            OfficeFilter::All
        } else {
            OfficeFilter::Office(value)
        }
    }
}

impl From<&str> for OfficeFilter {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<OfficeFilter> for String {
    fn from(value: OfficeFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for OfficeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfficeFilter::All => f.write_str(ALL_SENTINEL),
            OfficeFilter::Office(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_parses_case_insensitively() {
        assert_eq!(OfficeFilter::from("all"), OfficeFilter::All);
        assert_eq!(OfficeFilter::from("All"), OfficeFilter::All);
        assert_eq!(
            OfficeFilter::from("Oslo"),
            OfficeFilter::Office("Oslo".into())
        );
    }

    #[test]
    fn office_match_is_exact() {
        let filter = OfficeFilter::Office("Oslo".into());
        assert!(filter.matches("Oslo"));
        assert!(!filter.matches("oslo"));
        assert!(!filter.matches("Bergen"));
        assert!(OfficeFilter::All.matches("anything"));
    }
}
