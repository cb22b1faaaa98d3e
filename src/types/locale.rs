use crate::constants::DEFAULT_LOCALE;
use crate::error::{DashError, Result};
use chrono::Month;
use std::fmt;
use std::str::FromStr;

/// Short-date conventions supported by `format_date_to_local`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Month first: "Jan 15, 2024"
    #[default]
    EnUs,
    /// Day first: "15 Jan 2024"
    EnGb,
}

impl Locale {
    /// Parse an optional locale identifier, falling back to the default
    pub fn resolve(identifier: Option<&str>) -> Result<Self> {
        identifier.unwrap_or(DEFAULT_LOCALE).parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
        }
    }

    /// Abbreviated month name
    pub fn month_abbrev(&self, month: Month) -> &'static str {
        match (self, month) {
            (_, Month::January) => "Jan",
            (_, Month::February) => "Feb",
            (_, Month::March) => "Mar",
            (_, Month::April) => "Apr",
            (_, Month::May) => "May",
            (_, Month::June) => "Jun",
            (_, Month::July) => "Jul",
            (_, Month::August) => "Aug",
            (Locale::EnUs, Month::September) => "Sep",
            (Locale::EnGb, Month::September) => "Sept",
            (_, Month::October) => "Oct",
            (_, Month::November) => "Nov",
            (_, Month::December) => "Dec",
        }
    }
}

impl FromStr for Locale {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" | "en-ca" => Ok(Locale::EnUs),
            "en-gb" | "en-au" | "en-ie" | "en-nz" => Ok(Locale::EnGb),
            _ => Err(DashError::UnsupportedLocale {
                locale: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
