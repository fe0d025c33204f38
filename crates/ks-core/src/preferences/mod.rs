//! User preference snapshot.
//!
//! Theme and currency are held in an immutable [`Preferences`] value that is
//! passed explicitly; setters return a new snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete palette after resolving [`ThemePreference::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn resolve(self, system_dark: bool) -> ColorScheme {
        match self {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System if system_dark => ColorScheme::Dark,
            ThemePreference::System => ColorScheme::Light,
        }
    }

    /// Value written to the store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    Som,
    Usd,
    Eur,
    Rub,
    #[default]
    Krw,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Som,
        Currency::Usd,
        Currency::Eur,
        Currency::Rub,
        Currency::Krw,
    ];

    /// Value written to the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Som => "Som",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Rub => "RUB",
            Currency::Krw => "KRW",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParsePreferenceError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(ParsePreferenceError {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Currency {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParsePreferenceError {
                kind: "currency",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemePreference,
    pub currency: Currency,
}

impl Preferences {
    pub fn with_theme(self, theme: ThemePreference) -> Self {
        Self { theme, ..self }
    }

    pub fn with_currency(self, currency: Currency) -> Self {
        Self { currency, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_theme_follows_platform() {
        assert_eq!(ThemePreference::System.resolve(true), ColorScheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ColorScheme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), ColorScheme::Light);
    }

    #[test]
    fn parse_accepts_stored_spellings() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!("KRW".parse::<Currency>(), Ok(Currency::Krw));
        assert_eq!("som".parse::<Currency>(), Ok(Currency::Som));
        assert!("sepia".parse::<ThemePreference>().is_err());
        assert!("JPY".parse::<Currency>().is_err());
    }

    #[test]
    fn setters_leave_original_snapshot_untouched() {
        let original = Preferences::default();
        let updated = original
            .with_theme(ThemePreference::Dark)
            .with_currency(Currency::Usd);

        assert_eq!(original, Preferences::default());
        assert_eq!(updated.theme, ThemePreference::Dark);
        assert_eq!(updated.currency, Currency::Usd);
    }
}
