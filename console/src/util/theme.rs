//! Light/dark theme preference.
//!
//! Stored under `theme` as the plain string `light` or `dark`. Anything else
//! reads as the default light theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::preferences::{PreferenceError, PreferenceStore};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0} (expected light or dark)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_owned())),
        }
    }
}

/// Saved theme, or light when unset or unreadable.
pub fn read_preference(store: &dyn PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

/// # Errors
///
/// Returns an error if the preference cannot be written.
pub fn save(store: &mut dyn PreferenceStore, theme: Theme) -> Result<(), PreferenceError> {
    store.set(THEME_KEY, theme.as_str())?;
    info!(%theme, "theme saved");
    Ok(())
}

/// Flip `current` and persist the result.
///
/// # Errors
///
/// Returns an error if the preference cannot be written.
pub fn toggle(store: &mut dyn PreferenceStore, current: Theme) -> Result<Theme, PreferenceError> {
    let next = current.toggled();
    save(store, next)?;
    Ok(next)
}
