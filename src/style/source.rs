//! Condition source backed by the terminal and the OS appearance setting.

use async_trait::async_trait;
use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use serde::{Deserialize, Serialize};

use super::conditions::{AccessibilityFlags, ColorScheme};
use super::notifier::ConditionSource;

/// Fallback viewport when the terminal size cannot be read.
const FALLBACK_SIZE: (f64, f64) = (80.0, 24.0);

/// User preference for the color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemePreference {
    /// Follow the OS setting.
    #[default]
    Auto,
    Light,
    Dark,
}

/// Reads conditions from the running terminal.
///
/// Terminals expose no accessibility API, so the toggles come from
/// configuration; `NO_COLOR` additionally turns on grayscale.
#[derive(Debug, Clone)]
pub struct TerminalConditionSource {
    preference: ColorSchemePreference,
    accessibility: AccessibilityFlags,
}

impl TerminalConditionSource {
    #[must_use]
    pub fn new(preference: ColorSchemePreference, accessibility: AccessibilityFlags) -> Self {
        Self {
            preference,
            accessibility,
        }
    }
}

#[async_trait]
impl ConditionSource for TerminalConditionSource {
    fn color_scheme(&self) -> Option<ColorScheme> {
        match self.preference {
            ColorSchemePreference::Light => Some(ColorScheme::Light),
            ColorSchemePreference::Dark => Some(ColorScheme::Dark),
            ColorSchemePreference::Auto => os_color_scheme(),
        }
    }

    fn dimensions(&self) -> (f64, f64) {
        crossterm::terminal::size()
            .map(|(cols, rows)| (f64::from(cols), f64::from(rows)))
            .unwrap_or(FALLBACK_SIZE)
    }

    async fn accessibility_flags(&self) -> AccessibilityFlags {
        let mut flags = self.accessibility;
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            flags.grayscale = true;
        }
        flags
    }
}

fn os_color_scheme() -> Option<ColorScheme> {
    // An undetermined mode maps to no scheme.
    #[allow(unreachable_patterns)]
    match detect_os_theme() {
        OsThemeMode::Dark => Some(ColorScheme::Dark),
        OsThemeMode::Light => Some(ColorScheme::Light),
        _ => None,
    }
}
