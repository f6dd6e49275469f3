//! Environment conditions that drive selector styles.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Boolean environment conditions a selector can be keyed on.
///
/// Declaration order is the order in which active selector tables are
/// merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    Light,
    Dark,
    BoldText,
    Grayscale,
    InvertColors,
    ReduceMotion,
    ReduceTransparency,
    ScreenReader,
}

impl Condition {
    pub const ACCESSIBILITY: [Condition; 6] = [
        Condition::BoldText,
        Condition::Grayscale,
        Condition::InvertColors,
        Condition::ReduceMotion,
        Condition::ReduceTransparency,
        Condition::ScreenReader,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Condition::Light => "light",
            Condition::Dark => "dark",
            Condition::BoldText => "boldText",
            Condition::Grayscale => "grayScale",
            Condition::InvertColors => "invertColors",
            Condition::ReduceMotion => "reduceMotion",
            Condition::ReduceTransparency => "reduceTransparency",
            Condition::ScreenReader => "screenReader",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Viewport axis used by dimension selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

/// Identifies what changed in a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKey {
    Flag(Condition),
    Dimension(Dimension),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Accessibility toggles reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityFlags {
    pub bold_text: bool,
    pub grayscale: bool,
    pub invert_colors: bool,
    pub reduce_motion: bool,
    pub reduce_transparency: bool,
    pub screen_reader: bool,
}

impl AccessibilityFlags {
    /// Pairs every accessibility condition with its value.
    #[must_use]
    pub fn entries(&self) -> [(Condition, bool); 6] {
        [
            (Condition::BoldText, self.bold_text),
            (Condition::Grayscale, self.grayscale),
            (Condition::InvertColors, self.invert_colors),
            (Condition::ReduceMotion, self.reduce_motion),
            (Condition::ReduceTransparency, self.reduce_transparency),
            (Condition::ScreenReader, self.screen_reader),
        ]
    }
}

/// Snapshot of every condition at one point in time.
///
/// A flag that was never reported is absent and reads as inactive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionState {
    flags: BTreeMap<Condition, bool>,
    pub width: f64,
    pub height: f64,
}

impl ConditionState {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            flags: BTreeMap::new(),
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_active(&self, condition: Condition) -> bool {
        self.flags.get(&condition).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn with_flag(mut self, condition: Condition, active: bool) -> Self {
        self.set_flag(condition, active);
        self
    }

    pub fn set_flag(&mut self, condition: Condition, active: bool) {
        self.flags.insert(condition, active);
    }

    pub fn clear_flag(&mut self, condition: Condition) {
        self.flags.remove(&condition);
    }

    /// Active flags in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Condition> + '_ {
        self.flags.iter().filter(|(_, active)| **active).map(|(condition, _)| *condition)
    }

    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    /// Sets the color scheme flags. `None` clears both.
    pub fn set_color_scheme(&mut self, scheme: Option<ColorScheme>) {
        match scheme {
            Some(ColorScheme::Light) => {
                self.set_flag(Condition::Light, true);
                self.set_flag(Condition::Dark, false);
            }
            Some(ColorScheme::Dark) => {
                self.set_flag(Condition::Light, false);
                self.set_flag(Condition::Dark, true);
            }
            None => {
                self.clear_flag(Condition::Light);
                self.clear_flag(Condition::Dark);
            }
        }
    }
}
