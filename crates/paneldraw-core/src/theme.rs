//! Theme selection and render-time default colors.
//!
//! The theme is an explicit value threaded into rendering, not ambient
//! state. Style fields left unset on a panel resolve against these
//! defaults when the canvas is drawn.

use serde::{Deserialize, Serialize};

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl Theme {
    /// Fill color used when a panel has no background color set.
    pub fn default_fill(&self) -> &'static str {
        match self {
            Theme::Light => "#FFFFFF",
            Theme::Dark => "#4B5563",
        }
    }

    /// Stroke color used when a panel has no border color set.
    pub fn default_border(&self) -> &'static str {
        match self {
            Theme::Light => "#D1D5DB",
            Theme::Dark => "#9CA3AF",
        }
    }

    /// Text color used when a title has no color set.
    pub fn default_text(&self) -> &'static str {
        match self {
            Theme::Light => "#000000",
            Theme::Dark => "#FFFFFF",
        }
    }
}
