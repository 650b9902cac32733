//! Color scheme preference

use std::fmt;

use serde::{Deserialize, Serialize};

/// User color scheme preference (persisted across runs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the terminal's own colors
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorScheme {
    /// Next scheme in the toggle cycle (auto → light → dark → auto)
    pub fn next(self) -> Self {
        match self {
            ColorScheme::Auto => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Auto,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Auto => "auto",
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
