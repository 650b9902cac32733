//! Color theme definitions
//!
//! Centralized colors for consistent UI appearance. Page-independent colors
//! come from a [`Palette`] chosen by the color scheme preference.

use ratatui::style::Color;

use crate::model::ColorScheme;

/// Tableau10, the ordinal palette for language markers
pub const TABLEAU10: [Color; 10] = [
    Color::Rgb(0x4e, 0x79, 0xa7),
    Color::Rgb(0xf2, 0x8e, 0x2c),
    Color::Rgb(0xe1, 0x57, 0x59),
    Color::Rgb(0x76, 0xb7, 0xb2),
    Color::Rgb(0x59, 0xa1, 0x4f),
    Color::Rgb(0xed, 0xc9, 0x49),
    Color::Rgb(0xaf, 0x7a, 0xa1),
    Color::Rgb(0xff, 0x9d, 0xa7),
    Color::Rgb(0x9c, 0x75, 0x5f),
    Color::Rgb(0xba, 0xb0, 0xab),
];

/// Color for an ordinal slot (wraps around the palette)
pub fn ordinal(slot: usize) -> Color {
    TABLEAU10[slot % TABLEAU10.len()]
}

/// Scheme-dependent base colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            // Terminal defaults
            ColorScheme::Auto => Self {
                fg: Color::Reset,
                bg: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Reset,
                highlight_bg: Color::DarkGray,
            },
            ColorScheme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::DarkGray,
                highlight_bg: Color::Rgb(0xdd, 0xdd, 0xdd),
            },
            ColorScheme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Gray,
                highlight_bg: Color::Rgb(0x33, 0x33, 0x33),
            },
        }
    }
}

/// Colors for the Meta page
pub mod meta_view {
    use super::*;

    /// Commit points (steelblue)
    pub const POINT: Color = Color::Rgb(0x46, 0x82, 0xb4);
    /// Hovered commit point
    pub const POINT_HOVER: Color = Color::Yellow;
    /// Points inside the brush
    pub const POINT_SELECTED: Color = Color::Rgb(0xff, 0x6b, 0x6b);
    /// Daytime hour gridlines
    pub const GRID_DAY: Color = Color::Rgb(0xff, 0xa5, 0x00);
    /// Night hour gridlines
    pub const GRID_NIGHT: Color = Color::Rgb(0x1e, 0x90, 0xff);
    /// Brush rectangle outline
    pub const BRUSH: Color = Color::Magenta;
    /// Plot cursor
    pub const CURSOR: Color = Color::Green;
    /// Slider gauge
    pub const SLIDER: Color = Color::Cyan;
    /// Files that entered in the latest update
    pub const NEW_FILE: Color = Color::Green;
    /// Stat values
    pub const STAT_VALUE: Color = Color::Yellow;
}

/// Colors for the Projects page
pub mod projects_view {
    use super::*;

    /// Project title
    pub const TITLE: Color = Color::Cyan;
    /// Project year
    pub const YEAR: Color = Color::Yellow;
    /// Dimmed slice / legend entry
    pub const DIMMED: Color = Color::DarkGray;
    /// Legend cursor background
    pub const LEGEND_CURSOR_BG: Color = Color::DarkGray;
}
