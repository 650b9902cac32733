//! UI symbols (markers, bars, etc.)
//!
//! Unicode throughout; terminals without it are not a target.

/// Markers on the Meta page
pub mod markers {
    /// One line of code in the file breakdown (●)
    pub const LINE: char = '●';
    /// Plot cursor (✛)
    pub const CURSOR: char = '✛';
    /// Legend swatch (■)
    pub const SWATCH: char = '■';
    /// Newly entered file (+)
    pub const NEW: char = '+';
}

/// Empty state labels
pub mod empty {
    /// Tooltip placeholder before any commit is hovered
    pub const NO_HOVER: &str = "(hover a commit)";
    /// Story panel before any step is entered
    pub const NO_STEP: &str = "(press n to start the story)";
}

/// Maximum line markers drawn per file row before eliding
pub const MAX_LINE_MARKERS: usize = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_single_char() {
        assert!(markers::LINE.len_utf8() <= 3);
        assert!(markers::CURSOR.len_utf8() <= 3);
        assert!(markers::SWATCH.len_utf8() <= 3);
        assert_eq!(markers::NEW.len_utf8(), 1);
    }

    #[test]
    fn test_empty_labels_not_empty() {
        assert!(!empty::NO_HOVER.is_empty());
        assert!(!empty::NO_STEP.is_empty());
    }
}
