//! Keybinding definitions for folio
//!
//! All keybindings are defined here so views and help text stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;
use crate::ui::views::ProjectsInputMode;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (reload data files)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all pages)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between pages
pub const TAB: KeyCode = KeyCode::Tab;

/// Back / cancel
pub const ESC: KeyCode = KeyCode::Esc;

/// Cycle color scheme (auto → light → dark)
pub const COLOR_SCHEME: KeyCode = KeyCode::Char('t');

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const MOVE_LEFT: KeyCode = KeyCode::Char('h');
pub const MOVE_LEFT_ARROW: KeyCode = KeyCode::Left;
pub const MOVE_RIGHT: KeyCode = KeyCode::Char('l');
pub const MOVE_RIGHT_ARROW: KeyCode = KeyCode::Right;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key is move left (h or ←)
pub fn is_move_left(code: KeyCode) -> bool {
    matches!(code, MOVE_LEFT | MOVE_LEFT_ARROW)
}

/// Check if key is move right (l or →)
pub fn is_move_right(code: KeyCode) -> bool {
    matches!(code, MOVE_RIGHT | MOVE_RIGHT_ARROW)
}

// =============================================================================
// Input keys (used in input modes)
// =============================================================================

/// Submit input (Enter in input mode)
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Meta page keys
// =============================================================================

/// Large cursor steps (uppercase vim keys)
pub const FAST_UP: KeyCode = KeyCode::Char('K');
pub const FAST_DOWN: KeyCode = KeyCode::Char('J');
pub const FAST_LEFT: KeyCode = KeyCode::Char('H');
pub const FAST_RIGHT: KeyCode = KeyCode::Char('L');

/// Slider one position back / forward
pub const SLIDER_BACK: KeyCode = KeyCode::Char('[');
pub const SLIDER_FORWARD: KeyCode = KeyCode::Char(']');

/// Slider ten positions back / forward
pub const SLIDER_BACK_FAST: KeyCode = KeyCode::Char('{');
pub const SLIDER_FORWARD_FAST: KeyCode = KeyCode::Char('}');

/// Slider to start / end
pub const SLIDER_START: KeyCode = KeyCode::Home;
pub const SLIDER_END: KeyCode = KeyCode::End;

/// Next / previous narrative step
pub const STEP_NEXT: KeyCode = KeyCode::Char('n');
pub const STEP_PREV: KeyCode = KeyCode::Char('p');

/// Start or finish a brush at the cursor
pub const BRUSH: KeyCode = KeyCode::Char('b');

/// Clear the brush
pub const BRUSH_CLEAR: KeyCode = KeyCode::Char('x');

/// Copy the hovered commit's link
pub const YANK_LINK: KeyCode = KeyCode::Char('y');

// =============================================================================
// Projects page keys
// =============================================================================

/// Start search input
pub const SEARCH_INPUT: KeyCode = KeyCode::Char('/');

/// Toggle the year under the legend cursor
pub const TOGGLE_YEAR: KeyCode = KeyCode::Char(' ');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch page",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "t",
        description: "Cycle color scheme",
    },
    KeyBindEntry {
        key: "Ctrl+l",
        description: "Reload data files",
    },
];

/// Meta page key bindings for help display
pub const META_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "h/j/k/l",
        description: "Move plot cursor (hover)",
    },
    KeyBindEntry {
        key: "H/J/K/L",
        description: "Move plot cursor faster",
    },
    KeyBindEntry {
        key: "[/]",
        description: "Commit progress -1/+1",
    },
    KeyBindEntry {
        key: "{/}",
        description: "Commit progress -10/+10",
    },
    KeyBindEntry {
        key: "Home/End",
        description: "First / all commits",
    },
    KeyBindEntry {
        key: "n/p",
        description: "Next/prev story step",
    },
    KeyBindEntry {
        key: "b",
        description: "Start / finish brush",
    },
    KeyBindEntry {
        key: "x",
        description: "Clear brush",
    },
    KeyBindEntry {
        key: "y",
        description: "Copy hovered commit link",
    },
];

/// Projects page key bindings for help display
pub const PROJECTS_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "/",
        description: "Search projects",
    },
    KeyBindEntry {
        key: "h/l",
        description: "Move legend cursor",
    },
    KeyBindEntry {
        key: "Space/Enter",
        description: "Toggle year filter",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

/// Input mode key bindings
pub const INPUT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Keep query",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Clear query",
    },
    KeyBindEntry {
        key: "Backspace",
        description: "Delete character",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Page",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};
pub const HINT_THEME: KeyHint = KeyHint {
    key: "t",
    label: "Theme",
    color: Color::Magenta,
};
pub const HINT_HOVER: KeyHint = KeyHint {
    key: "hjkl",
    label: "Hover",
    color: Color::Blue,
};
pub const HINT_SLIDER: KeyHint = KeyHint {
    key: "[ ]",
    label: "Progress",
    color: Color::Yellow,
};
pub const HINT_STORY: KeyHint = KeyHint {
    key: "n/p",
    label: "Story",
    color: Color::Yellow,
};
pub const HINT_BRUSH: KeyHint = KeyHint {
    key: "b",
    label: "Brush",
    color: Color::Green,
};
pub const HINT_BRUSH_DONE: KeyHint = KeyHint {
    key: "b",
    label: "Finish brush",
    color: Color::Green,
};
pub const HINT_BRUSH_CLEAR: KeyHint = KeyHint {
    key: "x",
    label: "Clear",
    color: Color::Red,
};
pub const HINT_YANK: KeyHint = KeyHint {
    key: "y",
    label: "Copy link",
    color: Color::Magenta,
};
pub const HINT_SEARCH: KeyHint = KeyHint {
    key: "/",
    label: "Search",
    color: Color::Green,
};
pub const HINT_YEAR: KeyHint = KeyHint {
    key: "Space",
    label: "Year",
    color: Color::Yellow,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Keep",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Clear",
    color: Color::Red,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Blue,
};

/// Context for dynamic hint selection
#[derive(Default)]
pub struct HintContext {
    /// A brush drag is in progress (Meta page)
    pub brushing: bool,
    /// A finished brush exists (Meta page)
    pub has_brush: bool,
    /// A commit is under the cursor (Meta page)
    pub hovering: bool,
    /// Projects page input mode
    pub projects_input: ProjectsInputMode,
}

/// Get the hints for the current page and context.
pub fn current_hints(view: View, ctx: &HintContext) -> Vec<KeyHint> {
    match view {
        View::Meta => meta_hints(ctx),
        View::Projects => projects_hints(ctx),
        View::Help => vec![HINT_SCROLL, HINT_BACK],
    }
}

fn meta_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut h = vec![HINT_HELP, HINT_HOVER, HINT_SLIDER, HINT_STORY];
    if ctx.brushing {
        h.push(HINT_BRUSH_DONE);
    } else {
        h.push(HINT_BRUSH);
    }
    if ctx.has_brush || ctx.brushing {
        h.push(HINT_BRUSH_CLEAR);
    }
    if ctx.hovering {
        h.push(HINT_YANK);
    }
    h.extend([HINT_THEME, HINT_SWITCH, HINT_QUIT]);
    h
}

fn projects_hints(ctx: &HintContext) -> Vec<KeyHint> {
    match ctx.projects_input {
        ProjectsInputMode::Search => vec![HINT_SUBMIT, HINT_CANCEL],
        ProjectsInputMode::Normal => vec![
            HINT_HELP,
            HINT_SEARCH,
            HINT_YEAR,
            HINT_SCROLL,
            HINT_THEME,
            HINT_SWITCH,
            HINT_QUIT,
        ],
    }
}
