//! Input handling for MetaView

use crossterm::event::KeyEvent;

use crate::filter::SLIDER_MAX;
use crate::keys;

use super::{CURSOR_STEP, CURSOR_STEP_FAST, MetaAction, MetaView};

impl MetaView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> MetaAction {
        match key.code {
            // Plot cursor (y grows downward in plot space)
            k if keys::is_move_left(k) => self.move_cursor(-CURSOR_STEP, 0.0),
            k if keys::is_move_right(k) => self.move_cursor(CURSOR_STEP, 0.0),
            k if keys::is_move_up(k) => self.move_cursor(0.0, -CURSOR_STEP),
            k if keys::is_move_down(k) => self.move_cursor(0.0, CURSOR_STEP),
            keys::FAST_LEFT => self.move_cursor(-CURSOR_STEP_FAST, 0.0),
            keys::FAST_RIGHT => self.move_cursor(CURSOR_STEP_FAST, 0.0),
            keys::FAST_UP => self.move_cursor(0.0, -CURSOR_STEP_FAST),
            keys::FAST_DOWN => self.move_cursor(0.0, CURSOR_STEP_FAST),

            // Slider
            keys::SLIDER_BACK => self.step_progress(-1),
            keys::SLIDER_FORWARD => self.step_progress(1),
            keys::SLIDER_BACK_FAST => self.step_progress(-10),
            keys::SLIDER_FORWARD_FAST => self.step_progress(10),
            keys::SLIDER_START => self.set_progress(0),
            keys::SLIDER_END => self.set_progress(SLIDER_MAX),

            // Narrative
            keys::STEP_NEXT => self.next_step(),
            keys::STEP_PREV => self.prev_step(),

            // Brush
            keys::BRUSH => self.toggle_brush(),
            keys::BRUSH_CLEAR => {
                self.clear_brush();
            }

            keys::YANK_LINK => {
                return match self.hovered_commit() {
                    Some(commit) => MetaAction::CopyLink(commit.url.clone()),
                    None => MetaAction::None,
                };
            }
            _ => {}
        }
        MetaAction::None
    }
}
