//! Input handling for ProjectsView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{ProjectsInputMode, ProjectsView};

impl ProjectsView {
    /// Handle key event
    ///
    /// The page has no effects outside itself, so no action is returned.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            ProjectsInputMode::Normal => self.handle_normal_key(key),
            ProjectsInputMode::Search => self.handle_search_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::SEARCH_INPUT => self.start_search(),
            k if keys::is_move_left(k) => self.move_legend_left(),
            k if keys::is_move_right(k) => self.move_legend_right(),
            keys::TOGGLE_YEAR | keys::SUBMIT => self.toggle_year(self.legend_cursor),
            k if keys::is_move_down(k) => self.scroll_down(),
            k if keys::is_move_up(k) => self.scroll_up(),
            keys::GO_TOP => self.scroll_to_top(),
            keys::GO_BOTTOM => self.scroll_to_bottom(),
            _ => {}
        }
    }

    /// Every edit re-filters immediately
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::SUBMIT => self.input_mode = ProjectsInputMode::Normal,
            keys::ESC => {
                self.set_query("");
                self.input_mode = ProjectsInputMode::Normal;
            }
            KeyCode::Backspace => {
                let mut query = self.query().to_string();
                query.pop();
                self.set_query(query);
            }
            KeyCode::Char(c) => {
                let query = format!("{}{}", self.query(), c);
                self.set_query(query);
            }
            _ => {}
        }
    }
}
