//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::clipboard;
use super::state::{App, View};
use crate::keys;
use crate::model::Notification;
use crate::ui::views::{MetaAction, ProjectsInputMode};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;
        self.clear_expired_notification();

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        // Search input takes every key (so 'q' or 't' can be typed)
        if self.current_view == View::Projects
            && self.projects_view.input_mode != ProjectsInputMode::Normal
        {
            self.projects_view.handle_key(key);
            return;
        }

        if keys::is_refresh_key(&key) {
            self.refresh_all();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => self.handle_back(),
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            keys::COLOR_SCHEME => {
                self.cycle_color_scheme();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Help {
            self.go_back();
        } else {
            self.quit();
        }
    }

    /// Esc drops an active brush first, then leaves the help page
    fn handle_back(&mut self) -> bool {
        match self.current_view {
            View::Meta => self.meta_view.clear_brush(),
            View::Help => {
                self.go_back();
                true
            }
            View::Projects => false,
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Projects => self.projects_view.handle_key(key),
            View::Meta => {
                let action = self.meta_view.handle_key(key);
                self.handle_meta_action(action);
            }
            View::Help => match key.code {
                k if keys::is_move_down(k) => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                k if keys::is_move_up(k) => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                keys::GO_TOP => self.help_scroll = 0,
                _ => {}
            },
        }
    }

    fn handle_meta_action(&mut self, action: MetaAction) {
        match action {
            MetaAction::None => {}
            MetaAction::CopyLink(url) => match clipboard::copy_to_clipboard(&url) {
                Ok(_) => {
                    self.notification = Some(Notification::success(format!("Copied {}", url)));
                }
                Err(e) => {
                    log::warn!("clipboard copy failed: {}", e);
                    self.error_message = Some(e.to_string());
                }
            },
        }
    }
}
