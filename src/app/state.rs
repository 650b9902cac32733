//! Application state and page management

use crate::config::Config;
use crate::data::PreferenceStore;
use crate::model::{ColorScheme, Notification};
use crate::ui::views::{MetaView, ProjectsView};

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Projects,
    Meta,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current page
    pub current_view: View,
    /// Previous page (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Projects page state
    pub projects_view: ProjectsView,
    /// Meta page state
    pub meta_view: MetaView,
    /// Data sources and link prefix
    pub config: Config,
    /// Active color scheme
    pub color_scheme: ColorScheme,
    /// Where the color scheme is persisted (`None`: not persisted)
    pub(crate) preferences: Option<PreferenceStore>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (title bar)
    pub notification: Option<Notification>,
    /// Help page scroll offset
    pub(crate) help_scroll: u16,
}

impl App {
    /// Construct an [`App`] using the preference file in the user config dir.
    pub fn new(config: Config) -> Self {
        Self::with_preferences(config, PreferenceStore::default_location())
    }

    /// Construct an [`App`] with an explicit preference store and load the data files.
    pub fn with_preferences(config: Config, preferences: Option<PreferenceStore>) -> Self {
        let color_scheme = preferences
            .as_ref()
            .map(PreferenceStore::load)
            .unwrap_or_default();

        let mut app = Self {
            running: true,
            current_view: config.page.into(),
            previous_view: None,
            projects_view: ProjectsView::new(),
            meta_view: MetaView::new(),
            config,
            color_scheme,
            preferences,
            error_message: None,
            notification: None,
            help_scroll: 0,
        };

        app.refresh_projects();
        app.refresh_meta();

        app
    }

    /// Switch between the two data pages (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Projects => View::Meta,
            View::Meta => View::Projects,
            View::Help => self.previous_view.unwrap_or_default(),
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific page
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
            if view == View::Help {
                self.help_scroll = 0;
            }
        }
    }

    /// Go back to previous page
    pub(crate) fn go_back(&mut self) {
        let prev = self.previous_view.take().unwrap_or_default();
        self.current_view = prev;
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Cycle auto → light → dark and persist the choice
    pub(crate) fn cycle_color_scheme(&mut self) {
        self.color_scheme = self.color_scheme.next();
        if let Some(store) = &self.preferences
            && let Err(e) = store.save(self.color_scheme)
        {
            log::warn!(
                "could not save color scheme to {}: {}",
                store.path().display(),
                e
            );
        }
        self.notification = Some(Notification::info(format!(
            "Color scheme: {}",
            self.color_scheme
        )));
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
