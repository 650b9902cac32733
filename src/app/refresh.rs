//! Loading the data files into the pages

use super::state::App;
use crate::data::{self, Aggregator};
use crate::model::{History, Notification};

impl App {
    /// Reload the project catalog; a failed load shows an empty catalog
    pub(crate) fn refresh_projects(&mut self) {
        let projects = data::fetch_catalog(&self.config.projects).unwrap_or_default();
        log::info!("catalog has {} projects", projects.len());
        self.projects_view.set_projects(projects);
    }

    /// Reload and re-aggregate the line-of-code dataset
    pub(crate) fn refresh_meta(&mut self) {
        let aggregator = Aggregator::new(self.config.repo_url.clone());
        match data::load_history(&self.config.data, &aggregator) {
            Ok(history) => self.meta_view.set_history(history),
            Err(e) => {
                log::error!("failed to load {}: {}", self.config.data.display(), e);
                self.error_message = Some(format!("{}: {}", self.config.data.display(), e));
                self.meta_view.set_history(History::default());
            }
        }
    }

    /// Reload both data files (Ctrl+L)
    pub(crate) fn refresh_all(&mut self) {
        self.error_message = None;
        self.refresh_projects();
        self.refresh_meta();
        if self.error_message.is_none() {
            self.notification = Some(Notification::success(format!(
                "Reloaded {} commits, {} projects",
                self.meta_view.commits().len(),
                self.projects_view.projects().len()
            )));
        }
    }
}
