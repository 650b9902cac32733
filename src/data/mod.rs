//! Data loading layer
//!
//! Reads the line-of-code dataset and the project catalog from disk,
//! aggregates rows into commits, and persists user preferences.

mod aggregate;
mod catalog;
mod loader;
mod prefs;
mod summary;

pub use aggregate::{Aggregator, DEFAULT_COMMIT_URL};
pub use catalog::{fetch_catalog, load_catalog, parse_catalog};
pub use loader::{load_records, read_records};
pub use prefs::PreferenceStore;
pub use summary::{DayPeriod, Summary};

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::model::History;

/// Errors that can occur while loading or persisting data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: cannot parse {field} from {value:?}")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("dataset contains no rows")]
    Empty,
}

/// Load the dataset at `path` and aggregate it into a [`History`]
///
/// An empty dataset is reported as [`DataError::Empty`].
pub fn load_history(path: &Path, aggregator: &Aggregator) -> Result<History, DataError> {
    let records = load_records(path)?;
    if records.is_empty() {
        return Err(DataError::Empty);
    }
    let history = aggregator.aggregate(records);
    log::info!(
        "loaded {} rows into {} commits from {}",
        history.records.len(),
        history.commits.len(),
        path.display()
    );
    Ok(history)
}
