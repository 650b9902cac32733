//! Project catalog loader (JSON)

use std::fs;
use std::path::Path;

use super::DataError;
use crate::model::ProjectRecord;

/// Parse a JSON array of project records
pub fn parse_catalog(json: &str) -> Result<Vec<ProjectRecord>, DataError> {
    Ok(serde_json::from_str(json)?)
}

/// Load the catalog from a file
pub fn load_catalog(path: &Path) -> Result<Vec<ProjectRecord>, DataError> {
    let contents = fs::read_to_string(path)?;
    parse_catalog(&contents)
}

/// Load the catalog, logging and swallowing any failure
///
/// Returns `None` when the file cannot be read or parsed.
pub fn fetch_catalog(path: &Path) -> Option<Vec<ProjectRecord>> {
    match load_catalog(path) {
        Ok(projects) => {
            log::info!("loaded {} projects from {}", projects.len(), path.display());
            Some(projects)
        }
        Err(e) => {
            log::error!("error fetching or parsing {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_catalog() {
        let projects = parse_catalog(
            r#"[
                {"title": "Lab 1", "image": "a.png", "description": "first", "year": "2024"},
                {"title": "Lab 2", "image": "b.png", "description": "second", "year": 2025}
            ]"#,
        )
        .unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].year, "2025");
    }

    #[test]
    fn test_parse_catalog_rejects_object() {
        assert!(matches!(
            parse_catalog(r#"{"title": "x"}"#),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn test_fetch_catalog_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(fetch_catalog(&dir.path().join("projects.json")).is_none());
    }

    #[test]
    fn test_fetch_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "T", "year": "2023"}}]"#).unwrap();
        let projects = fetch_catalog(file.path()).unwrap();
        assert_eq!(projects[0].title, "T");
        assert!(projects[0].image.is_empty());
    }
}
