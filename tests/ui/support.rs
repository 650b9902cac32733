//! Shared fixtures for the UI tests
//!
//! Each `#[path]` module in `tests/ui.rs` uses a different subset.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use ratatui::{Terminal, backend::TestBackend};

use folio::data::{Aggregator, parse_catalog, read_records};
use folio::model::{History, ProjectRecord};

pub const LOC_CSV: &str = "\
commit,file,line,depth,length,date,time,timezone,datetime,author,change,type
c1,a.rs,1,0,20,2025-01-01,09:00:00-08:00,-08:00,2025-01-01T09:00:00-08:00,mz,added,rust
c1,a.rs,2,1,32,2025-01-01,09:00:00-08:00,-08:00,2025-01-01T09:00:00-08:00,mz,added,rust
c2,a.rs,3,1,18,2025-01-05,14:30:00-08:00,-08:00,2025-01-05T14:30:00-08:00,mz,removed,rust
c2,b.js,1,0,40,2025-01-05,14:30:00-08:00,-08:00,2025-01-05T14:30:00-08:00,mz,added,js
c2,b.js,2,2,12,2025-01-05,14:30:00-08:00,-08:00,2025-01-05T14:30:00-08:00,mz,added,js
c3,c.css,1,0,8,2025-01-10,22:00:00-08:00,-08:00,2025-01-10T22:00:00-08:00,,added,css
";

pub const PROJECTS_JSON: &str = r#"[
  {"title": "Lab 1", "image": "a.png", "description": "Intro to HTML", "year": "2024"},
  {"title": "Lab 2", "image": "b.png", "description": "CSS grids", "year": "2024"},
  {"title": "Meta", "image": "c.png", "description": "D3 scatter of commits", "year": 2025},
  {"title": "Portfolio", "image": "d.png", "description": "Personal site", "year": "2023"}
]"#;

pub fn history() -> History {
    let records = read_records(LOC_CSV.as_bytes()).unwrap();
    Aggregator::new("https://example.com/commit/").aggregate(records)
}

pub fn projects() -> Vec<ProjectRecord> {
    parse_catalog(PROJECTS_JSON).unwrap()
}

/// Write both data files into `dir`
pub fn write_data_files(dir: &Path) {
    fs::write(dir.join("loc.csv"), LOC_CSV).unwrap();
    fs::write(dir.join("projects.json"), PROJECTS_JSON).unwrap();
}

/// The rendered buffer as text, one line per row
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
