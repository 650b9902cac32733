//! folio - a terminal viewer for a personal portfolio
//!
//! Shows a project catalog (search and year filter) and a commit-history
//! visualization built from a line-of-code dataset.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`chart`]: Scales and chart layout (scatter plot, pie, breakdowns)
//! - [`config`]: Command-line configuration
//! - [`data`]: Dataset and catalog loading, aggregation, preferences
//! - [`filter`]: Time filter, scroll narrative, catalog filter
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod filter;
pub mod keys;
pub mod model;
pub mod ui;
