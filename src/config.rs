//! Command-line configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::View;
use crate::data::DEFAULT_COMMIT_URL;

/// Page shown at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Page {
    #[default]
    Projects,
    Meta,
}

impl From<Page> for View {
    fn from(page: Page) -> Self {
        match page {
            Page::Projects => View::Projects,
            Page::Meta => View::Meta,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio's project catalog and commit history in the terminal")]
#[command(version)]
pub struct Config {
    /// Line-of-code dataset (CSV, one row per line of code)
    #[arg(long, value_name = "PATH", default_value = "loc.csv")]
    pub data: PathBuf,

    /// Project catalog (JSON array)
    #[arg(long, value_name = "PATH", default_value = "projects.json")]
    pub projects: PathBuf,

    /// Prefix of commit links; the commit id is appended
    #[arg(long, value_name = "URL", default_value = DEFAULT_COMMIT_URL)]
    pub repo_url: String,

    /// Page to open first
    #[arg(long, value_enum, default_value_t = Page::Projects)]
    pub page: Page,

    /// Log file (default: <cache dir>/folio/folio.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Log filter used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Where log output goes, if anywhere can be found
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("folio").join("folio.log")))
    }
}
