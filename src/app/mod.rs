//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and page management
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `refresh`: Loading the data files into the pages
//! - `clipboard`: Copying commit links

mod clipboard;
mod input;
mod refresh;
mod render;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use state::{App, View};
