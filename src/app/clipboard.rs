//! System clipboard access for commit links
//!
//! Pipes the text into the first clipboard tool that can be started:
//! pbcopy (macOS), wl-copy (Wayland), xclip, then xsel (X11).

use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Clipboard tools in priority order, with their arguments
const TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool found (install pbcopy, wl-copy, xclip, or xsel)")]
    NoTool,

    #[error("{tool} failed: {source}")]
    Io {
        tool: &'static str,
        source: io::Error,
    },

    #[error("{tool} exited with {status}")]
    Status {
        tool: &'static str,
        status: std::process::ExitStatus,
    },
}

/// Copy `text` to the system clipboard; returns the tool that took it
pub fn copy_to_clipboard(text: &str) -> Result<&'static str, ClipboardError> {
    for &(tool, args) in TOOLS {
        let child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match child {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(source) => return Err(ClipboardError::Io { tool, source }),
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|source| ClipboardError::Io { tool, source })?;
        }
        let status = child
            .wait()
            .map_err(|source| ClipboardError::Io { tool, source })?;
        if !status.success() {
            return Err(ClipboardError::Status { tool, status });
        }

        log::debug!("copied {} bytes with {}", text.len(), tool);
        return Ok(tool);
    }

    Err(ClipboardError::NoTool)
}
