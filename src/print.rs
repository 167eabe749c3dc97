//! Handing a finished document to whatever prints it.
//!
//! Opening a surface is fire-and-forget: once the document is handed off
//! nothing waits on the printer. A surface that cannot open is reported to
//! the user as a [`UserNotice`] and not retried.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::consts::PRINT_BLOCKED_NOTICE;
use crate::document::PrintDocument;

#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub layout_id: &'static str,
    pub document: PrintDocument,
}

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("print surface unavailable: {0}")]
    Unavailable(String),
}

pub trait PrintSurface {
    fn open(&self, job: &PrintJob) -> Result<(), PrintError>;
}

/// Message for the user when printing could not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub message: String,
    pub detail: String,
}

pub fn dispatch(surface: &dyn PrintSurface, job: &PrintJob) -> Result<(), UserNotice> {
    match surface.open(job) {
        Ok(()) => {
            info!(layout = job.layout_id, "print job handed off");
            Ok(())
        }
        Err(e) => {
            error!(layout = job.layout_id, error = %e, "could not open print surface");
            Err(UserNotice { message: PRINT_BLOCKED_NOTICE.to_string(), detail: e.to_string() })
        }
    }
}

/// Writes the document as an HTML file and opens it with the system
/// handler, which prints it on load.
#[derive(Debug, Clone)]
pub struct HtmlFilePrintSurface {
    dir: PathBuf,
    launch: bool,
}

impl HtmlFilePrintSurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), launch: true }
    }

    /// Only write the file; whoever watches the directory prints it.
    pub fn write_only(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), launch: false }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn document_path(&self, job: &PrintJob) -> PathBuf {
        self.dir.join(format!("etiqueta-{}.html", job.layout_id))
    }
}

impl PrintSurface for HtmlFilePrintSurface {
    fn open(&self, job: &PrintJob) -> Result<(), PrintError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.document_path(job);
        std::fs::write(&path, job.document.to_html())?;
        if self.launch {
            open::that_detached(&path).map_err(|e| PrintError::Unavailable(e.to_string()))?;
        }
        Ok(())
    }
}
