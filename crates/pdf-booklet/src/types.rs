use std::path::PathBuf;
use thiserror::Error;

use crate::layout::supported_configurations;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error(
        "Unsupported configuration: {signature_size}-page signatures with {pages_per_sheet} pages per sheet (supported: {})",
        supported_configurations()
    )]
    UnsupportedConfiguration {
        signature_size: usize,
        pages_per_sheet: usize,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Malformed PDF: {0}")]
    MalformedInput(#[source] lopdf::Error),
    #[error("Failed to write {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to process")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Portrait dimensions in millimeters (width, height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Portrait dimensions in points (width, height)
    pub fn dimensions_pt(self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (crate::constants::mm_to_pt(w), crate::constants::mm_to_pt(h))
    }
}

/// Physical size used for the blank pages appended during padding
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlankPageSize {
    /// A fixed paper size
    Paper(PaperSize),
    /// Same MediaBox as the first page of the document
    MatchFirstPage,
}

impl Default for BlankPageSize {
    fn default() -> Self {
        BlankPageSize::Paper(PaperSize::A4)
    }
}

/// Statistics about a booklet run, computed before any page is touched
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Pages in the source document
    pub source_pages: usize,
    /// Blank pages appended to complete the last signature
    pub blank_pages_added: usize,
    /// Number of signatures in the padded document
    pub signatures: usize,
    /// Pages in the output document
    pub output_pages: usize,
    /// Physical sheets needed to print the output duplex
    pub sheets: usize,
}

/// What the pipeline actually did to a document
#[derive(Debug, Clone, PartialEq)]
pub struct BookletReport {
    pub original_pages: usize,
    pub pages_numbered: usize,
    pub blank_pages_added: usize,
    pub signatures: usize,
    pub final_pages: usize,
}
