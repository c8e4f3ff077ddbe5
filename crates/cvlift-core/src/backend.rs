use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single positioned text item as reported by a PDF extraction backend,
/// before any merging or clustering.
///
/// `transform` is the six-element text matrix of the show-text operation;
/// indices 4 and 5 carry the horizontal and vertical translation in PDF
/// user-space units (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub struct RawTextItem {
    pub text: String,
    pub transform: [f32; 6],
    pub width: f32,
    pub font_name: String,
}

impl RawTextItem {
    /// Horizontal translation of the text matrix.
    pub fn x(&self) -> f32 {
        self.transform[4]
    }

    /// Vertical translation of the text matrix.
    pub fn y(&self) -> f32 {
        self.transform[5]
    }
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level positioned-text extraction step; the
/// parsing pipeline (line assembly, section segmentation, field
/// classification) lives in `cvlift-parsing`.
pub trait PdfBackend: Send + Sync {
    /// Extract every page's text items, in document order.
    ///
    /// The outer vector has one entry per page. Page boundaries are not
    /// meaningful to the parsing pipeline, which concatenates all pages.
    fn extract_items(&self, bytes: &[u8]) -> Result<Vec<Vec<RawTextItem>>, BackendError>;
}
