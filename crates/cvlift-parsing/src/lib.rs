use std::path::Path;

use thiserror::Error;

pub mod config;
pub mod dates;
pub mod extractor;
pub mod features;
pub mod fields;
pub mod fragment;
pub mod lines;
pub mod section;
pub mod subsection;

pub use config::{ListOverride, ParsingConfig, ParsingConfigBuilder};
pub use dates::{normalize_date_range, DateRange};
pub use extractor::ResumeExtractor;
pub use fragment::TextFragment;
pub use lines::Line;
pub use section::{Section, SectionKind};
// Re-export domain types from core (canonical definitions live there)
pub use cvlift_core::{
    BackendError, EducationEntry, PdfBackend, Profile, ProjectEntry, RawTextItem, ResumeRecord,
    WorkEntry,
};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Parse a resume PDF using the given backend for text extraction.
///
/// Pipeline:
/// 1. Extract positioned text items per page via `backend`
/// 2. Merge items into fragments and cluster fragments into lines
/// 3. Segment lines into named sections by heading heuristics
/// 4. Split multi-entry sections into per-entry subsections
/// 5. Score candidate runs per field and keep the best match
///
/// Only extraction failures surface as errors; every heuristic stage is
/// total and the result always carries the full record shape with empty
/// defaults.
pub fn parse_resume(path: &Path, backend: &dyn PdfBackend) -> Result<ResumeRecord, ParsingError> {
    ResumeExtractor::new().parse_file(path, backend)
}

/// Parse a resume from in-memory PDF bytes. See [`parse_resume`].
pub fn parse_resume_bytes(
    bytes: &[u8],
    backend: &dyn PdfBackend,
) -> Result<ResumeRecord, ParsingError> {
    ResumeExtractor::new().parse_bytes(bytes, backend)
}
