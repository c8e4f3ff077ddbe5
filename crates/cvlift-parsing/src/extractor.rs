use std::path::Path;

use cvlift_core::{BackendError, PdfBackend, RawTextItem, ResumeRecord};

use crate::config::ParsingConfig;
use crate::fields;
use crate::fragment::{self, TextFragment};
use crate::lines::{self, Line};
use crate::section::{self, Section, SectionKind};
use crate::subsection;
use crate::ParsingError;

/// A configurable resume parsing pipeline.
///
/// Holds a [`ParsingConfig`] and exposes each pipeline stage as a method.
/// The default constructor uses built-in thresholds; use
/// [`ResumeExtractor::with_config`] to adjust them.
pub struct ResumeExtractor {
    config: ParsingConfig,
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParsingConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Flatten backend items into fragments (stage 1).
    pub fn build_fragments(&self, pages: &[Vec<RawTextItem>]) -> Vec<TextFragment> {
        fragment::build_fragments(pages, &self.config)
    }

    /// Assemble fragments into ordered lines (stage 2).
    pub fn assemble_lines(&self, fragments: Vec<TextFragment>) -> Vec<Line> {
        lines::assemble_lines(fragments, &self.config)
    }

    /// Split lines into titled sections (stage 3).
    pub fn split_sections(&self, lines: &[Line]) -> Vec<Section> {
        section::split_sections(lines, &self.config)
    }

    /// Split one section's lines into per-entry groups (stage 4).
    pub fn split_subsections(&self, lines: &[Line]) -> Vec<Vec<Line>> {
        subsection::split_subsections(lines, &self.config)
    }

    /// Run stages 1–5 over already-extracted page items.
    ///
    /// Total over its input: heuristic stages never fail, and degenerate
    /// input (no fragments, no lines, single-line sections) produces an
    /// all-empty record rather than an error.
    pub fn parse_items(&self, pages: &[Vec<RawTextItem>]) -> ResumeRecord {
        let fragments = self.build_fragments(pages);
        let lines = self.assemble_lines(fragments);
        let sections = self.split_sections(&lines);
        tracing::debug!(
            lines = lines.len(),
            sections = sections.len(),
            "assembled resume structure"
        );

        let mut record = ResumeRecord::default();

        // Profile scope: the first section whose title classifies as
        // Profile (the implicit first section, or an explicit heading like
        // "PROFESSIONAL PROFILE"), otherwise the first section in the
        // list. Uses the same classification as routing below so a
        // Profile-classified section is never left unread.
        let profile_section = sections
            .iter()
            .find(|s| SectionKind::classify(&s.title) == SectionKind::Profile)
            .or_else(|| sections.first());
        if let Some(profile_section) = profile_section {
            record.profile = fields::extract_profile(profile_section);
        }

        for sec in &sections {
            match SectionKind::classify(&sec.title) {
                SectionKind::Profile => {} // handled above
                SectionKind::Education => {
                    for sub in self.split_subsections(&sec.lines) {
                        record.education.push(fields::extract_education_entry(&sub));
                    }
                }
                SectionKind::Work => {
                    for sub in self.split_subsections(&sec.lines) {
                        record.work_experience.push(fields::extract_work_entry(&sub));
                    }
                }
                SectionKind::Projects => {
                    for sub in self.split_subsections(&sec.lines) {
                        record.projects.push(fields::extract_project_entry(&sub));
                    }
                }
                SectionKind::Skills => {
                    record.skills.extend(fields::extract_skills(sec));
                }
                SectionKind::Unclassified => {
                    // Inherited policy: sections matching no routing
                    // keyword are dropped from the record.
                    tracing::debug!(title = %sec.title, "dropping unclassified section");
                }
            }
        }

        tracing::debug!(
            education = record.education.len(),
            work = record.work_experience.len(),
            projects = record.projects.len(),
            skills = record.skills.len(),
            "parsed resume record"
        );
        record
    }

    /// Extract items via `backend` and run the full pipeline.
    pub fn parse_bytes(
        &self,
        bytes: &[u8],
        backend: &dyn PdfBackend,
    ) -> Result<ResumeRecord, ParsingError> {
        let pages = backend.extract_items(bytes)?;
        Ok(self.parse_items(&pages))
    }

    /// Read `path` and run the full pipeline.
    pub fn parse_file(
        &self,
        path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<ResumeRecord, ParsingError> {
        let bytes = std::fs::read(path).map_err(BackendError::from)?;
        self.parse_bytes(&bytes, backend)
    }
}
