/// Controls how a list of keywords is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Configuration for the resume parsing pipeline.
///
/// Defaults reproduce the upstream heuristics; use [`ParsingConfigBuilder`]
/// to adjust thresholds or keyword lists.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    // ── fragment.rs ──
    /// Substring of the font name that marks a fragment as bold.
    /// Matched case-sensitively; fonts that do not name-encode their
    /// weight are not detected.
    pub(crate) bold_marker: String,

    // ── lines.rs ──
    /// Maximum vertical drift between fragments merged into one run.
    pub(crate) merge_y_tolerance: f32,
    /// Fragments within this vertical distance of a line's anchor join it;
    /// a larger gap starts a new line.
    pub(crate) line_y_tolerance: f32,

    // ── section.rs ──
    /// Uppercase keywords that mark a line as a section heading.
    pub(crate) heading_keywords: ListOverride<String>,

    // ── subsection.rs ──
    /// A vertical gap exceeding `average gap * factor` starts a new entry.
    pub(crate) gap_split_factor: f32,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            bold_marker: "Bold".to_string(),
            merge_y_tolerance: 2.0,
            line_y_tolerance: 5.0,
            heading_keywords: ListOverride::Default,
            gap_split_factor: 1.4,
        }
    }
}

/// Builder for [`ParsingConfig`].
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    bold_marker: Option<String>,
    merge_y_tolerance: Option<f32>,
    line_y_tolerance: Option<f32>,
    heading_keywords: ListOverride<String>,
    gap_split_factor: Option<f32>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font-name substring used to detect bold fragments.
    pub fn bold_marker(mut self, marker: &str) -> Self {
        self.bold_marker = Some(marker.to_string());
        self
    }

    pub fn merge_y_tolerance(mut self, tolerance: f32) -> Self {
        self.merge_y_tolerance = Some(tolerance);
        self
    }

    pub fn line_y_tolerance(mut self, tolerance: f32) -> Self {
        self.line_y_tolerance = Some(tolerance);
        self
    }

    pub fn gap_split_factor(mut self, factor: f32) -> Self {
        self.gap_split_factor = Some(factor);
        self
    }

    // ── Heading keywords ──

    pub fn set_heading_keywords(mut self, keywords: Vec<String>) -> Self {
        self.heading_keywords = ListOverride::Replace(keywords);
        self
    }

    pub fn add_heading_keyword(mut self, keyword: String) -> Self {
        match &mut self.heading_keywords {
            ListOverride::Extend(v) => v.push(keyword),
            _ => self.heading_keywords = ListOverride::Extend(vec![keyword]),
        }
        self
    }

    pub fn build(self) -> ParsingConfig {
        ParsingConfig {
            bold_marker: self.bold_marker.unwrap_or_else(|| "Bold".to_string()),
            merge_y_tolerance: self.merge_y_tolerance.unwrap_or(2.0),
            line_y_tolerance: self.line_y_tolerance.unwrap_or(5.0),
            heading_keywords: self.heading_keywords,
            gap_split_factor: self.gap_split_factor.unwrap_or(1.4),
        }
    }
}
