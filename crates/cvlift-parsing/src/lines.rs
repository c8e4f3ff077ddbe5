use crate::config::ParsingConfig;
use crate::fragment::TextFragment;

/// Fragments judged to share one horizontal writing line.
///
/// `y` is the representative (first-item) vertical coordinate. Built once
/// by [`assemble_lines`] and read-only downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub items: Vec<TextFragment>,
    pub y: f32,
}

impl Line {
    /// Flattened text: fragment texts concatenated, then trimmed.
    pub fn text(&self) -> String {
        self.items
            .iter()
            .map(|f| f.text.as_str())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// True if any fragment in the line is bold.
    pub fn has_bold(&self) -> bool {
        self.items.iter().any(|f| f.bold)
    }
}

/// Average glyph width across the whole document: total fragment width
/// divided by total character count. Zero when there is no text.
pub(crate) fn average_char_width(fragments: &[TextFragment]) -> f32 {
    let total_width: f32 = fragments.iter().map(|f| f.x2 - f.x1).sum();
    let total_chars: usize = fragments.iter().map(|f| f.text.chars().count()).sum();
    if total_chars == 0 {
        return 0.0;
    }
    total_width / total_chars as f32
}

/// Step A: merge adjacent fragments into words/runs.
///
/// A fragment is glued onto the running one when the horizontal gap is
/// below the document's average character width and the vertical drift is
/// within tolerance; otherwise the run is flushed and a new one starts.
fn merge_fragments(fragments: Vec<TextFragment>, config: &ParsingConfig) -> Vec<TextFragment> {
    let avg_char_width = average_char_width(&fragments);

    let mut merged: Vec<TextFragment> = Vec::new();
    let mut current: Option<TextFragment> = None;

    for fragment in fragments {
        match current.as_mut() {
            Some(run)
                if fragment.x1 - run.x2 < avg_char_width
                    && (fragment.y - run.y).abs() < config.merge_y_tolerance =>
            {
                run.text.push_str(&fragment.text);
                run.x2 = fragment.x2;
            }
            _ => {
                if let Some(run) = current.take() {
                    merged.push(run);
                }
                current = Some(fragment);
            }
        }
    }
    if let Some(run) = current {
        merged.push(run);
    }
    merged
}

/// Step B: cluster merged runs into lines by vertical position.
///
/// Consecutive runs within the tolerance of the group's anchor `y` share a
/// line; a larger gap starts a new one. Lines are finally sorted descending
/// by `y`, which in PDF user space yields top-to-bottom reading order.
fn cluster_lines(merged: Vec<TextFragment>, config: &ParsingConfig) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Option<Line> = None;

    for run in merged {
        match current.as_mut() {
            Some(line) if (run.y - line.y).abs() < config.line_y_tolerance => {
                line.items.push(run);
            }
            _ => {
                if let Some(line) = current.take() {
                    lines.push(line);
                }
                current = Some(Line {
                    y: run.y,
                    items: vec![run],
                });
            }
        }
    }
    if let Some(line) = current {
        lines.push(line);
    }

    lines.sort_by(|a, b| b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal));
    lines
}

/// Assemble fragments into ordered lines (stage 2).
///
/// Empty input yields an empty line list, never an error.
pub fn assemble_lines(fragments: Vec<TextFragment>, config: &ParsingConfig) -> Vec<Line> {
    let merged = merge_fragments(fragments, config);
    cluster_lines(merged, config)
}
