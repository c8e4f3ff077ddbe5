use cvlift_core::RawTextItem;

use crate::config::ParsingConfig;

/// A positioned run of text flattened from a backend item.
///
/// `x1`/`x2` are horizontal bounds and `y` is the baseline vertical
/// position in PDF user-space units (origin bottom-left, so a larger `y`
/// sits higher on the page).
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub bold: bool,
}

/// Flatten per-page backend items into one fragment sequence (stage 1).
///
/// Exactly one fragment per backend item, whitespace-only items included:
/// a standalone inter-word space carries the width that bridges the merge
/// of its neighbors downstream. Pages are concatenated in document order
/// and page boundaries are discarded: a resume spanning pages may
/// interleave fragments from different pages by `y` value alone.
pub fn build_fragments(pages: &[Vec<RawTextItem>], config: &ParsingConfig) -> Vec<TextFragment> {
    let mut fragments = Vec::new();
    for page in pages {
        for item in page {
            fragments.push(TextFragment {
                text: item.text.clone(),
                x1: item.x(),
                x2: item.x() + item.width,
                y: item.y(),
                bold: item.font_name.contains(config.bold_marker.as_str()),
            });
        }
    }
    fragments
}
