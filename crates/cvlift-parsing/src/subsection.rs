use crate::config::ParsingConfig;
use crate::lines::Line;

/// Split a section's lines into per-entry groups (stage 4).
///
/// Entry boundaries are vertical gaps larger than `average gap *
/// gap_split_factor`, or lines containing a bold fragment (entry titles
/// are usually bold). Sections with zero or one line produce at most one
/// subsection — the average gap is undefined there and must not feed the
/// threshold comparison.
pub fn split_subsections(lines: &[Line], config: &ParsingConfig) -> Vec<Vec<Line>> {
    if lines.is_empty() {
        return Vec::new();
    }
    if lines.len() == 1 {
        return vec![lines.to_vec()];
    }

    let gaps: Vec<f32> = lines.windows(2).map(|w| w[0].y - w[1].y).collect();
    let avg_gap = gaps.iter().sum::<f32>() / gaps.len() as f32;
    let threshold = avg_gap * config.gap_split_factor;

    let mut subsections: Vec<Vec<Line>> = Vec::new();
    let mut current = vec![lines[0].clone()];

    for (i, line) in lines.iter().enumerate().skip(1) {
        let gap = lines[i - 1].y - line.y;
        if gap > threshold || line.has_bold() {
            if !current.is_empty() {
                subsections.push(std::mem::take(&mut current));
            }
        }
        current.push(line.clone());
    }
    if !current.is_empty() {
        subsections.push(current);
    }
    subsections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::TextFragment;

    fn line(text: &str, y: f32, bold: bool) -> Line {
        Line {
            items: vec![TextFragment {
                text: text.to_string(),
                x1: 0.0,
                x2: text.len() as f32 * 5.0,
                y,
                bold,
            }],
            y,
        }
    }

    #[test]
    fn test_large_gap_starts_new_entry() {
        // Gaps: 12, 12, 40, 12 → avg 19, threshold 26.6; only the 40 splits.
        let lines = vec![
            line("Acme Corp", 700.0, false),
            line("Engineer", 688.0, false),
            line("• Did things", 676.0, false),
            line("Globex", 636.0, false),
            line("Analyst", 624.0, false),
        ];
        let subs = split_subsections(&lines, &ParsingConfig::default());
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].len(), 3);
        assert_eq!(subs[1].len(), 2);
        assert_eq!(subs[1][0].text(), "Globex");
    }

    #[test]
    fn test_bold_line_starts_new_entry() {
        // Uniform gaps, so only boldness can split.
        let lines = vec![
            line("Acme Corp", 700.0, true),
            line("• Shipped it", 688.0, false),
            line("Globex", 676.0, true),
            line("• Measured it", 664.0, false),
        ];
        let subs = split_subsections(&lines, &ParsingConfig::default());
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0][0].text(), "Acme Corp");
        assert_eq!(subs[1][0].text(), "Globex");
    }

    #[test]
    fn test_single_line_section_is_single_subsection() {
        // Guards the degenerate case: one line means zero gaps, and the
        // average-gap threshold would otherwise be a NaN comparison.
        let lines = vec![line("Only entry", 700.0, false)];
        let subs = split_subsections(&lines, &ParsingConfig::default());
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].len(), 1);
        assert_eq!(subs[0][0].text(), "Only entry");
    }

    #[test]
    fn test_empty_section_yields_no_subsections() {
        let subs = split_subsections(&[], &ParsingConfig::default());
        assert!(subs.is_empty());
    }

    #[test]
    fn test_uniform_gaps_no_bold_is_one_entry() {
        let lines = vec![
            line("a", 700.0, false),
            line("b", 688.0, false),
            line("c", 676.0, false),
        ];
        let subs = split_subsections(&lines, &ParsingConfig::default());
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].len(), 3);
    }
}
