use crate::config::ParsingConfig;
use crate::lines::Line;

/// Default keyword set that marks a line as a section heading when its
/// uppercased text contains one of them.
pub(crate) const HEADING_KEYWORDS: &[&str] = &[
    "WORK EXPERIENCE",
    "EXPERIENCE",
    "EMPLOYMENT",
    "EDUCATION",
    "ACADEMIC",
    "SKILLS",
    "TECHNICAL SKILLS",
    "PROJECTS",
    "PROJECT",
    "CERTIFICATIONS",
    "CERTIFICATES",
];

/// Title given to the implicit section holding everything above the first
/// detected heading.
pub const PROFILE_TITLE: &str = "PROFILE";

/// A titled contiguous block of lines in the resume.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
}

/// Where a section's lines are routed during record assembly.
///
/// Decided once per section from its title; sections that classify as
/// `Unclassified` are silently dropped from the final record — an
/// inherited policy, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Profile,
    Education,
    Work,
    Projects,
    Skills,
    Unclassified,
}

impl SectionKind {
    /// Classify a section title by case-insensitive keyword containment.
    pub fn classify(title: &str) -> Self {
        let upper = title.to_uppercase();
        if upper.contains("PROFILE") {
            Self::Profile
        } else if upper.contains("EDUCATION") {
            Self::Education
        } else if upper.contains("WORK")
            || upper.contains("EXPERIENCE")
            || upper.contains("EMPLOYMENT")
        {
            Self::Work
        } else if upper.contains("PROJECT") {
            Self::Projects
        } else if upper.contains("SKILL") {
            Self::Skills
        } else {
            Self::Unclassified
        }
    }
}

/// Heading test: a line is a section heading if it is a single bold
/// all-uppercase run longer than two characters, or if its uppercased text
/// contains a known section keyword.
fn is_section_heading(line: &Line, keywords: &[String]) -> bool {
    let text = line.text();

    if line.items.len() == 1
        && line.items[0].bold
        && text == text.to_uppercase()
        && text.chars().count() > 2
    {
        return true;
    }

    let upper = text.to_uppercase();
    keywords.iter().any(|k| upper.contains(k.as_str()))
}

/// Split assembled lines into titled sections (stage 3).
///
/// Lines before the first detected heading form an implicit section titled
/// `PROFILE`. Each heading closes the current section (pushed if
/// non-empty) and opens a new one titled with the heading's literal text.
pub fn split_sections(lines: &[Line], config: &ParsingConfig) -> Vec<Section> {
    let defaults: Vec<String> = HEADING_KEYWORDS.iter().map(|k| k.to_string()).collect();
    let keywords = config.heading_keywords.resolve(&defaults);

    let mut sections = Vec::new();
    let mut title = PROFILE_TITLE.to_string();
    let mut current: Vec<Line> = Vec::new();

    for line in lines {
        if is_section_heading(line, &keywords) {
            if !current.is_empty() {
                sections.push(Section {
                    title,
                    lines: std::mem::take(&mut current),
                });
            }
            title = line.text();
            current.clear();
        } else {
            current.push(line.clone());
        }
    }
    if !current.is_empty() {
        sections.push(Section {
            title,
            lines: current,
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::TextFragment;

    fn line_of(texts: &[(&str, bool)], y: f32) -> Line {
        let mut x = 0.0;
        let items = texts
            .iter()
            .map(|(t, bold)| {
                let f = TextFragment {
                    text: t.to_string(),
                    x1: x,
                    x2: x + t.len() as f32 * 5.0,
                    y,
                    bold: *bold,
                };
                x += t.len() as f32 * 5.0 + 50.0;
                f
            })
            .collect();
        Line { items, y }
    }

    #[test]
    fn test_bold_uppercase_line_is_heading() {
        let lines = vec![
            line_of(&[("WORK EXPERIENCE", true)], 700.0),
            line_of(&[("Acme Corp", false)], 650.0),
            line_of(&[("Built things", false)], 630.0),
        ];
        let sections = split_sections(&lines, &ParsingConfig::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "WORK EXPERIENCE");
        assert_eq!(sections[0].lines.len(), 2);
    }

    #[test]
    fn test_keyword_heading_without_bold() {
        // Mixed-case, not bold — caught by the keyword rule.
        let lines = vec![
            line_of(&[("Jane Doe", true)], 700.0),
            line_of(&[("Education", false)], 650.0),
            line_of(&[("State University", false)], 630.0),
        ];
        let sections = split_sections(&lines, &ParsingConfig::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "PROFILE");
        assert_eq!(sections[1].title, "Education");
    }

    #[test]
    fn test_lines_before_first_heading_are_profile() {
        let lines = vec![
            line_of(&[("Jane Doe", true)], 700.0),
            line_of(&[("jane@example.com", false)], 680.0),
            line_of(&[("SKILLS", true)], 650.0),
            line_of(&[("Rust", false)], 630.0),
        ];
        let sections = split_sections(&lines, &ParsingConfig::default());
        assert_eq!(sections[0].title, "PROFILE");
        assert_eq!(sections[0].lines.len(), 2);
        assert_eq!(sections[1].title, "SKILLS");
    }

    #[test]
    fn test_short_bold_uppercase_is_not_heading() {
        // Two characters or fewer never qualify under the bold rule.
        let lines = vec![
            line_of(&[("AI", true)], 700.0),
            line_of(&[("more text", false)], 680.0),
        ];
        let sections = split_sections(&lines, &ParsingConfig::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "PROFILE");
        assert_eq!(sections[0].lines.len(), 2);
    }

    #[test]
    fn test_multi_fragment_bold_line_needs_keyword() {
        // Bold and uppercase but two fragments — rule (a) requires exactly
        // one, and "CONTACT DETAILS" matches no keyword.
        let lines = vec![
            line_of(&[("CONTACT", true), ("DETAILS", true)], 700.0),
            line_of(&[("555-1234", false)], 680.0),
        ];
        let sections = split_sections(&lines, &ParsingConfig::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "PROFILE");
    }

    #[test]
    fn test_empty_section_between_headings_not_pushed() {
        let lines = vec![
            line_of(&[("EDUCATION", true)], 700.0),
            line_of(&[("SKILLS", true)], 680.0),
            line_of(&[("Rust", false)], 660.0),
        ];
        let sections = split_sections(&lines, &ParsingConfig::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "SKILLS");
    }

    #[test]
    fn test_custom_keyword_extends_defaults() {
        let config = crate::ParsingConfigBuilder::new()
            .add_heading_keyword("PUBLICATIONS".to_string())
            .build();
        let lines = vec![
            line_of(&[("Publications", false)], 700.0),
            line_of(&[("A paper", false)], 680.0),
        ];
        let sections = split_sections(&lines, &config);
        assert_eq!(sections[0].title, "Publications");
    }

    #[test]
    fn test_classify_titles() {
        assert_eq!(SectionKind::classify("PROFILE"), SectionKind::Profile);
        assert_eq!(SectionKind::classify("Education"), SectionKind::Education);
        assert_eq!(SectionKind::classify("WORK EXPERIENCE"), SectionKind::Work);
        assert_eq!(SectionKind::classify("Employment History"), SectionKind::Work);
        assert_eq!(SectionKind::classify("Personal Projects"), SectionKind::Projects);
        assert_eq!(SectionKind::classify("Technical Skills"), SectionKind::Skills);
        assert_eq!(SectionKind::classify("REFERENCES"), SectionKind::Unclassified);
    }

    #[test]
    fn test_empty_input() {
        let sections = split_sections(&[], &ParsingConfig::default());
        assert!(sections.is_empty());
    }
}
