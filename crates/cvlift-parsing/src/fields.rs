//! Per-section record assembly: route a section's text runs through the
//! field scorers and collect descriptions and skills.

use cvlift_core::{EducationEntry, Profile, ProjectEntry, WorkEntry};

use crate::features::{
    find_best_match, score_company, score_date, score_degree, score_email, score_gpa,
    score_job_title, score_location, score_name, score_phone, score_project_name, score_school,
    score_summary, score_url, ScoreFn,
};
use crate::fragment::TextFragment;
use crate::lines::Line;
use crate::section::Section;

/// The data-driven field table: one `(field, scorer)` pair per profile
/// field, in record order. Kept as data so individual scorers stay
/// testable in isolation and new fields are a one-line addition.
pub const PROFILE_FIELDS: &[(&str, ScoreFn)] = &[
    ("name", score_name),
    ("email", score_email),
    ("phone", score_phone),
    ("location", score_location),
    ("url", score_url),
    ("summary", score_summary),
];

fn runs(lines: &[Line]) -> impl Iterator<Item = &TextFragment> {
    lines.iter().flat_map(|l| l.items.iter())
}

/// Extract profile fields from the whole profile section (no entry
/// splitting — the profile is scored monolithically).
pub fn extract_profile(section: &Section) -> Profile {
    let mut profile = Profile::default();
    for (field, scorer) in PROFILE_FIELDS {
        let value = find_best_match(runs(&section.lines), *scorer);
        match *field {
            "name" => profile.name = value,
            "email" => profile.email = value,
            "phone" => profile.phone = value,
            "location" => profile.location = value,
            "url" => profile.url = value,
            "summary" => profile.summary = value,
            _ => unreachable!("unknown profile field"),
        }
    }
    profile
}

/// Bullet lines: trimmed flattened text starting with `•` or `-`, in
/// top-to-bottom order.
pub fn extract_descriptions(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.text())
        .filter(|t| t.starts_with('•') || t.starts_with('-'))
        .collect()
}

pub fn extract_education_entry(subsection: &[Line]) -> EducationEntry {
    EducationEntry {
        school: find_best_match(runs(subsection), score_school),
        degree: find_best_match(runs(subsection), score_degree),
        gpa: find_best_match(runs(subsection), score_gpa),
        date: find_best_match(runs(subsection), score_date),
        descriptions: extract_descriptions(subsection),
    }
}

pub fn extract_work_entry(subsection: &[Line]) -> WorkEntry {
    WorkEntry {
        company: find_best_match(runs(subsection), score_company),
        job_title: find_best_match(runs(subsection), score_job_title),
        date: find_best_match(runs(subsection), score_date),
        descriptions: extract_descriptions(subsection),
    }
}

pub fn extract_project_entry(subsection: &[Line]) -> ProjectEntry {
    ProjectEntry {
        name: find_best_match(runs(subsection), score_project_name),
        date: find_best_match(runs(subsection), score_date),
        descriptions: extract_descriptions(subsection),
    }
}

/// Skills: every non-empty fragment text in the section that does not
/// itself contain a bullet, trimmed, in encounter order. No dedup.
pub fn extract_skills(section: &Section) -> Vec<String> {
    let mut skills = Vec::new();
    for line in &section.lines {
        for item in &line.items {
            let text = item.text.trim();
            if !text.is_empty() && !text.contains('•') {
                skills.push(text.to_string());
            }
        }
    }
    skills
}
