//! Heuristic feature scorers for resume field classification.
//!
//! Each field has a dedicated additive scorer over a candidate text run.
//! Scores are unnormalized integers; positive terms argue for the field,
//! negative terms argue against. [`find_best_match`] is the pick-max
//! reducer shared by every field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fragment::TextFragment;

/// A pure scoring function over a candidate run's trimmed text and bold flag.
pub type ScoreFn = fn(&str, bool) -> i32;

/// Score every run in scope and return the text of the best one.
///
/// Ties keep the earliest-seen run; an empty scope yields an empty string,
/// never an error. Any score, including a negative one, can win — the
/// contract is "always return a plausible string".
pub fn find_best_match<'a, I>(items: I, score: ScoreFn) -> String
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let mut best: Option<(i32, &TextFragment)> = None;
    for item in items {
        let s = score(item.text.trim(), item.bold);
        match best {
            Some((current, _)) if s <= current => {}
            _ => best = Some((s, item)),
        }
    }
    best.map(|(_, item)| item.text.trim().to_string())
        .unwrap_or_default()
}

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s.]+$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{4}").unwrap());
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-zA-Z\s]+,\s*[A-Z]{2}").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+\.[a-zA-Z]+/\S+").unwrap());
static GPA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-4]\.\d{1,2}").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:19|20)\d{2}").unwrap());
static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3}").unwrap());
static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)").unwrap());
static SEASON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:spring|summer|fall|autumn|winter)\b").unwrap());

const SCHOOL_KEYWORDS: &[&str] = &["University", "College", "School", "Institute"];
const DEGREE_KEYWORDS: &[&str] = &[
    "Bachelor",
    "Master",
    "PhD",
    "Associate",
    "Degree",
    "Science",
    "Arts",
];
const JOB_TITLE_KEYWORDS: &[&str] = &[
    "Engineer",
    "Developer",
    "Manager",
    "Analyst",
    "Designer",
    "Intern",
    "Assistant",
    "Coordinator",
    "Specialist",
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn has_year(text: &str) -> bool {
    YEAR_RE.is_match(text)
}

pub fn score_name(text: &str, bold: bool) -> i32 {
    let mut score = 0;
    if NAME_RE.is_match(text) {
        score += 3;
    }
    if bold {
        score += 2;
    }
    if text == text.to_uppercase() && text.chars().count() > 3 {
        score += 2;
    }
    if text.contains('@') {
        score -= 4;
    }
    if text.chars().any(|c| c.is_ascii_digit()) {
        score -= 4;
    }
    if text.contains(',') {
        score -= 4;
    }
    if text.contains('/') {
        score -= 4;
    }
    let len = text.chars().count();
    if len < 5 || len > 50 {
        score -= 2;
    }
    score
}

pub fn score_email(text: &str, bold: bool) -> i32 {
    let mut score = 0;
    if EMAIL_RE.is_match(text) {
        score += 4;
    }
    if text.contains('@') {
        score += 2;
    }
    if bold {
        score -= 1;
    }
    score
}

pub fn score_phone(text: &str, _bold: bool) -> i32 {
    let mut score = 0;
    if PHONE_RE.is_match(text) {
        score += 4;
    }
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    if digits >= 10 {
        score += 2;
    }
    score
}

pub fn score_location(text: &str, _bold: bool) -> i32 {
    let mut score = 0;
    if LOCATION_RE.is_match(text) {
        score += 4;
    }
    if text.contains(',') {
        score += 1;
    }
    if text.contains('@') || text.contains('/') {
        score -= 4;
    }
    score
}

pub fn score_url(text: &str, _bold: bool) -> i32 {
    let mut score = 0;
    if URL_RE.is_match(text) {
        score += 4;
    }
    if text.contains('/') {
        score += 2;
    }
    if text.contains(".com") || text.contains(".org") {
        score += 1;
    }
    score
}

pub fn score_summary(text: &str, bold: bool) -> i32 {
    let mut score = 0;
    let len = text.chars().count();
    if len > 50 && len < 300 {
        score += 3;
    }
    if !bold {
        score += 1;
    }
    if text.contains('@') || text.contains('/') || DIGIT_RUN_RE.is_match(text) {
        score -= 4;
    }
    score
}

pub fn score_school(text: &str, bold: bool) -> i32 {
    let mut score = 0;
    if contains_any(text, SCHOOL_KEYWORDS) {
        score += 3;
    }
    if bold {
        score += 2;
    }
    score
}

pub fn score_degree(text: &str, _bold: bool) -> i32 {
    let mut score = 0;
    if contains_any(text, DEGREE_KEYWORDS) {
        score += 3;
    }
    if text.contains("GPA") {
        score += 1;
    }
    score
}

pub fn score_gpa(text: &str, _bold: bool) -> i32 {
    let mut score = 0;
    if GPA_RE.is_match(text) {
        score += 4;
    }
    if text.to_uppercase().contains("GPA") {
        score += 2;
    }
    score
}

pub fn score_date(text: &str, _bold: bool) -> i32 {
    let mut score = 0;
    if has_year(text) {
        score += 3;
    }
    if MONTH_RE.is_match(text) {
        score += 2;
    }
    if SEASON_RE.is_match(text) {
        score += 2;
    }
    if text.contains("Present") {
        score += 2;
    }
    if text.contains('-') {
        score += 1;
    }
    score
}

pub fn score_job_title(text: &str, bold: bool) -> i32 {
    let mut score = 0;
    if contains_any(text, JOB_TITLE_KEYWORDS) {
        score += 3;
    }
    if !bold {
        score += 1;
    }
    if has_year(text) {
        score -= 3;
    }
    score
}

pub fn score_company(text: &str, bold: bool) -> i32 {
    let mut score = 0;
    if bold {
        score += 2;
    }
    let len = text.chars().count();
    if len > 3 && len < 50 {
        score += 1;
    }
    if has_year(text) {
        score -= 3;
    }
    // Disambiguate from the job title when both sit on one line.
    if contains_any(text, JOB_TITLE_KEYWORDS) {
        score -= 2;
    }
    score
}

pub fn score_project_name(text: &str, bold: bool) -> i32 {
    let mut score = 0;
    if bold {
        score += 2;
    }
    let len = text.chars().count();
    if len > 3 && len < 50 {
        score += 1;
    }
    if has_year(text) {
        score -= 3;
    }
    score
}
