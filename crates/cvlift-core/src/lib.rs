use serde::{Deserialize, Serialize};

pub mod backend;

pub use backend::{BackendError, PdfBackend, RawTextItem};

/// Contact and summary fields extracted from the top of a resume.
///
/// Every field is a single best-match string and defaults to empty — the
/// record never carries absent/null fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: String,
    pub summary: String,
}

/// One degree or program within the education section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub gpa: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

/// One job within the work experience section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub job_title: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

/// One project within the projects section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

/// The structured output of a single parse invocation.
///
/// Built fresh per upload and handed off whole to the form-population
/// layer; the pipeline never retains or mutates it afterward. Date fields
/// hold the raw winning text run — normalization to `YYYY-MM` is a
/// separate, caller-side adaptation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub profile: Profile,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
}
