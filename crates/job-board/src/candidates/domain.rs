use std::fmt;

use chrono::NaiveDateTime;

/// Status shown for applications that were never reviewed.
pub const DEFAULT_STATUS: &str = "Pending";

/// Layout of the Applied Date column.
pub const APPLIED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifier of the organization that owns job postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployerId(pub i64);

impl fmt::Display for EmployerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job listing owned by an employer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub employer_id: EmployerId,
}

/// Candidate submission against a single job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub resume_path: Option<String>,
}

/// One application joined with the title of the posting it targets.
///
/// Every text column is optional so rows read from stores without NOT NULL
/// constraints still export, with NULL rendered as an empty field.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CandidateExportRow {
    pub application_id: i64,
    pub job_title: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub resume_path: Option<String>,
}

impl CandidateExportRow {
    pub fn from_parts(application: &Application, posting: &JobPosting) -> Self {
        Self {
            application_id: application.id,
            job_title: Some(posting.title.clone()),
            full_name: Some(application.full_name.clone()),
            email: Some(application.email.clone()),
            phone: application.phone.clone(),
            education: application.education.clone(),
            experience: application.experience.clone(),
            skills: application.skills.clone(),
            status: application.status.clone(),
            created_at: application.created_at,
            resume_path: application.resume_path.clone(),
        }
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }

    pub fn applied_date(&self) -> String {
        self.created_at
            .map(|timestamp| timestamp.format(APPLIED_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Column values in export order.
    pub fn fields(&self) -> [String; 11] {
        [
            self.application_id.to_string(),
            text_or_empty(&self.job_title),
            text_or_empty(&self.full_name),
            text_or_empty(&self.email),
            text_or_empty(&self.phone),
            text_or_empty(&self.education),
            text_or_empty(&self.experience),
            text_or_empty(&self.skills),
            self.status_label().to_string(),
            self.applied_date(),
            text_or_empty(&self.resume_path),
        ]
    }
}

fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
