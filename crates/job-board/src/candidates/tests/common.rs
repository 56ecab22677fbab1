use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};

use crate::candidates::domain::{Application, CandidateExportRow, EmployerId, JobPosting};
use crate::candidates::repository::{CandidateRepository, RepositoryError};
use crate::candidates::service::CandidateExporter;
use crate::candidates::sqlite::SqliteCandidateRepository;
use crate::config::DatabaseConfig;
use crate::db::{bootstrap_schema, create_pool};

pub(super) fn timestamp(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

pub(super) fn posting(id: i64, title: &str, employer_id: i64) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        employer_id: EmployerId(employer_id),
    }
}

pub(super) fn application(id: i64, job_id: i64, full_name: &str) -> Application {
    Application {
        id,
        job_id,
        full_name: full_name.to_string(),
        email: format!("{}@example.com", full_name.to_ascii_lowercase().replace(' ', ".")),
        phone: None,
        education: None,
        experience: None,
        skills: None,
        status: None,
        created_at: None,
        resume_path: None,
    }
}

pub(super) fn ada_lovelace() -> Application {
    Application {
        email: "ada@example.com".to_string(),
        created_at: Some(timestamp(15, 10, 30)),
        ..application(42, 1, "Ada Lovelace")
    }
}

pub(super) fn export_row(application: &Application, title: &str) -> CandidateExportRow {
    CandidateExportRow::from_parts(application, &posting(application.job_id, title, 0))
}

pub(super) async fn sqlite_repository() -> SqliteCandidateRepository {
    let pool = create_pool(&DatabaseConfig::in_memory())
        .await
        .expect("memory pool");
    bootstrap_schema(&pool).await.expect("schema applies");
    SqliteCandidateRepository::new(pool)
}

/// Employer 7 owns "Backend Engineer" (job 1) with Ada's application; employer 9 owns job 2.
pub(super) async fn seeded_repository() -> SqliteCandidateRepository {
    let repository = sqlite_repository().await;
    repository
        .insert_job(&posting(1, "Backend Engineer", 7))
        .await
        .expect("job inserts");
    repository
        .insert_job(&posting(2, "Data Analyst", 9))
        .await
        .expect("job inserts");
    repository
        .insert_application(&ada_lovelace())
        .await
        .expect("application inserts");
    repository
        .insert_application(&Application {
            created_at: Some(timestamp(16, 9, 0)),
            ..application(43, 2, "Grace Hopper")
        })
        .await
        .expect("application inserts");
    repository
}

pub(super) fn exporter<R>(repository: R) -> Arc<CandidateExporter<R>>
where
    R: CandidateRepository + 'static,
{
    Arc::new(CandidateExporter::new(Arc::new(repository)))
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    rows: Vec<CandidateExportRow>,
    requested: Mutex<Vec<EmployerId>>,
}

impl MemoryRepository {
    pub(super) fn with_rows(rows: Vec<CandidateExportRow>) -> Self {
        Self {
            rows,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requested(&self) -> Vec<EmployerId> {
        self.requested.lock().expect("requests mutex").clone()
    }
}

#[async_trait]
impl CandidateRepository for MemoryRepository {
    async fn applications_for_employer(
        &self,
        employer_id: EmployerId,
    ) -> Result<Vec<CandidateExportRow>, RepositoryError> {
        self.requested
            .lock()
            .expect("requests mutex")
            .push(employer_id);
        Ok(self.rows.clone())
    }
}

pub(super) struct UnavailableRepository;

#[async_trait]
impl CandidateRepository for UnavailableRepository {
    async fn applications_for_employer(
        &self,
        _employer_id: EmployerId,
    ) -> Result<Vec<CandidateExportRow>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}

pub(super) async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub(super) fn parse_records(body: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(body.as_bytes());
    reader
        .records()
        .map(|record| {
            record
                .expect("record parses")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
