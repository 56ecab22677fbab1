use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::domain::{Application, CandidateExportRow, EmployerId, JobPosting};
use super::repository::{CandidateRepository, RepositoryError};

const EMPLOYER_CANDIDATES_QUERY: &str = r#"
    SELECT
        a.id AS application_id,
        j.title AS job_title,
        a.full_name,
        a.email,
        a.phone,
        a.education,
        a.experience,
        a.skills,
        a.status,
        a.created_at,
        a.resume_path
    FROM applications a
    JOIN jobs j ON a.job_id = j.id
    WHERE j.employer_id = ?
    ORDER BY a.created_at IS NULL, a.created_at DESC, a.id DESC
"#;

/// SQLite-backed repository over the `jobs` and `applications` tables.
#[derive(Debug, Clone)]
pub struct SqliteCandidateRepository {
    pool: SqlitePool,
}

impl SqliteCandidateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn insert_job(&self, posting: &JobPosting) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO jobs (id, title, employer_id) VALUES (?, ?, ?)")
            .bind(posting.id)
            .bind(&posting.title)
            .bind(posting.employer_id.0)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn insert_application(&self, application: &Application) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO applications (
                id, job_id, full_name, email, phone,
                education, experience, skills, status, created_at, resume_path
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(application.id)
        .bind(application.job_id)
        .bind(&application.full_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.education)
        .bind(&application.experience)
        .bind(&application.skills)
        .bind(&application.status)
        .bind(application.created_at)
        .bind(&application.resume_path)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CandidateRepository for SqliteCandidateRepository {
    async fn applications_for_employer(
        &self,
        employer_id: EmployerId,
    ) -> Result<Vec<CandidateExportRow>, RepositoryError> {
        // The pooled connection returns to the pool when `conn` drops, on success or error.
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, CandidateExportRow>(EMPLOYER_CANDIDATES_QUERY)
            .bind(employer_id.0)
            .fetch_all(&mut *conn)
            .await?;

        debug!(%employer_id, rows = rows.len(), "fetched employer candidates");
        Ok(rows)
    }
}
