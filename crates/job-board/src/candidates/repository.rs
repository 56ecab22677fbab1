use async_trait::async_trait;

use super::domain::{CandidateExportRow, EmployerId};

/// Read access to applications joined with their postings.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Applications on the employer's postings, newest first with ties broken by descending id.
    async fn applications_for_employer(
        &self,
        employer_id: EmployerId,
    ) -> Result<Vec<CandidateExportRow>, RepositoryError>;
}

/// Retrieval failures raised by a candidate repository.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("data store unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    Query(String),
    #[error("unexpected row shape: {0}")]
    RowShape(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => Self::Query(format!("{} ({})", db_err.message(), code)),
                None => Self::Query(db_err.message().to_string()),
            },
            sqlx::Error::ColumnNotFound(column) => {
                Self::RowShape(format!("column not found: {column}"))
            }
            err @ (sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. }) => Self::RowShape(err.to_string()),
            other => Self::Unavailable(other.to_string()),
        }
    }
}
