use std::sync::Arc;

use tracing::{error, info};

use super::document::{render_csv, DocumentError};
use super::domain::EmployerId;
use super::repository::{CandidateRepository, RepositoryError};

/// Fully buffered CSV document ready to be served as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub body: Vec<u8>,
    pub content_type: mime::Mime,
    pub filename: &'static str,
    pub row_count: usize,
}

impl CsvExport {
    pub const FILENAME: &'static str = "candidates.csv";

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }
}

/// Builds the candidate CSV for all of an employer's postings.
pub struct CandidateExporter<R> {
    repository: Arc<R>,
}

impl<R> CandidateExporter<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// An employer with no postings or no applications gets a header-only document.
    pub async fn export(&self, employer_id: EmployerId) -> Result<CsvExport, ExportError> {
        let rows = match self.repository.applications_for_employer(employer_id).await {
            Ok(rows) => rows,
            Err(err) => {
                error!(%employer_id, error = %err, "candidate export retrieval failed");
                return Err(err.into());
            }
        };

        let body = render_csv(&rows)?;
        info!(%employer_id, rows = rows.len(), bytes = body.len(), "candidate export rendered");

        Ok(CsvExport {
            body,
            content_type: mime::TEXT_CSV,
            filename: CsvExport::FILENAME,
            row_count: rows.len(),
        })
    }
}

/// Error raised by the candidate exporter.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Retrieval(#[from] RepositoryError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}
