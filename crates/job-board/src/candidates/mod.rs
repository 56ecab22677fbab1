//! Employer-facing candidate export.
//!
//! Applications are joined with the postings they target, filtered to a single
//! employer, and rendered as a `candidates.csv` download. The exporter only
//! reads; it never creates or mutates postings or applications.

pub(crate) mod document;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use document::{render_csv, DocumentError, EXPORT_HEADERS};
pub use domain::{
    Application, CandidateExportRow, EmployerId, JobPosting, APPLIED_DATE_FORMAT, DEFAULT_STATUS,
};
pub use repository::{CandidateRepository, RepositoryError};
pub use router::candidate_export_router;
pub use service::{CandidateExporter, CsvExport, ExportError};
pub use sqlite::SqliteCandidateRepository;
