use super::domain::CandidateExportRow;

/// Header row of the candidate export, in column order.
pub const EXPORT_HEADERS: [&str; 11] = [
    "Application ID",
    "Job Title",
    "Candidate Name",
    "Email",
    "Phone",
    "Education",
    "Experience",
    "Skills",
    "Status",
    "Applied Date",
    "Resume",
];

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to write csv record: {0}")]
    Write(#[from] csv::Error),
    #[error("failed to finalize csv document: {0}")]
    Flush(String),
}

/// Render the header plus one CRLF-terminated record per row into a UTF-8 buffer.
pub fn render_csv(rows: &[CandidateExportRow]) -> Result<Vec<u8>, DocumentError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }

    writer
        .into_inner()
        .map_err(|err| DocumentError::Flush(err.error().to_string()))
}
