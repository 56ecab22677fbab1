use clap::Args;
use job_board::candidates::{CandidateExporter, CsvExport, EmployerId, SqliteCandidateRepository};
use job_board::config::{AppConfig, DatabaseConfig};
use job_board::db::create_pool;
use job_board::error::AppError;
use job_board::telemetry;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Employer whose postings' applications are exported
    #[arg(long)]
    pub(crate) employer_id: i64,
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Override DATABASE_URL
    #[arg(long)]
    pub(crate) database_url: Option<String>,
}

impl ExportArgs {
    fn database_config(&self, mut configured: DatabaseConfig) -> DatabaseConfig {
        if let Some(url) = &self.database_url {
            configured.url = url.clone();
        }
        configured
    }
}

pub(crate) async fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let database = args.database_config(config.database);
    let export = export_from_database(&database, EmployerId(args.employer_id)).await?;
    write_export(&export, args.output.as_deref(), std::io::stdout().lock())?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), rows = export.row_count, "candidate export written");
    }
    Ok(())
}

/// Run the export on a dedicated pool that is closed before returning, on success or failure.
pub(crate) async fn export_from_database(
    database: &DatabaseConfig,
    employer_id: EmployerId,
) -> Result<CsvExport, AppError> {
    let pool = create_pool(database).await?;
    let exporter = CandidateExporter::new(Arc::new(SqliteCandidateRepository::new(pool.clone())));
    let export = exporter.export(employer_id).await;
    pool.close().await;
    Ok(export?)
}

/// Write the document to `output` when given, otherwise to `stdout`. Only CSV bytes reach `stdout`.
pub(crate) fn write_export<W: Write>(
    export: &CsvExport,
    output: Option<&Path>,
    mut stdout: W,
) -> std::io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, &export.body),
        None => {
            stdout.write_all(&export.body)?;
            stdout.flush()
        }
    }
}
