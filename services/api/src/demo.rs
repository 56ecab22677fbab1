use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use job_board::candidates::{
    Application, CandidateExporter, EmployerId, JobPosting, SqliteCandidateRepository,
};
use job_board::config::DatabaseConfig;
use job_board::db::{bootstrap_schema, create_pool};
use job_board::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Employer to export from the seeded data (7 and 8 have postings)
    #[arg(long, default_value_t = 7)]
    pub(crate) employer_id: i64,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = seed_demo_repository().await?;
    let exporter = CandidateExporter::new(Arc::new(repository));
    let export = exporter.export(EmployerId(args.employer_id)).await?;

    println!("Candidate export demo");
    println!(
        "Employer {}: {} application(s) -> {} ({})",
        args.employer_id, export.row_count, export.filename, export.content_type
    );
    println!("{}", export.content_disposition());
    println!();
    print!("{}", String::from_utf8_lossy(&export.body));

    Ok(())
}

fn demo_timestamp(month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, month, day).and_then(|date| date.and_hms_opt(hour, minute, 0))
}

/// In-memory store with two employers and a mix of complete and sparse applications.
pub(crate) async fn seed_demo_repository() -> Result<SqliteCandidateRepository, AppError> {
    let pool = create_pool(&DatabaseConfig::in_memory()).await?;
    bootstrap_schema(&pool).await?;
    let repository = SqliteCandidateRepository::new(pool);

    let postings = [
        (1, "Backend Engineer", 7),
        (2, "Product Designer", 7),
        (3, "Support Specialist", 8),
    ];
    for (id, title, employer) in postings {
        repository
            .insert_job(&JobPosting {
                id,
                title: title.to_string(),
                employer_id: EmployerId(employer),
            })
            .await
            .map_err(demo_error)?;
    }

    let applications = [
        Application {
            id: 42,
            job_id: 1,
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            education: None,
            experience: None,
            skills: None,
            status: None,
            created_at: demo_timestamp(1, 15, 10, 30),
            resume_path: None,
        },
        Application {
            id: 43,
            job_id: 2,
            full_name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: Some("+1 555 0142".to_string()),
            education: Some("PhD, Mathematics".to_string()),
            experience: Some("Compiler design\nFleet operations".to_string()),
            skills: Some("COBOL, \"debugging\"".to_string()),
            status: Some("Shortlisted".to_string()),
            created_at: demo_timestamp(2, 3, 14, 5),
            resume_path: Some("uploads/resumes/43-grace.pdf".to_string()),
        },
        Application {
            id: 44,
            job_id: 3,
            full_name: "Alan Turing".to_string(),
            email: "alan@example.com".to_string(),
            phone: None,
            education: Some("King's College".to_string()),
            experience: None,
            skills: Some("Cryptanalysis".to_string()),
            status: None,
            created_at: None,
            resume_path: None,
        },
    ];
    for application in &applications {
        repository
            .insert_application(application)
            .await
            .map_err(demo_error)?;
    }

    Ok(repository)
}

fn demo_error(err: job_board::candidates::RepositoryError) -> AppError {
    AppError::Export(err.into())
}
