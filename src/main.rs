use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use jobtrack::config::AppConfig;
use jobtrack::error::AppError;
use jobtrack::telemetry;
use jobtrack::tracker::{
    import, sample, tracker_router, ApplicationRecord, InterviewRecord, MemoryStore, OwnerId,
    ReminderDigest, TrackerService, TrackerStats,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "jobtrack",
    about = "Derive interview reminders and summary statistics for job-application tracking",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the reminder digest and statistics for a dataset
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Optional CSV export of applications to seed the in-memory store
    #[arg(long)]
    applications_csv: Option<PathBuf>,
    /// Optional CSV export of interviews to seed the in-memory store
    #[arg(long)]
    interviews_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Reference instant for bucketing (YYYY-MM-DDThh:mm:ss, defaults to now)
    #[arg(long, value_parser = parse_datetime_arg)]
    now: Option<NaiveDateTime>,
    /// Optional CSV export of applications (sample data when omitted)
    #[arg(long)]
    applications_csv: Option<PathBuf>,
    /// Optional CSV export of interviews (sample data when omitted)
    #[arg(long)]
    interviews_csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Report(args) => run_report(args),
    }
}

fn parse_datetime_arg(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M:%S")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DDThh:mm:ss ({err})"))
}

const DEFAULT_OWNER: OwnerId = OwnerId(1);

fn load_records(
    applications_csv: Option<PathBuf>,
    interviews_csv: Option<PathBuf>,
    owner: OwnerId,
    now: NaiveDateTime,
) -> Result<(Vec<ApplicationRecord>, Vec<InterviewRecord>), AppError> {
    match (applications_csv, interviews_csv) {
        (None, None) => Ok(sample::records(owner, now)),
        (applications, interviews) => {
            let applications = match applications {
                Some(path) => import::applications_from_path(&path, owner)?,
                None => Vec::new(),
            };
            let interviews = match interviews {
                Some(path) => import::interviews_from_path(&path)?,
                None => Vec::new(),
            };
            Ok((applications, interviews))
        }
    }
}

async fn run_server(args: ServeArgs) -> Result<(), AppError> {
    let config = AppConfig::load_with(args.host.as_deref(), args.port)?;

    telemetry::init(&config.telemetry)?;

    let now = Local::now().naive_local();
    let owner = config.seed_owner;
    let (applications, interviews) =
        load_records(args.applications_csv, args.interviews_csv, owner, now)?;
    let store = Arc::new(MemoryStore::seed(applications, interviews));
    let service = Arc::new(TrackerService::new(store));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(tracker_router(service))
        .layer(prometheus_layer);

    let addr = config.server.addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%addr, owner = owner.0, "serving reminder and stats endpoints");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        now,
        applications_csv,
        interviews_csv,
    } = args;

    let now = now.unwrap_or_else(|| Local::now().naive_local());
    let imported = applications_csv.is_some() || interviews_csv.is_some();
    let (applications, interviews) =
        load_records(applications_csv, interviews_csv, DEFAULT_OWNER, now)?;

    let store = Arc::new(MemoryStore::seed(applications, interviews));
    let service = TrackerService::new(store);
    let digest = service.reminders(DEFAULT_OWNER, now)?;
    let stats = service.stats(DEFAULT_OWNER, now)?;

    render_report(&digest, &stats, now, imported);
    Ok(())
}

fn render_report(
    digest: &ReminderDigest,
    stats: &TrackerStats,
    now: NaiveDateTime,
    imported: bool,
) {
    println!("Job-application tracker report");
    println!("Evaluated at {now}");

    if imported {
        println!("Data source: CSV import");
    } else {
        println!("Data source: built-in sample dataset");
    }

    match digest.login_reminder() {
        Some(message) => println!("\n{message}"),
        None => println!("\nNo interviews today or tomorrow"),
    }

    for (label, bucket) in [
        ("Today", &digest.today),
        ("Tomorrow", &digest.tomorrow),
        ("This week", &digest.this_week),
    ] {
        if bucket.is_empty() {
            println!("\n{label}: none");
            continue;
        }

        println!("\n{label}");
        for entry in bucket {
            let interviewer_note = match &entry.interviewer_name {
                Some(name) => format!(" with {name}"),
                None => String::new(),
            };
            println!(
                "- {} | {} @ {} | {}{}",
                entry.scheduled_at, entry.application_name, entry.company, entry.type_label,
                interviewer_note
            );
        }
    }

    if digest.skipped_orphans > 0 {
        println!(
            "\nSkipped {} interview(s) with unresolvable applications",
            digest.skipped_orphans
        );
    }

    println!("\nPipeline");
    println!(
        "- {} application(s): {} waiting, {} interview, {} rejected, {} other",
        stats.total, stats.waiting, stats.interview, stats.rejected, stats.other
    );
    println!("- Conversion rate: {}%", stats.conversion_rate);

    if let Some(company) = &stats.top_company {
        println!("- Top company: {} ({} applications)", company.name, company.count);
    }
    if let Some(month) = &stats.most_active_month {
        println!("- Most active month: {} ({} applications)", month.month, month.count);
    }
    if let Some(earliest) = stats.earliest_application {
        println!("- Tracking since {} ({} days)", earliest, stats.days_in_use);
    }
    if let Some(latest) = stats.latest_completed_interview {
        println!("- Last completed interview: {latest}");
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
