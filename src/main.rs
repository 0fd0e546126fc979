use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use scholar_match::catalog::{
    catalog_router, eligible_candidates, match_score, Category, CatalogService, MemoryCatalog,
    Scholarship, ScholarshipRepository, UserId, UserProfile,
};
use scholar_match::config::AppConfig;
use scholar_match::error::AppError;
use scholar_match::telemetry;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: Arc<PrometheusHandle>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Scholar Match",
    about = "Run the scholarship discovery service or score the demo catalog from the command line",
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
    /// Score the seeded demo catalog against a profile supplied as flags
    Match(MatchArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Highest completed education level (e.g. "Undergraduate")
    #[arg(long)]
    education: String,
    /// CGPA on the 0-10 scale
    #[arg(long)]
    cgpa: Option<f64>,
    /// Annual family income in currency units
    #[arg(long)]
    family_income: Option<u64>,
    /// Reservation category (GEN, OBC, SC, ST, Minority)
    #[arg(long, value_parser = parse_category)]
    category: Option<Category>,
    /// Score every active scholarship instead of only education-level matches
    #[arg(long)]
    all: bool,
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
        Command::Match(args) => run_match(args),
    }
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not one of GEN, OBC, SC, ST, Minority"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(MemoryCatalog::seeded());
    let service = Arc::new(CatalogService::new(catalog.clone(), catalog));

    let app = catalog_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(prometheus_layer)
        .layer(Extension(state));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "scholarship discovery service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        education,
        cgpa,
        family_income,
        category,
        all,
    } = args;

    let profile = UserProfile {
        user_id: UserId(0),
        highest_education: Some(education.clone()),
        cgpa,
        family_income,
        category,
        state: None,
        interests: None,
        gender: None,
        date_of_birth: None,
    };

    let catalog = MemoryCatalog::seeded();
    let records = catalog.active_by_deadline()?;

    let candidates: Vec<&Scholarship> = if all {
        records.iter().collect()
    } else {
        eligible_candidates(&records, &education)
    };

    println!("Scholarship match demo");
    println!(
        "Profile: {} | CGPA {} | income {} | category {}",
        education,
        cgpa.map_or_else(|| "-".to_string(), |value| value.to_string()),
        family_income.map_or_else(|| "-".to_string(), |value| value.to_string()),
        category.map_or("-", Category::label),
    );

    if candidates.is_empty() {
        println!("\nNo scholarships match the declared education level.");
        return Ok(());
    }

    for scholarship in candidates {
        let result = match_score(scholarship, Some(&profile));
        println!(
            "\n{} (deadline {}) -> {}% match",
            scholarship.name, scholarship.deadline, result.score
        );
        for reason in &result.reasons {
            println!("  - {reason}");
        }
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
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

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
