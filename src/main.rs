//! Coastal Sentinel server.
//!
//! Loads configuration, wires the adapters into the application handlers and
//! serves the HTTP API until Ctrl-C.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use coastal_sentinel::adapters::http::{app_router, ReportsAppState, WizardAppState};
use coastal_sentinel::adapters::{
    ClientGeolocationProvider, FixedGeolocationProvider, InMemoryReportStore,
    InMemoryWizardRepository, NominatimGeocoder, SimulatedSubmissionSink,
};
use coastal_sentinel::config::AppConfig;
use coastal_sentinel::domain::foundation::Timestamp;
use coastal_sentinel::domain::hazard::HazardCatalog;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config)?;
    config.validate()?;

    let app = build_app(&config)?;
    let addr = config.server.socket_addr()?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        submission_delay_ms = config.submission.delay_ms,
        "Starting coastal-sentinel"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    if config.server.log_json || config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Ok(())
}

fn build_app(config: &AppConfig) -> Result<Router, BoxError> {
    let reports = if config.submission.seed_samples {
        InMemoryReportStore::with_sample_reports(&Timestamp::now())
    } else {
        InMemoryReportStore::new()
    };

    let fallback = FixedGeolocationProvider::from_option(config.location.fallback_position()?);
    let geolocation = ClientGeolocationProvider::new().with_fallback(Arc::new(fallback));
    let geocoder = NominatimGeocoder::new(config.location.nominatim_config())?;
    let sink = SimulatedSubmissionSink::new(reports.clone()).with_delay(config.submission.delay());

    let wizard_state = WizardAppState {
        repository: Arc::new(InMemoryWizardRepository::new()),
        geolocation: Arc::new(geolocation),
        geocoder: Arc::new(geocoder),
        sink: Arc::new(sink),
        geolocation_options: config.location.geolocation_options(),
        catalog: HazardCatalog::standard(),
        submission_lease: config.submission.attempt_lease(),
        photo_body_limit: config.server.photo_body_limit_bytes,
    };
    let reports_state = ReportsAppState {
        reader: Arc::new(reports),
    };

    Ok(app_router(wizard_state, reports_state)
        .layer(cors_layer(&config.server.cors_origins_list()))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
