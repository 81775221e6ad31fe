use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use ward_core::config::{listen_addr, patient_data_dir_from_env_value, port_from_env_value};
use ward_core::{CoreConfig, DocumentStore};

/// Main entry point for the Ward application
///
/// Opens the document store and serves the REST API.
///
/// # Environment Variables
/// - `PATIENT_DATA_DIR`: Directory for patient data storage (default: "patient_data"), created
///   if absent
/// - `PORT`: Listen port (default: 8000)
/// - `WARD_HOST`: Listen host (default: "0.0.0.0")
///
/// # Errors
/// Returns an error if:
/// - the logging configuration cannot be initialised,
/// - `PORT` is not a valid port number,
/// - the data directory cannot be created,
/// - the address cannot be bound or the server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ward_run=info".parse()?)
                .add_directive("ward_core=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let patient_data_dir = patient_data_dir_from_env_value(std::env::var("PATIENT_DATA_DIR").ok());
    let port = port_from_env_value(std::env::var("PORT").ok())?;
    let addr = listen_addr(std::env::var("WARD_HOST").ok(), port);

    let cfg = CoreConfig::new(patient_data_dir)?;
    let store = Arc::new(DocumentStore::open(&cfg)?);
    tracing::info!("++ Patient data in {}", store.root().display());

    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("++ Starting Ward REST API on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
