//! admission-census: per-hospital patient counts over the admissions API

mod census;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use admission_client::{AdmissionsClient, Config};
use admission_core::LoginRequest;

use census::CensusReport;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    let census_taker = LoginRequest::new(
        &std::env::var("CENSUS_TAKER_EMAIL")
            .unwrap_or_else(|_| "census@dsh.ca.gov".into()),
    );

    tracing::info!("Conducting census against {}", config.base_url);

    let mut client = AdmissionsClient::from_config(&config);
    if let Err(e) = client.authenticate_as(&census_taker).await {
        tracing::error!("Failed to authenticate with the admissions service: {e}");
        std::process::exit(1);
    }

    match client.list_hospitals().await {
        Ok(hospitals) => {
            let report = CensusReport::tally(&hospitals);
            tracing::info!("Census covered {} patients", report.total_patients());
            println!("{report}");
        }
        Err(e) => {
            tracing::error!("Failed to conduct census: {e}");
            std::process::exit(1);
        }
    }
}
