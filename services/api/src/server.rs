use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryFavoritesStore, InMemoryPropertyRepository};
use crate::routes::with_advisor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use estate_advisor::config::AppConfig;
use estate_advisor::error::AppError;
use estate_advisor::listings::{ListingImporter, ListingService};
use estate_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let properties = Arc::new(InMemoryPropertyRepository::default());
    let favorites = Arc::new(InMemoryFavoritesStore::default());
    match &config.data.listings_csv {
        Some(path) => {
            let listings = ListingImporter::from_path(path)?;
            let seeded = ListingImporter::seed(properties.as_ref(), listings)?;
            info!(seeded, path = %path.display(), "listing repository seeded");
        }
        None => warn!("APP_LISTINGS_CSV not set; serving an empty listing repository"),
    }
    let listing_service = Arc::new(ListingService::new(properties, favorites));

    let app = with_advisor_routes(listing_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "estate advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
