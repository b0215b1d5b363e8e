use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use idealdog::config::{CatalogSource, LoggingSettings, Settings};
use idealdog::core::Matcher;
use idealdog::models::MatchConfig;
use idealdog::routes::{self, AppState};
use idealdog::services::{BreedCatalog, MemoryCatalog, PostgresCatalog};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging is configured from the settings, so nothing is initialized yet
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(&settings.logging);

    info!("Starting idealdog breed matching service...");

    if let Err(e) = settings.matching.validate() {
        error!("Invalid matching configuration: {}", e);
        return Err(std::io::Error::other(format!("Configuration error: {}", e)));
    }

    info!("Configuration loaded successfully");

    let catalog: Arc<dyn BreedCatalog> = match settings.catalog.source {
        CatalogSource::Postgres => {
            let db = &settings.database;
            let catalog = PostgresCatalog::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::other(format!("PostgreSQL connection error: {}", e))
            })?;

            info!(
                "PostgreSQL catalog initialized (max: {} connections)",
                db.max_connections.unwrap_or(10)
            );
            Arc::new(catalog)
        }
        CatalogSource::File => {
            let path = settings.catalog.path.as_deref().unwrap_or("data/breeds.toml");
            let catalog = MemoryCatalog::from_file(path).map_err(|e| {
                error!("Failed to load breed catalog from {}: {}", path, e);
                std::io::Error::other(format!("Catalog error: {}", e))
            })?;

            info!("File catalog initialized ({} breeds)", catalog.len());
            Arc::new(catalog)
        }
    };

    let config = MatchConfig::from(&settings.matching);
    let matcher = Matcher::new(config);

    info!("Matcher initialized with config: {:?}", config);

    // Build application state
    let app_state = AppState { catalog, matcher };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
