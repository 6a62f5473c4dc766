use campus_portal::{
    AppState,
    bootstrap,
    config::{AppConfig, Env},
    create_router,
    repository::{InMemoryRepository, RepositoryState},
    sessions::{InMemorySessionStore, SessionState},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the application, responsible for
/// initializing all core components: Configuration, Logging, Persistence,
/// Sessions, Seeding, and the HTTP Server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    // AppConfig::load() implements the fail-fast principle for missing
    // Production secrets.
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Sets the default log level. It prioritizes the RUST_LOG environment
    // variable, falling back to sensible defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "campus_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    // The structured logging format is dynamically selected based on APP_ENV.
    match config.env {
        Env::Local => {
            // LOCAL: Pretty print output for human readability during local
            // debugging.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON format output for ingestion by centralized log
            // aggregators. Essential for monitoring.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Persistence Initialization
    // Instantiate the Repository, wrapping it in an Arc for thread-safe
    // sharing behind the trait object.
    let repo = Arc::new(InMemoryRepository::new()) as RepositoryState;

    // 5. Session Store Initialization
    // Server-side session table with the configured TTL.
    let sessions =
        Arc::new(InMemorySessionStore::new(config.session_ttl_secs)) as SessionState;

    // 6. Base Admin Seeding
    // Guarantees at least one administrative identity exists before the
    // server accepts traffic. Idempotent across restarts.
    if let Err(err) = bootstrap::seed_base_admin(repo.as_ref(), &config).await {
        tracing::error!(error = %err, "FATAL: base admin seeding failed");
        std::process::exit(1);
    }

    let bind_addr = config.bind_addr.clone();

    // 7. Unified State Assembly
    // Bundles all initialized dependencies into the shared AppState.
    let app_state = AppState {
        repo,
        sessions,
        config,
    };

    // 8. Router and Server Startup
    let app = create_router(app_state);

    // Binds the TCP listener and initiates the HTTP server.
    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|err| panic!("FATAL: failed to bind {bind_addr}: {err}"));

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on {bind_addr}");
    tracing::info!("API Documentation (Swagger UI) available at: /swagger-ui");

    // The long-running Axum server process.
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|err| panic!("FATAL: server error: {err}"));
}
