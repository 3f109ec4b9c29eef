use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cosplay_api::config::ServerConfig;
use cosplay_api::router::build_app_router;
use cosplay_api::state::AppState;
use cosplay_db::PgAccountLookup;
use cosplay_marketplace::{MarketplaceApi, MarketplaceConfig, ProductSearchCascade};
use cosplay_oracle::{GeminiConfig, GeminiOracle};
use cosplay_pipeline::SuggestionAssembler;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cosplay_api=debug,cosplay_pipeline=debug,cosplay_marketplace=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = cosplay_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    cosplay_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    cosplay_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Oracle ---
    let oracle = GeminiOracle::new(GeminiConfig::from_env()).expect("Failed to build Gemini client");
    let oracle_model = oracle.model().to_string();
    tracing::info!(model = %oracle_model, "Oracle client ready");

    // --- Marketplace ---
    let marketplace =
        MarketplaceApi::new(MarketplaceConfig::from_env()).expect("Failed to build marketplace client");
    tracing::info!(
        base_url = %marketplace.config().base_url,
        platform = %marketplace.config().platform,
        "Marketplace client ready"
    );

    // --- Pipeline ---
    let assembler = SuggestionAssembler::new(
        Arc::new(oracle),
        Arc::new(ProductSearchCascade::from_api(marketplace)),
        Arc::new(PgAccountLookup::new(pool)),
    );

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        assembler: Arc::new(assembler),
        oracle_model,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
