use anyhow::Result;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use readmissions_api::{config::Config, db::create_pool, web};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("readmissions_api=info,tower_http=debug")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!("Starting readmissions risk score API");

    let config = Config::from_env()?;
    let bind_address = config.bind_address();

    info!("Connecting to database...");
    let db = create_pool(&config.database_url(), config.pool_size).await?;
    info!("Database connection established and migrations applied");

    let app = web::create_app_router(db.clone(), config)
        .layer(
            // The wildcard origin cannot be combined with credentials, so
            // the permissive policy mirrors the request origin instead.
            CorsLayer::very_permissive(),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    info!("Server starting on {}", bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // In-flight requests have drained; release the pool before exit.
    db.close().await;
    info!("Connection pool closed");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
