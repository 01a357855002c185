//! Server: loads settings, prepares the database, serves the registry routes.

use customer_registry::{app, connect_pool, ensure_database_exists, ensure_tables, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("customer_registry=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.auto_migrate {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = connect_pool(&settings).await?;
    if settings.auto_migrate {
        ensure_tables(&pool).await?;
    }

    let router = app(AppState::new(pool), settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
