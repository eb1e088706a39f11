//! Server entry point: load settings, connect the database, create tables, serve.

use storefront_api::{app, apply_migrations, AppState, DatabaseHelper, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("storefront_api=info,tower_http=info"));
    if settings.db_echo {
        filter = filter.add_directive("sqlx::query=debug".parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = DatabaseHelper::connect(&settings).await?;
    apply_migrations(db.pool(), db.backend()).await?;

    let state = AppState::new(db.clone());
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;
    db.close().await;
    Ok(())
}
