//! Milk Button Sender - Entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use milkbutton_sender::{api, App, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env files (.env.local overrides .env)
    let _ = dotenvy::from_filename(".env.local");
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "milkbutton_sender=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Milk Button Sender");

    let settings = Settings::from_env();
    tracing::info!(config = %settings.config_path.display(), "Loaded settings");

    let app = Arc::new(App::from_settings(&settings));

    // Reconcile before accepting triggers
    if let Err(e) = app.startup.run().await {
        tracing::warn!(error = %e, "Startup reconciliation could not save config");
    }

    let router = api::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(app);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
