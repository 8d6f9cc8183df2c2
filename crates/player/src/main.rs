//! Milk Button Player - main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use milkbutton_player::infrastructure::mdns::Advertisement;
use milkbutton_player::{api, App, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "milkbutton_player=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Milk Button Player");

    let settings = Settings::from_env();
    tracing::info!(
        audio_dir = %settings.audio_dir.display(),
        config = %settings.config_path().display(),
        decoder = %settings.decoder,
        "Player configured"
    );

    let app = Arc::new(App::from_settings(&settings));

    // Held for the life of the process; dropping it withdraws the advertisement.
    let _advertisement = if settings.advertise {
        match Advertisement::register(&settings.instance_name, settings.port) {
            Ok(advertisement) => Some(advertisement),
            Err(e) => {
                tracing::warn!(error = %e, "mDNS advertisement unavailable, senders need an explicit server address");
                None
            }
        }
    } else {
        None
    };

    let router = api::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
