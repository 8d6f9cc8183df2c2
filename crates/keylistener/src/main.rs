//! Milk Button Key Listener - main entry point.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use milkbutton_domain::Debouncer;
use milkbutton_keylistener::event_loop;
use milkbutton_keylistener::input::{key_downs, open_key_devices};
use milkbutton_keylistener::trigger::TriggerForwarder;
use milkbutton_keylistener::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "milkbutton_keylistener=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();

    let devices = match open_key_devices(&settings.input_dir) {
        Ok(devices) => devices,
        Err(e) => {
            tracing::error!(error = %e, "No input to listen to");
            return Ok(ExitCode::FAILURE);
        }
    };

    let trigger = TriggerForwarder::new(&settings.sender_url, settings.trigger_timeout);
    tracing::info!(
        devices = devices.len(),
        debounce_secs = settings.debounce.as_secs_f64(),
        sender = trigger.url(),
        "Listening for button presses"
    );

    let stats = event_loop::run(
        key_downs(devices),
        Debouncer::new(settings.debounce),
        &trigger,
    )
    .await;

    // every device stream has ended
    tracing::error!(
        presses = stats.presses,
        triggers = stats.triggers,
        "All input devices lost"
    );
    Ok(ExitCode::FAILURE)
}
