//! Staff console binary.
//!
//! Built with `--features web` or `--features desktop` this launches the UI.
//! Without a renderer it only loads and reports the configuration, which is
//! enough to check a deployment's settings.

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // The desktop launcher may install its own logger; first one wins
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staff_console=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(any(feature = "web", feature = "desktop"))]
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    tracing::info!("Starting staff console");
    dioxus::launch(staff_console::app::App);
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    let config = staff_console::config::load_config()?;
    tracing::info!(?config, "Configuration loaded");
    tracing::warn!("Built without a renderer; enable the `web` or `desktop` feature to run the UI");
    Ok(())
}
