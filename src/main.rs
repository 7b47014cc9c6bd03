//! Station Configuration Client
//!
//! Admin console for configuring network radios and their stations.

use station_configuration_client::app::App;

#[cfg(feature = "server")]
fn main() -> anyhow::Result<()> {
    use station_configuration_client::{config, settings};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "station_configuration_client=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Station Configuration Client");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    if config.api_host.is_empty() {
        tracing::info!("No API host configured, using same-origin requests");
    } else if !config.api_host_is_absolute() {
        tracing::warn!(api_host = %config.api_host, "API host is not an absolute URL");
    }
    settings::init_api_host(config.api_host.clone());
    tracing::info!(prefix = %settings::endpoints().prefix(), "API prefix set");

    // PORT is read by the dioxus server when serving
    std::env::set_var("PORT", config.port.to_string());

    dioxus::launch(App);
    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
