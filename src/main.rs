use skyvault::{AppConfig, SkyVault, VaultError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), VaultError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyvault=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();
    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    info!(title = %config.title, "Starting SkyVault");

    let options = config.native_options();
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc: &eframe::CreationContext<'_>| {
            Box::new(SkyVault::new(cc, config, handle))
        }),
    )?;

    info!("SkyVault closed");
    Ok(())
}
