use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use six_cities::infrastructure::{
    AppConfig, CliArgs, KeyringTokenStorage, RentalApiClient, StateConfig, StorageManager,
};
use six_cities::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs, storage: &StorageManager) -> Result<AppConfig> {
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app(config: &AppConfig, args: &CliArgs, state: &StateConfig) -> Result<App> {
    let api_client = Arc::new(RentalApiClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )?);
    let token_storage = Arc::new(KeyringTokenStorage::new());

    let city = config
        .remember_city
        .then(|| state.last_city.clone())
        .flatten();

    Ok(App::new(api_client.clone(), api_client, token_storage, &args.route).with_city(city))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let config = load_config(&args, &storage)?;

    init_logging(&config)?;

    info!(
        version = six_cities::VERSION,
        api = %config.api.base_url,
        "Starting Six Cities"
    );

    let mut state = storage.load_state().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load saved state, starting fresh");
        StateConfig::default()
    });

    let app = create_app(&config, &args, &state)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal, args.token.clone()).await;
    ratatui::restore();

    let city = result?;
    if config.remember_city {
        state.last_city = Some(city);
        if let Err(e) = storage.save_state(&state) {
            warn!(error = %e, "Failed to save state");
        }
    }

    Ok(())
}
