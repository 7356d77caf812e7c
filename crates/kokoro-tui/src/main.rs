mod action;
mod app;
mod app_state;
mod component;
mod components;
mod focus;
mod frontend;
mod preview;
mod reveal;
mod theme;
mod widgets;

use std::sync::Arc;

use kokoro_proto::client::HttpClient;
use kokoro_proto::config::Config;
use kokoro_proto::journal::JournalStore;
use kokoro_proto::orchestrator::Orchestrator;
use kokoro_proto::storage::LocalStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = kokoro_proto::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = data_dir.join("kokoro.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; keep connection-level chatter from the HTTP
    // client out of the default filter.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // The terminal belongs to the UI; print the log path before it takes over.
    eprintln!("kokoro log: {}", log_path.display());

    tracing::info!("kokoro starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let config = Config::load().unwrap_or_default();
    tracing::info!(
        "services: chat={} predict={}",
        config.services.chat_url,
        config.services.predict_url
    );

    // ── Core ─────────────────────────────────────────────────────────────────
    let client = HttpClient::new(&config.services)?;
    let emergency_target = config.emergency.resolve().display().to_string();
    let orchestrator = Arc::new(Orchestrator::new(client, emergency_target));
    let journal = JournalStore::new(LocalStorage::new(config.paths.storage_dir.clone()));

    // ── Run TUI ──────────────────────────────────────────────────────────────
    let app = app::App::new(&config, orchestrator, journal);
    app.run().await?;

    Ok(())
}
