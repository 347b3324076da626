use std::sync::Arc;

use kelime_config::Config;
use kelime_translator::{GeminiClient, Translator};
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use controller::AppController;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let config = Config::new();

    if config.translator.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; translation calls will fail");
    }

    let translator: Arc<dyn Translator> = Arc::new(GeminiClient::new(
        config.translator.api_key.clone(),
        config.translator.api_url.clone(),
        config.translator.text_model.clone(),
        config.translator.tts_model.clone(),
    ));

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);

    let mut tasks = controller.spawn_tasks(translator);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    Ok(())
}
