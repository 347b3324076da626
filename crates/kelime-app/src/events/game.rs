use std::sync::Arc;

use kanal::AsyncSender;
use kelime_core::game::{GameProgress, GameSession};
use kelime_types::{AppEvent, View};

use crate::state::AppState;

pub async fn handle_game_start(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let favorites = state.favorites.read().await.clone();

    let session = match GameSession::new(&favorites) {
        Ok(session) => session,
        Err(e) => {
            tracing::info!("game not started: {}", e);
            app_to_ui_tx
                .send(AppEvent::ShowToast(
                    "Oyun için önce favorilere kelime eklemelisin.".to_string(),
                ))
                .await?;
            return Ok(());
        }
    };

    *state.current_view.write().await = View::Game;

    let prompt = prompt_event(&session);
    *state.game.write().await = Some(session);

    if let Some(event) = prompt {
        app_to_ui_tx.send(event).await?;
    }

    Ok(())
}

pub async fn handle_game_answer(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    known: Option<bool>,
) -> anyhow::Result<()> {
    let mut game = state.game.write().await;

    let Some(session) = game.as_mut() else {
        app_to_ui_tx
            .send(AppEvent::ShowToast("Aktif bir oyun yok.".to_string()))
            .await?;
        return Ok(());
    };

    let progress = match known {
        Some(known) => session.answer(known),
        None => session.skip(),
    };

    match progress {
        GameProgress::Next => {
            let prompt = prompt_event(session);
            drop(game);

            if let Some(event) = prompt {
                app_to_ui_tx.send(event).await?;
            }
        }
        GameProgress::Finished => {
            let results = game.take().map(GameSession::into_results).unwrap_or_default();
            drop(game);

            *state.current_view.write().await = View::GameAnalysis;
            app_to_ui_tx.send(AppEvent::ShowAnalysis(results)).await?;
        }
    }

    Ok(())
}

fn prompt_event(session: &GameSession) -> Option<AppEvent> {
    session.current().map(|item| AppEvent::ShowGamePrompt {
        item: item.clone(),
        position: session.position() + 1,
        total: session.total(),
    })
}
