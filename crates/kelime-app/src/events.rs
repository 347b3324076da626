use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kelime_translator::Translator;
use kelime_types::{AppEvent, View};

use crate::state::AppState;

pub mod backup;
pub mod favorite;
pub mod game;
pub mod translate;

use backup::{handle_export, handle_import};
use favorite::{handle_favorite_last, handle_remove, handle_toggle_favorite};
use game::{handle_game_answer, handle_game_start};
use translate::{handle_speak, handle_speak_last, handle_translate};

/// App's main loop: every state mutation happens here, one event at a time.
pub async fn event_loop(
    state: Arc<AppState>,
    translator: Arc<dyn Translator>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!("handling event: {:?}", std::mem::discriminant(&event));
        handle_event(state.clone(), translator.as_ref(), &app_to_ui_tx, event).await?;
    }
}

async fn handle_event(
    state: Arc<AppState>,
    translator: &dyn Translator,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Translate { text, from, to } => {
            handle_translate(state, translator, app_to_ui_tx, text, from, to).await?;
        }
        AppEvent::Speak { text, lang } => {
            handle_speak(translator, app_to_ui_tx, &text, &lang).await?;
        }
        AppEvent::SpeakLastResult => {
            handle_speak_last(state, translator, app_to_ui_tx).await?;
        }
        AppEvent::ToggleFavorite(item) => {
            handle_toggle_favorite(state, app_to_ui_tx, item).await?;
        }
        AppEvent::FavoriteLastResult => {
            handle_favorite_last(state, app_to_ui_tx).await?;
        }
        AppEvent::RemoveFromHistory { id } => {
            handle_remove(state, app_to_ui_tx, View::History, &id).await?;
        }
        AppEvent::RemoveFromFavorites { id } => {
            handle_remove(state, app_to_ui_tx, View::Favorites, &id).await?;
        }
        AppEvent::SetAutoPlay(enabled) => {
            *state.auto_play_audio.write().await = enabled;
            state.store.write(kelime_store::KEY_AUTO_PLAY, &enabled);

            let message = if enabled {
                "Otomatik ses açıldı."
            } else {
                "Otomatik ses kapatıldı."
            };
            app_to_ui_tx
                .send(AppEvent::ShowToast(message.to_string()))
                .await?;
        }
        AppEvent::SetLanguages { from, to } => {
            let mut config = state.config.write().await;
            config.translator.from_lang = from.clone();
            config.translator.to_lang = to.clone();
            drop(config);

            app_to_ui_tx
                .send(AppEvent::ShowToast(format!("Dil çifti: {from} -> {to}")))
                .await?;
        }
        AppEvent::ExportData { path } => {
            handle_export(state, app_to_ui_tx, path).await?;
        }
        AppEvent::ImportData { path } => {
            handle_import(state, app_to_ui_tx, &path).await?;
        }
        AppEvent::SwitchView(view) => {
            handle_switch_view(state, app_to_ui_tx, view).await?;
        }
        AppEvent::StartGame => {
            handle_game_start(state, app_to_ui_tx).await?;
        }
        AppEvent::GameAnswer { known } => {
            handle_game_answer(state, app_to_ui_tx, known).await?;
        }

        // app -> ui events are not expected on this channel
        other => {
            tracing::warn!("unexpected event on ui->app channel: {:?}", other);
        }
    }

    Ok(())
}

async fn handle_switch_view(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    view: View,
) -> anyhow::Result<()> {
    {
        let mut current = state.current_view.write().await;

        // Leaving the game discards the in-progress session.
        if *current == View::Game && view != View::Game {
            if state.game.write().await.take().is_some() {
                tracing::info!("game session abandoned");
            }
        }

        *current = view;
    }

    match view {
        View::Favorites => {
            let items = state.favorites.read().await.clone();
            app_to_ui_tx.send(AppEvent::ShowItems { view, items }).await?;
        }
        View::History => {
            let items = state.history.read().await.clone();
            app_to_ui_tx.send(AppEvent::ShowItems { view, items }).await?;
        }
        View::Settings => {
            let auto = *state.auto_play_audio.read().await;
            let config = state.config.read().await;
            app_to_ui_tx
                .send(AppEvent::ShowToast(format!(
                    "Ayarlar: otomatik ses {} | diller {} -> {}",
                    if auto { "açık" } else { "kapalı" },
                    config.translator.from_lang,
                    config.translator.to_lang
                )))
                .await?;
        }
        _ => {}
    }

    Ok(())
}
