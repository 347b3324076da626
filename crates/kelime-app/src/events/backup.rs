use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use kanal::AsyncSender;
use kelime_core::backup::Backup;
use kelime_store::{KEY_AUTO_PLAY, KEY_FAVORITES, KEY_HISTORY};
use kelime_types::AppEvent;

use crate::state::AppState;

/// Write a dated backup file. `path` overrides the default location
/// (the store directory) when given.
pub async fn handle_export(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    path: Option<String>,
) -> anyhow::Result<()> {
    let backup = Backup {
        favorites: state.favorites.read().await.clone(),
        history: state.history.read().await.clone(),
        auto_play_audio: *state.auto_play_audio.read().await,
    };

    let target = match path {
        Some(path) => PathBuf::from(path),
        None => state
            .store
            .dir()
            .join(Backup::file_name(Utc::now().date_naive())),
    };

    let outcome = backup
        .to_json()
        .map_err(anyhow::Error::from)
        .and_then(|json| std::fs::write(&target, json).map_err(anyhow::Error::from));

    match outcome {
        Ok(()) => {
            tracing::info!("exported backup to {}", target.display());
            app_to_ui_tx
                .send(AppEvent::ShowToast(format!(
                    "Veriler dışa aktarıldı! ({})",
                    target.display()
                )))
                .await?;
        }
        Err(e) => {
            tracing::error!("export failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::ShowToast(
                    "Veriler dışa aktarılamadı.".to_string(),
                ))
                .await?;
        }
    }

    Ok(())
}

/// Import a backup file, replacing all three state slices wholesale.
/// A file that does not validate leaves existing state untouched.
pub async fn handle_import(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    path: &str,
) -> anyhow::Result<()> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("import read failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::ShowToast(
                    "Veri dosyası okunurken hata oluştu.".to_string(),
                ))
                .await?;
            return Ok(());
        }
    };

    let backup = match Backup::from_json(&data) {
        Ok(backup) => backup,
        Err(e) => {
            tracing::warn!("import rejected: {}", e);
            app_to_ui_tx
                .send(AppEvent::ShowToast("Geçersiz veri dosyası.".to_string()))
                .await?;
            return Ok(());
        }
    };

    {
        let mut favorites = state.favorites.write().await;
        state.store.write(KEY_FAVORITES, &backup.favorites);
        *favorites = backup.favorites;
    }
    {
        let mut history = state.history.write().await;
        state.store.write(KEY_HISTORY, &backup.history);
        *history = backup.history;
    }
    {
        let mut auto = state.auto_play_audio.write().await;
        state.store.write(KEY_AUTO_PLAY, &backup.auto_play_audio);
        *auto = backup.auto_play_audio;
    }

    app_to_ui_tx
        .send(AppEvent::ShowToast(
            "Veriler başarıyla içe aktarıldı!".to_string(),
        ))
        .await?;

    Ok(())
}
