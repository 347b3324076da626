use std::sync::Arc;

use kanal::AsyncSender;
use kelime_core::favorites::{FavoriteToggle, remove_from_favorites, toggle_favorite};
use kelime_core::history::remove_from_history;
use kelime_store::{KEY_FAVORITES, KEY_HISTORY};
use kelime_types::{AppEvent, TranslationItem, View};

use crate::state::AppState;

pub async fn handle_toggle_favorite(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    item: TranslationItem,
) -> anyhow::Result<()> {
    let signal = {
        let mut favorites = state.favorites.write().await;
        let (updated, signal) = toggle_favorite(std::mem::take(&mut *favorites), &item);
        state.store.write(KEY_FAVORITES, &updated);
        *favorites = updated;
        signal
    };

    let message = match signal {
        FavoriteToggle::Added => "Favorilere eklendi.",
        FavoriteToggle::Removed => "Favorilerden kaldırıldı.",
    };
    app_to_ui_tx
        .send(AppEvent::ShowToast(message.to_string()))
        .await?;

    Ok(())
}

pub async fn handle_favorite_last(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let last = state.last_result.read().await.clone();

    match last {
        Some(item) => handle_toggle_favorite(state, app_to_ui_tx, item).await,
        None => {
            app_to_ui_tx
                .send(AppEvent::ShowToast("Önce bir çeviri yapın.".to_string()))
                .await?;
            Ok(())
        }
    }
}

/// Remove an item by id from history or favorites and refresh the list view.
pub async fn handle_remove(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    view: View,
    id: &str,
) -> anyhow::Result<()> {
    let items = match view {
        View::History => {
            let mut history = state.history.write().await;
            let updated = remove_from_history(std::mem::take(&mut *history), id);
            state.store.write(KEY_HISTORY, &updated);
            *history = updated;
            history.clone()
        }
        View::Favorites => {
            let mut favorites = state.favorites.write().await;
            let updated = remove_from_favorites(std::mem::take(&mut *favorites), id);
            state.store.write(KEY_FAVORITES, &updated);
            *favorites = updated;
            favorites.clone()
        }
        _ => return Ok(()),
    };

    app_to_ui_tx.send(AppEvent::ShowItems { view, items }).await?;

    Ok(())
}
