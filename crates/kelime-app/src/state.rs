use std::sync::Arc;

use kelime_config::Config;
use kelime_core::game::GameSession;
use kelime_store::{KEY_AUTO_PLAY, KEY_FAVORITES, KEY_HISTORY, Store};
use kelime_types::{TranslationItem, View};
use tokio::sync::RwLock;

/// All mutable application state. The event loop is the only writer; views
/// observe it through app→ui events.
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub store: Store,
    pub history: RwLock<Vec<TranslationItem>>,
    pub favorites: RwLock<Vec<TranslationItem>>,
    pub auto_play_audio: RwLock<bool>,
    pub current_view: RwLock<View>,
    pub game: RwLock<Option<GameSession>>,
    /// Most recent translation, target of `:star` and `:play`.
    pub last_result: RwLock<Option<TranslationItem>>,
}

impl AppState {
    /// Open the store and hydrate every persisted slice, falling back to
    /// defaults when a key is missing or unreadable.
    pub fn new(config: Config) -> Self {
        let store = Store::open(config.storage.data_dir.clone());

        let history: Vec<TranslationItem> = store.read(KEY_HISTORY, Vec::new());
        let favorites: Vec<TranslationItem> = store.read(KEY_FAVORITES, Vec::new());
        let auto_play_audio: bool = store.read(KEY_AUTO_PLAY, false);

        tracing::info!(
            "loaded state: {} history, {} favorites, auto_play={}",
            history.len(),
            favorites.len(),
            auto_play_audio
        );

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            history: RwLock::new(history),
            favorites: RwLock::new(favorites),
            auto_play_audio: RwLock::new(auto_play_audio),
            current_view: RwLock::new(View::Translate),
            game: RwLock::new(None),
            last_result: RwLock::new(None),
        }
    }
}
