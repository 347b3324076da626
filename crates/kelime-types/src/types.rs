use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One meaning group of a translated word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub translations: Vec<String>,
}

/// Structured result of one translation call. Not persisted as such;
/// a `TranslationItem` is derived from it before it reaches history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedTranslationResult {
    /// Phonetic pronunciation of the source word. Empty for phrases.
    pub pronunciation: String,
    pub meanings: Vec<Meaning>,
}

impl DetailedTranslationResult {
    /// The most common translation: first entry of the first meaning group.
    pub fn primary_translation(&self) -> Option<&str> {
        self.meanings
            .first()
            .and_then(|m| m.translations.first())
            .map(String::as_str)
    }
}

/// A saved translation record. Field names stay camelCase on the wire so
/// backup files round-trip with the original export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationItem {
    /// Creation timestamp string; imported ids are kept verbatim.
    pub id: String,
    pub from_text: String,
    pub to_text: String,
    pub source_lang: String,
    pub target_lang: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl TranslationItem {
    pub fn new(
        from_text: String,
        to_text: String,
        source_lang: String,
        target_lang: String,
        result: &DetailedTranslationResult,
    ) -> Self {
        Self {
            id: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            from_text,
            to_text,
            source_lang,
            target_lang,
            pronunciation: result.pronunciation.clone(),
            meanings: result.meanings.clone(),
        }
    }
}

/// Outcome of one flashcard during a game session. `known == None` means
/// the card was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub item: TranslationItem,
    pub known: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Translate,
    Favorites,
    History,
    Settings,
    Game,
    GameAnalysis,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // ui -> app
    Translate {
        text: String,
        from: String,
        to: String,
    },
    Speak {
        text: String,
        lang: String,
    },
    ToggleFavorite(TranslationItem),
    /// Toggle the most recent translation result into/out of favorites.
    FavoriteLastResult,
    /// Replay audio for the most recent translation's source text.
    SpeakLastResult,
    RemoveFromHistory {
        id: String,
    },
    RemoveFromFavorites {
        id: String,
    },
    SetAutoPlay(bool),
    SetLanguages {
        from: String,
        to: String,
    },
    ExportData {
        path: Option<String>,
    },
    ImportData {
        path: String,
    },
    SwitchView(View),
    StartGame,
    GameAnswer {
        known: Option<bool>,
    },

    // app -> ui
    ShowTranslation(TranslationItem),
    ShowItems {
        view: View,
        items: Vec<TranslationItem>,
    },
    ShowToast(String),
    ShowGamePrompt {
        item: TranslationItem,
        position: usize,
        total: usize,
    },
    ShowAnalysis(Vec<GameResult>),
    PlayAudio {
        /// Base64-encoded audio payload from the TTS call.
        data: String,
    },
    BackendReady,
}
