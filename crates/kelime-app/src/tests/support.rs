use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use kelime_config::Config;
use kelime_translator::{TranslateError, Translator};
use kelime_types::{AppEvent, DetailedTranslationResult, Meaning, TranslationItem};
use tokio::time::timeout;

use crate::events::event_loop;
use crate::state::AppState;

/// Translator double: deterministic results, call counting, optional
/// failure mode. No network involved.
pub struct MockTranslator {
    pub translate_calls: AtomicUsize,
    pub fail: bool,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self {
            translate_calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            translate_calls: AtomicUsize::new(0),
            fail: true,
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: &str,
        _to: &str,
    ) -> Result<DetailedTranslationResult, TranslateError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(TranslateError::ApiError("mock failure".to_string()));
        }

        Ok(DetailedTranslationResult {
            pronunciation: "mock".to_string(),
            meanings: vec![Meaning {
                part_of_speech: "Noun".to_string(),
                translations: vec![format!("{text}-translated")],
            }],
        })
    }

    async fn synthesize_speech(
        &self,
        _text: &str,
        _lang_code: &str,
    ) -> Result<String, TranslateError> {
        if self.fail {
            return Err(TranslateError::ApiError("mock failure".to_string()));
        }

        // "mock" in base64
        Ok("bW9jaw==".to_string())
    }
}

pub fn test_state(dir: &Path) -> Arc<AppState> {
    let mut config = Config::default();
    config.storage.data_dir = dir.to_string_lossy().into_owned();
    Arc::new(AppState::new(config))
}

pub fn test_item(id: &str, from_text: &str) -> TranslationItem {
    TranslationItem {
        id: id.to_string(),
        from_text: from_text.to_string(),
        to_text: format!("{from_text}-translated"),
        source_lang: "tr".to_string(),
        target_lang: "en".to_string(),
        pronunciation: String::new(),
        meanings: Vec::new(),
    }
}

pub struct Harness {
    pub state: Arc<AppState>,
    pub translator: Arc<MockTranslator>,
    pub ui_to_app_tx: AsyncSender<AppEvent>,
    pub app_to_ui_rx: AsyncReceiver<AppEvent>,
}

/// Spawn the event loop against a mock translator and hand back the
/// channel endpoints a UI would hold. Consumes the BackendReady greeting.
pub async fn spawn_harness(dir: &Path, translator: MockTranslator) -> Harness {
    let state = test_state(dir);
    let translator = Arc::new(translator);

    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(64);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(64);

    tokio::spawn(event_loop(
        state.clone(),
        translator.clone(),
        ui_to_app_rx,
        app_to_ui_tx,
    ));

    let harness = Harness {
        state,
        translator,
        ui_to_app_tx,
        app_to_ui_rx,
    };

    match recv(&harness.app_to_ui_rx).await {
        AppEvent::BackendReady => {}
        other => panic!("expected BackendReady, got {other:?}"),
    }

    harness
}

pub async fn recv(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}
