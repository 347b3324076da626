use std::sync::Arc;

use kanal::AsyncSender;
use kelime_core::history::record_translation;
use kelime_store::KEY_HISTORY;
use kelime_translator::Translator;
use kelime_types::{AppEvent, TranslationItem};

use crate::state::AppState;

pub async fn handle_translate(
    state: Arc<AppState>,
    translator: &dyn Translator,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: String,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    let text = text.trim().to_string();

    // Input validation happens before any remote call.
    if text.is_empty() {
        app_to_ui_tx
            .send(AppEvent::ShowToast(
                "Lütfen çevrilecek bir metin girin.".to_string(),
            ))
            .await?;
        return Ok(());
    }

    let Some(result) = translator.translate_or_none(&text, &from, &to).await else {
        app_to_ui_tx
            .send(AppEvent::ShowToast("Çeviri başarısız oldu.".to_string()))
            .await?;
        return Ok(());
    };

    let to_text = result.primary_translation().unwrap_or_default().to_string();
    let item = TranslationItem::new(text.clone(), to_text, from.clone(), to, &result);

    {
        let mut history = state.history.write().await;
        let updated = record_translation(std::mem::take(&mut *history), item.clone());
        state.store.write(KEY_HISTORY, &updated);
        *history = updated;
    }

    *state.last_result.write().await = Some(item.clone());

    app_to_ui_tx.send(AppEvent::ShowTranslation(item)).await?;

    if *state.auto_play_audio.read().await {
        if let Some(data) = translator.speech_or_none(&text, &from).await {
            app_to_ui_tx.send(AppEvent::PlayAudio { data }).await?;
        }
    }

    Ok(())
}

pub async fn handle_speak(
    translator: &dyn Translator,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: &str,
    lang: &str,
) -> anyhow::Result<()> {
    match translator.speech_or_none(text, lang).await {
        Some(data) => {
            app_to_ui_tx.send(AppEvent::PlayAudio { data }).await?;
        }
        None => {
            app_to_ui_tx
                .send(AppEvent::ShowToast("Ses oluşturulamadı.".to_string()))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_speak_last(
    state: Arc<AppState>,
    translator: &dyn Translator,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let last = state.last_result.read().await.clone();

    match last {
        Some(item) => {
            handle_speak(translator, app_to_ui_tx, &item.from_text, &item.source_lang).await
        }
        None => {
            app_to_ui_tx
                .send(AppEvent::ShowToast("Önce bir çeviri yapın.".to_string()))
                .await?;
            Ok(())
        }
    }
}
