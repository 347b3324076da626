use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use kanal::AsyncReceiver;
use kelime_core::game::summarize;
use kelime_types::{AppEvent, GameResult, TranslationItem, View};

use crate::state::AppState;

/// Terminal renderer for app→ui events.
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::BackendReady => {
                println!("Kelime hazır. Çevirmek için bir kelime yazın.");
            }
            AppEvent::ShowTranslation(item) => render_translation(&item),
            AppEvent::ShowItems { view, items } => render_items(view, &items),
            AppEvent::ShowToast(message) => println!(">> {message}"),
            AppEvent::ShowGamePrompt {
                item,
                position,
                total,
            } => {
                println!("Kart {position}/{total}: {}", item.from_text);
                println!("  Biliyor musun? (:y / :n / :s)");
            }
            AppEvent::ShowAnalysis(results) => render_analysis(&results),
            AppEvent::PlayAudio { data } => save_audio(&state, &data),
            other => {
                tracing::debug!("ignoring event in ui loop: {:?}", std::mem::discriminant(&other));
            }
        }
    }

    tracing::info!("ui loop stopping");
    Ok(())
}

fn render_translation(item: &TranslationItem) {
    println!();
    println!("{} -> {}", item.from_text, item.to_text);

    if !item.pronunciation.is_empty() {
        println!("  /{}/", item.pronunciation);
    }

    for meaning in &item.meanings {
        println!("  [{}] {}", meaning.part_of_speech, meaning.translations.join(", "));
    }

    println!("  (:star favorilere ekler, :play sesi çalar)");
}

fn render_items(view: View, items: &[TranslationItem]) {
    let title = match view {
        View::Favorites => "Favoriler",
        View::History => "Geçmiş",
        _ => "Kayıtlar",
    };

    println!();
    println!("{title} ({}):", items.len());

    if items.is_empty() {
        println!("  (boş)");
        return;
    }

    for item in items {
        println!("  {} | {} -> {}", item.id, item.from_text, item.to_text);
    }
}

fn render_analysis(results: &[GameResult]) {
    let summary = summarize(results);

    println!();
    println!(
        "Oyun bitti: {} bilinen, {} bilinmeyen, {} atlanan",
        summary.known, summary.unknown, summary.skipped
    );

    for result in results {
        let mark = match result.known {
            Some(true) => "+",
            Some(false) => "-",
            None => "~",
        };
        println!("  {mark} {} -> {}", result.item.from_text, result.item.to_text);
    }

    println!("  (:game yeniden oynatır, :fav favorilere döner)");
}

/// Decode the TTS payload next to the store files. Playback itself is left
/// to the host; raw PCM at the model's native rate.
fn save_audio(state: &AppState, data: &str) {
    let bytes = match BASE64.decode(data) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("audio payload did not decode: {}", e);
            return;
        }
    };

    let path = state.store.dir().join("last_tts.pcm");

    match std::fs::write(&path, bytes) {
        Ok(()) => println!(">> Ses kaydedildi: {}", path.display()),
        Err(e) => tracing::error!("failed to write audio file: {}", e),
    }
}
