use std::sync::Arc;

use kanal::AsyncSender;
use kelime_types::{AppEvent, View};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

const HELP: &str = "\
Komutlar:
  <metin>            çevir
  :star              son çeviriyi favorilere ekle/çıkar
  :play              son çevirinin sesini çal
  :say <metin>       metni seslendir
  :fav / :hist       favorileri / geçmişi listele
  :delh <id>         geçmişten sil
  :delf <id>         favorilerden sil
  :auto on|off       otomatik ses
  :langs <from> <to> dil çifti
  :export [dosya]    yedeği dışa aktar
  :import <dosya>    yedeği içe aktar
  :game              oyunu başlat
  :y / :n / :s       oyun: biliyorum / bilmiyorum / geç
  :settings          ayarları göster
  :quit              çık";

/// Parsed form of one input line. Kept free of app state so parsing is
/// testable on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Translate(String),
    FavoriteLast,
    SpeakLast,
    Say(String),
    ShowView(View),
    RemoveHistory(String),
    RemoveFavorite(String),
    AutoPlay(bool),
    Languages(String, String),
    Export(Option<String>),
    Import(String),
    StartGame,
    Answer(Option<bool>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if line.is_empty() {
        return Command::Empty;
    }

    if !line.starts_with(':') {
        return Command::Translate(line.to_string());
    }

    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    // Text and path arguments keep their inner spaces.
    match head {
        ":say" if !rest.is_empty() => return Command::Say(rest.to_string()),
        ":import" if !rest.is_empty() => return Command::Import(rest.to_string()),
        ":export" => {
            return Command::Export((!rest.is_empty()).then(|| rest.to_string()));
        }
        _ => {}
    }

    let mut args = rest.split_whitespace();
    let arg1 = args.next();
    let arg2 = args.next();

    match (head, arg1, arg2) {
        (":star", _, _) => Command::FavoriteLast,
        (":play", _, _) => Command::SpeakLast,
        (":fav", _, _) => Command::ShowView(View::Favorites),
        (":hist", _, _) => Command::ShowView(View::History),
        (":settings", _, _) => Command::ShowView(View::Settings),
        (":delh", Some(id), _) => Command::RemoveHistory(id.to_string()),
        (":delf", Some(id), _) => Command::RemoveFavorite(id.to_string()),
        (":auto", Some("on"), _) => Command::AutoPlay(true),
        (":auto", Some("off"), _) => Command::AutoPlay(false),
        (":langs", Some(from), Some(to)) => Command::Languages(from.to_string(), to.to_string()),
        (":game", _, _) => Command::StartGame,
        (":y", _, _) => Command::Answer(Some(true)),
        (":n", _, _) => Command::Answer(Some(false)),
        (":s", _, _) => Command::Answer(None),
        (":help", _, _) => Command::Help,
        (":quit", _, _) | (":q", _, _) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Read stdin line by line and forward parsed commands as events until
/// cancellation or `:quit`.
pub async fn input_loop(
    state: Arc<AppState>,
    cancel: CancellationToken,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::info!("input loop stopping");
                return Ok(());
            }
        };

        let Some(line) = line else {
            tracing::info!("stdin closed");
            return Ok(());
        };

        let event = match parse_command(&line) {
            Command::Translate(text) => {
                let config = state.config.read().await;
                AppEvent::Translate {
                    text,
                    from: config.translator.from_lang.clone(),
                    to: config.translator.to_lang.clone(),
                }
            }
            Command::FavoriteLast => AppEvent::FavoriteLastResult,
            Command::SpeakLast => AppEvent::SpeakLastResult,
            Command::Say(text) => {
                let config = state.config.read().await;
                AppEvent::Speak {
                    text,
                    lang: config.translator.from_lang.clone(),
                }
            }
            Command::ShowView(view) => AppEvent::SwitchView(view),
            Command::RemoveHistory(id) => AppEvent::RemoveFromHistory { id },
            Command::RemoveFavorite(id) => AppEvent::RemoveFromFavorites { id },
            Command::AutoPlay(enabled) => AppEvent::SetAutoPlay(enabled),
            Command::Languages(from, to) => AppEvent::SetLanguages { from, to },
            Command::Export(path) => AppEvent::ExportData { path },
            Command::Import(path) => AppEvent::ImportData { path },
            Command::StartGame => AppEvent::StartGame,
            Command::Answer(known) => AppEvent::GameAnswer { known },
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => {
                tracing::info!("quit requested");
                return Ok(());
            }
            Command::Empty => continue,
            Command::Unknown(line) => {
                println!("Bilinmeyen komut: {line} (:help)");
                continue;
            }
        };

        ui_to_app_tx.send(event).await?;
    }
}
