use kelime_core::backup::Backup;
use kelime_types::AppEvent;

use super::support::{MockTranslator, recv, spawn_harness, test_item};

#[tokio::test]
async fn export_writes_a_valid_backup_file() {
    let dir = tempfile::tempdir().unwrap();
    let h = spawn_harness(dir.path(), MockTranslator::new()).await;

    {
        *h.state.favorites.write().await = vec![test_item("1", "elma")];
        *h.state.history.write().await = vec![test_item("2", "armut")];
        *h.state.auto_play_audio.write().await = true;
    }

    let target = dir.path().join("backup.json");
    h.ui_to_app_tx
        .send(AppEvent::ExportData {
            path: Some(target.to_string_lossy().into_owned()),
        })
        .await
        .unwrap();

    match recv(&h.app_to_ui_rx).await {
        AppEvent::ShowToast(message) => assert!(message.contains("dışa aktarıldı")),
        other => panic!("expected ShowToast, got {other:?}"),
    }

    let data = std::fs::read_to_string(&target).unwrap();
    assert!(data.contains("\"autoPlayAudio\""));

    let backup = Backup::from_json(&data).unwrap();
    assert_eq!(backup.favorites.len(), 1);
    assert_eq!(backup.history[0].from_text, "armut");
    assert!(backup.auto_play_audio);
}

#[tokio::test]
async fn import_replaces_all_three_slices() {
    let dir = tempfile::tempdir().unwrap();
    let h = spawn_harness(dir.path(), MockTranslator::new()).await;

    {
        *h.state.history.write().await = vec![test_item("old", "eski")];
    }

    let backup = Backup {
        favorites: vec![test_item("1", "elma")],
        history: vec![test_item("2", "armut"), test_item("3", "kiraz")],
        auto_play_audio: true,
    };
    let path = dir.path().join("incoming.json");
    std::fs::write(&path, backup.to_json().unwrap()).unwrap();

    h.ui_to_app_tx
        .send(AppEvent::ImportData {
            path: path.to_string_lossy().into_owned(),
        })
        .await
        .unwrap();

    match recv(&h.app_to_ui_rx).await {
        AppEvent::ShowToast(message) => assert!(message.contains("başarıyla")),
        other => panic!("expected ShowToast, got {other:?}"),
    }

    assert_eq!(h.state.favorites.read().await.len(), 1);
    let history = h.state.history.read().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].from_text, "armut");
    assert!(*h.state.auto_play_audio.read().await);

    // Replacement is wholesale, no merge.
    assert!(history.iter().all(|item| item.id != "old"));
}

#[tokio::test]
async fn invalid_backup_is_rejected_without_changes() {
    let dir = tempfile::tempdir().unwrap();
    let h = spawn_harness(dir.path(), MockTranslator::new()).await;

    {
        *h.state.history.write().await = vec![test_item("old", "eski")];
    }

    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "favorites": [] }"#).unwrap();

    h.ui_to_app_tx
        .send(AppEvent::ImportData {
            path: path.to_string_lossy().into_owned(),
        })
        .await
        .unwrap();

    match recv(&h.app_to_ui_rx).await {
        AppEvent::ShowToast(message) => assert_eq!(message, "Geçersiz veri dosyası."),
        other => panic!("expected ShowToast, got {other:?}"),
    }

    let history = h.state.history.read().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, "old");
}

#[tokio::test]
async fn unreadable_backup_reports_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let h = spawn_harness(dir.path(), MockTranslator::new()).await;

    h.ui_to_app_tx
        .send(AppEvent::ImportData {
            path: dir
                .path()
                .join("does-not-exist.json")
                .to_string_lossy()
                .into_owned(),
        })
        .await
        .unwrap();

    match recv(&h.app_to_ui_rx).await {
        AppEvent::ShowToast(message) => assert!(message.contains("okunurken hata")),
        other => panic!("expected ShowToast, got {other:?}"),
    }
}

#[tokio::test]
async fn imported_state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let h = spawn_harness(dir.path(), MockTranslator::new()).await;

        let backup = Backup {
            favorites: vec![test_item("1", "elma")],
            history: vec![test_item("2", "armut")],
            auto_play_audio: true,
        };
        let path = dir.path().join("incoming.json");
        std::fs::write(&path, backup.to_json().unwrap()).unwrap();

        h.ui_to_app_tx
            .send(AppEvent::ImportData {
                path: path.to_string_lossy().into_owned(),
            })
            .await
            .unwrap();
        recv(&h.app_to_ui_rx).await;
    }

    // A fresh state over the same store dir sees the imported data.
    let state = super::support::test_state(dir.path());
    assert_eq!(state.favorites.read().await.len(), 1);
    assert_eq!(state.history.read().await[0].from_text, "armut");
    assert!(*state.auto_play_audio.read().await);
}
