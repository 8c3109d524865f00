//! Persistence tests against a real JSON file

use std::fs;

use tui_2048::store::{
    GameStats, JsonFileStore, KeyValueStore, Persistence, Settings, BEST_SCORE_KEY, SOUND_KEY,
    STATS_KEY, THEME_KEY,
};
use tui_2048::types::Theme;

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut p = Persistence::new(JsonFileStore::open(&path));
    p.save_best_score(8192).unwrap();
    p.save_settings(Settings {
        sound_enabled: false,
        theme: Theme::Dark,
    })
    .unwrap();
    let mut stats = GameStats::default();
    stats.record_game(8192, true, 1024, 700);
    p.save_stats(&stats).unwrap();
    drop(p);

    let p = Persistence::new(JsonFileStore::open(&path));
    assert_eq!(p.best_score(), 8192);
    assert_eq!(p.settings().theme, Theme::Dark);
    assert!(!p.settings().sound_enabled);
    assert_eq!(p.stats(), stats);
}

#[test]
fn test_file_uses_fixed_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut p = Persistence::new(JsonFileStore::open(&path));
    p.save_best_score(16).unwrap();
    p.save_settings(Settings::default()).unwrap();
    p.save_stats(&GameStats::default()).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let obj = raw.as_object().unwrap();
    for key in [BEST_SCORE_KEY, STATS_KEY, SOUND_KEY, THEME_KEY] {
        assert!(obj.contains_key(key), "missing {}", key);
    }
    assert_eq!(obj[BEST_SCORE_KEY], "16");
    assert_eq!(obj[THEME_KEY], "light");
}

#[test]
fn test_corrupt_values_load_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(
        &path,
        r#"{"2048-best-score":"-5","2048-game-stats":"{oops","2048-theme":"neon"}"#,
    )
    .unwrap();

    let p = Persistence::new(JsonFileStore::open(&path));
    assert_eq!(p.best_score(), 0);
    assert_eq!(p.stats(), GameStats::default());
    assert_eq!(p.settings(), Settings::default());
}

#[test]
fn test_unreadable_file_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(BEST_SCORE_KEY), None);
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn test_clear_stats_removes_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut p = Persistence::new(JsonFileStore::open(&path));
    let mut stats = GameStats::default();
    stats.record_game(100, false, 16, 12);
    p.save_stats(&stats).unwrap();
    p.clear_stats().unwrap();

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get(STATS_KEY), None);
}
