//! Integration tests for config persistence

use markcopy::Config;
use markcopy::config::{ApplyingToView, CalloutTitle, FootnoteConversion, LinkConversion};

#[test]
fn test_save_and_reload_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.set_applying_to(ApplyingToView::Reading);
    config.export_as_html = true;
    config.wiki_to_markdown = true;
    config.tab_to_space = true;
    config.tab_space_size = 2;
    config.global.links = LinkConversion::External;
    config.global.footnotes = FootnoteConversion::Format;
    config.overrides.callout = CalloutTitle::Remove;
    config.overrides.highlight = true;

    config.save_to_file(&path).unwrap();
    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::default().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "applying_to = \"reading\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.applying_to, ApplyingToView::Reading);
    assert_eq!(config.tab_space_size, 4);
    assert_eq!(config.global.links, LinkConversion::Keep);
}

#[test]
fn test_load_repairs_edit_view_html_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "applying_to = \"edit\"\nexport_as_html = true\ntab_space_size = 0\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.applying_to, ApplyingToView::Edit);
    assert!(!config.export_as_html);
    assert_eq!(config.tab_space_size, 4);
}

#[test]
fn test_unparseable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "applying_to = [not toml").unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    assert!(Config::from_file(&path).is_err());
}
