//! Tests for loading configuration files.

use std::io::Write;
use tictouch::{AppConfig, Color565, MAX_EDGE};

#[test]
fn test_from_file_reads_all_sections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[display]
width = 480
height = 320

[palette]
grid = 0
x_mark = 63488

[touch]
show_readout = true
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.display().width(), 480);
    assert_eq!(*config.display().height(), 320);
    assert_eq!(config.palette().grid, Color565::BLACK);
    assert_eq!(config.palette().x_mark, Color565::rgb(255, 0, 0));
    assert!(*config.touch().show_readout());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display\nwidth = ").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_override_to_huge_panel_rejected() {
    let err = AppConfig::default()
        .with_overrides(Some(4_000_000_000), Some(4_000_000_000), false)
        .unwrap_err();
    assert!(err.message.contains("too large"));
}

#[test]
fn test_override_at_max_edge_accepted() {
    let config = AppConfig::default()
        .with_overrides(Some(MAX_EDGE), Some(MAX_EDGE), false)
        .unwrap();
    assert_eq!(*config.display().width(), MAX_EDGE);
}

#[test]
fn test_override_to_tiny_panel_rejected() {
    assert!(
        AppConfig::default()
            .with_overrides(Some(1), None, false)
            .is_err()
    );
}
