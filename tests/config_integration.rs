// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, ToastConfig, DEFAULT_TICK_INTERVAL_MS};
use iced_toast::diagnostics::DiagnosticsCollector;
use iced_toast::ui::notifications::{Manager, Placement, ToastOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn manager_uses_placement_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("toasts.toml");

    let saved = ToastConfig {
        default_placement: Placement::TopLeft,
        exit_ms: None,
        ..ToastConfig::default()
    };
    config::save_to_path(&saved, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let mut manager: Manager = Manager::from_config(&loaded);
    let id = manager.notify("hello", ToastOptions::new()).unwrap();

    assert_eq!(manager.placement(), Placement::TopLeft);
    assert_eq!(manager.find(&id).map(|t| t.placement()), Some(Placement::TopLeft));
    assert_eq!(manager.bridge().transition().exit(), None);
}

#[test]
fn partial_config_file_fills_in_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("toasts.toml");
    fs::write(&config_path, "default_placement = \"top\"\n").expect("Failed to write file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(loaded.default_placement, Placement::Top);
    assert_eq!(loaded.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
}

#[test]
fn unknown_placement_in_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("toasts.toml");
    fs::write(&config_path, "default_placement = \"middle\"\n").expect("Failed to write file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(loaded, ToastConfig::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = config::load_from_path(&dir.path().join("absent.toml"));

    assert!(matches!(result, Err(iced_toast::Error::Io(_))));
}

#[test]
fn collector_capacity_comes_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("toasts.toml");
    fs::write(&config_path, "diagnostics_buffer_capacity = 32\n").expect("Failed to write file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let collector = DiagnosticsCollector::from_config(&loaded);

    assert_eq!(collector.capacity(), 32);
}

#[test]
fn collector_capacity_is_clamped() {
    let config = ToastConfig {
        diagnostics_buffer_capacity: 1,
        ..ToastConfig::default()
    };

    let collector = DiagnosticsCollector::from_config(&config);

    assert_eq!(collector.capacity(), 16);
}
