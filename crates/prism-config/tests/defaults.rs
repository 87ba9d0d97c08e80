//! Tests for default values.

use prism_config::{BuildSettings, EsTarget, Platform, DEFAULT_ENV_MARKER};
use std::path::PathBuf;

#[test]
fn build_settings_defaults() {
    let settings = BuildSettings::default();
    assert_eq!(settings.entry, PathBuf::from("src/index.js"));
    assert_eq!(settings.out_dir, PathBuf::from("dist"));
    assert_eq!(settings.stylesheet, Some(PathBuf::from("src/style.css")));
    assert!(settings.external.is_empty());
    assert!(settings.globals.is_empty());
    assert!(settings.global_name.is_none());
    assert_eq!(settings.env_marker, DEFAULT_ENV_MARKER);
    assert_eq!(settings.platform, Platform::Browser);
    assert_eq!(settings.target, EsTarget::Es2015);
}

#[test]
fn defaults_survive_partial_json() {
    let settings: BuildSettings =
        serde_json::from_str(r#"{ "external": ["vue"], "globals": { "vue": "Vue" } }"#).unwrap();
    assert_eq!(settings.external, vec!["vue".to_string()]);
    assert_eq!(settings.globals.get("vue").map(String::as_str), Some("Vue"));
    assert_eq!(settings.entry, PathBuf::from("src/index.js"));
    assert_eq!(settings.out_dir, PathBuf::from("dist"));
}

#[test]
fn null_stylesheet_disables_copy() {
    let settings: BuildSettings = serde_json::from_str(r#"{ "stylesheet": null }"#).unwrap();
    assert!(settings.stylesheet.is_none());
}
