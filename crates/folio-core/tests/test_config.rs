use std::io::Write;

use approx::assert_abs_diff_eq;

use folio_core::config::{is_page_section, FolioConfig, MotionConfig};
use folio_core::error::FolioError;
use folio_core::sections::RatioBasis;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_motion_defaults() {
    let m = MotionConfig::default();
    assert_abs_diff_eq!(m.carousel_speed, 0.6);
    assert_abs_diff_eq!(m.section_threshold, 0.55);
    assert_eq!(m.ratio_basis, RatioBasis::Target);
    assert_eq!(m.initial_section, "hero");
}

#[test]
fn test_default_config_is_valid() {
    FolioConfig::default().validate().unwrap();
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = FolioConfig::from_toml("").unwrap();
    assert_eq!(config, FolioConfig::default());
}

#[test]
fn test_partial_motion_table() {
    let config = FolioConfig::from_toml("[motion]\ncarousel_speed = 1.5\nratio_basis = \"root\"\n").unwrap();
    assert_abs_diff_eq!(config.motion.carousel_speed, 1.5);
    assert_eq!(config.motion.ratio_basis, RatioBasis::Root);
    assert_abs_diff_eq!(config.motion.section_threshold, 0.55);
}

#[test]
fn test_partial_profile_keeps_other_fields() {
    let config = FolioConfig::from_toml("[content.profile]\nname = \"Ada\"\n").unwrap();
    assert_eq!(config.content.profile.name, "Ada");
    assert_eq!(config.content.profile.email, "londemoresh03@gmail.com");
    assert_eq!(config.content.projects.len(), 3);
}

#[test]
fn test_projects_override() {
    let toml = r#"
[[content.projects]]
title = "Folio"
desc = "Portfolio renderer"
tech = ["Rust", "egui"]
repo = "https://example.com/folio"
demo = "https://folio.example.com"
"#;
    let config = FolioConfig::from_toml(toml).unwrap();
    let projects = &config.content.projects;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].description, "Portfolio renderer");
    assert_eq!(projects[0].demo_url(), Some("https://folio.example.com"));
    assert!(projects[0].img.is_empty());
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn test_toml_round_trip() {
    let config = FolioConfig::default();
    let text = config.to_toml().unwrap();
    assert!(text.contains("[motion]"), "got:\n{text}");
    let parsed = FolioConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    let mut config = FolioConfig::default();
    config.motion.carousel_speed = 2.0;
    config.save(&path).unwrap();

    let loaded = FolioConfig::load(&path).unwrap();
    assert_abs_diff_eq!(loaded.motion.carousel_speed, 2.0);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FolioConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)), "got: {err}");
}

#[test]
fn test_load_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[motion\ncarousel_speed = ").unwrap();
    let err = FolioConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::ConfigParse(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_rejects_non_positive_speed() {
    for speed in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let mut config = FolioConfig::default();
        config.motion.carousel_speed = speed;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)), "speed {speed}: {err}");
    }
}

#[test]
fn test_rejects_threshold_out_of_range() {
    for threshold in [0.0, 1.01, -0.2] {
        let mut config = FolioConfig::default();
        config.motion.section_threshold = threshold;
        assert!(config.validate().is_err(), "threshold {threshold} accepted");
    }
    let mut config = FolioConfig::default();
    config.motion.section_threshold = 1.0;
    config.validate().unwrap();
}

#[test]
fn test_rejects_unknown_nav_section() {
    let toml = r#"
[[content.navigation]]
label = "Blog"
section = "blog"
"#;
    let err = FolioConfig::from_toml(toml).unwrap_err();
    match err {
        FolioError::UnknownSection(id) => assert_eq!(id, "blog"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejects_unknown_initial_section() {
    let mut config = FolioConfig::default();
    config.motion.initial_section = "footer".into();
    assert!(matches!(config.validate(), Err(FolioError::UnknownSection(_))));
}

#[test]
fn test_rejects_empty_name() {
    let mut config = FolioConfig::default();
    config.content.profile.name = "  ".into();
    assert!(matches!(config.validate(), Err(FolioError::InvalidConfig(_))));
}

#[test]
fn test_is_page_section() {
    assert!(is_page_section("projects"));
    assert!(!is_page_section("Projects"));
}
