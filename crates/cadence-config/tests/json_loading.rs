//! Integration tests for JSON configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var manipulation.

use std::path::PathBuf;

use cadence_config::{CadenceConfig, ConfigError, InclusiveRange};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn default_config_roundtrips_through_disk() {
    Jail::expect_with(|_jail| {
        let written = CadenceConfig::write_default("config.json", false).expect("write defaults");
        let reloaded = CadenceConfig::extract("config.json").expect("reload");
        assert_eq!(reloaded, written);
        assert_eq!(reloaded, CadenceConfig::default());
        Ok(())
    });
}

#[test]
fn missing_file_is_created_with_defaults() {
    Jail::expect_with(|_jail| {
        let loaded = CadenceConfig::load("settings/config.json");
        assert!(loaded.created);
        assert!(loaded.warnings.is_empty());
        assert!(PathBuf::from("settings/config.json").exists());
        assert_eq!(loaded.config, CadenceConfig::default());

        let again = CadenceConfig::load("settings/config.json");
        assert!(!again.created);
        Ok(())
    });
}

#[test]
fn partial_file_merges_over_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.json",
            r#"{
                "repository_path": "/srv/activity",
                "daily_commit_range": [2, 4],
                "active_hours_start": 9,
                "active_hours_end": 18,
                "author_name": "Cadence Bot",
                "enable_randomization": false
            }"#,
        )?;

        let config = CadenceConfig::extract("config.json").expect("config loads");
        assert_eq!(config.repository_path, PathBuf::from("/srv/activity"));
        assert_eq!(config.daily_commit_range, InclusiveRange::new(2, 4));
        assert_eq!(config.active_hours(), 9..18);
        assert_eq!(config.author_name.as_deref(), Some("Cadence Bot"));
        assert!(!config.enable_randomization);
        assert_eq!(config.backfill_days, 365);
        assert_eq!(config.files_to_modify.len(), 2);
        Ok(())
    });
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        let garbage = "{ \"dry_run\": tru";
        jail.create_file("config.json", garbage)?;

        let loaded = CadenceConfig::load("config.json");
        assert_eq!(loaded.config, CadenceConfig::default());
        assert_eq!(loaded.warnings.len(), 1);
        assert!(!loaded.created);
        assert_eq!(std::fs::read_to_string("config.json").unwrap(), garbage);

        assert!(matches!(
            CadenceConfig::extract("config.json"),
            Err(ConfigError::Figment(_))
        ));
        Ok(())
    });
}

#[test]
fn out_of_range_values_fall_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", r#"{ "daily_commit_range": [5, 2] }"#)?;

        let loaded = CadenceConfig::load("config.json");
        assert_eq!(loaded.config.daily_commit_range, InclusiveRange::new(1, 5));
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("daily_commit_range"));
        Ok(())
    });
}

#[test]
fn extreme_utc_offset_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", r#"{ "utc_offset_minutes": -2147483648 }"#)?;

        let loaded = CadenceConfig::load("config.json");
        assert_eq!(loaded.config, CadenceConfig::default());
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("utc_offset_minutes"));
        Ok(())
    });
}

#[test]
fn env_overrides_beat_file_values() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", r#"{ "dry_run": false, "backfill_days": 30 }"#)?;
        jail.set_env("CADENCE_DRY_RUN", "true");
        jail.set_env("CADENCE_DAILY_COMMIT_RANGE", "[3, 3]");
        jail.set_env("CADENCE_LOG", "debug");

        let config = CadenceConfig::extract("config.json").expect("config loads");
        assert!(config.dry_run);
        assert_eq!(config.backfill_days, 30);
        assert_eq!(config.daily_commit_range, InclusiveRange::new(3, 3));
        Ok(())
    });
}

#[test]
fn write_default_refuses_to_overwrite() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", r#"{ "backfill_days": 7 }"#)?;

        let err = CadenceConfig::write_default("config.json", false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));

        CadenceConfig::write_default("config.json", true).expect("forced overwrite");
        let config = CadenceConfig::extract("config.json").expect("reload");
        assert_eq!(config.backfill_days, 365);
        Ok(())
    });
}
