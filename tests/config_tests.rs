use clap::Parser;
use ring_scene::cli::Cli;
use ring_scene::{RingConfig, SceneError};
use std::path::PathBuf;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.json");
        std::fs::write(&path, r#"{"radius": 4, "count": 8, "output": "ring.scene"}"#).unwrap();

        let config = RingConfig::load(&path).unwrap();
        assert_eq!(config.radius, 4.0);
        assert_eq!(config.count, 8);
        assert_eq!(config.length, 50.0);
        assert_eq!(config.output, PathBuf::from("ring.scene"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.json");
        std::fs::write(&path, r#"{"radius": 4, "count": 8}"#).unwrap();

        let cli = Cli::try_parse_from([
            "ring-scene",
            "--config",
            path.to_str().unwrap(),
            "--count",
            "16",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.radius, 4.0);
        assert_eq!(config.count, 16);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RingConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SceneError::ConfigRead { .. }));
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.json");
        std::fs::write(&path, "{ radius: 4").unwrap();

        let err = RingConfig::load(&path).unwrap_err();
        assert!(matches!(err, SceneError::ConfigParse { .. }));
    }

    #[test]
    fn test_config_file_values_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.json");
        std::fs::write(&path, r#"{"radius": -2}"#).unwrap();

        let cli = Cli::try_parse_from(["ring-scene", "--config", path.to_str().unwrap()]).unwrap();
        assert!(matches!(
            cli.resolve_config(),
            Err(SceneError::InvalidConfig(_))
        ));
    }
}
