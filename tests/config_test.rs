// tests/config_test.rs
use env_release::config::{load_config, Config};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
#[serial]
fn test_load_default_config() {
    let config = load_config(None).expect("Should load default config");
    assert_eq!(
        config.branches.get("master"),
        Some(&"3.0.0-SNAPSHOT".to_string())
    );
    assert_eq!(
        config.branches.get("ranger-2.5"),
        Some(&"2.5.1-SNAPSHOT".to_string())
    );
    assert_eq!(config.branches.get("ranger-2.6"), Some(&"2.6.0".to_string()));
    assert_eq!(config.defaults.branch, "master");
    assert_eq!(config.defaults.env_file, ".env");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[branches]
"master" = "4.0.0-SNAPSHOT"
"ranger-3.1" = "3.1.0-SNAPSHOT"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(
        config.branches.get("master"),
        Some(&"4.0.0-SNAPSHOT".to_string())
    );
    assert_eq!(
        config.branches.get("ranger-3.1"),
        Some(&"3.1.0-SNAPSHOT".to_string())
    );
    // Defaults still apply to omitted sections
    assert_eq!(config.defaults.env_file, ".env");
}

#[test]
#[serial]
fn test_load_from_fixture() {
    let config = load_config(Some("tests/fixtures/branches.toml"))
        .expect("Failed to load fixture config");
    assert_eq!(
        config.branches.get("ranger-3.0"),
        Some(&"3.0.1-SNAPSHOT".to_string())
    );
    assert_eq!(config.defaults.env_file, "build/.env");
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("envrelease.toml"),
        "[branches]\n\"master\" = \"9.0.0-SNAPSHOT\"\n",
    )
    .unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original_dir).unwrap();

    let config = result.expect("Should pick up envrelease.toml from the current directory");
    assert_eq!(
        config.branches.get("master"),
        Some(&"9.0.0-SNAPSHOT".to_string())
    );
}

#[test]
fn test_invalid_version_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[branches]\n\"ranger-2.5\" = \"not-a-version\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("ranger-2.5"));
}

#[test]
fn test_unparsable_config_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"branches = not valid toml").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}
