use super::*;
use tempfile::TempDir;

#[test]
fn test_empty_settings_are_all_unset() {
    let settings = Settings::from_toml_str("", None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_full_settings_file() {
    let content = r#"
        absolute = true
        from_launch = true
        digits = 3
        escape = true
        escape_style = "unicode"
        separator = " "
        read_size = 4096
    "#;
    let settings = Settings::from_toml_str(content, None).unwrap();

    assert_eq!(settings.absolute, Some(true));
    assert_eq!(settings.from_launch, Some(true));
    assert_eq!(settings.digits, Some(3));
    assert_eq!(settings.escape, Some(true));
    assert_eq!(settings.escape_style().unwrap(), Some(EscapeStyle::Unicode));
    assert_eq!(settings.separator.as_deref(), Some(" "));
    assert_eq!(settings.read_size, Some(4096));
}

#[test]
fn test_escape_style_is_case_insensitive() {
    let settings = Settings::from_toml_str("escape_style = \"Control\"", None).unwrap();
    assert_eq!(settings.escape_style().unwrap(), Some(EscapeStyle::Control));
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = Settings::from_toml_str("precision = 2", None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let err = Settings::from_toml_str("digits = 10", None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);

    let err = Settings::from_toml_str("read_size = 0", None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);

    let err = Settings::from_toml_str("escape_style = \"html\"", None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    assert!(err.user_message().contains("\"html\""));
}

#[test]
fn test_negative_digits_fail_to_parse() {
    let err = Settings::from_toml_str("digits = -1", None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_load_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "digits = 42").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(err.user_message().contains(&path.display().to_string()));
}

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "absolute = true\ndigits = 2\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.absolute, Some(true));
    assert_eq!(settings.digits, Some(2));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Settings::discover(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
}

#[test]
fn test_default_path_ends_with_file_name() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with(SETTINGS_FILE_NAME));
    }
}
