use super::*;
use serial_test::serial;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("ldash_config_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_is_not_an_error() {
    let result = load_config_file("/nonexistent/ldash/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn valid_file_parses_all_fields() {
    let path = write_temp_config(
        "full.toml",
        r#"
            api_base_url = "http://analytics.internal:9000"
            page_size = 25
            default_view = "suppliers"
            dev_mode = true
            request_timeout_secs = 3
            export_dir = "/tmp/exports"
            log_file_path = "/tmp/ldash.log"
        "#,
    );
    let config = load_config_file(path).unwrap().unwrap();
    assert_eq!(
        config.api_base_url.as_deref(),
        Some("http://analytics.internal:9000")
    );
    assert_eq!(config.page_size, Some(25));
    assert_eq!(config.default_view.as_deref(), Some("suppliers"));
    assert_eq!(config.dev_mode, Some(true));
    assert_eq!(config.request_timeout_secs, Some(3));
    assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/ldash.log")));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = write_temp_config("broken.toml", "api_base_url = [not toml");
    let err = load_config_file(path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let path = write_temp_config("unknown.toml", "definitely_not_a_key = 1");
    let err = load_config_file(path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn merge_with_no_file_yields_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.api_base_url, "http://localhost:8000");
    assert_eq!(resolved.page_size, 10);
    assert_eq!(resolved.default_view, View::CostAnalysis);
    assert!(!resolved.dev_mode);
}

#[test]
fn merge_prefers_file_values_over_defaults() {
    let file = ConfigFile {
        api_base_url: Some("http://other:1234".to_string()),
        page_size: Some(50),
        default_view: Some("heatmap".to_string()),
        request_timeout_secs: Some(2),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.api_base_url, "http://other:1234");
    assert_eq!(resolved.page_size, 50);
    assert_eq!(resolved.default_view, View::Heatmap);
    assert_eq!(resolved.request_timeout, Duration::from_secs(2));
    // Unset fields keep their defaults.
    assert!(!resolved.dev_mode);
}

#[test]
fn unknown_default_view_slug_keeps_the_default() {
    let file = ConfigFile {
        default_view: Some("dashboard-of-dashboards".to_string()),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.default_view, View::CostAnalysis);
}

#[test]
#[serial]
fn env_override_replaces_api_url() {
    std::env::set_var("LDASH_API_URL", "http://from-env:8000");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.api_base_url, "http://from-env:8000");
    std::env::remove_var("LDASH_API_URL");
}

#[test]
#[serial]
fn env_override_absent_keeps_config() {
    std::env::remove_var("LDASH_API_URL");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.api_base_url, "http://localhost:8000");
}

#[test]
fn cli_overrides_beat_everything() {
    let base = ResolvedConfig {
        api_base_url: "http://from-file:8000".to_string(),
        page_size: 25,
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(
        base,
        CliOverrides {
            api_url: Some("http://from-cli:8000".to_string()),
            page_size: Some(5),
            view: Some(View::Prediction),
            dev_mode: true,
            export_dir: Some(PathBuf::from("/tmp/cli-exports")),
            no_color: true,
        },
    );
    assert_eq!(resolved.api_base_url, "http://from-cli:8000");
    assert_eq!(resolved.page_size, 5);
    assert_eq!(resolved.default_view, View::Prediction);
    assert!(resolved.dev_mode);
    assert_eq!(resolved.export_dir, PathBuf::from("/tmp/cli-exports"));
    assert!(resolved.no_color);
}

#[test]
fn cli_overrides_default_leaves_config_untouched() {
    let base = ResolvedConfig {
        dev_mode: true,
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(base.clone(), CliOverrides::default());
    assert_eq!(resolved, base);
}

#[test]
#[serial]
fn precedence_explicit_path_beats_env() {
    let explicit = write_temp_config("explicit.toml", "page_size = 1");
    let from_env = write_temp_config("from_env.toml", "page_size = 2");
    std::env::set_var("LDASH_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit)).unwrap().unwrap();
    assert_eq!(config.page_size, Some(1));

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.page_size, Some(2));

    std::env::remove_var("LDASH_CONFIG");
}

#[test]
fn default_log_path_names_the_app() {
    let path = default_log_path();
    assert!(path.to_string_lossy().ends_with("ldash.log"));
}
