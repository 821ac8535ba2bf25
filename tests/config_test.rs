// ==========================================
// 配置加载集成测试
// ==========================================
// 测试目标: JSON 配置文件加载、默认值合并、非法值拦截
// ==========================================

use oee_kpi::config::{ConfigError, ConfigManager, LogFormat};
use oee_kpi::{AppConfig, KpiApi, ValidationMode};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("创建临时配置文件失败");
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_explicit_path_full_config() {
    let file = write_config(
        r#"{
            "locale": "en",
            "validation_mode": "LENIENT",
            "log_format": "JSON",
            "export": {
                "delimiter": ";",
                "input_file_name": "inputs.csv",
                "result_file_name": "results.csv"
            }
        }"#,
    );

    let config = ConfigManager::load(Some(file.path())).unwrap();
    assert_eq!(config.locale, "en");
    assert_eq!(config.validation_mode, ValidationMode::Lenient);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.export_delimiter(), b';');
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config(r#"{ "locale": "en" }"#);
    let config = ConfigManager::load(Some(file.path())).unwrap();

    let defaults = AppConfig::default();
    assert_eq!(config.validation_mode, defaults.validation_mode);
    assert_eq!(config.export, defaults.export);
}

#[test]
fn test_missing_explicit_file() {
    let err = ConfigManager::load(Some(std::path::Path::new("/nonexistent/oee.json"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn test_malformed_json() {
    let file = write_config("{ locale: en ");
    let err = ConfigManager::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FormatError { .. }));
}

#[test]
fn test_unsupported_locale_rejected() {
    let file = write_config(r#"{ "locale": "fr" }"#);
    let err = ConfigManager::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_configured_export_file_names_and_delimiter() {
    let file = write_config(
        r#"{ "locale": "en", "export": { "delimiter": "\t", "result_file_name": "out.tsv" } }"#,
    );
    let config = ConfigManager::load(Some(file.path())).unwrap();

    let api = KpiApi::new(config).unwrap();
    let report = api
        .calculate_manual(oee_kpi::ProductionRecord::new(480.0, 60.0, 1000, 950, 0.4))
        .unwrap();

    let dir = TempDir::new().unwrap();
    let files = api.export_report(&report, &dir.path().join("nested")).unwrap();

    assert!(files.input_path.ends_with("input_data.csv"));
    assert!(files.result_path.ends_with("out.tsv"));
    let content = std::fs::read_to_string(&files.result_path).unwrap();
    assert!(content.lines().next().unwrap().contains("\tRun Time\t"));
}
