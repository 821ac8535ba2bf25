// ==========================================
// OEE KPI 计算工具 - 配置管理器
// ==========================================
// 职责: 应用配置加载、校验、默认值管理
// 存储: JSON 配置文件（可选）
// 查找顺序: 显式路径 → OEE_KPI_CONFIG 环境变量 → 用户配置目录 → 内置默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::ValidationMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "OEE_KPI_CONFIG";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

// ==========================================
// 配置键（用于错误提示）
// ==========================================
pub mod config_keys {
    pub const LOCALE: &str = "locale";
    pub const EXPORT_DELIMITER: &str = "export.delimiter";
    pub const EXPORT_INPUT_FILE_NAME: &str = "export.input_file_name";
    pub const EXPORT_RESULT_FILE_NAME: &str = "export.result_file_name";
}

// ==========================================
// LogFormat - 日志输出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

// ==========================================
// ExportConfig - 导出配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub delimiter: char,
    pub input_file_name: String,
    pub result_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            input_file_name: "input_data.csv".to_string(),
            result_file_name: "kpi_results.csv".to_string(),
        }
    }
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: String,
    pub validation_mode: ValidationMode,
    pub log_format: LogFormat,
    pub export: ExportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "zh-CN".to_string(),
            validation_mode: ValidationMode::Strict,
            log_format: LogFormat::Text,
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// 校验配置值
    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::LOCALE.to_string(),
                value: self.locale.clone(),
                message: format!("仅支持 {}", SUPPORTED_LOCALES.join(" / ")),
            });
        }

        if !self.export.delimiter.is_ascii() || self.export.delimiter.is_ascii_alphanumeric() {
            return Err(ConfigError::InvalidValue {
                key: config_keys::EXPORT_DELIMITER.to_string(),
                value: self.export.delimiter.to_string(),
                message: "分隔符必须为 ASCII 标点或空白字符".to_string(),
            });
        }

        for (key, name) in [
            (config_keys::EXPORT_INPUT_FILE_NAME, &self.export.input_file_name),
            (config_keys::EXPORT_RESULT_FILE_NAME, &self.export.result_file_name),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: name.clone(),
                    message: "文件名不能为空".to_string(),
                });
            }
        }

        Ok(())
    }

    /// 导出分隔符（字节）
    pub fn export_delimiter(&self) -> u8 {
        // validate() 保证为 ASCII
        self.export.delimiter as u8
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 加载配置
    ///
    /// # 参数
    /// - explicit_path: 命令行显式指定的配置文件
    ///
    /// # 返回
    /// - Ok(AppConfig): 合并默认值后的配置
    /// - Err(ConfigError): 显式/环境变量指定的文件不存在，或文件格式错误
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<AppConfig> {
        if let Some(path) = explicit_path {
            return Self::load_from_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
            let env_path = env_path.trim();
            if !env_path.is_empty() {
                return Self::load_from_file(Path::new(env_path));
            }
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                tracing::debug!("未找到配置文件，使用内置默认配置");
                Ok(AppConfig::default())
            }
        }
    }

    /// 从指定 JSON 文件加载配置（缺失字段取默认值）
    pub fn load_from_file(path: &Path) -> ConfigResult<AppConfig> {
        let path_str = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path_str));
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let config: AppConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::FormatError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
        config.validate()?;

        tracing::info!(path = %path_str, locale = %config.locale, "配置加载完成");
        Ok(config)
    }

    /// 默认配置文件路径: <用户配置目录>/oee-kpi/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oee-kpi").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.export_delimiter(), b',');
        assert_eq!(config.export.result_file_name, "kpi_results.csv");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{ "locale": "en", "validation_mode": "LENIENT" }}"#).unwrap();

        let config = ConfigManager::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.validation_mode, ValidationMode::Lenient);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{ "locale": "fr" }}"#).unwrap();

        let result = ConfigManager::load_from_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "locale = en").unwrap();

        let result = ConfigManager::load_from_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::FormatError { .. })));
    }

    #[test]
    fn test_explicit_missing_file_rejected() {
        let result = ConfigManager::load(Some(Path::new("does_not_exist_config.json")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
