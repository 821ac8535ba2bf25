// ==========================================
// OEE KPI 计算工具 - 配置层
// ==========================================
// 职责: 应用配置加载 + 指标阈值/色带共享配置表
// 存储: JSON 配置文件（可选）
// ==========================================

pub mod config_manager;
pub mod error;
pub mod metric_thresholds;

// 重导出核心配置类型
pub use config_manager::{config_keys, AppConfig, ConfigManager, ExportConfig, LogFormat};
pub use error::{ConfigError, ConfigResult};
pub use metric_thresholds::{threshold_for, BandRange, MetricThreshold, METRIC_THRESHOLDS};
