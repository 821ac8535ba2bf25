// ==========================================
// OEE KPI 计算工具 - 核心库
// ==========================================
// 功能: 由生产记录计算 OEE 及相关制造 KPI，
//       生成仪表盘/基准对比图渲染描述与阈值告警
// 定位: 单次请求内计算，无持久化、无跨请求状态
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 应用配置与指标阈值表
pub mod config;

// 引擎层 - KPI 计算与展示映射
pub mod engine;

// 导入层 - 外部表格数据
pub mod importer;

// 导出层 - CSV 导出
pub mod exporter;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 请求编排
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{AlertDirection, BandLevel, KpiMetric, KpiResult, ProductionRecord, ValidationMode};

// 配置
pub use config::{AppConfig, ConfigManager};

// 引擎
pub use engine::{ComputationError, Dashboard, KpiEngine, PresentationMapper};

// API
pub use api::{ApiError, KpiApi, KpiReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "OEE KPI 计算工具";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
