// ==========================================
// OEE KPI 计算工具 - 领域模型层
// ==========================================
// 职责: 定义生产记录、KPI 结果与领域类型
// 约束: 不含解析逻辑,不含计算逻辑
// ==========================================

pub mod production;
pub mod types;

// 重导出核心类型
pub use production::{DqViolation, KpiResult, ProductionRecord};
pub use types::{AlertDirection, BandLevel, KpiMetric, ValidationMode};
