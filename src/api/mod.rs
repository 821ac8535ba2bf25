// ==========================================
// OEE KPI 计算工具 - API 层
// ==========================================
// 职责: 提供请求级 API 接口,供命令行前端调用
// ==========================================

pub mod error;
pub mod kpi_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use kpi_api::{KpiApi, KpiReport, ReportSource};
