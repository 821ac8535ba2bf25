// ==========================================
// OEE KPI 计算工具 - 引擎层
// ==========================================
// 职责: KPI 公式计算 + 展示映射（纯函数，无状态）
// 约束: 引擎不读文件、不做输入修复
// ==========================================

pub mod error;
pub mod kpi_engine;
pub mod presentation;

// 重导出核心引擎
pub use error::{ComputationError, ComputationResult, Denominator};
pub use kpi_engine::KpiEngine;
pub use presentation::{
    AlertMessage, BenchmarkChart, Dashboard, GaugeStep, GaugeView, LineDash, PresentationMapper,
    ResultTable, SeriesKind, SeriesView,
};
