// ==========================================
// OEE KPI 计算工具 - 引擎错误类型
// ==========================================

use std::fmt;
use thiserror::Error;

/// 可能为零的除数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denominator {
    PlannedProductionTime,
    RunTime,
    TotalCount,
    IdealCycleTime,
    PlannedOutput,
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denominator::PlannedProductionTime => write!(f, "planned_production_time"),
            Denominator::RunTime => write!(f, "run_time"),
            Denominator::TotalCount => write!(f, "total_count"),
            Denominator::IdealCycleTime => write!(f, "ideal_cycle_time"),
            Denominator::PlannedOutput => write!(f, "planned_output"),
        }
    }
}

/// KPI 计算错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    #[error("除数为零 (记录 {record}): {denominator} = 0")]
    ZeroDenominator {
        record: usize,
        denominator: Denominator,
    },

    #[error("数值非有限 (记录 {record}): {field} = {value}")]
    NonFiniteValue {
        record: usize,
        field: &'static str,
        value: f64,
    },

    #[error("废品数溢出 (记录 {record}): total_count - good_count 超出 i64 范围")]
    CountOverflow { record: usize },

    #[error("批次为空: 至少需要一条生产记录")]
    EmptyBatch,
}

/// Result 类型别名
pub type ComputationResult<T> = Result<T, ComputationError>;
