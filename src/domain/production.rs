// ==========================================
// OEE KPI 计算工具 - 生产记录领域模型
// ==========================================
// ProductionRecord: 输入（人工录入 / 文件导入）
// KpiResult: 派生结果（单次计算，不落库）
// ==========================================

use crate::domain::types::KpiMetric;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionRecord - 生产记录
// ==========================================
// 时间单位: 分钟；节拍单位: 分钟/件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub description: Option<String>,  // 机组/工序描述（可选）
    pub planned_production_time: f64, // 计划生产时间
    pub downtime: f64,                // 非计划停机时间
    pub total_count: i64,             // 总产量（件）
    pub good_count: i64,              // 良品数（件）
    pub ideal_cycle_time: f64,        // 理想节拍
}

impl ProductionRecord {
    pub fn new(
        planned_production_time: f64,
        downtime: f64,
        total_count: i64,
        good_count: i64,
        ideal_cycle_time: f64,
    ) -> Self {
        Self {
            description: None,
            planned_production_time,
            downtime,
            total_count,
            good_count,
            ideal_cycle_time,
        }
    }

    /// 设置描述（空白描述视为未填写）
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        self.description = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }
}

// ==========================================
// KpiResult - KPI 计算结果
// ==========================================
// 比例指标 (availability/performance/quality/oee) 不做截断，
// 超出 [0,1] 的值原样保留，用于暴露数据质量问题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiResult {
    pub record: ProductionRecord,

    // ===== OEE 三要素 =====
    pub run_time: f64,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,

    // ===== 废品与产出 =====
    pub scrap_count: i64,
    pub scrap_rate_pct: f64,
    pub planned_output: f64,
    pub yield_pct: f64,
}

impl KpiResult {
    /// 指标展示值（百分比口径）
    pub fn metric_value(&self, metric: KpiMetric) -> f64 {
        match metric {
            KpiMetric::Availability => self.availability * 100.0,
            KpiMetric::Performance => self.performance * 100.0,
            KpiMetric::Quality => self.quality * 100.0,
            KpiMetric::Oee => self.oee * 100.0,
            KpiMetric::ScrapRate => self.scrap_rate_pct,
            KpiMetric::YieldVsPlanned => self.yield_pct,
        }
    }

    /// 指标原始值（比例指标为 0~1，百分比指标为 0~100）
    pub fn metric_raw_value(&self, metric: KpiMetric) -> f64 {
        match metric {
            KpiMetric::Availability => self.availability,
            KpiMetric::Performance => self.performance,
            KpiMetric::Quality => self.quality,
            KpiMetric::Oee => self.oee,
            KpiMetric::ScrapRate => self.scrap_rate_pct,
            KpiMetric::YieldVsPlanned => self.yield_pct,
        }
    }
}

// ==========================================
// DqViolation - 数据质量违规
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqViolation {
    pub row_number: usize, // 数据行号（从 1 开始）
    pub field: String,
    pub message: String,
}
