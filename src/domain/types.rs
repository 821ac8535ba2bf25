// ==========================================
// OEE KPI 计算工具 - 领域类型定义
// ==========================================
// 指标枚举 / 告警方向 / 色带等级 / 校验模式
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// KPI 指标 (KPI Metric)
// ==========================================
// 展示顺序固定: 可用率 → 性能 → 质量 → OEE → 废品率 → 计划产出达成率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KpiMetric {
    Availability,   // 可用率
    Performance,    // 性能
    Quality,        // 质量
    Oee,            // 设备综合效率
    ScrapRate,      // 废品率 (%)
    YieldVsPlanned, // 计划产出达成率 (%)
}

impl KpiMetric {
    /// 全部展示指标（展示顺序）
    pub const ALL: [KpiMetric; 6] = [
        KpiMetric::Availability,
        KpiMetric::Performance,
        KpiMetric::Quality,
        KpiMetric::Oee,
        KpiMetric::ScrapRate,
        KpiMetric::YieldVsPlanned,
    ];

    /// 国际化 key 片段
    pub fn key(&self) -> &'static str {
        match self {
            KpiMetric::Availability => "availability",
            KpiMetric::Performance => "performance",
            KpiMetric::Quality => "quality",
            KpiMetric::Oee => "oee",
            KpiMetric::ScrapRate => "scrap_rate",
            KpiMetric::YieldVsPlanned => "yield_vs_planned",
        }
    }

    /// 结果表列名（与导出 CSV 表头一致）
    pub fn column_name(&self) -> &'static str {
        match self {
            KpiMetric::Availability => "Availability",
            KpiMetric::Performance => "Performance",
            KpiMetric::Quality => "Quality",
            KpiMetric::Oee => "OEE",
            KpiMetric::ScrapRate => "Scrap Rate (%)",
            KpiMetric::YieldVsPlanned => "Yield vs. Planned Output (%)",
        }
    }

    /// 结果中是否以比例 (0~1) 存储，展示时需乘 100
    pub fn is_fraction(&self) -> bool {
        matches!(
            self,
            KpiMetric::Availability | KpiMetric::Performance | KpiMetric::Quality | KpiMetric::Oee
        )
    }
}

impl fmt::Display for KpiMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiMetric::Availability => write!(f, "AVAILABILITY"),
            KpiMetric::Performance => write!(f, "PERFORMANCE"),
            KpiMetric::Quality => write!(f, "QUALITY"),
            KpiMetric::Oee => write!(f, "OEE"),
            KpiMetric::ScrapRate => write!(f, "SCRAP_RATE"),
            KpiMetric::YieldVsPlanned => write!(f, "YIELD_VS_PLANNED"),
        }
    }
}

// ==========================================
// 告警方向 (Alert Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertDirection {
    BelowIsBad, // 低于阈值告警
    AboveIsBad, // 高于阈值告警
}

impl AlertDirection {
    /// 判断数值是否越过阈值（严格比较，等于阈值不告警；非有限值一律告警）
    pub fn is_breached(&self, value: f64, threshold: f64) -> bool {
        if !value.is_finite() {
            return true;
        }
        match self {
            AlertDirection::BelowIsBad => value < threshold,
            AlertDirection::AboveIsBad => value > threshold,
        }
    }
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertDirection::BelowIsBad => write!(f, "BELOW_IS_BAD"),
            AlertDirection::AboveIsBad => write!(f, "ABOVE_IS_BAD"),
        }
    }
}

// ==========================================
// 色带等级 (Band Level)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandLevel {
    Bad,  // 差
    Warn, // 关注
    Good, // 良好
}

impl BandLevel {
    /// 仪表盘背景色
    pub fn color(&self) -> &'static str {
        match self {
            BandLevel::Bad => "#ffcccc",
            BandLevel::Warn => "#ffe680",
            BandLevel::Good => "#ccffcc",
        }
    }
}

impl fmt::Display for BandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandLevel::Bad => write!(f, "BAD"),
            BandLevel::Warn => write!(f, "WARN"),
            BandLevel::Good => write!(f, "GOOD"),
        }
    }
}

// ==========================================
// 数据质量校验模式 (Validation Mode)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationMode {
    /// 严格模式：任何数据质量违规都中止计算
    #[default]
    Strict,
    /// 宽松模式：记录告警后继续计算，指标原样输出（不截断）
    Lenient,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "STRICT"),
            ValidationMode::Lenient => write!(f, "LENIENT"),
        }
    }
}
