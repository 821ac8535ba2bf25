// ==========================================
// OEE KPI 计算工具 - 指标阈值与色带配置
// ==========================================
// 单一配置表: 人工录入与文件导入两条路径共用
// 阈值与色带边界为固定常量，不支持运行时覆写
// ==========================================

use crate::domain::types::{AlertDirection, BandLevel, KpiMetric};
use serde::Serialize;

/// 色带区间 [from, to)，最后一段包含上界
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandRange {
    pub from: f64,
    pub to: f64,
    pub level: BandLevel,
}

/// 单指标阈值配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricThreshold {
    pub metric: KpiMetric,
    pub threshold: f64,
    pub direction: AlertDirection,
    pub bands: [BandRange; 3],
}

const fn band(from: f64, to: f64, level: BandLevel) -> BandRange {
    BandRange { from, to, level }
}

/// 指标阈值表（展示顺序与 KpiMetric::ALL 一致）
pub const METRIC_THRESHOLDS: [MetricThreshold; 6] = [
    MetricThreshold {
        metric: KpiMetric::Availability,
        threshold: 90.0,
        direction: AlertDirection::BelowIsBad,
        bands: [
            band(0.0, 70.0, BandLevel::Bad),
            band(70.0, 90.0, BandLevel::Warn),
            band(90.0, 100.0, BandLevel::Good),
        ],
    },
    MetricThreshold {
        metric: KpiMetric::Performance,
        threshold: 95.0,
        direction: AlertDirection::BelowIsBad,
        bands: [
            band(0.0, 75.0, BandLevel::Bad),
            band(75.0, 95.0, BandLevel::Warn),
            band(95.0, 100.0, BandLevel::Good),
        ],
    },
    MetricThreshold {
        metric: KpiMetric::Quality,
        threshold: 99.0,
        direction: AlertDirection::BelowIsBad,
        bands: [
            band(0.0, 90.0, BandLevel::Bad),
            band(90.0, 99.0, BandLevel::Warn),
            band(99.0, 100.0, BandLevel::Good),
        ],
    },
    MetricThreshold {
        metric: KpiMetric::Oee,
        threshold: 85.0,
        direction: AlertDirection::BelowIsBad,
        bands: [
            band(0.0, 70.0, BandLevel::Bad),
            band(70.0, 85.0, BandLevel::Warn),
            band(85.0, 100.0, BandLevel::Good),
        ],
    },
    // 废品率方向相反: 低为好
    MetricThreshold {
        metric: KpiMetric::ScrapRate,
        threshold: 5.0,
        direction: AlertDirection::AboveIsBad,
        bands: [
            band(0.0, 2.0, BandLevel::Good),
            band(2.0, 5.0, BandLevel::Warn),
            band(5.0, 100.0, BandLevel::Bad),
        ],
    },
    MetricThreshold {
        metric: KpiMetric::YieldVsPlanned,
        threshold: 95.0,
        direction: AlertDirection::BelowIsBad,
        bands: [
            band(0.0, 70.0, BandLevel::Bad),
            band(70.0, 95.0, BandLevel::Warn),
            band(95.0, 100.0, BandLevel::Good),
        ],
    },
];

/// 按指标查询阈值配置
pub fn threshold_for(metric: KpiMetric) -> &'static MetricThreshold {
    match metric {
        KpiMetric::Availability => &METRIC_THRESHOLDS[0],
        KpiMetric::Performance => &METRIC_THRESHOLDS[1],
        KpiMetric::Quality => &METRIC_THRESHOLDS[2],
        KpiMetric::Oee => &METRIC_THRESHOLDS[3],
        KpiMetric::ScrapRate => &METRIC_THRESHOLDS[4],
        KpiMetric::YieldVsPlanned => &METRIC_THRESHOLDS[5],
    }
}

impl MetricThreshold {
    /// 是否触发告警
    pub fn is_breached(&self, value: f64) -> bool {
        self.direction.is_breached(value, self.threshold)
    }

    /// 色带归类
    ///
    /// 低于 0 归入第一段，达到或超过 100 归入最后一段；NaN/inf 归入 Bad
    pub fn classify(&self, value: f64) -> BandLevel {
        if !value.is_finite() {
            return BandLevel::Bad;
        }
        self.bands
            .iter()
            .find(|b| value < b.to)
            .map(|b| b.level)
            .unwrap_or(self.bands[2].level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_metric_order() {
        for (cfg, metric) in METRIC_THRESHOLDS.iter().zip(KpiMetric::ALL) {
            assert_eq!(cfg.metric, metric);
            assert_eq!(threshold_for(metric).metric, metric);
        }
    }

    #[test]
    fn test_bands_are_contiguous() {
        for cfg in METRIC_THRESHOLDS.iter() {
            assert_eq!(cfg.bands[0].from, 0.0);
            assert_eq!(cfg.bands[0].to, cfg.bands[1].from);
            assert_eq!(cfg.bands[1].to, cfg.bands[2].from);
            assert_eq!(cfg.bands[2].to, 100.0);
        }
    }

    #[test]
    fn test_classify_availability() {
        let cfg = threshold_for(KpiMetric::Availability);
        assert_eq!(cfg.classify(-3.0), BandLevel::Bad);
        assert_eq!(cfg.classify(69.99), BandLevel::Bad);
        assert_eq!(cfg.classify(70.0), BandLevel::Warn);
        assert_eq!(cfg.classify(90.0), BandLevel::Good);
        assert_eq!(cfg.classify(100.0), BandLevel::Good);
        assert_eq!(cfg.classify(112.0), BandLevel::Good);
    }

    #[test]
    fn test_classify_scrap_rate_reversed() {
        let cfg = threshold_for(KpiMetric::ScrapRate);
        assert_eq!(cfg.classify(0.0), BandLevel::Good);
        assert_eq!(cfg.classify(3.5), BandLevel::Warn);
        assert_eq!(cfg.classify(5.0), BandLevel::Bad);
        assert!(!cfg.is_breached(5.0));
        assert!(cfg.is_breached(5.01));
    }

    #[test]
    fn test_non_finite_is_bad_and_breached() {
        for cfg in METRIC_THRESHOLDS.iter() {
            for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                assert_eq!(cfg.classify(value), BandLevel::Bad);
                assert!(cfg.is_breached(value));
            }
        }
    }
}
