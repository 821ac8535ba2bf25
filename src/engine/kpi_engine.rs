// ==========================================
// OEE KPI 计算工具 - KPI 计算引擎
// ==========================================
// 职责: 生产记录 → KPI 结果（逐条计算，记录间无依赖）
// 输入: ProductionRecord 列表（至少 1 条）
// 输出: KpiResult 列表（顺序与输入一致）
// ==========================================
// 约束: 不截断、不修复输入；仅对零除数报错
// ==========================================

use crate::domain::production::{KpiResult, ProductionRecord};
use crate::engine::error::{ComputationError, ComputationResult, Denominator};
use tracing::debug;

// ==========================================
// KpiEngine - KPI 计算引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct KpiEngine {
    // 无状态引擎
}

impl KpiEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 批量计算
    ///
    /// # 返回
    /// - Ok(Vec<KpiResult>): 与输入等长、同序
    /// - Err(ComputationError): 空批次或任一记录出现零除数
    pub fn compute_batch(&self, records: &[ProductionRecord]) -> ComputationResult<Vec<KpiResult>> {
        if records.is_empty() {
            return Err(ComputationError::EmptyBatch);
        }

        let results = records
            .iter()
            .enumerate()
            .map(|(idx, record)| self.compute_record(record, idx + 1))
            .collect::<ComputationResult<Vec<_>>>()?;

        debug!(records = results.len(), "KPI 批量计算完成");
        Ok(results)
    }

    /// 单条计算
    ///
    /// # 参数
    /// - record: 生产记录
    /// - record_no: 记录序号（从 1 开始，仅用于错误定位）
    pub fn compute_record(
        &self,
        record: &ProductionRecord,
        record_no: usize,
    ) -> ComputationResult<KpiResult> {
        let zero = |denominator| ComputationError::ZeroDenominator {
            record: record_no,
            denominator,
        };

        // NaN/inf 无法归入任何色带，直接拒绝
        let non_finite = |field, value: f64| ComputationError::NonFiniteValue {
            record: record_no,
            field,
            value,
        };
        for (field, value) in [
            ("planned_production_time", record.planned_production_time),
            ("downtime", record.downtime),
            ("ideal_cycle_time", record.ideal_cycle_time),
        ] {
            if !value.is_finite() {
                return Err(non_finite(field, value));
            }
        }

        if record.planned_production_time == 0.0 {
            return Err(zero(Denominator::PlannedProductionTime));
        }
        if record.total_count == 0 {
            return Err(zero(Denominator::TotalCount));
        }
        if record.ideal_cycle_time == 0.0 {
            return Err(zero(Denominator::IdealCycleTime));
        }

        // 1. 时间利用
        let run_time = record.planned_production_time - record.downtime;
        if run_time == 0.0 {
            return Err(zero(Denominator::RunTime));
        }
        let availability = run_time / record.planned_production_time;

        // 2. 速度与质量
        let total = record.total_count as f64;
        let good = record.good_count as f64;
        let performance = (record.ideal_cycle_time * total) / run_time;
        let quality = good / total;
        let oee = availability * performance * quality;

        // 3. 废品
        let scrap_count = record
            .total_count
            .checked_sub(record.good_count)
            .ok_or(ComputationError::CountOverflow { record: record_no })?;
        let scrap_rate_pct = (scrap_count as f64 / total) * 100.0;

        // 4. 计划产出达成
        let planned_output = record.planned_production_time / record.ideal_cycle_time;
        if planned_output == 0.0 {
            return Err(zero(Denominator::PlannedOutput));
        }
        let yield_pct = (good / planned_output) * 100.0;

        // 极端输入可能使中间结果溢出为 inf
        for (field, value) in [
            ("run_time", run_time),
            ("availability", availability),
            ("performance", performance),
            ("quality", quality),
            ("oee", oee),
            ("scrap_rate_pct", scrap_rate_pct),
            ("planned_output", planned_output),
            ("yield_pct", yield_pct),
        ] {
            if !value.is_finite() {
                return Err(non_finite(field, value));
            }
        }

        Ok(KpiResult {
            record: record.clone(),
            run_time,
            availability,
            performance,
            quality,
            oee,
            scrap_count,
            scrap_rate_pct,
            planned_output,
            yield_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn reference_record() -> ProductionRecord {
        ProductionRecord::new(480.0, 60.0, 1000, 950, 0.4)
    }

    #[test]
    fn test_reference_scenario() {
        let result = KpiEngine::new().compute_record(&reference_record(), 1).unwrap();

        assert!((result.run_time - 420.0).abs() < EPS);
        assert!((result.availability - 0.875).abs() < EPS);
        assert!((result.performance - 400.0 / 420.0).abs() < EPS);
        assert!((result.quality - 0.95).abs() < EPS);
        assert!((result.oee - 0.875 * (400.0 / 420.0) * 0.95).abs() < EPS);
        assert_eq!(result.scrap_count, 50);
        assert!((result.scrap_rate_pct - 5.0).abs() < EPS);
        assert!((result.planned_output - 1200.0).abs() < EPS);
        assert!((result.yield_pct - 950.0 / 1200.0 * 100.0).abs() < EPS);
    }

    #[test]
    fn test_no_downtime_full_availability() {
        let mut record = reference_record();
        record.downtime = 0.0;
        let result = KpiEngine::new().compute_record(&record, 1).unwrap();
        assert_eq!(result.availability, 1.0);
    }

    #[test]
    fn test_run_time_zero_rejected() {
        let mut record = reference_record();
        record.downtime = 480.0;
        let err = KpiEngine::new().compute_record(&record, 3).unwrap_err();
        assert_eq!(
            err,
            ComputationError::ZeroDenominator {
                record: 3,
                denominator: Denominator::RunTime
            }
        );
    }

    #[test]
    fn test_unvalidated_values_not_clamped() {
        // good > total, downtime > planned: 原样输出
        let record = ProductionRecord::new(100.0, 150.0, 10, 12, 1.0);
        let result = KpiEngine::new().compute_record(&record, 1).unwrap();
        assert_eq!(result.scrap_count, -2);
        assert!(result.availability < 0.0);
        assert!(result.quality > 1.0);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let mut record = reference_record();
        record.planned_production_time = f64::NAN;
        let err = KpiEngine::new().compute_record(&record, 2).unwrap_err();
        assert!(matches!(
            err,
            ComputationError::NonFiniteValue {
                record: 2,
                field: "planned_production_time",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let err = KpiEngine::new().compute_batch(&[]).unwrap_err();
        assert_eq!(err, ComputationError::EmptyBatch);
    }
}
