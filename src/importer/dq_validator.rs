// ==========================================
// OEE KPI 计算工具 - 数据质量校验器实现
// ==========================================
// 职责: 生产记录取值范围与一致性校验
// 规则: 计划时间 > 0 / 停机 ∈ [0, 计划时间] / 总产量 > 0 /
//       良品 ∈ [0, 总产量] / 理想节拍 > 0 / 实数均为有限值
// ==========================================

use crate::domain::production::{DqViolation, ProductionRecord};
use crate::importer::field_mapper::columns;
use crate::importer::record_importer_trait::DqValidator as DqValidatorTrait;

#[derive(Debug, Default, Clone, Copy)]
pub struct DqValidator;

impl DqValidator {
    pub fn new() -> Self {
        Self
    }
}

impl DqValidatorTrait for DqValidator {
    fn validate_record(&self, record: &ProductionRecord, row_number: usize) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        let mut push = |field: &str, message: String| {
            violations.push(DqViolation {
                row_number,
                field: field.to_string(),
                message,
            });
        };

        // 实数字段必须为有限值
        for (field, value) in [
            (columns::PLANNED_PRODUCTION_TIME, record.planned_production_time),
            (columns::DOWNTIME, record.downtime),
            (columns::IDEAL_CYCLE_TIME, record.ideal_cycle_time),
        ] {
            if !value.is_finite() {
                push(field, format!("非有限数值: {}", value));
            }
        }

        // 计划生产时间
        if record.planned_production_time <= 0.0 {
            push(
                columns::PLANNED_PRODUCTION_TIME,
                format!("计划生产时间必须 > 0: {}", record.planned_production_time),
            );
        }

        // 停机时间
        if record.downtime < 0.0 {
            push(columns::DOWNTIME, format!("停机时间为负数: {}", record.downtime));
        } else if record.downtime > record.planned_production_time {
            push(
                columns::DOWNTIME,
                format!(
                    "停机时间 ({}) 超过计划生产时间 ({})",
                    record.downtime, record.planned_production_time
                ),
            );
        }

        // 产量
        if record.total_count <= 0 {
            push(columns::TOTAL_COUNT, format!("总产量必须 > 0: {}", record.total_count));
        }
        if record.good_count < 0 {
            push(columns::GOOD_COUNT, format!("良品数为负数: {}", record.good_count));
        } else if record.good_count > record.total_count {
            push(
                columns::GOOD_COUNT,
                format!(
                    "良品数 ({}) 超过总产量 ({})",
                    record.good_count, record.total_count
                ),
            );
        }

        // 理想节拍
        if record.ideal_cycle_time <= 0.0 {
            push(
                columns::IDEAL_CYCLE_TIME,
                format!("理想节拍必须 > 0: {}", record.ideal_cycle_time),
            );
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> ProductionRecord {
        ProductionRecord::new(480.0, 60.0, 1000, 950, 0.4)
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(DqValidator::new().validate_record(&create_test_record(), 1).is_empty());
    }

    #[test]
    fn test_good_count_exceeds_total() {
        let mut record = create_test_record();
        record.good_count = 1001;

        let violations = DqValidator::new().validate_record(&record, 3);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].row_number, 3);
        assert_eq!(violations[0].field, "Good Count");
    }

    #[test]
    fn test_downtime_exceeds_planned() {
        let mut record = create_test_record();
        record.downtime = 500.0;

        let violations = DqValidator::new().validate_record(&record, 1);

        assert!(violations
            .iter()
            .any(|v| v.field == "Downtime" && v.message.contains("超过计划生产时间")));
    }

    #[test]
    fn test_zero_inputs_reported() {
        let record = ProductionRecord::new(0.0, 0.0, 0, 0, 0.0);
        let fields: Vec<String> = DqValidator::new()
            .validate_record(&record, 1)
            .into_iter()
            .map(|v| v.field)
            .collect();

        assert_eq!(
            fields,
            vec!["Planned Production Time", "Total Count", "Ideal Cycle Time"]
        );
    }

    #[test]
    fn test_batch_row_numbers() {
        let mut bad = create_test_record();
        bad.good_count = -1;
        let violations = DqValidator::new().validate_batch(&[create_test_record(), bad]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].row_number, 2);
    }
}
