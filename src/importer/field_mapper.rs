// ==========================================
// OEE KPI 计算工具 - 字段映射器实现
// ==========================================
// 职责: 列校验 + 源字段 → ProductionRecord 映射 + 类型转换
// ==========================================

use crate::domain::production::ProductionRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

// ==========================================
// 标准列名
// ==========================================
pub mod columns {
    pub const DESCRIPTION: &str = "Description";
    pub const PLANNED_PRODUCTION_TIME: &str = "Planned Production Time";
    pub const DOWNTIME: &str = "Downtime";
    pub const TOTAL_COUNT: &str = "Total Count";
    pub const GOOD_COUNT: &str = "Good Count";
    pub const IDEAL_CYCLE_TIME: &str = "Ideal Cycle Time";

    /// 必填列（顺序即缺失提示顺序）
    pub const REQUIRED: [&str; 5] = [
        PLANNED_PRODUCTION_TIME,
        DOWNTIME,
        TOTAL_COUNT,
        GOOD_COUNT,
        IDEAL_CYCLE_TIME,
    ];
}

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn check_required_columns(&self, headers: &[String]) -> ImportResult<()> {
        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns(missing))
        }
    }

    fn map_to_record(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ProductionRecord> {
        Ok(ProductionRecord {
            description: self.get_string(row, columns::DESCRIPTION),
            planned_production_time: self.parse_f64(row, columns::PLANNED_PRODUCTION_TIME, row_number)?,
            downtime: self.parse_f64(row, columns::DOWNTIME, row_number)?,
            total_count: self.parse_count(row, columns::TOTAL_COUNT, row_number)?,
            good_count: self.parse_count(row, columns::GOOD_COUNT, row_number)?,
            ideal_cycle_time: self.parse_f64(row, columns::IDEAL_CYCLE_TIME, row_number)?,
        })
    }
}

impl FieldMapper {
    /// 提取字符串字段（空白视为缺失）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }

    fn require(&self, row: &HashMap<String, String>, key: &str, row_number: usize) -> ImportResult<String> {
        self.get_string(row, key).ok_or_else(|| ImportError::MissingField {
            row: row_number,
            field: key.to_string(),
        })
    }

    /// 解析浮点数
    fn parse_f64(&self, row: &HashMap<String, String>, key: &str, row_number: usize) -> ImportResult<f64> {
        let value = self.require(row, key, row_number)?;
        value
            .parse::<f64>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为浮点数: {}", value),
            })
    }

    /// 解析件数（接受 "1000" 与 "1000.0" 两种写法）
    fn parse_count(&self, row: &HashMap<String, String>, key: &str, row_number: usize) -> ImportResult<i64> {
        let value = self.require(row, key, row_number)?;
        if let Ok(count) = value.parse::<i64>() {
            return Ok(count);
        }

        match value.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数: {}", value),
            }),
        }
    }
}
