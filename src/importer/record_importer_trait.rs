// ==========================================
// OEE KPI 计算工具 - 生产记录导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 管道: 文件解析 → 列校验 → 字段映射 → 数据质量校验
// ==========================================

use crate::domain::production::{DqViolation, ProductionRecord};
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawTable - 原始表格
// ==========================================
// 保留表头: 无数据行时仍需做列校验
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格（表头 + 行记录 HashMap<列名, 值>）
    ///
    /// # 返回
    /// - Ok(RawTable): 已跳过完全空白的行
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 列校验 + 字段映射接口（阶段 1）
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 校验必填列是否齐全
    ///
    /// # 返回
    /// - Err(ImportError::MissingColumns): 列出全部缺失列
    fn check_required_columns(&self, headers: &[String]) -> ImportResult<()>;

    /// 将原始行记录映射为 ProductionRecord
    ///
    /// # 参数
    /// - row: 原始行记录
    /// - row_number: 数据行号（从 1 开始，用于错误定位）
    fn map_to_record(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ProductionRecord>;
}

// ==========================================
// DqValidator Trait
// ==========================================
// 用途: 数据质量校验接口（阶段 2）
// 实现者: DqValidatorImpl
pub trait DqValidator: Send + Sync {
    /// 校验单条记录
    fn validate_record(&self, record: &ProductionRecord, row_number: usize) -> Vec<DqViolation>;

    /// 校验整批记录（行号从 1 开始）
    fn validate_batch(&self, records: &[ProductionRecord]) -> Vec<DqViolation> {
        records
            .iter()
            .enumerate()
            .flat_map(|(idx, record)| self.validate_record(record, idx + 1))
            .collect()
    }
}
