// ==========================================
// OEE KPI 计算工具 - 生产记录导入器
// ==========================================
// 职责: 整合导入流程，从文件到生产记录列表
// 流程: 解析 → 列校验 → 字段映射
// 约束: 任一阶段失败即中止，不返回部分结果
// ==========================================

use crate::domain::production::ProductionRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::record_importer_trait::{FieldMapper, FileParser, RawTable};
use std::path::Path;
use tracing::{debug, error, info, instrument};

// ==========================================
// RecordImporter - 生产记录导入器
// ==========================================
pub struct RecordImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl Default for RecordImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), Box::new(FieldMapperImpl))
    }
}

impl RecordImporter {
    /// 创建新的 RecordImporter 实例
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - field_mapper: 字段映射器
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// 从文件导入生产记录
    ///
    /// # 返回
    /// - Ok(Vec<ProductionRecord>): 至少 1 条记录，顺序与文件一致
    /// - Err(ImportError): 解析失败 / 缺少必填列 / 无数据行 / 字段转换失败
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<ProductionRecord>> {
        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let table = self
            .file_parser
            .parse_to_raw_table(file_path.as_ref())
            .map_err(|e| {
                error!(error = %e, "文件解析失败");
                e
            })?;
        info!(total_rows = table.rows.len(), "文件解析完成");

        self.import_table(table)
    }

    /// 从已解析表格导入（步骤 2~3）
    pub fn import_table(&self, table: RawTable) -> ImportResult<Vec<ProductionRecord>> {
        // === 步骤 2: 列校验 ===
        debug!("步骤 2: 列校验");
        self.field_mapper.check_required_columns(&table.headers)?;

        if table.rows.is_empty() {
            return Err(ImportError::NoDataRows);
        }

        // === 步骤 3: 字段映射 ===
        debug!("步骤 3: 字段映射");
        let records = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.field_mapper.map_to_record(row, idx + 1))
            .collect::<ImportResult<Vec<_>>>()?;

        info!(records = records.len(), "字段映射完成");
        Ok(records)
    }
}
