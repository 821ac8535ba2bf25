// ==========================================
// OEE KPI 计算工具 - 导入层
// ==========================================
// 职责: 外部表格数据导入,生成生产记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod record_importer;
pub mod record_importer_trait;

// 重导出核心类型
pub use dq_validator::DqValidator as DqValidatorImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{columns, FieldMapper as FieldMapperImpl};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use record_importer::RecordImporter;

// 重导出 Trait 接口
pub use record_importer_trait::{DqValidator, FieldMapper, FileParser, RawTable};
