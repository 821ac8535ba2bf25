// ==========================================
// OEE KPI 计算工具 - 导出层
// ==========================================
// 职责: 输入数据与 KPI 结果表导出为分隔文本
// ==========================================

pub mod csv_exporter;
pub mod error;

pub use csv_exporter::{CsvExporter, ExportedFiles, DERIVED_HEADERS, INPUT_HEADERS};
pub use error::{ExportError, ExportResult};
