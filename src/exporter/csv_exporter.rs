// ==========================================
// OEE KPI 计算工具 - CSV 导出器
// ==========================================
// 输入数据导出: 6 列输入字段
// 结果导出: 输入字段 + 全部派生字段
// 格式: 表头一行，每条记录一行，分隔符可配置
// ==========================================

use crate::config::AppConfig;
use crate::domain::production::{KpiResult, ProductionRecord};
use crate::exporter::error::{ExportError, ExportResult};
use crate::importer::field_mapper::columns;
use csv::WriterBuilder;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// 输入数据表头
pub const INPUT_HEADERS: [&str; 6] = [
    columns::DESCRIPTION,
    columns::PLANNED_PRODUCTION_TIME,
    columns::DOWNTIME,
    columns::TOTAL_COUNT,
    columns::GOOD_COUNT,
    columns::IDEAL_CYCLE_TIME,
];

/// 派生字段表头（接在输入字段之后）
pub const DERIVED_HEADERS: [&str; 9] = [
    "Run Time",
    "Availability",
    "Performance",
    "Quality",
    "OEE",
    "Scrap Count",
    "Scrap Rate (%)",
    "Planned Output",
    "Yield vs. Planned Output (%)",
];

/// 导出文件路径
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub input_path: PathBuf,
    pub result_path: PathBuf,
}

// ==========================================
// CsvExporter - CSV 导出器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    delimiter: u8,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl CsvExporter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// 写出输入数据
    pub fn write_inputs<W: Write>(&self, writer: W, records: &[ProductionRecord]) -> ExportResult<()> {
        let mut wtr = WriterBuilder::new().delimiter(self.delimiter).from_writer(writer);
        wtr.write_record(INPUT_HEADERS)?;
        for record in records {
            wtr.write_record(input_fields(record))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// 写出完整结果表
    pub fn write_results<W: Write>(&self, writer: W, results: &[KpiResult]) -> ExportResult<()> {
        let mut wtr = WriterBuilder::new().delimiter(self.delimiter).from_writer(writer);
        wtr.write_record(INPUT_HEADERS.iter().chain(DERIVED_HEADERS.iter()))?;
        for result in results {
            let mut row = input_fields(&result.record);
            row.extend([
                result.run_time.to_string(),
                result.availability.to_string(),
                result.performance.to_string(),
                result.quality.to_string(),
                result.oee.to_string(),
                result.scrap_count.to_string(),
                result.scrap_rate_pct.to_string(),
                result.planned_output.to_string(),
                result.yield_pct.to_string(),
            ]);
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn inputs_to_string(&self, records: &[ProductionRecord]) -> ExportResult<String> {
        let mut buf = Vec::new();
        self.write_inputs(&mut buf, records)?;
        into_utf8(buf)
    }

    pub fn results_to_string(&self, results: &[KpiResult]) -> ExportResult<String> {
        let mut buf = Vec::new();
        self.write_results(&mut buf, results)?;
        into_utf8(buf)
    }

    /// 导出到目录（输入数据 + 结果两个文件，文件名取自配置）
    pub fn export_to_dir(
        &self,
        dir: &Path,
        config: &AppConfig,
        results: &[KpiResult],
    ) -> ExportResult<ExportedFiles> {
        fs::create_dir_all(dir)
            .map_err(|e| ExportError::DirectoryError(format!("{}: {}", dir.display(), e)))?;

        let input_path = dir.join(&config.export.input_file_name);
        let result_path = dir.join(&config.export.result_file_name);

        let records: Vec<ProductionRecord> = results.iter().map(|r| r.record.clone()).collect();
        self.write_inputs(File::create(&input_path)?, &records)?;
        self.write_results(File::create(&result_path)?, results)?;

        info!(
            input = %input_path.display(),
            result = %result_path.display(),
            rows = results.len(),
            "CSV 导出完成"
        );
        Ok(ExportedFiles {
            input_path,
            result_path,
        })
    }
}

fn input_fields(record: &ProductionRecord) -> Vec<String> {
    vec![
        record.description.clone().unwrap_or_default(),
        record.planned_production_time.to_string(),
        record.downtime.to_string(),
        record.total_count.to_string(),
        record.good_count.to_string(),
        record.ideal_cycle_time.to_string(),
    ]
}

fn into_utf8(buf: Vec<u8>) -> ExportResult<String> {
    String::from_utf8(buf).map_err(|e| ExportError::CsvWriteError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::KpiEngine;

    #[test]
    fn test_inputs_csv() {
        let records = vec![
            ProductionRecord::new(480.0, 60.0, 1000, 950, 0.4).with_description("Line A"),
            ProductionRecord::new(450.0, 0.0, 900, 900, 0.5),
        ];
        let csv = CsvExporter::default().inputs_to_string(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Description,Planned Production Time,Downtime,Total Count,Good Count,Ideal Cycle Time"
        );
        assert_eq!(lines[1], "Line A,480,60,1000,950,0.4");
        assert_eq!(lines[2], ",450,0,900,900,0.5");
    }

    #[test]
    fn test_results_csv_has_all_columns() {
        let records = vec![ProductionRecord::new(480.0, 60.0, 1000, 950, 0.4)];
        let results = KpiEngine::new().compute_batch(&records).unwrap();

        let csv = CsvExporter::new(b';').results_to_string(&results).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        let header: Vec<&str> = lines[0].split(';').collect();
        let row: Vec<&str> = lines[1].split(';').collect();

        assert_eq!(header.len(), 15);
        assert_eq!(header[14], "Yield vs. Planned Output (%)");
        assert_eq!(row.len(), 15);
        assert_eq!(row[6], "420"); // Run Time
        assert_eq!(row[7], "0.875"); // Availability
        assert_eq!(row[11], "50"); // Scrap Count
        assert_eq!(row[13], "1200"); // Planned Output
    }
}
