// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use oee_kpi::ProductionRecord;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// 标准上传表头
pub const CSV_HEADER: &str =
    "Description,Planned Production Time,Downtime,Total Count,Good Count,Ideal Cycle Time";

// ==========================================
// ProductionRecord 构建器
// ==========================================
// 默认值为参考场景: 480 / 60 / 1000 / 950 / 0.4
pub struct RecordBuilder {
    description: Option<String>,
    planned_production_time: f64,
    downtime: f64,
    total_count: i64,
    good_count: i64,
    ideal_cycle_time: f64,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            description: None,
            planned_production_time: 480.0,
            downtime: 60.0,
            total_count: 1000,
            good_count: 950,
            ideal_cycle_time: 0.4,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn planned(mut self, minutes: f64) -> Self {
        self.planned_production_time = minutes;
        self
    }

    pub fn downtime(mut self, minutes: f64) -> Self {
        self.downtime = minutes;
        self
    }

    pub fn counts(mut self, total: i64, good: i64) -> Self {
        self.total_count = total;
        self.good_count = good;
        self
    }

    pub fn cycle_time(mut self, minutes: f64) -> Self {
        self.ideal_cycle_time = minutes;
        self
    }

    pub fn build(self) -> ProductionRecord {
        let record = ProductionRecord::new(
            self.planned_production_time,
            self.downtime,
            self.total_count,
            self.good_count,
            self.ideal_cycle_time,
        );
        match self.description {
            Some(d) => record.with_description(d),
            None => record,
        }
    }
}

/// 写入临时 CSV 文件（首行为表头）
pub fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut temp_file = Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp csv");
    writeln!(temp_file, "{}", header).unwrap();
    for row in rows {
        writeln!(temp_file, "{}", row).unwrap();
    }
    temp_file.flush().unwrap();
    temp_file
}
