// ==========================================
// OEE KPI 计算工具 - KPI 计算 API
// ==========================================
// 职责: 单次请求编排（人工录入 / 文件上传）
// 流程: 导入 → 数据质量校验 → KPI 计算 → 展示映射
// 约束: 无跨请求状态；校验/解析失败时不返回部分结果
// ==========================================

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::domain::production::{DqViolation, KpiResult, ProductionRecord};
use crate::domain::types::ValidationMode;
use crate::engine::{Dashboard, KpiEngine, PresentationMapper, ResultTable};
use crate::exporter::{CsvExporter, ExportedFiles};
use crate::importer::{DqValidator, DqValidatorImpl, RecordImporter};

// ==========================================
// 请求来源
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportSource {
    Manual,
    Upload { file_name: String },
}

// ==========================================
// KpiReport - 单次计算报告
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct KpiReport {
    pub batch_id: String,
    pub generated_at: NaiveDateTime,
    pub source: ReportSource,
    pub validation_mode: ValidationMode,
    pub results: Vec<KpiResult>,
    pub dashboard: Dashboard,
    /// 宽松模式下放行的数据质量违规
    pub dq_violations: Vec<DqViolation>,
}

impl KpiReport {
    pub fn is_batch(&self) -> bool {
        self.results.len() > 1
    }

    /// 结果汇总表
    pub fn summary_table(&self) -> ResultTable {
        ResultTable::from_results(&self.results)
    }
}

// ==========================================
// KpiApi - KPI 计算 API
// ==========================================
pub struct KpiApi {
    config: AppConfig,
    importer: RecordImporter,
    dq_validator: Box<dyn DqValidator>,
    engine: KpiEngine,
    mapper: PresentationMapper,
}

impl KpiApi {
    /// 创建新的 KpiApi 实例
    ///
    /// # 返回
    /// - Err(ApiError::ConfigError): 配置值非法（语言、分隔符、导出文件名）
    pub fn new(config: AppConfig) -> ApiResult<Self> {
        config.validate()?;

        let mapper = PresentationMapper::new(config.locale.clone());
        Ok(Self {
            config,
            importer: RecordImporter::default(),
            dq_validator: Box::new(DqValidatorImpl::new()),
            engine: KpiEngine::new(),
            mapper,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ==========================================
    // 计算接口
    // ==========================================

    /// 人工录入单条记录
    pub fn calculate_manual(&self, record: ProductionRecord) -> ApiResult<KpiReport> {
        self.calculate_records(vec![record], ReportSource::Manual)
    }

    /// 上传文件（CSV / Excel）
    ///
    /// # 返回
    /// - Ok(KpiReport): 1 行 → 单记录仪表盘；多行 → 批量基准对比图
    /// - Err(ApiError): 解析错误 / 缺列 / 数据质量 / 零除数
    pub fn calculate_upload<P: AsRef<Path>>(&self, file_path: P) -> ApiResult<KpiReport> {
        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let records = self.importer.import_file(path).map_err(|e| {
            error!(file = %file_name, error = %e, "文件导入失败");
            ApiError::from(e)
        })?;

        self.calculate_records(records, ReportSource::Upload { file_name })
    }

    /// 通用入口: 已映射的记录
    pub fn calculate_records(
        &self,
        records: Vec<ProductionRecord>,
        source: ReportSource,
    ) -> ApiResult<KpiReport> {
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, records = records.len(), "开始 KPI 计算");

        if records.is_empty() {
            return Err(ApiError::ValidationError("至少需要一条生产记录".to_string()));
        }

        // 1. 数据质量校验
        let dq_violations = self.check_data_quality(&records)?;

        // 2. KPI 计算
        let results = self.engine.compute_batch(&records).map_err(|e| {
            error!(batch_id = %batch_id, error = %e, "KPI 计算失败");
            ApiError::from(e)
        })?;

        // 3. 展示映射
        let dashboard = self.mapper.render(&results);
        let alert_count = dashboard.alert_messages().len();

        info!(
            batch_id = %batch_id,
            records = results.len(),
            alerts = alert_count,
            "KPI 计算完成"
        );

        Ok(KpiReport {
            batch_id,
            generated_at: Utc::now().naive_utc(),
            source,
            validation_mode: self.config.validation_mode,
            results,
            dashboard,
            dq_violations,
        })
    }

    // ==========================================
    // 导出接口
    // ==========================================

    /// 导出输入数据与结果表到目录
    pub fn export_report(&self, report: &KpiReport, dir: &Path) -> ApiResult<ExportedFiles> {
        let exporter = CsvExporter::new(self.config.export_delimiter());
        Ok(exporter.export_to_dir(dir, &self.config, &report.results)?)
    }

    /// 结果表 CSV 文本
    pub fn results_csv(&self, report: &KpiReport) -> ApiResult<String> {
        let exporter = CsvExporter::new(self.config.export_delimiter());
        Ok(exporter.results_to_string(&report.results)?)
    }

    // ==========================================
    // 内部方法
    // ==========================================

    /// 按校验模式处理数据质量违规
    fn check_data_quality(&self, records: &[ProductionRecord]) -> ApiResult<Vec<DqViolation>> {
        let violations = self.dq_validator.validate_batch(records);
        if violations.is_empty() {
            return Ok(violations);
        }

        match self.config.validation_mode {
            ValidationMode::Strict => {
                let reason = violations
                    .iter()
                    .map(|v| format!("行 {} {}: {}", v.row_number, v.field, v.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                error!(violations = violations.len(), "数据质量校验未通过");
                Err(ApiError::DataQualityError { reason, violations })
            }
            ValidationMode::Lenient => {
                for v in &violations {
                    warn!(row = v.row_number, field = %v.field, "宽松模式放行: {}", v.message);
                }
                Ok(violations)
            }
        }
    }
}
