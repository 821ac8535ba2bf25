// ==========================================
// OEE KPI 计算工具 - API层错误类型
// ==========================================
// 职责: 将各层技术错误归并为三类用户可见错误
//       校验错误 (Validation) / 计算错误 (Computation) / 解析错误 (Parse)
// 约束: 所有错误信息必须包含显式原因
// ==========================================

use crate::config::ConfigError;
use crate::domain::production::DqViolation;
use crate::engine::ComputationError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 校验错误
    // ==========================================
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    /// 数据质量校验失败（带逐条违规明细）
    #[error("数据质量校验失败: {reason}")]
    DataQualityError {
        reason: String,
        violations: Vec<DqViolation>,
    },

    // ==========================================
    // 计算错误
    // ==========================================
    #[error("KPI 计算失败: {0}")]
    ComputationError(#[from] ComputationError),

    // ==========================================
    // 解析错误
    // ==========================================
    #[error("文件解析失败: {0}")]
    ParseError(String),

    // ==========================================
    // 外围错误
    // ==========================================
    #[error("导出失败: {0}")]
    ExportError(#[from] ExportError),

    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),

}

impl ApiError {
    /// 是否属于校验类错误
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::ValidationError(_) | ApiError::DataQualityError { .. }
        )
    }
}

// ==========================================
// 从 ImportError 转换
// 目的: 按错误性质归入校验类或解析类
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        if err.is_validation() {
            ApiError::ValidationError(err.to_string())
        } else {
            ApiError::ParseError(err.to_string())
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
