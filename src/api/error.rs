// ==========================================
// 机场资费管理系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，交给调用方（界面）展示
// 约束: 不吞错误，不部分成功
// ==========================================

use crate::domain::error::ValidationError;
use crate::importer::error::{FormatError, ImportError};
use crate::repository::error::StoreError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 输入校验失败（尚未触碰资费表）
    #[error("数据验证失败: {0}")]
    ValidationError(#[from] ValidationError),

    /// 交换文件格式错误（资费表未修改）
    #[error("文件格式错误: {0}")]
    FormatError(#[from] FormatError),

    /// 存储失败
    #[error("数据库错误: {0}")]
    StoreError(#[from] StoreError),

    /// 文件读写失败
    #[error("文件访问失败 ({path}): {source}")]
    FileError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ==========================================
// 从 ImportError 转换
// 目的: 导入导出的所有失败统一为一个描述性错误
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileReadError { path, source }
            | ImportError::FileWriteError { path, source } => ApiError::FileError { path, source },
            ImportError::Format(e) => ApiError::FormatError(e),
            ImportError::Store(e) => ApiError::StoreError(e),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
