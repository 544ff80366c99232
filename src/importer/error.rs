// ==========================================
// 机场资费管理系统 - 导入导出错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::error::ValidationError;
use crate::repository::error::StoreError;
use thiserror::Error;

/// 交换格式解码错误
///
/// 解码在任何写库操作之前完成，因此出现该错误时资费表保持不变。
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("行格式错误 (行 {line_no}): 期望 3 个字段，实际 {field_count} 个: {line}")]
    FieldCount {
        line_no: u64,
        field_count: usize,
        line: String,
    },

    #[error("数字格式错误 (行 {line_no}, 字段 {field}): {value}")]
    InvalidNumber {
        line_no: u64,
        field: &'static str,
        value: String,
    },

    #[error("资费记录无效 (行 {line_no}): {source}: {line}")]
    InvalidRecord {
        line_no: u64,
        line: String,
        #[source]
        source: ValidationError,
    },
}

impl FormatError {
    /// 出错行原文（若有）
    pub fn line(&self) -> Option<&str> {
        match self {
            FormatError::FieldCount { line, .. } | FormatError::InvalidRecord { line, .. } => {
                Some(line.as_str())
            }
            FormatError::InvalidNumber { .. } => None,
        }
    }
}

/// 导入导出错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件读取失败 ({path}): {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("文件写入失败 ({path}): {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ===== 格式错误 =====
    #[error(transparent)]
    Format(#[from] FormatError),

    // ===== 数据库错误 =====
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
