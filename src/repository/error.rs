// ==========================================
// 机场资费管理系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约束: 不自动重试，底层原因原样附带
// ==========================================

use crate::domain::error::ValidationError;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    // ===== 数据库错误 =====
    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(#[source] rusqlite::Error),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("数据库事务失败: {0}")]
    DatabaseTransactionError(#[source] rusqlite::Error),

    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(#[source] rusqlite::Error),

    // ===== 数据质量错误 =====
    #[error("资费记录损坏 (id={id}): {source}")]
    CorruptRow {
        id: i64,
        #[source]
        source: ValidationError,
    },
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::DatabaseQueryError(err)
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
