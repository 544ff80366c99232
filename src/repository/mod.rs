// ==========================================
// 机场资费管理系统 - 数据仓储层
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod error;
pub mod tariff_repo;

// 重导出核心仓储
pub use error::{StoreError, StoreResult};
pub use tariff_repo::TariffRepository;
