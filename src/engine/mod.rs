// ==========================================
// 机场资费管理系统 - 查询引擎层
// ==========================================
// 职责: 快照上的纯计算（最高价、排序）
// 红线: 不做持久化
// ==========================================

pub mod tariff_query;

// 重导出
pub use tariff_query::{find_max_final_price, sort_by_final_price, SortDirection};
