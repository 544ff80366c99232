// ==========================================
// 机场资费管理系统 - 导入导出层
// ==========================================
// 职责: 交换格式编解码，文件备份与整体替换导入
// ==========================================

pub mod error;
pub mod interchange;
pub mod tariff_file;

// 重导出核心类型
pub use error::{FormatError, ImportError, ImportResult};
pub use interchange::{decode, encode, replace_store_from};
pub use tariff_file::{export_to_file, import_from_file};
