// ==========================================
// 机场资费管理系统 - 配置层
// ==========================================
// 职责: 运行期配置（数据库位置）
// ==========================================

pub mod app_config;

// 重导出
pub use app_config::{get_default_db_path, AppConfig, DB_PATH_ENV, DEFAULT_DB_FILE_NAME};
