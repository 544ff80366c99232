// ==========================================
// 机场资费管理系统 - 应用配置
// ==========================================
// 职责: 解析数据库文件路径
// 优先级: 显式指定 > 环境变量 > 用户主目录 > 当前目录
// ==========================================

use std::path::{Path, PathBuf};

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "AIRPORT_TARIFFS_DB_PATH";

/// 默认数据库文件名
pub const DEFAULT_DB_FILE_NAME: &str = "airport.db";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 数据库文件路径
    pub db_path: PathBuf,
}

impl AppConfig {
    /// 按优先级解析配置
    ///
    /// # 参数
    /// - db_path: 命令行显式指定的路径（可选）
    pub fn resolve(db_path: Option<&Path>) -> Self {
        let db_path = match db_path {
            Some(path) => path.to_path_buf(),
            None => get_default_db_path(),
        };
        Self { db_path }
    }
}

/// 默认数据库路径
///
/// 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI），
/// 否则放在用户主目录下，保证数据不随工作目录丢失。
pub fn get_default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_DB_FILE_NAME),
        None => PathBuf::from(".").join(DEFAULT_DB_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = AppConfig::resolve(Some(Path::new("/tmp/custom.db")));
        assert_eq!(config.db_path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_default_path_file_name() {
        // 环境变量可能被外部设置，这里只检查未设置时的文件名
        if std::env::var(DB_PATH_ENV).is_err() {
            let path = get_default_db_path();
            assert!(path.ends_with(DEFAULT_DB_FILE_NAME));
        }
    }
}
