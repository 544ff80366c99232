// ==========================================
// 机场资费管理系统 - 交换文件导入导出
// ==========================================
// 文件: UTF-8 文本，每行一条记录，换行结尾
// 导入: 整体替换（先清空再加载），解码失败不修改资费表
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::interchange;
use crate::repository::tariff_repo::TariffRepository;
use std::fs;
use std::path::Path;

/// 导出全部资费到交换文件
///
/// # 返回
/// 导出的资费条数
pub fn export_to_file<P: AsRef<Path>>(path: P, repo: &TariffRepository) -> ImportResult<usize> {
    let path = path.as_ref();
    let tariffs = repo.list_all()?;
    let text = interchange::encode(&tariffs);

    fs::write(path, text).map_err(|source| ImportError::FileWriteError {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = tariffs.len(), "资费已导出");
    Ok(tariffs.len())
}

/// 从交换文件整体替换资费表
///
/// # 返回
/// 导入的资费条数
pub fn import_from_file<P: AsRef<Path>>(path: P, repo: &TariffRepository) -> ImportResult<usize> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ImportError::FileReadError {
        path: path.display().to_string(),
        source,
    })?;

    let count = interchange::replace_store_from(&text, repo)?;
    tracing::info!(path = %path.display(), count, "资费已从文件导入");
    Ok(count)
}
