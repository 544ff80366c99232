// ==========================================
// 机场资费管理系统 - 资费API
// ==========================================
// 职责: 界面层调用核心的唯一入口
// 约束: 界面不做校验与持久化，全部经由此处
// ==========================================

use std::path::Path;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::validator::{
    validate_destination, validate_number, FIELD_BASE_PRICE, FIELD_DISCOUNT,
};
use crate::domain::discount::DiscountPolicy;
use crate::domain::error::ValidationResult;
use crate::domain::tariff::Tariff;
use crate::engine::tariff_query::{self, SortDirection};
use crate::importer::tariff_file;
use crate::repository::tariff_repo::TariffRepository;

// ==========================================
// TariffApi - 资费API
// ==========================================
pub struct TariffApi {
    tariff_repo: Arc<TariffRepository>,
}

impl TariffApi {
    /// 创建新的TariffApi实例
    pub fn new(tariff_repo: Arc<TariffRepository>) -> Self {
        Self { tariff_repo }
    }

    // ==========================================
    // 实体构造
    // ==========================================

    /// 构造资费
    ///
    /// 提供折扣金额时一律构造为固定折扣（金额为 0 时效果等同无折扣）。
    pub fn new_tariff(
        destination: &str,
        base_price: f64,
        discount_amount: Option<f64>,
    ) -> ValidationResult<Tariff> {
        let discount = discount_amount.map(DiscountPolicy::fixed).transpose()?;
        Tariff::new(destination, base_price, discount)
    }

    /// 从界面文本构造资费
    ///
    /// # 参数
    /// - destination: 目的地文本
    /// - base_price: 基础价格文本
    /// - discount: 折扣金额文本（None 表示未勾选折扣）
    pub fn parse_tariff_input(
        destination: &str,
        base_price: &str,
        discount: Option<&str>,
    ) -> ValidationResult<Tariff> {
        let destination = validate_destination(destination)?;
        let base_price = validate_number(base_price, FIELD_BASE_PRICE)?;
        let discount_amount = discount
            .map(|text| validate_number(text, FIELD_DISCOUNT))
            .transpose()?;
        Self::new_tariff(&destination, base_price, discount_amount)
    }

    // ==========================================
    // 存储操作
    // ==========================================

    /// 全部资费（插入顺序）
    pub fn list_all(&self) -> ApiResult<Vec<Tariff>> {
        Ok(self.tariff_repo.list_all()?)
    }

    /// 新增资费
    pub fn add_tariff(&self, tariff: &Tariff) -> ApiResult<()> {
        self.tariff_repo.insert(tariff)?;
        tracing::info!("新增资费: {}", tariff);
        Ok(())
    }

    /// 删除资费（删除所有相同三元组的记录）
    pub fn remove_tariff(&self, tariff: &Tariff) -> ApiResult<bool> {
        let removed = self.tariff_repo.delete(tariff)?;
        if removed {
            tracing::info!("删除资费: {}", tariff);
        } else {
            tracing::warn!("未找到要删除的资费: {}", tariff);
        }
        Ok(removed)
    }

    /// 修改资费 = 删除旧记录 + 插入新记录
    ///
    /// 两步之间不是原子的：若插入失败，旧记录已被删除。
    ///
    /// # 返回
    /// 是否找到并删除了旧记录
    pub fn edit_tariff(&self, old: &Tariff, new: &Tariff) -> ApiResult<bool> {
        let removed = self.tariff_repo.delete(old)?;
        self.tariff_repo.insert(new)?;
        tracing::info!("修改资费: {} -> {}", old, new);
        Ok(removed)
    }

    /// 最终价格最高的资费（数据库查询）
    pub fn find_max_final_price(&self) -> ApiResult<Option<Tariff>> {
        Ok(self.tariff_repo.find_max_final_price()?)
    }

    // ==========================================
    // 快照查询
    // ==========================================

    /// 最终价格最高的资费（在新取的快照上线性扫描）
    pub fn find_max_in_snapshot(&self) -> ApiResult<Option<Tariff>> {
        let snapshot = self.tariff_repo.list_all()?;
        Ok(tariff_query::find_max_final_price(&snapshot).cloned())
    }

    /// 按最终价格排序的快照（不修改资费表）
    pub fn sorted_by_final_price(&self, direction: SortDirection) -> ApiResult<Vec<Tariff>> {
        let snapshot = self.tariff_repo.list_all()?;
        tracing::debug!(?direction, count = snapshot.len(), "按最终价格排序");
        Ok(tariff_query::sort_by_final_price(&snapshot, direction))
    }

    // ==========================================
    // 导入导出
    // ==========================================

    /// 导出全部资费到交换文件
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> ApiResult<usize> {
        Ok(tariff_file::export_to_file(path, &self.tariff_repo)?)
    }

    /// 从交换文件整体替换资费表
    ///
    /// 文件读取或解码失败时资费表保持不变。
    pub fn import_from<P: AsRef<Path>>(&self, path: P) -> ApiResult<usize> {
        Ok(tariff_file::import_from_file(path, &self.tariff_repo)?)
    }
}
