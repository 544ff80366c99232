// ==========================================
// 机场资费管理系统 - 资费查询与排序
// ==========================================
// 纯函数: 只作用于调用方提供的快照，不触碰资费表
// 注意: 与仓储层的 SQL 最高价查询各自独立，平局规则不保证一致
// ==========================================

use crate::domain::tariff::Tariff;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ==========================================
// SortDirection - 排序方向
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// 切换方向（界面每次点击排序时翻转）
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl From<bool> for SortDirection {
    /// true 为升序
    fn from(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// 最终价格最高的资费
///
/// 线性扫描，平局时保留最先出现的一条；快照为空返回 None。
pub fn find_max_final_price(snapshot: &[Tariff]) -> Option<&Tariff> {
    let mut best: Option<&Tariff> = None;
    for tariff in snapshot {
        let is_higher = best.map_or(true, |current| tariff.final_price() > current.final_price());
        if is_higher {
            best = Some(tariff);
        }
    }
    best
}

/// 按最终价格排序
///
/// 稳定排序: 两个方向下价格相同的资费都保持原有相对顺序。
pub fn sort_by_final_price(snapshot: &[Tariff], direction: SortDirection) -> Vec<Tariff> {
    let mut sorted = snapshot.to_vec();
    sorted.sort_by(|a, b| compare_final_price(a, b, direction));
    sorted
}

fn compare_final_price(a: &Tariff, b: &Tariff, direction: SortDirection) -> Ordering {
    let ord = a.final_price().total_cmp(&b.final_price());
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}
