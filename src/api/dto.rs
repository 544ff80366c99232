// ==========================================
// 机场资费管理系统 - API 数据传输对象
// ==========================================

use crate::domain::discount::DiscountPolicy;
use crate::domain::tariff::Tariff;
use serde::Serialize;

/// 资费展示视图（供界面表格/JSON 输出）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffView {
    pub destination: String,
    pub base_price: f64,
    pub discount: DiscountPolicy,
    pub discount_amount: f64,
    pub final_price: f64,
}

impl From<&Tariff> for TariffView {
    fn from(tariff: &Tariff) -> Self {
        Self {
            destination: tariff.destination().to_string(),
            base_price: tariff.base_price(),
            discount: tariff.discount(),
            discount_amount: tariff.discount_amount(),
            final_price: tariff.final_price(),
        }
    }
}
