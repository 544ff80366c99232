// ==========================================
// 机场资费管理系统 - 资费实体
// ==========================================
// 红线: 构造即合法，任何代码路径都观察不到越界的 Tariff
// 红线: 不可变，"编辑" = 删除旧记录 + 插入新记录
// ==========================================

use crate::domain::discount::DiscountPolicy;
use crate::domain::error::{ValidationError, ValidationResult};
use std::fmt;

/// 基础价格上限（含）
pub const MAX_BASE_PRICE: f64 = 1e7;

// ==========================================
// Tariff - 目的地资费
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    destination: String,
    base_price: f64,
    discount: DiscountPolicy,
}

impl Tariff {
    /// 创建资费
    ///
    /// 校验顺序: 目的地为空 → 价格为负 → 价格超上限 → 价格为 NaN → 折扣金额。
    /// 目的地会去除首尾空白；未提供折扣时视为无折扣。
    ///
    /// 这里只校验数值边界与非空，目的地的字符格式属于界面输入校验
    /// （见 `api::validator`），从库或交换文件加载时不重复检查。
    pub fn new(
        destination: &str,
        base_price: f64,
        discount: Option<DiscountPolicy>,
    ) -> ValidationResult<Self> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::EmptyDestination);
        }
        if base_price < 0.0 {
            return Err(ValidationError::NegativePrice(base_price));
        }
        if base_price > MAX_BASE_PRICE {
            return Err(ValidationError::PriceTooHigh(base_price));
        }
        if base_price.is_nan() {
            return Err(ValidationError::PriceNotANumber);
        }
        let discount = discount.unwrap_or_default();
        discount.validate()?;

        Ok(Self {
            destination: destination.to_string(),
            base_price,
            discount,
        })
    }

    /// 从持久化三元组重建资费（库和交换文件共用）
    pub fn from_stored(
        destination: &str,
        base_price: f64,
        discount_amount: f64,
    ) -> ValidationResult<Self> {
        let discount = DiscountPolicy::from_stored_amount(discount_amount)?;
        Self::new(destination, base_price, Some(discount))
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn discount(&self) -> DiscountPolicy {
        self.discount
    }

    /// 最终价格（应用折扣后，不小于 0）
    pub fn final_price(&self) -> f64 {
        self.discount.apply(self.base_price)
    }

    /// 实际生效的折扣金额 = 基础价格 - 最终价格
    ///
    /// 持久化与交换格式只保存该值，不保存最终价格。
    pub fn discount_amount(&self) -> f64 {
        self.base_price - self.final_price()
    }
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "目的地: {}, 基础价格: {:.2}, 最终价格: {:.2}",
            self.destination,
            self.base_price,
            self.final_price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_price_without_discount() {
        let tariff = Tariff::new("Paris", 250.0, None).unwrap();
        assert_eq!(tariff.final_price(), 250.0);
        assert_eq!(tariff.discount(), DiscountPolicy::NoDiscount);
        assert_eq!(tariff.discount_amount(), 0.0);
    }

    #[test]
    fn test_final_price_with_discount() {
        let tariff =
            Tariff::new("Paris", 250.0, Some(DiscountPolicy::fixed(50.0).unwrap())).unwrap();
        assert_eq!(tariff.final_price(), 200.0);
        assert_eq!(tariff.discount_amount(), 50.0);
    }

    #[test]
    fn test_discount_larger_than_base_clamps_to_zero() {
        let tariff =
            Tariff::new("Oslo", 80.0, Some(DiscountPolicy::fixed(100.0).unwrap())).unwrap();
        assert_eq!(tariff.final_price(), 0.0);
        // 持久化的是实际生效金额，而不是原始折扣
        assert_eq!(tariff.discount_amount(), 80.0);
    }

    #[test]
    fn test_destination_is_trimmed() {
        let tariff = Tariff::new("  New York  ", 10.0, None).unwrap();
        assert_eq!(tariff.destination(), "New York");
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(
            Tariff::new("   ", -1.0, None),
            Err(ValidationError::EmptyDestination)
        );
        assert_eq!(
            Tariff::new("Rome", -1.0, None),
            Err(ValidationError::NegativePrice(-1.0))
        );
        assert_eq!(
            Tariff::new("Rome", 1e7 + 1.0, None),
            Err(ValidationError::PriceTooHigh(1e7 + 1.0))
        );
        assert_eq!(
            Tariff::new("Rome", f64::NAN, None),
            Err(ValidationError::PriceNotANumber)
        );
    }

    #[test]
    fn test_rejects_unchecked_discount_variant() {
        assert_eq!(
            Tariff::new("Rome", 10.0, Some(DiscountPolicy::FixedDiscount(-3.0))),
            Err(ValidationError::NegativeDiscount(-3.0))
        );
    }

    #[test]
    fn test_price_boundaries() {
        assert!(Tariff::new("Rome", 0.0, None).is_ok());
        assert!(Tariff::new("Rome", 1e7, None).is_ok());
        assert!(Tariff::new("Rome", f64::INFINITY, None).is_err());
    }

    #[test]
    fn test_loaded_destination_skips_format_rules() {
        // 加载路径不检查字符格式
        let tariff = Tariff::from_stored("X1", 100.0, 0.0).unwrap();
        assert_eq!(tariff.destination(), "X1");
    }

    #[test]
    fn test_from_stored_reconstructs_policy() {
        let tariff = Tariff::from_stored("Berlin", 150.0, 60.0).unwrap();
        assert_eq!(tariff.discount(), DiscountPolicy::FixedDiscount(60.0));
        assert_eq!(tariff.final_price(), 90.0);

        let tariff = Tariff::from_stored("Berlin", 150.0, 0.0).unwrap();
        assert_eq!(tariff.discount(), DiscountPolicy::NoDiscount);
    }

    #[test]
    fn test_display() {
        let tariff = Tariff::from_stored("Berlin", 150.0, 60.0).unwrap();
        assert_eq!(
            tariff.to_string(),
            "目的地: Berlin, 基础价格: 150.00, 最终价格: 90.00"
        );
    }
}
