// ==========================================
// 机场资费管理系统 - 折扣策略
// ==========================================
// 封闭枚举: 只有 无折扣 / 固定金额折扣 两种
// 红线: 折扣不能使最终价格为负
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use serde::Serialize;

/// 折扣金额上限（与基础价格上限一致）
pub const MAX_DISCOUNT_AMOUNT: f64 = 1e7;

// ==========================================
// DiscountPolicy - 折扣策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountPolicy {
    /// 无折扣: final = base
    #[default]
    NoDiscount,
    /// 固定金额折扣: final = max(0, base - amount)
    FixedDiscount(f64),
}

impl DiscountPolicy {
    /// 构造固定金额折扣
    ///
    /// 只校验金额本身，与基础价格无关。
    pub fn fixed(amount: f64) -> ValidationResult<Self> {
        let policy = DiscountPolicy::FixedDiscount(amount);
        policy.validate()?;
        Ok(policy)
    }

    /// 校验折扣金额边界
    ///
    /// Tariff 构造时也会调用，直接写出的越界变体无法进入实体。
    pub fn validate(&self) -> ValidationResult<()> {
        match *self {
            DiscountPolicy::NoDiscount => Ok(()),
            DiscountPolicy::FixedDiscount(amount) if amount.is_nan() => {
                Err(ValidationError::DiscountNotANumber)
            }
            DiscountPolicy::FixedDiscount(amount) if amount < 0.0 => {
                Err(ValidationError::NegativeDiscount(amount))
            }
            DiscountPolicy::FixedDiscount(amount) if amount > MAX_DISCOUNT_AMOUNT => {
                Err(ValidationError::DiscountTooHigh(amount))
            }
            DiscountPolicy::FixedDiscount(_) => Ok(()),
        }
    }

    /// 从持久化的折扣金额重建策略
    ///
    /// 金额 > 0 重建为固定折扣，否则为无折扣（包括负数）。
    pub fn from_stored_amount(amount: f64) -> ValidationResult<Self> {
        if amount > 0.0 {
            Self::fixed(amount)
        } else {
            Ok(DiscountPolicy::NoDiscount)
        }
    }

    /// 计算最终价格
    pub fn apply(&self, base_price: f64) -> f64 {
        match self {
            DiscountPolicy::NoDiscount => base_price,
            DiscountPolicy::FixedDiscount(amount) => (base_price - amount).max(0.0),
        }
    }
}
