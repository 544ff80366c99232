// ==========================================
// 机场资费管理系统 - 领域校验错误
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 资费/折扣构造失败的原因
///
/// 在任何持久化操作之前触发，调用方可直接重新输入。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ===== 资费实体 =====
    #[error("目的地不能为空")]
    EmptyDestination,

    #[error("价格不能为负数: {0}")]
    NegativePrice(f64),

    #[error("价格过高: {0}（最大 1000 万）")]
    PriceTooHigh(f64),

    #[error("价格不是有效数字")]
    PriceNotANumber,

    // ===== 折扣策略 =====
    #[error("折扣不能为负数: {0}")]
    NegativeDiscount(f64),

    #[error("折扣过大: {0}（最大 1000 万）")]
    DiscountTooHigh(f64),

    #[error("折扣不是有效数字")]
    DiscountNotANumber,

    // ===== 界面输入 =====
    #[error("目的地过短（至少 {min} 个字符）")]
    DestinationTooShort { min: usize },

    #[error("目的地过长（最多 {max} 个字符）")]
    DestinationTooLong { max: usize },

    #[error("目的地必须包含至少一个字母")]
    DestinationWithoutLetters,

    #[error("目的地只能包含字母、空格、连字符和撇号")]
    DestinationInvalidChars,

    #[error("字段 '{field}' 不能为空")]
    EmptyField { field: String },

    #[error("字段 '{field}' 数字格式错误: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("字段 '{field}' 数值过大: {value}")]
    NumberOutOfRange { field: String, value: f64 },

    #[error("字段 '{field}' 不能为负数")]
    NegativeField { field: String },
}

/// Result 类型别名
pub type ValidationResult<T> = Result<T, ValidationError>;
