// ==========================================
// 机场资费管理系统 - 领域模型层
// ==========================================
// 职责: 定义资费实体、折扣策略、校验错误
// 红线: 不含数据访问逻辑
// ==========================================

pub mod discount;
pub mod error;
pub mod tariff;

// 重导出核心类型
pub use discount::{DiscountPolicy, MAX_DISCOUNT_AMOUNT};
pub use error::{ValidationError, ValidationResult};
pub use tariff::{Tariff, MAX_BASE_PRICE};
