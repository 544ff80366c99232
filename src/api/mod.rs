// ==========================================
// 机场资费管理系统 - API 层
// ==========================================
// 职责: 对界面层暴露的边界接口
// ==========================================

pub mod dto;
pub mod error;
pub mod tariff_api;
pub mod validator;

// 重导出
pub use dto::TariffView;
pub use error::{ApiError, ApiResult};
pub use tariff_api::TariffApi;
