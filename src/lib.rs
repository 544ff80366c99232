// ==========================================
// 机场资费管理系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 范围: 资费领域模型、持久化、交换格式、查询排序
// 界面层为外部协作者，只通过 api 层调用
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与折扣策略
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 查询引擎层 - 快照上的最高价/排序
pub mod engine;

// 导入导出层 - 交换格式
pub mod importer;

// 配置层
pub mod config;

// 数据库基础设施（连接初始化/建表）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 边界接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{ApiError, ApiResult, TariffApi, TariffView};
pub use domain::{DiscountPolicy, Tariff, ValidationError};
pub use engine::SortDirection;
pub use importer::{FormatError, ImportError};
pub use repository::{StoreError, TariffRepository};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "机场资费管理系统";
