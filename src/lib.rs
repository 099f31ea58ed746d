// ==========================================
// 牛奶产量数据管理系统 - 核心库
// ==========================================
// 技术栈: Rust + CSV,纯内存数据,单线程同步
// 系统定位: 农场产量记录管理与统计报表
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 统计报表
pub mod engine;

// 导入导出层 - CSV 文件
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 文本渲染 - 等宽表格输出
pub mod render;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ReportSortKey, SortField, SortOrder};

// 领域实体
pub use domain::{DateRangeReport, FarmReport, Observation, ObservationKey, Summary};

// 仓储
pub use repository::ObservationRepository;

// 引擎
pub use engine::ReportEngine;

// 导入导出
pub use importer::{
    CsvExporter, CsvImporter, ImportError, ImportReport, ImportResult, ImportSummary,
};

// 配置
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "牛奶产量数据管理系统";

// ==========================================
// 预编译检查
// ==========================================
