// ==========================================
// 牛奶产量数据管理系统 - 引擎层
// ==========================================
// 职责: 统计报表的过滤、分组、汇总、排序
// 红线: 引擎只读快照,不修改仓储,不缓存结果
// ==========================================

pub mod grouping;
pub mod report_engine;

// 重导出核心引擎
pub use report_engine::ReportEngine;
