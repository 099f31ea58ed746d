// ==========================================
// 牛奶产量数据管理系统 - 领域模型层
// ==========================================
// 职责: 定义观测记录实体、报表行结构、基础类型
// 红线: 不含数据访问逻辑,不含统计逻辑
// ==========================================

pub mod observation;
pub mod report;
pub mod types;

// 重导出核心类型
pub use observation::{Observation, ObservationKey};
pub use report::{DateRangeReport, FarmReport, Summary};
pub use types::{ReportSortKey, SortField, SortOrder};
