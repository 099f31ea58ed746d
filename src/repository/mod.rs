// ==========================================
// 牛奶产量数据管理系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供进程内观测记录的增删改查
// 约束: 重复键/缺失键通过 bool 与 Option 表达,不抛错误
// ==========================================

pub mod observation_repo;

// 重导出核心仓储
pub use observation_repo::ObservationRepository;
