// ==========================================
// 牛奶产量数据管理系统 - 报表模型
// ==========================================
// 职责: 引擎输出的不可变报表行结构
// 红线: 纯数据结构,不含统计逻辑,每次查询现算不缓存
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Summary - 分组统计三元组
// ==========================================
// 只对非空分组计算,空分组不会产生报表行
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// 分组内最小单日产量
    pub min: i32,

    /// 分组内最大单日产量
    pub max: i32,

    /// 分组内平均单日产量
    pub avg: f64,
}

impl Summary {
    pub fn new(min: i32, max: i32, avg: f64) -> Self {
        Self { min, max, avg }
    }
}

// ==========================================
// FarmReport - 单农场月度报表行
// ==========================================
// 一行对应一个有数据的月份,按月份 1-12 升序输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmReport {
    /// 月份 (1-12)
    pub month: u32,

    /// 该农场当月总产量
    pub total_weight: i64,

    /// 占全部农场当月总产量的百分比 (0-100)
    pub percent: f64,

    /// 该农场当月统计三元组
    pub summary: Summary,
}

impl FarmReport {
    pub fn new(month: u32, total_weight: i64, percent: f64, summary: Summary) -> Self {
        Self {
            month,
            total_weight,
            percent,
            summary,
        }
    }
}

// ==========================================
// DateRangeReport - 多农场期间报表行
// ==========================================
// 一行对应一个期间内有数据的农场,期间可为年/月/任意闭区间
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeReport {
    /// 农场编号
    pub farm_id: String,

    /// 该农场期间总产量
    pub total_weight: i64,

    /// 占期间全部农场总产量的百分比 (0-100)
    pub percent: f64,

    /// 该农场期间统计三元组
    pub summary: Summary,
}

impl DateRangeReport {
    pub fn new(farm_id: impl Into<String>, total_weight: i64, percent: f64, summary: Summary) -> Self {
        Self {
            farm_id: farm_id.into(),
            total_weight,
            percent,
            summary,
        }
    }
}
