// ==========================================
// 牛奶产量数据管理系统 - 产量观测记录模型
// ==========================================
// 职责: 定义观测记录实体与复合主键
// 红线: 身份只由 (农场编号, 日期) 决定,重量不参与身份
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// ObservationKey - 观测记录复合主键
// ==========================================
// 排序规则: 先按农场编号字典序,再按日期升序
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObservationKey {
    /// 农场编号
    pub farm_id: String,

    /// 记录日期
    pub date: NaiveDate,
}

impl ObservationKey {
    pub fn new(farm_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            farm_id: farm_id.into(),
            date,
        }
    }
}

impl From<&Observation> for ObservationKey {
    fn from(obs: &Observation) -> Self {
        ObservationKey::new(obs.farm_id.clone(), obs.date)
    }
}

// ==========================================
// Observation - 单日产量观测记录
// ==========================================
// 用途: 导入层写入,引擎层只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// 农场编号(非空,由解析边界保证)
    pub farm_id: String,

    /// 记录日期
    pub date: NaiveDate,

    /// 当日牛奶产量(整数,允许负值)
    pub weight: i32,
}

impl Observation {
    pub fn new(farm_id: impl Into<String>, date: NaiveDate, weight: i32) -> Self {
        Self {
            farm_id: farm_id.into(),
            date,
            weight,
        }
    }

    /// 复合主键副本
    pub fn key(&self) -> ObservationKey {
        ObservationKey::from(self)
    }

    /// 记录年份
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// 记录月份 (1-12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}
