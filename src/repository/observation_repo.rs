// ==========================================
// 牛奶产量数据管理系统 - 观测记录仓储
// ==========================================
// 红线: Repository 不含统计逻辑,聚合在引擎层完成
// 约束: 同一 (农场编号, 日期) 最多一条记录
// ==========================================

use crate::domain::observation::{Observation, ObservationKey};
use std::collections::BTreeMap;

// ==========================================
// ObservationRepository - 观测记录仓储
// ==========================================
// 内部使用 BTreeMap,快照迭代顺序稳定:
// 先按农场编号字典序,再按日期升序
#[derive(Debug, Default)]
pub struct ObservationRepository {
    records: BTreeMap<ObservationKey, Observation>,
}

impl ObservationRepository {
    /// 创建空仓储
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// 插入观测记录
    ///
    /// # 参数
    /// - `obs`: 观测记录
    ///
    /// # 返回
    /// - `true`: 插入成功
    /// - `false`: 主键已存在,仓储不变(无论重量是否相同)
    pub fn insert(&mut self, obs: Observation) -> bool {
        let key = obs.key();
        if self.records.contains_key(&key) {
            return false;
        }
        self.records.insert(key, obs);
        true
    }

    /// 修改已有记录的重量
    ///
    /// 主键字段不可变,传入记录的主键用于定位目标槽位,
    /// 只有重量会被写入。
    ///
    /// # 返回
    /// - `true`: 修改成功
    /// - `false`: 主键不存在,仓储不变(不会创建新记录)
    pub fn edit(&mut self, obs: Observation) -> bool {
        match self.records.get_mut(&obs.key()) {
            Some(existing) => {
                existing.weight = obs.weight;
                true
            }
            None => false,
        }
    }

    /// 按主键删除记录
    ///
    /// # 返回
    /// - `Some(removed)`: 被删除的记录
    /// - `None`: 主键不存在
    pub fn remove(&mut self, key: &ObservationKey) -> Option<Observation> {
        self.records.remove(key)
    }

    /// 按主键查询单条记录
    pub fn get(&self, key: &ObservationKey) -> Option<&Observation> {
        self.records.get(key)
    }

    /// 全量快照(副本),修改返回值不影响仓储内部状态
    pub fn snapshot(&self) -> Vec<Observation> {
        self.records.values().cloned().collect()
    }

    /// 当前记录数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 仓储是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
