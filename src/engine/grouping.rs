// ==========================================
// 牛奶产量数据管理系统 - 分组归约原语
// ==========================================
// 职责: 四类报表共用的"分组后归约"基础设施
// 约束: 分组不产生空组,空组策略集中在本模块
// ==========================================

use crate::domain::observation::Observation;
use crate::domain::report::Summary;
use std::collections::BTreeMap;

/// 按键提取函数把观测记录分组
///
/// BTreeMap 保证键升序迭代;组内元素保持输入顺序。
/// 每个键至少对应一条记录,不会出现空组。
pub fn group_by<'a, K, I, F>(observations: I, key_fn: F) -> BTreeMap<K, Vec<&'a Observation>>
where
    K: Ord,
    I: IntoIterator<Item = &'a Observation>,
    F: Fn(&Observation) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a Observation>> = BTreeMap::new();
    for obs in observations {
        groups.entry(key_fn(obs)).or_default().push(obs);
    }
    groups
}

/// 分组后对每组应用归约函数
pub fn group_reduce<'a, K, V, I, F, R>(observations: I, key_fn: F, reduce: R) -> BTreeMap<K, V>
where
    K: Ord,
    I: IntoIterator<Item = &'a Observation>,
    F: Fn(&Observation) -> K,
    R: Fn(&[&'a Observation]) -> V,
{
    group_by(observations, key_fn)
        .into_iter()
        .map(|(key, group)| {
            let value = reduce(&group);
            (key, value)
        })
        .collect()
}

/// 组内总产量
///
/// 以 i64 累加,单条重量为 i32 时求和不会溢出
pub fn total_weight(group: &[&Observation]) -> i64 {
    group.iter().map(|o| i64::from(o.weight)).sum()
}

/// 组内统计三元组 (最小/最大/平均)
///
/// 空组返回全零,与报表路径无关:报表只对非空组生成行
pub fn summarize(group: &[&Observation]) -> Summary {
    let min = group.iter().map(|o| o.weight).min().unwrap_or(0);
    let max = group.iter().map(|o| o.weight).max().unwrap_or(0);
    let avg = if group.is_empty() {
        0.0
    } else {
        total_weight(group) as f64 / group.len() as f64
    };
    Summary::new(min, max, avg)
}

/// 组内最小产量记录,并列时返回哪一条不作承诺
pub fn min_observation<'a>(group: &[&'a Observation]) -> Option<&'a Observation> {
    group.iter().copied().min_by_key(|o| o.weight)
}

/// 组内最大产量记录,并列时返回哪一条不作承诺
pub fn max_observation<'a>(group: &[&'a Observation]) -> Option<&'a Observation> {
    group.iter().copied().max_by_key(|o| o.weight)
}

/// 占比 = 部分 / 整体 × 100
///
/// 分母为 0 时返回 0.0,不产生 NaN/Infinity
pub fn percent_of(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
