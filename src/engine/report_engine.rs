// ==========================================
// 牛奶产量数据管理系统 - 统计报表引擎
// ==========================================
// 职责: 按农场/时间维度过滤、分组、汇总观测记录
// 输入: 仓储快照 (引擎不持有仓储,不修改任何数据)
// 输出: 报表行序列与月度统计映射
// ==========================================

use crate::domain::observation::Observation;
use crate::domain::report::{DateRangeReport, FarmReport};
use crate::domain::types::{ReportSortKey, SortField, SortOrder};
use crate::engine::grouping::{
    group_by, group_reduce, max_observation, min_observation, percent_of, summarize, total_weight,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

// ==========================================
// ReportEngine - 统计报表引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
// 空输入产生空输出,农场编号不存在同样产生空输出,不报错
pub struct ReportEngine;

impl ReportEngine {
    /// 创建新的报表引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 月度统计 (单农场单年度)
    // ==========================================

    /// 某农场某年的逐月平均产量
    ///
    /// # 返回
    /// 月份 -> 平均产量,只含有数据的月份,月份升序
    pub fn monthly_average(
        &self,
        observations: &[Observation],
        farm_id: &str,
        year: i32,
    ) -> BTreeMap<u32, f64> {
        group_reduce(
            self.filter_farm_year(observations, farm_id, year),
            |o| o.month(),
            |group| summarize(group).avg,
        )
    }

    /// 某农场某年逐月的最小产量记录
    ///
    /// 产量并列时返回哪一条记录不作承诺,调用方只应依赖重量值
    pub fn monthly_min(
        &self,
        observations: &[Observation],
        farm_id: &str,
        year: i32,
    ) -> BTreeMap<u32, Observation> {
        group_by(self.filter_farm_year(observations, farm_id, year), |o| {
            o.month()
        })
        .into_iter()
        .filter_map(|(month, group)| min_observation(&group).map(|o| (month, o.clone())))
        .collect()
    }

    /// 某农场某年逐月的最大产量记录
    pub fn monthly_max(
        &self,
        observations: &[Observation],
        farm_id: &str,
        year: i32,
    ) -> BTreeMap<u32, Observation> {
        group_by(self.filter_farm_year(observations, farm_id, year), |o| {
            o.month()
        })
        .into_iter()
        .filter_map(|(month, group)| max_observation(&group).map(|o| (month, o.clone())))
        .collect()
    }

    // ==========================================
    // 单农场年度报表
    // ==========================================

    /// 单农场月度报表,一行对应一个有数据的月份,月份 1-12 升序
    ///
    /// # 参数
    /// - `observations`: 全量快照 (占比分母需要其他农场的数据)
    /// - `farm_id`: 目标农场
    /// - `year`: 目标年份
    ///
    /// # 返回
    /// 每行含当月总量、统计三元组、占全部农场当月总量的百分比
    pub fn farm_report(
        &self,
        observations: &[Observation],
        farm_id: &str,
        year: i32,
    ) -> Vec<FarmReport> {
        // 分母: 当年全部农场的逐月总量
        let month_totals_all_farms: BTreeMap<u32, i64> = group_reduce(
            observations.iter().filter(|o| o.year() == year),
            |o| o.month(),
            total_weight,
        );

        group_by(self.filter_farm_year(observations, farm_id, year), |o| {
            o.month()
        })
        .into_iter()
        .map(|(month, group)| {
            let total = total_weight(&group);
            let denominator = month_totals_all_farms.get(&month).copied().unwrap_or(0);
            FarmReport::new(
                month,
                total,
                percent_of(total, denominator),
                summarize(&group),
            )
        })
        .collect()
    }

    // ==========================================
    // 多农场期间报表 (年/月/任意闭区间)
    // ==========================================

    /// 年度报表: 一行对应当年有数据的一个农场
    pub fn annual_report(
        &self,
        observations: &[Observation],
        year: i32,
        sort: ReportSortKey,
        order: SortOrder,
    ) -> Vec<DateRangeReport> {
        let in_scope = observations.iter().filter(|o| o.year() == year).collect();
        self.build_period_report(in_scope, sort, order)
    }

    /// 月度报表: 一行对应当月有数据的一个农场
    pub fn monthly_report(
        &self,
        observations: &[Observation],
        year: i32,
        month: u32,
        sort: ReportSortKey,
        order: SortOrder,
    ) -> Vec<DateRangeReport> {
        let in_scope = observations
            .iter()
            .filter(|o| o.year() == year && o.month() == month)
            .collect();
        self.build_period_report(in_scope, sort, order)
    }

    /// 日期范围报表: 闭区间 [start, end],一行对应区间内有数据的一个农场
    pub fn date_range_report(
        &self,
        observations: &[Observation],
        start: NaiveDate,
        end: NaiveDate,
        sort: ReportSortKey,
        order: SortOrder,
    ) -> Vec<DateRangeReport> {
        let in_scope = observations
            .iter()
            .filter(|o| o.date >= start && o.date <= end)
            .collect();
        self.build_period_report(in_scope, sort, order)
    }

    // ==========================================
    // 列表与维度
    // ==========================================

    /// 全量记录排序列表
    ///
    /// 稳定排序: 排序键相等的记录保持输入顺序
    pub fn sorted_observations(
        &self,
        observations: &[Observation],
        field: SortField,
        order: SortOrder,
    ) -> Vec<Observation> {
        let mut rows = observations.to_vec();
        rows.sort_by(|a, b| {
            let ord = match field {
                SortField::FarmId => a.farm_id.cmp(&b.farm_id),
                SortField::Date => a.date.cmp(&b.date),
                SortField::Weight => a.weight.cmp(&b.weight),
            };
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        rows
    }

    /// 去重后的农场编号列表,字典序升序
    pub fn farm_ids(&self, observations: &[Observation]) -> Vec<String> {
        let mut ids: Vec<String> = observations.iter().map(|o| o.farm_id.clone()).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// 去重后的记录年份列表,升序
    pub fn years(&self, observations: &[Observation]) -> Vec<i32> {
        let mut years: Vec<i32> = observations.iter().map(|o| o.year()).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    // ==========================================
    // 内部方法
    // ==========================================

    /// 过滤出某农场某年的观测记录
    fn filter_farm_year<'a>(
        &self,
        observations: &'a [Observation],
        farm_id: &str,
        year: i32,
    ) -> Vec<&'a Observation> {
        observations
            .iter()
            .filter(|o| o.farm_id == farm_id && o.year() == year)
            .collect()
    }

    /// 期间报表构建: 按农场分组汇总,再按排序键排序
    ///
    /// 分组输出按农场编号升序,排序为稳定排序,
    /// 排序键并列的行保持该分组顺序
    fn build_period_report(
        &self,
        in_scope: Vec<&Observation>,
        sort: ReportSortKey,
        order: SortOrder,
    ) -> Vec<DateRangeReport> {
        // 分母: 期间内全部农场总量,按占比策略,为 0 时所有行占比记 0.0
        let grand_total = total_weight(&in_scope);

        let mut rows: Vec<DateRangeReport> = group_by(in_scope, |o| o.farm_id.clone())
            .into_iter()
            .map(|(farm_id, group)| {
                let total = total_weight(&group);
                DateRangeReport::new(
                    farm_id,
                    total,
                    percent_of(total, grand_total),
                    summarize(&group),
                )
            })
            .collect();

        match (sort, order) {
            (ReportSortKey::FarmId, SortOrder::Asc) => {} // 分组输出已按农场编号升序
            (ReportSortKey::FarmId, SortOrder::Desc) => {
                rows.sort_by(|a, b| b.farm_id.cmp(&a.farm_id));
            }
            (ReportSortKey::TotalWeight, SortOrder::Asc) => {
                rows.sort_by(|a, b| a.total_weight.cmp(&b.total_weight));
            }
            (ReportSortKey::TotalWeight, SortOrder::Desc) => {
                rows.sort_by(|a, b| b.total_weight.cmp(&a.total_weight));
            }
        }
        rows
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}
