// ==========================================
// 牛奶产量数据管理系统 - 领域类型定义
// ==========================================
// 职责: 排序字段与排序方向等基础枚举
// 红线: 不含聚合逻辑,排序语义由引擎层实现
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 记录排序字段 (Sort Field)
// ==========================================
// 用于全量记录列表的排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    FarmId, // 按农场编号
    Date,   // 按记录日期
    Weight, // 按单日产量
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::FarmId => write!(f, "FARM_ID"),
            SortField::Date => write!(f, "DATE"),
            SortField::Weight => write!(f, "WEIGHT"),
        }
    }
}

impl SortField {
    /// 从字符串解析,未知输入回落到默认值
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "FARM_ID" | "ID" => SortField::FarmId,
            "DATE" => SortField::Date,
            "WEIGHT" => SortField::Weight,
            _ => SortField::FarmId, // 默认值
        }
    }
}

// ==========================================
// 报表排序键 (Report Sort Key)
// ==========================================
// 多农场报表行的排序依据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportSortKey {
    FarmId,      // 农场编号字典序
    TotalWeight, // 期间总产量数值序
}

impl fmt::Display for ReportSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSortKey::FarmId => write!(f, "FARM_ID"),
            ReportSortKey::TotalWeight => write!(f, "TOTAL_WEIGHT"),
        }
    }
}

impl ReportSortKey {
    /// 从字符串解析,未知输入回落到默认值
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "FARM_ID" | "ID" => ReportSortKey::FarmId,
            "TOTAL_WEIGHT" | "WEIGHT" => ReportSortKey::TotalWeight,
            _ => ReportSortKey::FarmId, // 默认值
        }
    }
}

// ==========================================
// 排序方向 (Sort Order)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Asc,  // 升序
    Desc, // 降序
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

impl SortOrder {
    /// 从字符串解析,未知输入回落到默认值
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "DESC" | "DESCENDING" => SortOrder::Desc,
            _ => SortOrder::Asc, // 默认值
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parse_aliases_and_fallback() {
        assert_eq!(SortField::from_str("farm_id"), SortField::FarmId);
        assert_eq!(SortField::from_str("ID"), SortField::FarmId);
        assert_eq!(SortField::from_str("Date"), SortField::Date);
        assert_eq!(SortField::from_str("WEIGHT"), SortField::Weight);
        // 未知输入回落到默认字段
        assert_eq!(SortField::from_str("colour"), SortField::FarmId);
        assert_eq!(SortField::from_str(""), SortField::FarmId);
    }

    #[test]
    fn test_report_sort_key_parse_aliases_and_fallback() {
        assert_eq!(
            ReportSortKey::from_str("total_weight"),
            ReportSortKey::TotalWeight
        );
        assert_eq!(ReportSortKey::from_str("weight"), ReportSortKey::TotalWeight);
        assert_eq!(ReportSortKey::from_str("id"), ReportSortKey::FarmId);
        assert_eq!(ReportSortKey::from_str("month"), ReportSortKey::FarmId);
    }

    #[test]
    fn test_sort_order_parse_aliases_and_fallback() {
        assert_eq!(SortOrder::from_str("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::from_str("Descending"), SortOrder::Desc);
        assert_eq!(SortOrder::from_str("ASC"), SortOrder::Asc);
        // 未知输入回落到升序
        assert_eq!(SortOrder::from_str("sideways"), SortOrder::Asc);
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for field in [SortField::FarmId, SortField::Date, SortField::Weight] {
            assert_eq!(SortField::from_str(&field.to_string()), field);
        }
        for key in [ReportSortKey::FarmId, ReportSortKey::TotalWeight] {
            assert_eq!(ReportSortKey::from_str(&key.to_string()), key);
        }
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(SortOrder::from_str(&order.to_string()), order);
        }
    }
}
