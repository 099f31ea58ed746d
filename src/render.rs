// ==========================================
// 牛奶产量数据管理系统 - 文本报表渲染
// ==========================================
// 职责: 把报表行渲染为等宽纯文本表格
// 格式: 每列 20 字符左对齐,浮点数千分位分组加定长小数
// ==========================================

use crate::domain::observation::Observation;
use crate::domain::report::{DateRangeReport, FarmReport};

/// 空结果的固定输出
pub const NO_RECORDS: &str = "No Records";

/// 列宽 (字符)
const COLUMN_WIDTH: usize = 20;

/// 浮点数渲染: 千分位分组 + 指定小数位
///
/// # 示例
/// - `format_decimal(1234567.891, 3)` -> `"1,234,567.891"`
/// - `format_decimal(-4521.5, 2)` -> `"-4,521.50"`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (number, sign) = match formatted.strip_prefix('-') {
        Some(rest) => (rest, "-"),
        None => (formatted.as_str(), ""),
    };
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (number, None),
    };

    // 整数部分从右往左每三位插入一个逗号
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// 单农场月度报表表格
///
/// 列: Month, Min, Max, Average, Total, Share(%)
pub fn render_farm_reports(rows: &[FarmReport], decimals: usize) -> String {
    if rows.is_empty() {
        return NO_RECORDS.to_string();
    }

    let mut out = String::new();
    push_row(
        &mut out,
        &["Month", "Min", "Max", "Average", "Total", "Share(%)"],
    );
    for row in rows {
        push_row(
            &mut out,
            &[
                &row.month.to_string(),
                &row.summary.min.to_string(),
                &row.summary.max.to_string(),
                &format_decimal(row.summary.avg, decimals),
                &row.total_weight.to_string(),
                &format_decimal(row.percent, decimals),
            ],
        );
    }
    out
}

/// 多农场期间报表表格
///
/// 列: Farm, Min, Max, Average, Total, Share(%)
pub fn render_date_range_reports(rows: &[DateRangeReport], decimals: usize) -> String {
    if rows.is_empty() {
        return NO_RECORDS.to_string();
    }

    let mut out = String::new();
    push_row(
        &mut out,
        &["Farm", "Min", "Max", "Average", "Total", "Share(%)"],
    );
    for row in rows {
        push_row(
            &mut out,
            &[
                &row.farm_id,
                &row.summary.min.to_string(),
                &row.summary.max.to_string(),
                &format_decimal(row.summary.avg, decimals),
                &row.total_weight.to_string(),
                &format_decimal(row.percent, decimals),
            ],
        );
    }
    out
}

/// 全量记录列表表格
///
/// 列: Farm, Date, Weight
pub fn render_observations(rows: &[Observation]) -> String {
    if rows.is_empty() {
        return NO_RECORDS.to_string();
    }

    let mut out = String::new();
    push_row(&mut out, &["Farm", "Date", "Weight"]);
    for row in rows {
        push_row(
            &mut out,
            &[
                &row.farm_id,
                &row.date.format("%Y-%m-%d").to_string(),
                &row.weight.to_string(),
            ],
        );
    }
    out
}

/// 追加一行等宽单元格,行尾换行
fn push_row(out: &mut String, cells: &[&str]) {
    for cell in cells {
        out.push_str(&format!("{cell:<COLUMN_WIDTH$}"));
    }
    out.push('\n');
}
