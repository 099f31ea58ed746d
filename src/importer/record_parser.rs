// ==========================================
// 牛奶产量数据管理系统 - 记录行解析器
// ==========================================
// 职责: 把 CSV 字段解析为观测记录,校验发生在这里
// 红线: 仓储层不再做任何输入校验,非法记录不得流入仓储
// ==========================================
// 行格式: date,farm_id,weight  (日期 ISO YYYY-MM-DD,重量为整数)
// 表头行: 首字段以 date 开头(不区分大小写),文件任意位置都跳过
// ==========================================

use crate::domain::observation::Observation;
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;

/// 一行应有的字段数
pub const RECORD_FIELD_COUNT: usize = 3;

/// 是否为表头字段 (首列以 date 开头,不区分大小写)
pub fn is_header_field(value: &str) -> bool {
    value.trim().to_lowercase().starts_with("date")
}

/// 解析日期字段
pub fn parse_date(value: &str, row: usize) -> ImportResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ImportError::DateFormatError {
        row,
        value: trimmed.to_string(),
    })
}

/// 解析重量字段
pub fn parse_weight(value: &str, row: usize) -> ImportResult<i32> {
    let trimmed = value.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| ImportError::WeightFormatError {
            row,
            value: trimmed.to_string(),
        })
}

/// 解析农场编号字段,空值视为缺失
pub fn parse_farm_id(value: &str, row: usize) -> ImportResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ImportError::FarmIdMissing(row));
    }
    Ok(trimmed.to_string())
}

/// 解析一整行字段为观测记录
///
/// # 参数
/// - `fields`: 该行全部字段
/// - `row`: 源文件中的行号 (1 起始,表头行也计数),用于错误定位
pub fn parse_fields(fields: &[&str], row: usize) -> ImportResult<Observation> {
    if fields.len() != RECORD_FIELD_COUNT {
        return Err(ImportError::MalformedRecord {
            row,
            content: fields.join(","),
        });
    }

    let date = parse_date(fields[0], row)?;
    let farm_id = parse_farm_id(fields[1], row)?;
    let weight = parse_weight(fields[2], row)?;

    Ok(Observation::new(farm_id, date, weight))
}
