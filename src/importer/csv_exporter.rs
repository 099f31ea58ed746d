// ==========================================
// 牛奶产量数据管理系统 - CSV 导出器
// ==========================================
// 职责: 把观测记录写出为 CSV 文件
// 格式: 表头 date,farm_id,weight,日期 ISO YYYY-MM-DD,重量整数
// ==========================================

use crate::domain::observation::Observation;
use csv::Writer;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 导出文件表头
pub const EXPORT_HEADER: &[&str] = &["date", "farm_id", "weight"];

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    #[error("CSV 写出失败: {0}")]
    CsvWriteError(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

// ==========================================
// CsvExporter - CSV 导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    /// 创建新的导出器
    pub fn new() -> Self {
        Self
    }

    /// 导出观测记录到 CSV 文件
    ///
    /// 行顺序与传入切片一致;传入仓储快照即可得到
    /// 农场编号升序、日期升序的稳定输出。
    ///
    /// # 返回
    /// 写出的数据行数 (不含表头)
    pub fn export_file(&self, observations: &[Observation], path: &Path) -> ExportResult<usize> {
        let file = File::create(path)?;
        let mut writer = Writer::from_writer(file);

        writer.write_record(EXPORT_HEADER)?;
        for obs in observations {
            writer.write_record(&[
                obs.date.format("%Y-%m-%d").to_string(),
                obs.farm_id.clone(),
                obs.weight.to_string(),
            ])?;
        }
        writer.flush()?;

        info!(file = %path.display(), rows = observations.len(), "导出完成");
        Ok(observations.len())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
