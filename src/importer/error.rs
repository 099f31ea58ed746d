// ==========================================
// 牛奶产量数据管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约束: 解析错误必须携带行号与原始内容
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 记录解析错误 =====
    #[error("日期格式错误 (行 {row}): 期望 YYYY-MM-DD，实际 {value}")]
    DateFormatError { row: usize, value: String },

    #[error("重量格式错误 (行 {row}): 期望整数，实际 {value}")]
    WeightFormatError { row: usize, value: String },

    #[error("记录字段缺失 (行 {row}): 期望 date,farm_id,weight 三列，实际 {content}")]
    MalformedRecord { row: usize, content: String },

    #[error("农场编号缺失 (行 {0})")]
    FarmIdMissing(usize),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
