// ==========================================
// 牛奶产量数据管理系统 - 导入导出层
// ==========================================
// 职责: CSV 文件与仓储之间的数据进出
// 支持: CSV (行格式 date,farm_id,weight)
// ==========================================

// 模块声明
pub mod csv_exporter;
pub mod csv_importer;
pub mod error;
pub mod record_parser;

// 重导出核心类型
pub use csv_exporter::{CsvExporter, ExportError, ExportResult, EXPORT_HEADER};
pub use csv_importer::{CsvImporter, ImportFailure, ImportReport, ImportSummary};
pub use error::{ImportError, ImportResult};
