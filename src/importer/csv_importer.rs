// ==========================================
// 牛奶产量数据管理系统 - CSV 导入流水线
// ==========================================
// 职责: 单文件/整目录导入,解析与写入分两阶段
// 红线: 单文件原子性 - 出现解析错误的文件零写入
// 红线: 目录导入中单个文件失败不中断其余文件
// ==========================================

use crate::domain::observation::Observation;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_parser;
use crate::repository::ObservationRepository;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

// ==========================================
// ImportSummary - 单文件导入汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    /// 源文件路径
    pub file: String,

    /// 解析出的数据行数 (不含表头与空行)
    pub total_rows: usize,

    /// 成功写入仓储的行数
    pub inserted: usize,

    /// 主键重复被跳过的行数
    pub duplicates: usize,

    /// 导入耗时 (毫秒)
    pub elapsed_ms: u64,
}

// ==========================================
// ImportFailure - 目录导入中的单文件失败
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportFailure {
    /// 失败文件路径
    pub file: String,

    /// 失败原因
    pub message: String,
}

// ==========================================
// ImportReport - 目录导入汇总
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    /// 导入成功的文件数
    pub files_ok: usize,

    /// 导入失败的文件数
    pub files_failed: usize,

    /// 成功文件的数据行合计
    pub total_rows: usize,

    /// 成功写入仓储的行数合计
    pub inserted: usize,

    /// 主键重复被跳过的行数合计
    pub duplicates: usize,

    /// 逐文件失败明细
    pub failures: Vec<ImportFailure>,
}

// ==========================================
// CsvImporter - CSV 导入器
// ==========================================
pub struct CsvImporter;

impl CsvImporter {
    /// 创建新的导入器
    pub fn new() -> Self {
        Self
    }

    /// 导入单个 CSV 文件
    ///
    /// 先完整解析再写入: 任何一行解析失败都让该文件整体失败,
    /// 仓储保持不变。主键重复的行不算失败,计数后跳过。
    ///
    /// # 参数
    /// - `repo`: 目标仓储
    /// - `path`: CSV 文件路径
    ///
    /// # 返回
    /// - `Ok(ImportSummary)`: 行数/写入/重复统计
    /// - `Err(ImportError)`: 文件或解析错误,携带行号与原始内容
    pub fn import_file(
        &self,
        repo: &mut ObservationRepository,
        path: &Path,
    ) -> ImportResult<ImportSummary> {
        let started = Instant::now();
        let file_name = path.display().to_string();
        info!(file = %file_name, "开始导入产量数据");

        // === 步骤 1: 文件检查 ===
        if !path.exists() {
            return Err(ImportError::FileNotFound(file_name));
        }
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // === 步骤 2: 完整解析 ===
        let observations = self.parse_file(path)?;
        debug!(file = %file_name, rows = observations.len(), "解析完成");

        // === 步骤 3: 写入仓储 ===
        let mut inserted = 0usize;
        let mut duplicates = 0usize;
        for obs in observations {
            let farm_id = obs.farm_id.clone();
            let date = obs.date;
            if repo.insert(obs) {
                inserted += 1;
            } else {
                duplicates += 1;
                warn!(farm_id = %farm_id, date = %date, "主键重复,记录跳过");
            }
        }

        // === 步骤 4: 汇总 ===
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let summary = ImportSummary {
            file: file_name,
            total_rows: inserted + duplicates,
            inserted,
            duplicates,
            elapsed_ms,
        };
        info!(
            file = %summary.file,
            total_rows = summary.total_rows,
            inserted = summary.inserted,
            duplicates = summary.duplicates,
            elapsed_ms = summary.elapsed_ms,
            "文件导入完成"
        );
        Ok(summary)
    }

    /// 导入目录下全部 CSV 文件,按文件名升序逐个处理
    ///
    /// 单个文件失败(解析错误等)记入 `failures` 并继续处理
    /// 其余文件;只有目录本身不可读才返回 `Err`。
    pub fn import_dir(
        &self,
        repo: &mut ObservationRepository,
        dir: &Path,
    ) -> ImportResult<ImportReport> {
        if !dir.exists() {
            return Err(ImportError::FileNotFound(dir.display().to_string()));
        }

        // 只取 *.csv (扩展名不区分大小写),排序保证导入顺序稳定
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_csv = path.is_file()
                && path
                    .extension()
                    .map(|e| e.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false);
            if is_csv {
                paths.push(path);
            }
        }
        paths.sort();

        info!(dir = %dir.display(), files = paths.len(), "开始目录导入");

        let mut report = ImportReport::default();
        for path in paths {
            match self.import_file(repo, &path) {
                Ok(summary) => {
                    report.files_ok += 1;
                    report.total_rows += summary.total_rows;
                    report.inserted += summary.inserted;
                    report.duplicates += summary.duplicates;
                }
                Err(err) => {
                    report.files_failed += 1;
                    warn!(file = %path.display(), error = %err, "文件导入失败,继续处理其余文件");
                    report.failures.push(ImportFailure {
                        file: path.display().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        info!(
            files_ok = report.files_ok,
            files_failed = report.files_failed,
            inserted = report.inserted,
            duplicates = report.duplicates,
            "目录导入完成"
        );
        Ok(report)
    }

    // ==========================================
    // 内部方法
    // ==========================================

    /// 解析文件为观测记录列表,不写入仓储
    ///
    /// 表头行按首字段内容识别而非固定在首行,文件任意位置出现都跳过;
    /// 完全空白的行同样跳过。错误携带源文件行号。
    fn parse_file(&self, path: &Path) -> ImportResult<Vec<Observation>> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致,统一在字段解析处报错
            .from_reader(file);

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0) as usize;
            let fields: Vec<&str> = record.iter().collect();

            // 跳过完全空白的行
            if fields.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            // 表头行
            if record_parser::is_header_field(fields[0]) {
                debug!(line, "跳过表头行");
                continue;
            }

            observations.push(record_parser::parse_fields(&fields, line)?);
        }
        Ok(observations)
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}
