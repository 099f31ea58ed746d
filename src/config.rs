// ==========================================
// 牛奶产量数据管理系统 - 配置层
// ==========================================
// 职责: 展示精度与报表默认排序的配置管理
// 存储: TOML 配置文件,字段全部可缺省
// ==========================================

use crate::domain::types::{ReportSortKey, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// 配置模块错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    FileReadError(String),

    #[error("配置文件解析失败: {0}")]
    ParseError(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// DisplayConfig - 展示配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 平均值与占比的小数位数
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { decimals: 3 }
    }
}

// ==========================================
// ReportConfig - 报表默认项
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 默认排序键 (FARM_ID / TOTAL_WEIGHT)
    pub sort_by: ReportSortKey,

    /// 默认排序方向 (ASC / DESC)
    pub order: SortOrder,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort_by: ReportSortKey::FarmId,
            order: SortOrder::Asc,
        }
    }
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    /// 从 TOML 文件加载配置
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// 从 TOML 字符串解析配置
    pub fn parse(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 加载配置,未指定路径或加载失败时回落到默认配置
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => match Self::load(p) {
                Ok(config) => config,
                Err(err) => {
                    warn!(file = %p.display(), error = %err, "配置加载失败,使用默认配置");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.display.decimals, 3);
        assert_eq!(config.report.sort_by, ReportSortKey::FarmId);
        assert_eq!(config.report.order, SortOrder::Asc);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [display]
            decimals = 2

            [report]
            sort_by = "TOTAL_WEIGHT"
            order = "DESC"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.display.decimals, 2);
        assert_eq!(config.report.sort_by, ReportSortKey::TotalWeight);
        assert_eq!(config.report.order, SortOrder::Desc);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let toml = r#"
            [report]
            order = "DESC"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.display.decimals, 3);
        assert_eq!(config.report.sort_by, ReportSortKey::FarmId);
        assert_eq!(config.report.order, SortOrder::Desc);
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(matches!(
            AppConfig::parse("not valid toml ["),
            Err(ConfigError::ParseError(_))
        ));
        // 枚举值拼错同样是解析错误
        assert!(matches!(
            AppConfig::parse("[report]\nsort_by = \"BY_MOON_PHASE\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = AppConfig::load_or_default(None);
        assert_eq!(config.display.decimals, 3);

        let config = AppConfig::load_or_default(Some(Path::new("no_such_config.toml")));
        assert_eq!(config.display.decimals, 3);
    }
}
