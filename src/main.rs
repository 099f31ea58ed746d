// ==========================================
// 牛奶产量数据管理系统 - 命令行入口
// ==========================================
// 数据来源: 命令行给出的 CSV 文件或目录,启动时导入内存仓储
// 配置来源: --config 选项 > MILK_DMS_CONFIG 环境变量 > 内置默认
// ==========================================

use chrono::NaiveDate;
use milk_weight_dms::config::AppConfig;
use milk_weight_dms::domain::types::{ReportSortKey, SortField, SortOrder};
use milk_weight_dms::engine::ReportEngine;
use milk_weight_dms::importer::{CsvExporter, CsvImporter};
use milk_weight_dms::render;
use milk_weight_dms::repository::ObservationRepository;
use milk_weight_dms::{logging, APP_NAME, VERSION};
use std::error::Error;
use std::path::{Path, PathBuf};

/// 解析后的命令行选项与位置参数
struct CliArgs {
    sort: Option<String>,
    order: Option<String>,
    json: bool,
    config: Option<PathBuf>,
    positionals: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let command = match args.next() {
        Some(command) => command,
        None => {
            print_usage();
            return Err("缺少命令".into());
        }
    };

    if matches!(command.as_str(), "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let cli = parse_args(args)?;

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("MILK_DMS_CONFIG").ok().map(PathBuf::from));
    let config = AppConfig::load_or_default(config_path.as_deref());

    match command.as_str() {
        "list" => cmd_list(&cli, &config),
        "farms" => cmd_farms(&cli),
        "farm" => cmd_farm(&cli, &config),
        "annual" => cmd_annual(&cli, &config),
        "monthly" => cmd_monthly(&cli, &config),
        "range" => cmd_range(&cli, &config),
        "export" => cmd_export(&cli),
        other => {
            print_usage();
            Err(format!("未知命令: {other}").into())
        }
    }
}

fn print_usage() {
    println!("{APP_NAME} v{VERSION}");
    println!();
    println!("用法: milk-weight-dms <命令> [选项] <参数>...");
    println!();
    println!("命令:");
    println!("  list    <数据>...                 全量记录列表");
    println!("  farms   <数据>...                 农场编号与年份维度");
    println!("  farm    <农场> <年份> <数据>...   单农场月度报表");
    println!("  annual  <年份> <数据>...          年度报表(按农场)");
    println!("  monthly <年份> <月份> <数据>...   月度报表(按农场)");
    println!("  range   <起始> <结束> <数据>...   日期范围报表,日期格式 YYYY-MM-DD");
    println!("  export  <输出.csv> <数据>...      合并导入后导出单个 CSV");
    println!();
    println!("选项:");
    println!("  --sort=<键>     报表: FARM_ID|TOTAL_WEIGHT  列表: ID|DATE|WEIGHT");
    println!("  --order=<方向>  ASC|DESC");
    println!("  --json          以 JSON 输出报表行");
    println!("  --config=<路径> TOML 配置文件 (亦可用环境变量 MILK_DMS_CONFIG)");
    println!();
    println!("<数据> 为 CSV 文件或包含 CSV 文件的目录");
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs, Box<dyn Error>> {
    let mut cli = CliArgs {
        sort: None,
        order: None,
        json: false,
        config: None,
        positionals: Vec::new(),
    };

    for arg in args {
        if let Some(value) = arg.strip_prefix("--sort=") {
            cli.sort = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--order=") {
            cli.order = Some(value.to_string());
        } else if arg == "--json" {
            cli.json = true;
        } else if let Some(value) = arg.strip_prefix("--config=") {
            cli.config = Some(PathBuf::from(value));
        } else if arg.starts_with("--") {
            return Err(format!("未知选项: {arg}").into());
        } else {
            cli.positionals.push(arg);
        }
    }
    Ok(cli)
}

/// 把数据参数(文件或目录)全部导入一个新仓储
fn load_observations(data_args: &[String]) -> Result<ObservationRepository, Box<dyn Error>> {
    let importer = CsvImporter::new();
    let mut repo = ObservationRepository::new();

    for data_arg in data_args {
        let path = Path::new(data_arg);
        if path.is_dir() {
            importer.import_dir(&mut repo, path)?;
        } else {
            importer.import_file(&mut repo, path)?;
        }
    }

    tracing::info!(records = repo.len(), "数据加载完成");
    Ok(repo)
}

/// 报表排序键与方向: 命令行选项优先,其次配置文件默认
fn report_sort(cli: &CliArgs, config: &AppConfig) -> (ReportSortKey, SortOrder) {
    let sort = cli
        .sort
        .as_deref()
        .map(ReportSortKey::from_str)
        .unwrap_or(config.report.sort_by);
    let order = cli
        .order
        .as_deref()
        .map(SortOrder::from_str)
        .unwrap_or(config.report.order);
    (sort, order)
}

/// 表格字符串落屏,空结果行尾无换行需补一个
fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

fn cmd_list(cli: &CliArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let repo = load_observations(&cli.positionals)?;
    let engine = ReportEngine::new();

    let field = cli
        .sort
        .as_deref()
        .map(SortField::from_str)
        .unwrap_or(SortField::FarmId);
    let order = cli
        .order
        .as_deref()
        .map(SortOrder::from_str)
        .unwrap_or(config.report.order);

    let rows = engine.sorted_observations(&repo.snapshot(), field, order);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_block(&render::render_observations(&rows));
    }
    Ok(())
}

fn cmd_farms(cli: &CliArgs) -> Result<(), Box<dyn Error>> {
    let repo = load_observations(&cli.positionals)?;
    let engine = ReportEngine::new();
    let snapshot = repo.snapshot();

    let farm_ids = engine.farm_ids(&snapshot);
    let years = engine.years(&snapshot);

    if cli.json {
        let value = serde_json::json!({ "farm_ids": farm_ids, "years": years });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("农场: {}", farm_ids.join(", "));
        println!(
            "年份: {}",
            years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}

fn cmd_farm(cli: &CliArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let (farm_id, rest) = match cli.positionals.split_first() {
        Some(split) => split,
        None => return Err("farm 命令需要 <农场> <年份> 参数".into()),
    };
    let (year_arg, data_args) = match rest.split_first() {
        Some(split) => split,
        None => return Err("farm 命令需要 <年份> 参数".into()),
    };
    let year = parse_year(year_arg)?;

    let repo = load_observations(data_args)?;
    let rows = ReportEngine::new().farm_report(&repo.snapshot(), farm_id, year);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_block(&render::render_farm_reports(&rows, config.display.decimals));
    }
    Ok(())
}

fn cmd_annual(cli: &CliArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let (year_arg, data_args) = match cli.positionals.split_first() {
        Some(split) => split,
        None => return Err("annual 命令需要 <年份> 参数".into()),
    };
    let year = parse_year(year_arg)?;
    let (sort, order) = report_sort(cli, config);

    let repo = load_observations(data_args)?;
    let rows = ReportEngine::new().annual_report(&repo.snapshot(), year, sort, order);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_block(&render::render_date_range_reports(
            &rows,
            config.display.decimals,
        ));
    }
    Ok(())
}

fn cmd_monthly(cli: &CliArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    if cli.positionals.len() < 2 {
        return Err("monthly 命令需要 <年份> <月份> 参数".into());
    }
    let year = parse_year(&cli.positionals[0])?;
    let month = parse_month(&cli.positionals[1])?;
    let (sort, order) = report_sort(cli, config);

    let repo = load_observations(&cli.positionals[2..])?;
    let rows = ReportEngine::new().monthly_report(&repo.snapshot(), year, month, sort, order);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_block(&render::render_date_range_reports(
            &rows,
            config.display.decimals,
        ));
    }
    Ok(())
}

fn cmd_range(cli: &CliArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    if cli.positionals.len() < 2 {
        return Err("range 命令需要 <起始> <结束> 参数".into());
    }
    let start = parse_date_arg(&cli.positionals[0])?;
    let end = parse_date_arg(&cli.positionals[1])?;
    let (sort, order) = report_sort(cli, config);

    let repo = load_observations(&cli.positionals[2..])?;
    let rows = ReportEngine::new().date_range_report(&repo.snapshot(), start, end, sort, order);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_block(&render::render_date_range_reports(
            &rows,
            config.display.decimals,
        ));
    }
    Ok(())
}

fn cmd_export(cli: &CliArgs) -> Result<(), Box<dyn Error>> {
    let (out_arg, data_args) = match cli.positionals.split_first() {
        Some(split) => split,
        None => return Err("export 命令需要 <输出.csv> 参数".into()),
    };

    let repo = load_observations(data_args)?;
    let written = CsvExporter::new().export_file(&repo.snapshot(), Path::new(out_arg))?;
    println!("已导出 {written} 行到 {out_arg}");
    Ok(())
}

fn parse_year(value: &str) -> Result<i32, Box<dyn Error>> {
    value
        .parse::<i32>()
        .map_err(|_| format!("年份格式错误: {value}").into())
}

fn parse_month(value: &str) -> Result<u32, Box<dyn Error>> {
    let month = value
        .parse::<u32>()
        .map_err(|_| format!("月份格式错误: {value}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("月份需在 1-12 之间: {value}").into());
    }
    Ok(month)
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("日期格式错误 (期望 YYYY-MM-DD): {value}").into())
}
