// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成7个测试数据集CSV文件
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use chrono::{Duration, NaiveDate};
use csv::{Writer, WriterBuilder};
use std::error::Error;
use std::fs::{self, File};

// CSV 表头
const CSV_HEADER: &[&str] = &["date", "farm_id", "weight"];

// 数据集内的农场数量
const FARM_COUNT: usize = 5;

// 观测记录结构
#[derive(Clone)]
struct WeightRecord {
    date: String,
    farm_id: String,
    weight: String,
}

impl WeightRecord {
    fn to_row(&self) -> Vec<String> {
        vec![self.date.clone(), self.farm_id.clone(), self.weight.clone()]
    }
}

// 生成正常观测记录
//
// 同一 index 永远生成同一条记录,跨数据集通过 index 偏移避免撞键
fn generate_normal_record(index: usize) -> WeightRecord {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let date = base + Duration::days((index / FARM_COUNT) as i64);

    WeightRecord {
        date: date.format("%Y-%m-%d").to_string(),
        farm_id: format!("Farm {}", index % FARM_COUNT),
        weight: format!("{}", 500 + (index * 37) % 300),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");

    fs::create_dir_all("tests/fixtures/datasets")?;

    // 1. 生成正常数据 (100条)
    generate_normal_data()?;

    // 2. 生成大数据集 (1000条)
    generate_large_dataset()?;

    // 3. 生成批次内重复数据
    generate_duplicate_within_batch()?;

    // 4. 生成跨批次重复数据
    generate_duplicate_cross_batch()?;

    // 5. 生成格式错误数据
    generate_malformed_rows()?;

    // 6. 生成含表头与空行的数据
    generate_header_and_blank_rows()?;

    // 7. 生成边界情况数据
    generate_edge_cases()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_normal_data() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/01_normal_data.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    for i in 0..100 {
        let record = generate_normal_record(i);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 01_normal_data.csv (100条)");
    Ok(())
}

fn generate_large_dataset() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/02_large_dataset.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    for i in 0..1000 {
        let record = generate_normal_record(i + 10000); // 避免与其他数据集冲突
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 02_large_dataset.csv (1000条)");
    Ok(())
}

fn generate_duplicate_within_batch() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/03_duplicate_within_batch.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 生成15条记录
    for i in 0..15 {
        let record = generate_normal_record(i + 20000);
        wtr.write_record(&record.to_row())?;
    }

    // 添加5条同键不同重量的重复记录
    for i in [0, 3, 6, 9, 12] {
        let mut record = generate_normal_record(i + 20000);
        record.weight = "1".to_string();
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 03_duplicate_within_batch.csv (20条，包含5组重复)");
    Ok(())
}

fn generate_duplicate_cross_batch() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/04_duplicate_cross_batch.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 前5条与 01_normal_data.csv 重复
    for i in 0..5 {
        let record = generate_normal_record(i);
        wtr.write_record(&record.to_row())?;
    }

    // 后5条是新数据
    for i in 0..5 {
        let record = generate_normal_record(i + 30000);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 04_duplicate_cross_batch.csv (10条，前5条重复)");
    Ok(())
}

fn generate_malformed_rows() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/05_malformed_rows.csv";
    let file = File::create(path)?;
    // 行字段数不一致,需要 flexible 写出
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 日期格式错误
    for i in 0..3 {
        let mut record = generate_normal_record(i + 40000);
        record.date = "2023/01/15".to_string();
        wtr.write_record(&record.to_row())?;
    }

    // 重量非数字
    for i in 0..3 {
        let mut record = generate_normal_record(i + 40003);
        record.weight = "NOT_A_NUMBER".to_string();
        wtr.write_record(&record.to_row())?;
    }

    // 农场编号为空
    for i in 0..3 {
        let mut record = generate_normal_record(i + 40006);
        record.farm_id = "".to_string();
        wtr.write_record(&record.to_row())?;
    }

    // 字段数不足
    wtr.write_record(["2023-06-01", "Farm 0"])?;
    wtr.write_record(["2023-06-02"])?;

    // 字段数过多
    wtr.write_record(["2023-06-03", "Farm 0", "640", "extra"])?;

    wtr.flush()?;
    println!("✓ 生成 05_malformed_rows.csv (12条，格式错误)");
    Ok(())
}

fn generate_header_and_blank_rows() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/06_header_and_blank_rows.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 正常数据
    for i in 0..5 {
        let record = generate_normal_record(i + 50000);
        wtr.write_record(&record.to_row())?;
    }

    // 文件中段混入的空行与表头行,导入时应跳过
    wtr.write_record(["", "", ""])?;
    wtr.write_record(["Date", "Farm ID", "Weight"])?;

    for i in 0..5 {
        let record = generate_normal_record(i + 50005);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 06_header_and_blank_rows.csv (10条有效，含表头与空行)");
    Ok(())
}

fn generate_edge_cases() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/07_edge_cases.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 重量为0
    for i in 0..3 {
        let mut record = generate_normal_record(i + 60000);
        record.weight = "0".to_string();
        wtr.write_record(&record.to_row())?;
    }

    // 重量为负数 (允许落库,用于校正场景)
    for i in 0..2 {
        let mut record = generate_normal_record(i + 60003);
        record.weight = "-50".to_string();
        wtr.write_record(&record.to_row())?;
    }

    // 闰日
    wtr.write_record(["2024-02-29", "Farm 0", "612"])?;

    // 年份边界
    wtr.write_record(["2023-01-01", "Farm 4", "600"])?;
    wtr.write_record(["2023-12-31", "Farm 4", "601"])?;

    // 日期首尾带空白
    wtr.write_record([" 2023-07-01 ", "Farm 3", " 640 "])?;

    // 正常数据（对照组）
    for i in 0..3 {
        let record = generate_normal_record(i + 60010);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 07_edge_cases.csv (12条，边界情况)");
    Ok(())
}
