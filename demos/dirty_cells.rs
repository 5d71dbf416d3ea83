//! 髒資料降級與錯誤處理範例
//!
//! 展示引擎面對真實報表常見的資料品質問題時的行為：
//! 數值欄位的髒文字降級為缺值、同名父件的兩種解析策略、
//! 以及各類輸入錯誤的分類回報。

use bom_calc::{PlanCalculator, WarningSeverity};
use bom_core::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("===== Dirty Data Handling Example =====\n");

    // 步驟 1: 建立含髒資料的表格
    println!("[1] Build Tables with Dirty Cells");
    let parent = Table::new([columns::BOM_CODE, columns::PARENT_PRODUCT])
        .with_row(vec!["0000072".into(), "5KW380V双平旋钮(5000W)".into()])
        // 同名商品對應另一個編碼
        .with_row(vec!["0000200".into(), "5KW380V双平旋钮(5000W)".into()]);

    let child = Table::new([
        columns::BOM_CODE,
        columns::COMPONENT_NAME,
        columns::UNIT_QUANTITY,
        columns::UNIT_COST,
        columns::LINE_COST,
        columns::SUPPLIER,
    ])
    .with_row(vec![
        "0000072".into(),
        "SZ-3868".into(),
        // 數值以文字形式到貨，可解析
        " 3 ".into(),
        "3.00".into(),
        "9.00".into(),
        "供应商A".into(),
    ])
    .with_row(vec![
        "0000072".into(),
        "护边500长（家用双灶）".into(),
        // 髒文字，無法解析
        "6个".into(),
        CellValue::Missing,
        "待定".into(),
        CellValue::Missing,
    ]);
    println!("    Parent rows: {}", parent.row_count());
    println!("    Child rows:  {}\n", child.row_count());

    // 步驟 2: 寬鬆策略（沿用來源系統行為）
    println!("[2] First-Match Resolution");
    let request = PlanRequest::new("5KW380V双平旋钮(5000W)".to_string(), 10);
    let result = PlanCalculator::run(&parent, &child, &request)?;

    println!("    BOM code: {}（第一筆相符列）", result.bom_code);
    println!(
        "    Total cost: {}",
        result
            .total_cost
            .map(|value| value.to_string())
            .unwrap_or_else(|| "（缺值）".to_string())
    );
    for row in &result.rows {
        println!(
            "    - {}: 需用数量_总计 = {}，成本金额_总计 = {}",
            row.component_name,
            row.scaled_quantity
                .map(|value| value.to_string())
                .unwrap_or_else(|| "（缺值）".to_string()),
            row.scaled_cost
                .map(|value| value.to_string())
                .unwrap_or_else(|| "（缺值）".to_string()),
        );
    }
    println!();

    println!("    Warnings ({}):", result.warnings.len());
    for warning in &result.warnings {
        let tag = match warning.severity {
            WarningSeverity::Info => "INFO",
            WarningSeverity::Warning => "WARN",
        };
        println!("      [{}] {}", tag, warning.message);
    }
    println!();

    // 步驟 3: 嚴格策略（重名即失敗）
    println!("[3] Strict Resolution");
    let strict = PlanRequest::new("5KW380V双平旋钮(5000W)".to_string(), 10)
        .with_resolution(ProductResolution::Strict);
    match PlanCalculator::run(&parent, &child, &strict) {
        Ok(_) => println!("    （不應到達）"),
        Err(error) => println!("    Rejected: {}\n", error),
    }

    // 步驟 4: 其他輸入錯誤
    println!("[4] Classified Input Errors");
    let cases = [
        ("數量為零", PlanRequest::new("5KW380V双平旋钮(5000W)".to_string(), 0)),
        ("數量為負", PlanRequest::new("5KW380V双平旋钮(5000W)".to_string(), -3)),
        ("商品不存在", PlanRequest::new("不存在的商品".to_string(), 10)),
    ];
    for (label, request) in cases {
        match PlanCalculator::run(&parent, &child, &request) {
            Ok(_) => println!("    {}: （不應到達）", label),
            Err(error) => println!("    {}: {}", label, error),
        }
    }
    println!();

    println!("===== Example Complete =====\n");

    Ok(())
}
