//! 電磁爐物料需求計劃完整範例
//!
//! 以內建的示例資料展示從表格驗證到匯出結構的完整流程：
//! 驗證欄位 → 列出商品 → 展開縮放 → 供應商分組 → 匯出結構。

use bom_calc::{BomIndex, PlanCalculator};
use bom_core::*;
use bom_export::PlanExport;
use rust_decimal::Decimal;

fn main() -> Result<()> {
    println!("===== BOM Requirement Plan Example =====\n");

    // 步驟 1: 建立示例資料（對應上游 ERP 匯出的兩張報表）
    println!("[1] Build Sample Tables");
    let parent = sample_parent_table();
    let child = sample_child_table();
    println!("    Parent rows: {}", parent.row_count());
    println!("    Child rows:  {}\n", child.row_count());

    // 步驟 2: 欄位驗證
    println!("[2] Validate Columns");
    let validation = BomIndex::validate(&parent, &child);
    println!("    Valid: {}\n", validation.is_valid());

    // 步驟 3: 列出可選擇的父件商品
    println!("[3] List Products");
    for product in BomIndex::list_products(&parent) {
        println!("    - {}", product);
    }
    println!();

    // 步驟 4: 展開「5KW380V双平旋钮(5000W)」×10 台
    println!("[4] Run Plan Calculation");
    let request = PlanRequest::new("5KW380V双平旋钮(5000W)".to_string(), 10);
    let result = PlanCalculator::run(&parent, &child, &request)?;
    println!("    BOM code: {}", result.bom_code);
    println!("    Components: {}", result.data_row_count());
    println!("    Completed in {} ms\n", result.calculation_time_ms.unwrap_or(0));

    // 步驟 5: 輸出表格（含總計列）
    println!("[5] Plan Table");
    let table = result.to_table();
    println!("    {}", table.columns().join(" | "));
    for row in 0..table.row_count() {
        if let Some(cells) = table.cells(row) {
            let line: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
            println!("    {}", line.join(" | "));
        }
    }
    println!();

    // 步驟 6: 供應商分組
    println!("[6] Group by Supplier");
    for group in result.group_by_supplier() {
        println!(
            "    {}: {} 項，小計 {}",
            group.supplier,
            group.rows.len(),
            group
                .subtotal
                .map(|value| value.to_string())
                .unwrap_or_else(|| "（缺值）".to_string())
        );
        for row in &group.rows {
            println!(
                "      - {} × {}",
                row.component_name,
                row.scaled_quantity.unwrap_or(Decimal::ZERO)
            );
        }
    }
    println!();

    // 步驟 7: 匯出結構
    println!("[7] Export Structure");
    let export = PlanExport::build_now(&result);
    println!("    File name: {}", export.file_name);
    println!("    Sheet:     {}", export.sheet.sheet_name);
    println!("    Rows:      {}\n", export.sheet.table.row_count());

    if !result.warnings.is_empty() {
        println!("    Warnings:");
        for warning in &result.warnings {
            println!("      - [{}] {}", warning.context, warning.message);
        }
    }

    println!("===== Plan Complete =====\n");

    Ok(())
}

fn num(text: &str) -> CellValue {
    CellValue::Number(text.parse::<Decimal>().unwrap())
}

/// 父件表：五款電磁爐成品
fn sample_parent_table() -> Table {
    Table::new([columns::BOM_CODE, columns::PARENT_PRODUCT, "生产数量", "成本金额"])
        .with_row(vec![
            "0000072".into(),
            "5KW380V双平旋钮(5000W)".into(),
            1.into(),
            num("712.77"),
        ])
        .with_row(vec![
            "0000075".into(),
            "5KW380V双平磁控(5000W)".into(),
            1.into(),
            num("865.32"),
        ])
        .with_row(vec![
            "0000136".into(),
            "出口双电磁 110V".into(),
            1.into(),
            num("188.67"),
        ])
        .with_row(vec![
            "0000151".into(),
            "米洲5000W220V凹面旋钮（5000W）".into(),
            1.into(),
            num("195.52"),
        ])
        .with_row(vec![
            "0000150".into(),
            "米洲5000W220V平面旋钮（5000W）".into(),
            1.into(),
            num("187.38"),
        ])
}

/// 子件表：各成品的零部件清單
fn sample_child_table() -> Table {
    Table::new([
        columns::BOM_CODE,
        columns::COMPONENT_NAME,
        columns::SPEC,
        columns::UNIT_QUANTITY,
        columns::UNIT_COST,
        columns::LINE_COST,
        columns::SUPPLIER,
    ])
    .with_row(vec![
        "0000072".into(),
        "SZ-3868".into(),
        CellValue::Missing,
        3.into(),
        num("3.00"),
        num("9.00"),
        "供应商A".into(),
    ])
    .with_row(vec![
        "0000072".into(),
        "护边500长（家用双灶）".into(),
        CellValue::Missing,
        6.into(),
        num("1.00"),
        num("6.00"),
        "供应商B".into(),
    ])
    .with_row(vec![
        "0000072".into(),
        "泡沫块配3868".into(),
        "500*275*20mm".into(),
        3.into(),
        num("0.55"),
        num("1.65"),
        "供应商C".into(),
    ])
    .with_row(vec![
        "0000075".into(),
        "SZ-3868".into(),
        CellValue::Missing,
        3.into(),
        num("3.00"),
        num("9.00"),
        "供应商A".into(),
    ])
    .with_row(vec![
        "0000075".into(),
        "护边500长（家用双灶）".into(),
        CellValue::Missing,
        6.into(),
        num("1.00"),
        num("6.00"),
        "供应商B".into(),
    ])
    .with_row(vec![
        "0000075".into(),
        "磁控开关".into(),
        CellValue::Missing,
        2.into(),
        num("15.00"),
        num("30.00"),
        "供应商D".into(),
    ])
    .with_row(vec![
        "0000136".into(),
        "控制器-110V".into(),
        CellValue::Missing,
        1.into(),
        num("16.30"),
        num("16.30"),
        "供应商E".into(),
    ])
    .with_row(vec![
        "0000136".into(),
        "电源线".into(),
        CellValue::Missing,
        1.into(),
        num("3.50"),
        num("3.50"),
        "供应商F".into(),
    ])
    .with_row(vec![
        "0000150".into(),
        "控制器-220V".into(),
        CellValue::Missing,
        1.into(),
        num("18.50"),
        num("18.50"),
        "供应商E".into(),
    ])
    .with_row(vec![
        "0000150".into(),
        "电源线".into(),
        CellValue::Missing,
        1.into(),
        num("3.80"),
        num("3.80"),
        "供应商F".into(),
    ])
    .with_row(vec![
        "0000151".into(),
        "控制器-220V高配".into(),
        CellValue::Missing,
        1.into(),
        num("21.50"),
        num("21.50"),
        "供应商E".into(),
    ])
    .with_row(vec![
        "0000151".into(),
        "电源线".into(),
        CellValue::Missing,
        1.into(),
        num("3.80"),
        num("3.80"),
        "供应商F".into(),
    ])
}
