//! # BOM Calculation Engine
//!
//! 物料需求計劃核心計算引擎：
//! - **BomIndex**: 欄位驗證、商品列表、編碼解析
//! - **ExplosionCalculator**: 單層展開與數量/成本縮放
//! - **SupplierGrouping**: 供應商分組小計
//! - **PlanCalculator**: 完整流程入口

pub mod calculator;
pub mod explosion;
pub mod grouping;
pub mod index;

// Re-export 主要類型
pub use calculator::PlanCalculator;
pub use explosion::{Explosion, ExplosionCalculator};
pub use grouping::{SupplierGroup, SupplierGrouping};
pub use index::{BomIndex, ResolvedProduct, ValidationResult};

use bom_core::table::{CellValue, Table};
use bom_core::{columns, ScaledRow};
use rust_decimal::Decimal;

/// 物料需求計劃結果
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// 父件商品名稱
    pub product_name: String,

    /// 物料清單編碼
    pub bom_code: String,

    /// 生產數量（台）
    pub production_quantity: i64,

    /// 縮放後的資料列（不含總計列）
    pub rows: Vec<ScaledRow>,

    /// 成本金額總計；全部資料列缺值時為缺值
    pub total_cost: Option<Decimal>,

    /// 警告信息（數值降級、同名父件等）
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanResult {
    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    /// 資料列數（不含總計列）
    pub fn data_row_count(&self) -> usize {
        self.rows.len()
    }

    /// 按供應商分組（只分組資料列，總計列不參與）
    pub fn group_by_supplier(&self) -> Vec<SupplierGroup> {
        SupplierGrouping::group(&self.rows)
    }

    /// 輸出為固定欄序的表格
    ///
    /// 資料列之後恆附加一條總計列：文字欄為空字串、數值欄缺值、
    /// 「需用数量_总计」欄放標記文字、「成本金额_总计」欄放成本總計。
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(columns::OUTPUT_COLUMNS);

        for row in &self.rows {
            table.push_row(vec![
                CellValue::Text(row.component_name.clone()),
                text_or_missing(&row.spec),
                number_or_missing(row.unit_quantity),
                number_or_missing(row.unit_cost),
                number_or_missing(row.line_cost),
                number_or_missing(row.scaled_quantity),
                number_or_missing(row.scaled_cost),
                text_or_missing(&row.supplier),
            ]);
        }

        // 總計列
        table.push_row(vec![
            CellValue::Text(String::new()),
            CellValue::Text(String::new()),
            CellValue::Missing,
            CellValue::Missing,
            CellValue::Missing,
            CellValue::Text(columns::TOTAL_LABEL.to_string()),
            number_or_missing(self.total_cost),
            CellValue::Text(String::new()),
        ]);

        table
    }
}

fn text_or_missing(value: &Option<String>) -> CellValue {
    match value {
        Some(text) => CellValue::Text(text.clone()),
        None => CellValue::Missing,
    }
}

fn number_or_missing(value: Option<Decimal>) -> CellValue {
    match value {
        Some(number) => CellValue::Number(number),
        None => CellValue::Missing,
    }
}

/// 計劃警告
#[derive(Debug, Clone)]
pub struct PlanWarning {
    /// 警告主體（欄名或商品名）
    pub context: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    /// 創建新的警告
    pub fn new(context: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            context,
            message,
            severity,
        }
    }

    /// 數值欄位含無法解析的文字，已降級為缺值
    pub fn dirty_number(row_index: usize, column: &str, raw: &str) -> Self {
        Self::new(
            column.to_string(),
            format!(
                "第 {} 列「{}」欄位的文字「{}」無法解析為數值，已視為缺值",
                row_index + 1,
                column,
                raw
            ),
            WarningSeverity::Warning,
        )
    }

    /// 同名父件，已採用第一筆
    pub fn duplicate_product(name: &str, codes: &[String]) -> Self {
        Self::new(
            name.to_string(),
            format!(
                "父件商品「{}」對應 {} 筆物料清單編碼 {:?}，已採用第一筆",
                name,
                codes.len(),
                codes
            ),
            WarningSeverity::Warning,
        )
    }
}

/// 警告嚴重度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
