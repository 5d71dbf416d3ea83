//! BOM 展開
//!
//! 依物料清單編碼選取子件列，按生產數量縮放需求與成本，並彙總成本金額。
//! 展開為單層：子件即使本身也是成品，也不會遞迴展開。

use bom_core::table::{CellValue, Table};
use bom_core::{columns, sum_scaled_cost, BomError, Result, ScaledRow};
use rust_decimal::Decimal;

use crate::{PlanWarning, WarningSeverity};

/// 展開輸出（資料列 + 總計）
#[derive(Debug, Clone)]
pub struct Explosion {
    /// 物料清單編碼
    pub bom_code: String,
    /// 生產數量（台）
    pub production_quantity: i64,
    /// 縮放後的資料列（保持子件表的來源順序）
    pub rows: Vec<ScaledRow>,
    /// 成本金額總計；全部資料列缺值時為缺值
    pub total_cost: Option<Decimal>,
    /// 降級與欄位警告
    pub warnings: Vec<PlanWarning>,
}

/// 展開計算器
///
/// 無狀態；輸入表格唯讀，縮放結果另建新列。
pub struct ExplosionCalculator;

impl ExplosionCalculator {
    /// 展開一個物料清單編碼
    ///
    /// 生產數量必須為正整數，任何其他輸入一律先行拒絕。
    /// 子件列按來源順序逐列處理：數值欄位寬鬆轉換，
    /// 無法解析的非空白文字降級為缺值並記錄警告；
    /// 缺值 × 生產數量 = 缺值。
    pub fn explode(child: &Table, bom_code: &str, production_quantity: i64) -> Result<Explosion> {
        if production_quantity < 1 {
            return Err(BomError::InvalidQuantity(production_quantity));
        }

        tracing::debug!(
            "展開編碼 {}，生產數量 {} 台，子件表 {} 列",
            bom_code,
            production_quantity,
            child.row_count()
        );

        let mut warnings = Vec::new();

        // 可選欄位不存在時輸出以缺值補齊
        for column in [columns::SPEC, columns::SUPPLIER] {
            if !child.has_column(column) {
                warnings.push(PlanWarning::new(
                    column.to_string(),
                    format!("子件表沒有「{}」欄位，輸出以空白補齊", column),
                    WarningSeverity::Info,
                ));
            }
        }

        let quantity = Decimal::from(production_quantity);
        let mut rows = Vec::new();

        for row in 0..child.row_count() {
            if !Self::code_matches(child, row, bom_code) {
                continue;
            }

            let unit_quantity = Self::coerce(child, row, columns::UNIT_QUANTITY, &mut warnings);
            let unit_cost = Self::coerce(child, row, columns::UNIT_COST, &mut warnings);
            let line_cost = Self::coerce(child, row, columns::LINE_COST, &mut warnings);

            rows.push(ScaledRow {
                component_name: Self::text(child, row, columns::COMPONENT_NAME).unwrap_or_default(),
                spec: Self::text(child, row, columns::SPEC),
                unit_quantity,
                unit_cost,
                line_cost,
                scaled_quantity: unit_quantity.map(|value| value * quantity),
                scaled_cost: line_cost.map(|value| value * quantity),
                supplier: Self::text(child, row, columns::SUPPLIER),
            });
        }

        if rows.is_empty() {
            return Err(BomError::NoComponents(bom_code.to_string()));
        }

        let total_cost = sum_scaled_cost(&rows);

        tracing::debug!(
            "展開完成：{} 列子件，成本總計 {:?}，警告 {} 條",
            rows.len(),
            total_cost,
            warnings.len()
        );

        Ok(Explosion {
            bom_code: bom_code.to_string(),
            production_quantity,
            rows,
            total_cost,
            warnings,
        })
    }

    /// 編碼比對；編碼缺值的子件列不與任何編碼相符
    fn code_matches(child: &Table, row: usize, bom_code: &str) -> bool {
        match child.cell(row, columns::BOM_CODE) {
            Some(cell) if !cell.is_missing() => cell.to_string() == bom_code,
            _ => false,
        }
    }

    /// 寬鬆數值轉換；無法解析的非空白文字記錄一條降級警告
    fn coerce(
        child: &Table,
        row: usize,
        column: &str,
        warnings: &mut Vec<PlanWarning>,
    ) -> Option<Decimal> {
        let cell = child.cell(row, column)?;
        let value = cell.as_number();
        if value.is_none() {
            if let CellValue::Text(raw) = cell {
                if !raw.trim().is_empty() {
                    tracing::debug!("數值欄位降級：第 {} 列 {} = {:?}", row + 1, column, raw);
                    warnings.push(PlanWarning::dirty_number(row, column, raw));
                }
            }
        }
        value
    }

    /// 讀取文字儲存格；缺值回傳 `None`
    fn text(child: &Table, row: usize, column: &str) -> Option<String> {
        match child.cell(row, column) {
            Some(cell) if !cell.is_missing() => Some(cell.to_string()),
            _ => None,
        }
    }
}
