//! 供應商分組
//!
//! 將展開後的資料列按默認供應商分組並計算小計，供採購場景檢視。

use bom_core::{sum_scaled_cost, ScaledRow};
use rust_decimal::Decimal;

/// 供應商分組
#[derive(Debug, Clone)]
pub struct SupplierGroup {
    /// 供應商名稱（去除前後空白）
    pub supplier: String,
    /// 屬於該供應商的資料列（複製自展開結果，不增不減）
    pub rows: Vec<ScaledRow>,
    /// 成本金額小計（與總計相同的缺值排除規則）
    pub subtotal: Option<Decimal>,
}

/// 供應商分組計算器
pub struct SupplierGrouping;

impl SupplierGrouping {
    /// 按供應商分組
    ///
    /// 只分組資料列，總計列不參與。缺供應商（含空白）的列不進入任何分組，
    /// 也不集中成「未知供應商」組。分組順序為各供應商在資料列中的首次出現順序。
    pub fn group(rows: &[ScaledRow]) -> Vec<SupplierGroup> {
        let mut groups: Vec<SupplierGroup> = Vec::new();

        for row in rows {
            let name = match row.supplier_name() {
                Some(name) => name,
                None => continue,
            };

            match groups.iter_mut().find(|group| group.supplier == name) {
                Some(group) => group.rows.push(row.clone()),
                None => groups.push(SupplierGroup {
                    supplier: name.to_string(),
                    rows: vec![row.clone()],
                    subtotal: None,
                }),
            }
        }

        for group in &mut groups {
            group.subtotal = sum_scaled_cost(&group.rows);
        }

        groups
    }
}
