//! 展開結果列模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 縮放後的子件列
///
/// 展開結果中的一條資料列。數值欄位一律為 `Option<Decimal>`，
/// `None` 表示來源缺值或降級，縮放時缺值保持缺值，不以零代替。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRow {
    /// 子件商品名稱
    pub component_name: String,

    /// 規格型號
    pub spec: Option<String>,

    /// 每單位成品需用數量
    pub unit_quantity: Option<Decimal>,

    /// 成本單價
    pub unit_cost: Option<Decimal>,

    /// 單位成品的成本金額（取自來源資料，獨立縮放，非需用數量×成本單價的推導值）
    pub line_cost: Option<Decimal>,

    /// 需用數量_總計 = 需用數量 × 生產數量
    pub scaled_quantity: Option<Decimal>,

    /// 成本金額_總計 = 成本金額 × 生產數量
    pub scaled_cost: Option<Decimal>,

    /// 默認供應商
    pub supplier: Option<String>,
}

impl ScaledRow {
    /// 檢查是否帶有可用的供應商（空白視同缺供應商）
    pub fn has_supplier(&self) -> bool {
        self.supplier_name().is_some()
    }

    /// 供應商名稱（去除前後空白；缺供應商回傳 `None`）
    pub fn supplier_name(&self) -> Option<&str> {
        self.supplier
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// 成本金額_總計加總
///
/// 缺值不計入總和；全部缺值（或沒有任何資料列）時總和本身為缺值，
/// 不以零掩蓋不完整的資料。
pub fn sum_scaled_cost<'a, I>(rows: I) -> Option<Decimal>
where
    I: IntoIterator<Item = &'a ScaledRow>,
{
    let mut total = Decimal::ZERO;
    let mut seen = false;
    for row in rows {
        if let Some(cost) = row.scaled_cost {
            total += cost;
            seen = true;
        }
    }
    seen.then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(scaled_cost: Option<Decimal>, supplier: Option<&str>) -> ScaledRow {
        ScaledRow {
            component_name: "SZ-3868".to_string(),
            spec: None,
            unit_quantity: Some(Decimal::from(3)),
            unit_cost: Some(Decimal::from(3)),
            line_cost: Some(Decimal::from(9)),
            scaled_quantity: Some(Decimal::from(30)),
            scaled_cost,
            supplier: supplier.map(String::from),
        }
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("   "), false)]
    #[case(Some("供应商A"), true)]
    #[case(Some("  供应商B  "), true)]
    fn test_has_supplier(#[case] supplier: Option<&str>, #[case] expected: bool) {
        assert_eq!(row(None, supplier).has_supplier(), expected);
    }

    #[test]
    fn test_supplier_name_trims() {
        assert_eq!(row(None, Some("  供应商B  ")).supplier_name(), Some("供应商B"));
        assert_eq!(row(None, Some("   ")).supplier_name(), None);
    }

    #[test]
    fn test_sum_skips_missing() {
        let rows = vec![
            row(Some(Decimal::from(90)), None),
            row(None, None),
            row(Some(Decimal::from(60)), None),
        ];
        assert_eq!(sum_scaled_cost(&rows), Some(Decimal::from(150)));
    }

    #[test]
    fn test_sum_all_missing_is_missing() {
        // 全部缺值時總和不得偽裝成零
        let rows = vec![row(None, None), row(None, None)];
        assert_eq!(sum_scaled_cost(&rows), None);
    }

    #[test]
    fn test_sum_empty_is_missing() {
        assert_eq!(sum_scaled_cost(&[]), None);
    }
}
