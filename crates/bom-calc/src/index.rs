//! BOM 索引
//!
//! 驗證輸入表格的欄位，列出可選擇的父件商品，
//! 並將父件商品名稱解析為物料清單編碼。

use bom_core::table::Table;
use bom_core::{columns, BomError, ProductResolution, Result};

/// 欄位驗證結果
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// 父件表缺少的必要欄位
    pub missing_parent_columns: Vec<String>,
    /// 子件表缺少的必要欄位
    pub missing_child_columns: Vec<String>,
}

impl ValidationResult {
    /// 兩表必要欄位皆齊備
    pub fn is_valid(&self) -> bool {
        self.missing_parent_columns.is_empty() && self.missing_child_columns.is_empty()
    }
}

/// 解析出的父件
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProduct {
    /// 父件商品名稱
    pub product_name: String,
    /// 採用的物料清單編碼（第一筆相符列）
    pub bom_code: String,
    /// 全部相符列的編碼（含採用的第一筆，按出現順序）
    pub matched_codes: Vec<String>,
}

impl ResolvedProduct {
    /// 檢查是否存在同名父件
    pub fn is_ambiguous(&self) -> bool {
        self.matched_codes.len() > 1
    }
}

/// BOM 索引
///
/// 無狀態計算器，所有方法以表格引用為輸入，不修改表格內容。
pub struct BomIndex;

impl BomIndex {
    /// 驗證兩張輸入表格的必要欄位
    ///
    /// 只檢查欄位是否存在，不讀取資料列；
    /// 缺漏欄位按必要欄位的宣告順序回報。
    pub fn validate(parent: &Table, child: &Table) -> ValidationResult {
        fn missing(table: &Table, required: &[&str]) -> Vec<String> {
            required
                .iter()
                .filter(|column| !table.has_column(column))
                .map(|column| column.to_string())
                .collect()
        }

        ValidationResult {
            missing_parent_columns: missing(parent, &columns::REQUIRED_PARENT_COLUMNS),
            missing_child_columns: missing(child, &columns::REQUIRED_CHILD_COLUMNS),
        }
    }

    /// 驗證欄位並將缺漏轉為錯誤（計算前的快速失敗檢查）
    pub fn ensure_valid(parent: &Table, child: &Table) -> Result<()> {
        let validation = Self::validate(parent, child);
        if validation.is_valid() {
            Ok(())
        } else {
            Err(BomError::MissingColumns {
                parent: validation.missing_parent_columns,
                child: validation.missing_child_columns,
            })
        }
    }

    /// 列出可選擇的父件商品名稱
    ///
    /// 按表格列的出現順序回傳；同名列一併保留，
    /// 讓資料品質問題留在呼叫端看得見的地方。缺值儲存格略過。
    pub fn list_products(parent: &Table) -> Vec<String> {
        let mut products = Vec::new();
        for row in 0..parent.row_count() {
            if let Some(cell) = parent.cell(row, columns::PARENT_PRODUCT) {
                if !cell.is_missing() {
                    products.push(cell.to_string());
                }
            }
        }
        products
    }

    /// 將父件商品名稱解析為物料清單編碼
    ///
    /// 名稱以儲存格的文字形式精確比對。`FirstMatch` 採用第一筆相符列，
    /// `matched_codes` 保留全部候選供呼叫端產生警告；
    /// `Strict` 在同名時回報 [`BomError::AmbiguousProduct`]。
    pub fn resolve_code(
        parent: &Table,
        product_name: &str,
        resolution: ProductResolution,
    ) -> Result<ResolvedProduct> {
        let mut matched_codes = Vec::new();

        for row in 0..parent.row_count() {
            let name_matches = parent
                .cell(row, columns::PARENT_PRODUCT)
                .map(|cell| !cell.is_missing() && cell.to_string() == product_name)
                .unwrap_or(false);

            if name_matches {
                // 編碼缺值的相符列以空字串記錄，之後選不到任何子件
                let code = parent
                    .cell(row, columns::BOM_CODE)
                    .map(|cell| cell.to_string())
                    .unwrap_or_default();
                matched_codes.push(code);
            }
        }

        let first = match matched_codes.first() {
            Some(code) => code.clone(),
            None => return Err(BomError::ProductNotFound(product_name.to_string())),
        };

        if matched_codes.len() > 1 && resolution == ProductResolution::Strict {
            return Err(BomError::AmbiguousProduct {
                name: product_name.to_string(),
                codes: matched_codes,
            });
        }

        Ok(ResolvedProduct {
            product_name: product_name.to_string(),
            bom_code: first,
            matched_codes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_core::CellValue;

    fn parent_table() -> Table {
        Table::new([columns::BOM_CODE, columns::PARENT_PRODUCT])
            .with_row(vec!["0000072".into(), "5KW380V双平旋钮(5000W)".into()])
            .with_row(vec!["0000075".into(), "5KW380V双平磁控(5000W)".into()])
            .with_row(vec!["0000136".into(), "出口双电磁 110V".into()])
    }

    fn child_table() -> Table {
        Table::new([
            columns::BOM_CODE,
            columns::COMPONENT_NAME,
            columns::UNIT_QUANTITY,
            columns::UNIT_COST,
            columns::LINE_COST,
        ])
    }

    #[test]
    fn test_validate_complete_tables() {
        let validation = BomIndex::validate(&parent_table(), &child_table());
        assert!(validation.is_valid());
        assert!(validation.missing_parent_columns.is_empty());
        assert!(validation.missing_child_columns.is_empty());
        assert!(BomIndex::ensure_valid(&parent_table(), &child_table()).is_ok());
    }

    #[test]
    fn test_validate_reports_missing_columns() {
        let parent = Table::new([columns::BOM_CODE]);
        let child = Table::new([columns::BOM_CODE, columns::COMPONENT_NAME]);

        let validation = BomIndex::validate(&parent, &child);
        assert!(!validation.is_valid());
        assert_eq!(validation.missing_parent_columns, vec![columns::PARENT_PRODUCT]);
        assert_eq!(
            validation.missing_child_columns,
            vec![columns::UNIT_QUANTITY, columns::UNIT_COST, columns::LINE_COST]
        );

        let error = BomIndex::ensure_valid(&parent, &child).unwrap_err();
        assert!(matches!(error, BomError::MissingColumns { .. }));
    }

    #[test]
    fn test_validate_ignores_extra_columns() {
        // 額外欄位（如父件表的生产数量）不影響驗證
        let parent = Table::new([columns::BOM_CODE, columns::PARENT_PRODUCT, "生产数量"]);
        let validation = BomIndex::validate(&parent, &child_table());
        assert!(validation.is_valid());
    }

    #[test]
    fn test_list_products_preserves_duplicates_and_order() {
        let parent = parent_table()
            .with_row(vec!["0000200".into(), "5KW380V双平旋钮(5000W)".into()])
            .with_row(vec!["0000201".into(), CellValue::Missing]);

        let products = BomIndex::list_products(&parent);
        assert_eq!(
            products,
            vec![
                "5KW380V双平旋钮(5000W)",
                "5KW380V双平磁控(5000W)",
                "出口双电磁 110V",
                // 同名列保留，缺值列略過
                "5KW380V双平旋钮(5000W)",
            ]
        );
    }

    #[test]
    fn test_resolve_code_single_match() {
        let resolved = BomIndex::resolve_code(
            &parent_table(),
            "出口双电磁 110V",
            ProductResolution::FirstMatch,
        )
        .unwrap();

        assert_eq!(resolved.bom_code, "0000136");
        assert_eq!(resolved.matched_codes, vec!["0000136"]);
        assert!(!resolved.is_ambiguous());
    }

    #[test]
    fn test_resolve_code_not_found() {
        let error = BomIndex::resolve_code(
            &parent_table(),
            "不存在的商品",
            ProductResolution::FirstMatch,
        )
        .unwrap_err();

        assert!(matches!(error, BomError::ProductNotFound(name) if name == "不存在的商品"));
    }

    #[test]
    fn test_resolve_code_first_match_on_duplicates() {
        let parent = parent_table().with_row(vec!["0000200".into(), "出口双电磁 110V".into()]);

        let resolved =
            BomIndex::resolve_code(&parent, "出口双电磁 110V", ProductResolution::FirstMatch)
                .unwrap();

        // 採用第一筆，全部候選保留
        assert_eq!(resolved.bom_code, "0000136");
        assert_eq!(resolved.matched_codes, vec!["0000136", "0000200"]);
        assert!(resolved.is_ambiguous());
    }

    #[test]
    fn test_resolve_code_strict_rejects_duplicates() {
        let parent = parent_table().with_row(vec!["0000200".into(), "出口双电磁 110V".into()]);

        let error =
            BomIndex::resolve_code(&parent, "出口双电磁 110V", ProductResolution::Strict)
                .unwrap_err();

        match error {
            BomError::AmbiguousProduct { name, codes } => {
                assert_eq!(name, "出口双电磁 110V");
                assert_eq!(codes, vec!["0000136", "0000200"]);
            }
            other => panic!("預期 AmbiguousProduct，得到 {:?}", other),
        }
    }

    #[test]
    fn test_resolve_code_missing_name_never_matches() {
        let parent = parent_table().with_row(vec!["0000300".into(), CellValue::Missing]);

        // 缺值的商品名稱不與任何查詢相符，包括空字串
        let error = BomIndex::resolve_code(&parent, "", ProductResolution::FirstMatch).unwrap_err();
        assert!(matches!(error, BomError::ProductNotFound(_)));
    }
}
