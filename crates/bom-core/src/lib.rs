//! # BOM Core
//!
//! 物料清單資料模型與共用類型：
//! - 列式表格與儲存格值（含寬鬆數值轉換）
//! - 欄位詞彙（對外資料契約）
//! - 展開請求與縮放結果列
//! - 統一的錯誤類型

pub mod columns;
pub mod plan;
pub mod request;
pub mod table;

// Re-export 主要類型
pub use plan::{sum_scaled_cost, ScaledRow};
pub use request::{PlanRequest, ProductResolution};
pub use table::{CellValue, Table};

/// BOM 計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum BomError {
    #[error("輸入表格缺少必要欄位：父件表 {parent:?}，子件表 {child:?}")]
    MissingColumns {
        parent: Vec<String>,
        child: Vec<String>,
    },

    #[error("找不到父件商品: {0}")]
    ProductNotFound(String),

    #[error("父件商品「{name}」對應多筆物料清單編碼: {codes:?}")]
    AmbiguousProduct { name: String, codes: Vec<String> },

    #[error("物料清單編碼 {0} 沒有任何子件資料")]
    NoComponents(String),

    #[error("無效的生產數量: {0}，必須為正整數")]
    InvalidQuantity(i64),
}

pub type Result<T> = std::result::Result<T, BomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = BomError::ProductNotFound("不存在的商品".to_string());
        assert!(error.to_string().contains("不存在的商品"));

        let error = BomError::InvalidQuantity(0);
        assert!(error.to_string().contains("0"));

        let error = BomError::MissingColumns {
            parent: vec![],
            child: vec!["需用数量".to_string()],
        };
        assert!(error.to_string().contains("需用数量"));
    }
}
