//! 展開請求模型

use serde::{Deserialize, Serialize};

/// 同名父件的解析策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductResolution {
    /// 採用第一筆相符列，並附帶重名警告（沿用來源系統的行為）
    FirstMatch,
    /// 重名即回報錯誤，要求呼叫端先以編碼消歧
    Strict,
}

impl Default for ProductResolution {
    fn default() -> Self {
        ProductResolution::FirstMatch
    }
}

/// 展開請求
///
/// 一次計算所需的全部輸入由呼叫端逐次傳遞，引擎不依賴任何環境狀態。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// 父件商品名稱
    pub product_name: String,

    /// 生產數量（台），必須為正整數
    pub production_quantity: i64,

    /// 同名父件的解析策略
    pub resolution: ProductResolution,
}

impl PlanRequest {
    /// 創建新的展開請求
    pub fn new(product_name: String, production_quantity: i64) -> Self {
        Self {
            product_name,
            production_quantity,
            resolution: ProductResolution::default(),
        }
    }

    /// 建構器模式：設置解析策略
    pub fn with_resolution(mut self, resolution: ProductResolution) -> Self {
        self.resolution = resolution;
        self
    }
}
