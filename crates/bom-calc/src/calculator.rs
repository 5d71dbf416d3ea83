//! 計劃主計算器
//!
//! 串起欄位驗證 → 編碼解析 → 展開縮放的完整流程。

use bom_core::table::Table;
use bom_core::{PlanRequest, Result};

use crate::{BomIndex, ExplosionCalculator, PlanResult, PlanWarning};

/// 物料需求計劃計算器
///
/// 無狀態；輸入表格唯讀，同一份表格可重複用於不同請求。
pub struct PlanCalculator;

impl PlanCalculator {
    /// 主計算入口
    ///
    /// 任一步失敗即回傳分類錯誤，不產生部分結果：
    /// 1. 驗證兩表必要欄位
    /// 2. 將父件商品名稱解析為物料清單編碼
    /// 3. 展開子件並按生產數量縮放
    pub fn run(parent: &Table, child: &Table, request: &PlanRequest) -> Result<PlanResult> {
        tracing::info!(
            "開始物料需求計劃：商品「{}」，生產數量 {} 台（父件表 {} 列，子件表 {} 列）",
            request.product_name,
            request.production_quantity,
            parent.row_count(),
            child.row_count()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 欄位驗證（快速失敗）
        tracing::debug!("Step 1: 欄位驗證");
        BomIndex::ensure_valid(parent, child)?;

        // Step 2: 解析物料清單編碼
        tracing::debug!("Step 2: 解析物料清單編碼");
        let resolved = BomIndex::resolve_code(parent, &request.product_name, request.resolution)?;
        tracing::debug!(
            "解析結果：編碼 {}，相符 {} 筆",
            resolved.bom_code,
            resolved.matched_codes.len()
        );

        // Step 3: 展開與縮放
        tracing::debug!("Step 3: 展開與縮放");
        let explosion =
            ExplosionCalculator::explode(child, &resolved.bom_code, request.production_quantity)?;

        let mut result = PlanResult {
            product_name: resolved.product_name.clone(),
            bom_code: explosion.bom_code,
            production_quantity: explosion.production_quantity,
            rows: explosion.rows,
            total_cost: explosion.total_cost,
            warnings: Vec::new(),
            calculation_time_ms: None,
        };

        if resolved.is_ambiguous() {
            result.add_warning(PlanWarning::duplicate_product(
                &resolved.product_name,
                &resolved.matched_codes,
            ));
        }
        result.warnings.extend(explosion.warnings);

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("物料需求計劃完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("子件列數: {}，成本總計: {:?}", result.rows.len(), result.total_cost);

        Ok(result)
    }
}
