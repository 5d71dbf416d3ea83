//! 計劃匯出結構
//!
//! 工作表名稱與檔名格式沿用上游系統的約定，屬於對外契約。

use bom_calc::PlanResult;
use bom_core::table::Table;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 物料需求計劃工作表名稱
pub const SHEET_NAME: &str = "物料需求计划";

/// 匯出檔名
///
/// 格式：`{商品}_物料需求计划_{數量}台_{時間戳}.xlsx`，
/// 時間戳為 `%Y%m%d_%H%M%S`。
pub fn export_file_name(
    product_name: &str,
    production_quantity: i64,
    timestamp: NaiveDateTime,
) -> String {
    format!(
        "{}_{}_{}台_{}.xlsx",
        product_name,
        SHEET_NAME,
        production_quantity,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// 以當前本地時間產生匯出檔名
pub fn export_file_name_now(product_name: &str, production_quantity: i64) -> String {
    export_file_name(
        product_name,
        production_quantity,
        chrono::Local::now().naive_local(),
    )
}

/// 單張工作表（名稱 + 含總計列的表格）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSheet {
    /// 工作表名稱
    pub sheet_name: String,
    /// 輸出表格（固定欄序，末列為總計列）
    pub table: Table,
}

impl PlanSheet {
    /// 從計劃結果建立工作表
    pub fn from_plan(plan: &PlanResult) -> Self {
        Self {
            sheet_name: SHEET_NAME.to_string(),
            table: plan.to_table(),
        }
    }
}

/// 匯出包（約定檔名 + 工作表），交由外部寫檔器序列化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExport {
    /// 約定檔名
    pub file_name: String,
    /// 工作表
    pub sheet: PlanSheet,
}

impl PlanExport {
    /// 以指定時間戳建立匯出包
    pub fn build(plan: &PlanResult, timestamp: NaiveDateTime) -> Self {
        Self {
            file_name: export_file_name(&plan.product_name, plan.production_quantity, timestamp),
            sheet: PlanSheet::from_plan(plan),
        }
    }

    /// 以當前本地時間建立匯出包
    pub fn build_now(plan: &PlanResult) -> Self {
        Self {
            file_name: export_file_name_now(&plan.product_name, plan.production_quantity),
            sheet: PlanSheet::from_plan(plan),
        }
    }
}
