//! # BOM Export
//!
//! 物料需求計劃的匯出結構與命名約定。
//! 核心只交出結構化的工作表資料，實際寫出試算表檔案由外部協作者完成。

pub mod sheet;

pub use sheet::{export_file_name, export_file_name_now, PlanExport, PlanSheet, SHEET_NAME};
