//! 欄位詞彙
//!
//! 欄名沿用上游 ERP 報表的既有詞彙（簡體中文），屬於對外資料契約的一部分，
//! 不得在接入邊界改名或翻譯。

/// 物料清單編碼（父件表與子件表共用的關聯鍵）
pub const BOM_CODE: &str = "物料清单编码";

/// 父件商品（成品名稱，呼叫端選擇的鍵）
pub const PARENT_PRODUCT: &str = "父件商品";

/// 子件商品（零部件名稱）
pub const COMPONENT_NAME: &str = "子件商品";

/// 規格型號（可選欄位）
pub const SPEC: &str = "规格型号";

/// 需用數量（每單位成品所需數量）
pub const UNIT_QUANTITY: &str = "需用数量";

/// 成本單價
pub const UNIT_COST: &str = "成本单价";

/// 成本金額（單位成品一列子件的成本，取自來源資料，非推導值）
pub const LINE_COST: &str = "成本金额";

/// 默認供應商（可選欄位）
pub const SUPPLIER: &str = "默认供应商";

/// 需用數量_總計（輸出欄：需用數量 × 生產數量）
pub const SCALED_QUANTITY: &str = "需用数量_总计";

/// 成本金額_總計（輸出欄：成本金額 × 生產數量）
pub const SCALED_COST: &str = "成本金额_总计";

/// 總計列在「需用数量_总计」欄放置的標記文字
pub const TOTAL_LABEL: &str = "成本金额汇总：";

/// 父件表必要欄位
pub const REQUIRED_PARENT_COLUMNS: [&str; 2] = [BOM_CODE, PARENT_PRODUCT];

/// 子件表必要欄位（規格型號與默認供應商為可選欄位，不在此列）
pub const REQUIRED_CHILD_COLUMNS: [&str; 5] =
    [BOM_CODE, COMPONENT_NAME, UNIT_QUANTITY, UNIT_COST, LINE_COST];

/// 輸出表格的欄位順序
pub const OUTPUT_COLUMNS: [&str; 8] = [
    COMPONENT_NAME,
    SPEC,
    UNIT_QUANTITY,
    UNIT_COST,
    LINE_COST,
    SCALED_QUANTITY,
    SCALED_COST,
    SUPPLIER,
];
