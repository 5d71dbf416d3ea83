//! 表格模型
//!
//! 以欄名尋址的列式表格，對應上游試算表解析後的資料形狀。
//! 引擎只讀取表格內容，不在原地修改，同一份表格可供多次計算重複使用。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 儲存格值
///
/// 上游資料的數值欄位可能以文字形式到貨（例如 `"3.00"`），
/// 也可能整格空白；缺值以獨立變體表示，不借用任何數值哨兵。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// 文字
    Text(String),
    /// 數值
    Number(Decimal),
    /// 缺值（對應來源表格的空白儲存格）
    Missing,
}

impl CellValue {
    /// 寬鬆數值轉換
    ///
    /// 數值儲存格直接取值；文字儲存格去除前後空白後嘗試解析，
    /// 解析失敗與缺值一律回傳 `None`，不中斷計算。
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<Decimal>().ok()
                }
            }
            CellValue::Missing => None,
        }
    }

    /// 檢查是否為缺值
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// 檢查是否為無法解析成數值的非空白文字
    pub fn is_dirty_number(&self) -> bool {
        match self {
            CellValue::Text(text) => !text.trim().is_empty() && self.as_number().is_none(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{}", text),
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(Decimal::from(value))
    }
}

/// 列式表格（欄名 + 資料列）
///
/// 欄名保持上游報表的原始順序；資料列與欄名等長，
/// 由 [`Table::push_row`] 在寫入時補齊或截斷。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// 欄名
    columns: Vec<String>,
    /// 資料列
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// 創建空表格
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 建構器模式：添加一列
    pub fn with_row(mut self, cells: Vec<CellValue>) -> Self {
        self.push_row(cells);
        self
    }

    /// 添加一列
    ///
    /// 長度不足的列以缺值補齊，多出的儲存格截斷，
    /// 保證每一列與欄名等長。
    pub fn push_row(&mut self, mut cells: Vec<CellValue>) {
        cells.resize(self.columns.len(), CellValue::Missing);
        self.rows.push(cells);
    }

    /// 欄名
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 檢查欄位是否存在
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// 欄位在表格中的位置
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// 讀取儲存格；列超界或欄位不存在時回傳 `None`
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// 讀取整列
    pub fn cells(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// 資料列數
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 檢查是否沒有任何資料列
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
