use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 試算表的一列,欄名 → 值,維持表頭的欄位順序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

/// 單一請求抓下來的完整資料快照,用完即丟
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Snapshot {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
        }
    }

    pub fn holds(&self, left: f64, right: f64) -> bool {
        match self {
            Self::Greater => left > right,
            Self::Less => left < right,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub columns: Vec<String>,
    pub field: String,
    pub comparison: Comparison,
    pub threshold: f64,
}

/// 意圖分類結果:結構化過濾或自由形式
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIntent {
    Filter(FilterQuery),
    FreeForm(String),
}

/// 寫入端點的回應,狀態碼與 JSON 內容原樣轉發給呼叫端
#[derive(Debug, Clone)]
pub struct ProxyReply {
    pub status: u16,
    pub body: Value,
}
