use crate::domain::model::{Record, Snapshot};
use crate::utils::error::{GatewayError, Result};
use serde_json::{Map, Number, Value};

/// 把 CSV 文字解析成快照,表頭列決定所有記錄的欄位集
pub fn parse_snapshot(csv_text: &str) -> Result<Snapshot> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?;
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(GatewayError::SourceUnavailable {
            reason: "sheet has no header row".to_string(),
        });
    }
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut data = Map::new();
        for (i, column) in columns.iter().enumerate() {
            // 短列缺少的尾端欄位視為缺值
            let cell = row.get(i).unwrap_or("");
            data.insert(column.clone(), coerce_value(cell));
        }
        records.push(Record { data });
    }

    Ok(Snapshot { columns, records })
}

/// 空白 → null,整數/浮點數照字面解析,非有限浮點值一律正規化為 null,
/// 其餘保留為字串
fn coerce_value(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = cell.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = cell.parse::<f64>() {
        return Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null);
    }
    Value::String(cell.to_string())
}
