use crate::domain::model::{FilterQuery, Record, Snapshot};
use crate::utils::error::{GatewayError, Result};
use serde_json::{Map, Value};

/// 依條件子句過濾快照並投影指定欄位,欄位順序照請求排列。
///
/// 條件欄位為 null/缺值的列不納入比較,直接略過;
/// 非 null 卻無法當數值比較的列則回 FieldTypeError。
/// 投影結果裡的缺值補成空字串,與 /data 的 null 表示法不同。
pub fn evaluate(snapshot: &Snapshot, query: &FilterQuery) -> Result<Vec<Record>> {
    if !snapshot.has_column(&query.field) {
        return Err(GatewayError::UnknownColumn {
            column: query.field.clone(),
        });
    }
    for column in &query.columns {
        if !snapshot.has_column(column) {
            return Err(GatewayError::UnknownColumn {
                column: column.clone(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in &snapshot.records {
        let value = match record.data.get(&query.field) {
            Some(Value::Null) | None => continue,
            Some(v) => v.as_f64().ok_or_else(|| GatewayError::FieldTypeError {
                field: query.field.clone(),
            })?,
        };
        if !query.comparison.holds(value, query.threshold) {
            continue;
        }

        let mut data = Map::new();
        for column in &query.columns {
            let cell = match record.data.get(column) {
                Some(Value::Null) | None => Value::String(String::new()),
                Some(v) => v.clone(),
            };
            data.insert(column.clone(), cell);
        }
        rows.push(Record { data });
    }

    Ok(rows)
}
