use crate::domain::model::{Record, Snapshot};
use crate::domain::ports::AnswerModel;
use crate::utils::error::Result;

/// 自由形式查詢帶給模型的上下文列數上限
const SAMPLE_ROWS: usize = 10;

/// 取快照前 10 列當上下文組 prompt,委派給語言模型,回覆去頭尾空白。
/// 不重試、不串流、不快取。
pub async fn answer<M: AnswerModel>(model: &M, snapshot: &Snapshot, query: &str) -> Result<String> {
    let prompt = build_prompt(snapshot, query)?;
    let reply = model.complete(&prompt).await?;
    Ok(reply.trim().to_string())
}

pub fn build_prompt(snapshot: &Snapshot, query: &str) -> Result<String> {
    let sample: Vec<&Record> = snapshot.records.iter().take(SAMPLE_ROWS).collect();
    let sample_json = serde_json::to_string(&sample)?;
    Ok(format!(
        "Here are the first 10 rows:\n{}\n\nAnswer: {}",
        sample_json, query
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::parse_snapshot;

    #[test]
    fn prompt_embeds_at_most_ten_rows() {
        let mut csv = String::from("Item\n");
        for i in 1..=12 {
            csv.push_str(&format!("item{}\n", i));
        }
        let snapshot = parse_snapshot(&csv).unwrap();

        let prompt = build_prompt(&snapshot, "how many items?").unwrap();
        assert!(prompt.contains("item10"));
        assert!(!prompt.contains("item11"));
    }

    #[test]
    fn prompt_embeds_all_rows_when_fewer_than_ten() {
        let snapshot = parse_snapshot("Item\na\nb\n").unwrap();
        let prompt = build_prompt(&snapshot, "anything?").unwrap();
        assert!(prompt.contains("\"Item\":\"a\""));
        assert!(prompt.contains("\"Item\":\"b\""));
    }

    #[test]
    fn prompt_ends_with_verbatim_query() {
        let snapshot = parse_snapshot("Item\na\n").unwrap();
        let prompt = build_prompt(&snapshot, "What is the cheapest item?").unwrap();
        assert!(prompt.ends_with("Answer: What is the cheapest item?"));
    }
}
