use crate::domain::model::{Comparison, FilterQuery, QueryIntent};
use regex::Regex;

/// 兩段式意圖分類器。
///
/// 選取子句 (`list ... for`) 與條件子句 (`where ... greater/less than N`)
/// 同時命中才視為結構化查詢;任一子句沒中就原文退回自由形式,
/// 絕不因查詢長得像結構化語法卻不完整而報錯。
pub struct QueryRouter {
    selection: Regex,
    condition: Regex,
}

impl QueryRouter {
    pub fn new() -> Self {
        Self {
            selection: Regex::new(r"(?i)list\s+([\w,\s]+)\s+for").expect("selection clause regex"),
            condition: Regex::new(r"(?i)where\s+(\w+)\s+(greater|less)\s+than\s+([0-9]+(?:\.[0-9]+)?)")
                .expect("condition clause regex"),
        }
    }

    pub fn classify(&self, query: &str) -> QueryIntent {
        if let (Some(sel), Some(cond)) = (
            self.selection.captures(query),
            self.condition.captures(query),
        ) {
            // 選取子句以 "and" 分隔欄位
            let columns: Vec<String> = sel[1].split("and").map(|c| c.trim().to_string()).collect();
            let comparison = if cond[2].eq_ignore_ascii_case("greater") {
                Comparison::Greater
            } else {
                Comparison::Less
            };
            if let Ok(threshold) = cond[3].parse::<f64>() {
                return QueryIntent::Filter(FilterQuery {
                    columns,
                    field: cond[1].to_string(),
                    comparison,
                    threshold,
                });
            }
        }

        QueryIntent::FreeForm(query.to_string())
    }
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(query: &str) -> QueryIntent {
        QueryRouter::new().classify(query)
    }

    #[test]
    fn structured_query_yields_filter_intent() {
        let intent = classify("list Price for records where Stock less than 5");
        assert_eq!(
            intent,
            QueryIntent::Filter(FilterQuery {
                columns: vec!["Price".to_string()],
                field: "Stock".to_string(),
                comparison: Comparison::Less,
                threshold: 5.0,
            })
        );
    }

    #[test]
    fn multiple_columns_split_on_and() {
        let intent = classify("list Name and Price for records where Stock greater than 2");
        match intent {
            QueryIntent::Filter(f) => {
                assert_eq!(f.columns, vec!["Name", "Price"]);
                assert_eq!(f.comparison, Comparison::Greater);
            }
            other => panic!("expected filter intent, got {:?}", other),
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let intent = classify("LIST price FOR records WHERE stock GREATER THAN 10");
        assert!(matches!(intent, QueryIntent::Filter(_)));
    }

    #[test]
    fn decimal_thresholds_parse() {
        match classify("list Name for records where Price less than 9.99") {
            QueryIntent::Filter(f) => assert_eq!(f.threshold, 9.99),
            other => panic!("expected filter intent, got {:?}", other),
        }
    }

    #[test]
    fn missing_for_keyword_falls_back_to_free_form() {
        let q = "list Price records where Stock less than 5";
        assert_eq!(classify(q), QueryIntent::FreeForm(q.to_string()));
    }

    #[test]
    fn missing_where_clause_falls_back_to_free_form() {
        let q = "list Price for all records";
        assert_eq!(classify(q), QueryIntent::FreeForm(q.to_string()));
    }

    #[test]
    fn missing_than_literal_falls_back_to_free_form() {
        let q = "list Price for records where Stock less 5";
        assert_eq!(classify(q), QueryIntent::FreeForm(q.to_string()));
    }

    #[test]
    fn plain_question_falls_back_to_free_form() {
        let q = "What is the cheapest item?";
        assert_eq!(classify(q), QueryIntent::FreeForm(q.to_string()));
    }

    #[test]
    fn non_numeric_threshold_falls_back_to_free_form() {
        let q = "list Price for records where Stock less than few";
        assert_eq!(classify(q), QueryIntent::FreeForm(q.to_string()));
    }
}
