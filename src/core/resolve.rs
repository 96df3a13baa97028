use crate::domain::model::FeedbackRow;

/// Ordered header names tried when guessing which column holds feedback text.
/// List order wins over file order.
pub const PRIORITY_HEADERS: [&str; 6] =
    ["feedback", "comment", "comments", "review", "message", "text"];

/// Picks the feedback column from the first row's headers (case-insensitive)
/// and extracts its value for every row; with no match, falls back to
/// space-joining all column values per row. Rows that trim to empty are
/// dropped silently.
///
/// A heuristic, not a guarantee: the completion step is tolerant of noisy
/// input, so simplicity wins over robustness here.
pub fn extract_feedback_texts(rows: &[FeedbackRow]) -> Vec<String> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let feedback_column = PRIORITY_HEADERS
        .iter()
        .find(|candidate| {
            first
                .columns
                .iter()
                .any(|(header, _)| header.eq_ignore_ascii_case(candidate))
        })
        .copied();

    rows.iter()
        .map(|row| match feedback_column {
            Some(header) => row.get(header).unwrap_or("").trim().to_string(),
            None => row.values().collect::<Vec<_>>().join(" ").trim().to_string(),
        })
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(columns: &[(&str, &str)]) -> FeedbackRow {
        FeedbackRow {
            columns: columns
                .iter()
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_priority_header_selected_regardless_of_file_order() {
        let rows = vec![
            row(&[("name", "Ann"), ("review", "Great service"), ("date", "2024-01-01")]),
            row(&[("name", "Bob"), ("review", "Late delivery"), ("date", "2024-01-02")]),
        ];
        assert_eq!(
            extract_feedback_texts(&rows),
            vec!["Great service", "Late delivery"]
        );
    }

    #[test]
    fn test_list_order_beats_file_order() {
        // "text" comes first in the file but "comment" wins in the priority list.
        let rows = vec![row(&[("text", "from text"), ("comment", "from comment")])];
        assert_eq!(extract_feedback_texts(&rows), vec!["from comment"]);
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let rows = vec![row(&[("Feedback", "Solid product")])];
        assert_eq!(extract_feedback_texts(&rows), vec!["Solid product"]);
    }

    #[test]
    fn test_fallback_joins_all_columns() {
        let rows = vec![
            row(&[("name", "Ann"), ("rating", "5")]),
            row(&[("name", "Bob"), ("rating", "2")]),
        ];
        assert_eq!(extract_feedback_texts(&rows), vec!["Ann 5", "Bob 2"]);
    }

    #[test]
    fn test_empty_after_trim_rows_are_dropped() {
        let rows = vec![
            row(&[("feedback", "  Great service  ")]),
            row(&[("feedback", "   ")]),
            row(&[("feedback", "")]),
            row(&[("feedback", "Late delivery")]),
        ];
        assert_eq!(
            extract_feedback_texts(&rows),
            vec!["Great service", "Late delivery"]
        );
    }

    #[test]
    fn test_fallback_empty_rows_are_dropped() {
        let rows = vec![row(&[("a", " "), ("b", "")]), row(&[("a", "x"), ("b", "y")])];
        assert_eq!(extract_feedback_texts(&rows), vec!["x y"]);
    }

    #[test]
    fn test_no_rows_yields_empty_corpus() {
        assert!(extract_feedback_texts(&[]).is_empty());
    }
}
