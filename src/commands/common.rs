//! Output helpers shared by the raw-JSON commands.

use serde_json::Value;

use crate::{synergy::types::data_len, Result};

/// Pretty-printed body, preceded by a one-line summary when `data` is an array.
///
/// `noun` names what the `data` elements are, e.g. "seasons" or "entities".
pub fn render_raw_response(value: &Value, noun: &str) -> Result<String> {
    let body = serde_json::to_string_pretty(value)?;
    Ok(match data_len(value) {
        Some(n) => format!("Found {} {} in the response\n{}", n, noun, body),
        None => body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_with_summary() {
        let value = json!({ "data": [{ "entityId": "T1" }, { "entityId": "T2" }] });
        let text = render_raw_response(&value, "entities").unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Found 2 entities in the response"));
        assert_eq!(lines.next(), Some("{"));
        assert!(text.contains("\"entityId\": \"T1\""));
    }

    #[test]
    fn test_summary_names_the_fetched_noun() {
        let value = json!({ "data": [{ "seasonId": "S1" }] });
        let text = render_raw_response(&value, "seasons").unwrap();
        assert_eq!(text.lines().next(), Some("Found 1 seasons in the response"));
    }

    #[test]
    fn test_render_without_data_array() {
        let value = json!({ "message": "no data" });
        let text = render_raw_response(&value, "seasons").unwrap();

        assert!(!text.contains("Found"));
        assert!(text.starts_with('{'));
    }
}
