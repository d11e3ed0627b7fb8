//! Wire payloads for the analyze endpoint.

use serde::{Deserialize, Serialize};

/// Periods offered by the analysis form. Informational only; any string is
/// sent verbatim.
pub const KNOWN_PERIODS: [&str; 4] = ["Day", "Week", "Month", "Year"];

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub keyword: String,
    pub period: String,
}

impl AnalyzeRequest {
    pub fn new(keyword: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            period: period.into(),
        }
    }
}

/// Successful response body. `result` is an HTML fragment rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = AnalyzeRequest::new("rust lang", "Week");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"keyword": "rust lang", "period": "Week"}));
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let resp: AnalyzeResponse =
            serde_json::from_str(r#"{"result": "<b>ok</b>", "took_ms": 12}"#).unwrap();
        assert_eq!(resp.result, "<b>ok</b>");
    }

    #[test]
    fn test_response_requires_string_result() {
        assert!(serde_json::from_str::<AnalyzeResponse>(r#"{"html": "x"}"#).is_err());
        assert!(serde_json::from_str::<AnalyzeResponse>(r#"{"result": 42}"#).is_err());
    }
}
