use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellRequest {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub body: RequestBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBody {
    Add(AddRequest),
    Lookup(LookupRequest),
    Suggest(SuggestRequest),
    Distance(DistanceRequest),
    Stats,
    Ping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRequest {
    pub word: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub word: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellResponse {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBody {
    Added(AddedResponse),
    Lookup(LookupResponse),
    Suggest(SuggestResponse),
    Distance(DistanceResponse),
    Stats(StatsResponse),
    Pong,
    Error(ErrorResponse),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedResponse {
    pub word: String,
    pub newly_added: bool,
    pub frequency: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub word: String,
    pub found: bool,
    #[serde(default)]
    pub frequency: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub prefix: String,
    /// Empty when the prefix has no word-complete child.
    pub continuation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub distance: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub words: u64,
    pub nodes: usize,
    pub most_common: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    InvalidSymbol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_request() {
        let raw = r#"{"id":"abc","type":"add","word":"park"}"#;
        let request: ShellRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.id, "abc");
        match request.body {
            RequestBody::Add(payload) => assert_eq!(payload.word, "park"),
            _ => panic!("expected add request"),
        }
    }

    #[test]
    fn parse_stats_request_without_payload() {
        let raw = r#"{"type":"stats"}"#;
        let request: ShellRequest = serde_json::from_str(raw).unwrap();
        assert!(request.id.is_empty());
        assert!(matches!(request.body, RequestBody::Stats));
    }

    #[test]
    fn serialize_error_response() {
        let response = ShellResponse {
            id: "7".to_string(),
            body: ResponseBody::Error(ErrorResponse {
                code: ErrorCode::InvalidSymbol,
                message: "bad symbol".to_string(),
            }),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""type":"error""#));
        assert!(json.contains(r#""code":"invalid_symbol""#));
    }
}
