use serde::{Deserialize, Serialize};

/// Envelope every endpoint wraps its payload in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
    #[serde(default)]
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl<T: Default> ApiResponse<Option<T>> {
    /// Treat `data: null` as the empty value.
    pub fn or_default(self) -> ApiResponse<T> {
        ApiResponse {
            status: self.status,
            message: self.message,
            data: self.data.unwrap_or_default(),
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parse() {
        let raw = r#"{"status":200,"message":"OK","data":[1,2,3],"timestamp":"2025-01-01T00:00:00"}"#;
        let response: ApiResponse<Vec<i32>> = serde_json::from_str(raw).unwrap();
        assert!(response.is_ok());
        assert_eq!(response.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_optional_data_is_none() {
        let raw = r#"{"status":200,"message":"Logged out"}"#;
        let response: ApiResponse<Option<serde_json::Value>> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.data, None);
        assert_eq!(response.timestamp, "");
    }

    #[test]
    fn test_null_list_is_empty() {
        let raw = r#"{"status":200,"message":"No bills","data":null}"#;
        let response: ApiResponse<Option<Vec<i32>>> = serde_json::from_str(raw).unwrap();
        let response = response.or_default();
        assert!(response.data.is_empty());
        assert_eq!(response.message, "No bills");
    }
}
