use thiserror::Error;

/// Fallback text used when neither the response nor the transport says anything useful.
pub const GENERIC_API_ERROR: &str = "Erro ao chamar a API";

/// Normalized failure of an outbound API call: one message plus the HTTP status, if any.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Builds the error for a non-2xx response.
    ///
    /// Picks the body's `message`, then a FastAPI style `detail`, then the
    /// status line's canonical reason.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let from_body = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "detail"].iter().find_map(|key| match value.get(*key) {
                    Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
                    Some(v @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)))
                        if *key == "detail" =>
                    {
                        Some(v.to_string())
                    }
                    _ => None,
                })
            });

        let message = from_body
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| GENERIC_API_ERROR.to_string());

        Self::new(message, Some(status.as_u16()))
    }

    /// Builds the error for a request that never produced a response.
    pub fn transport(err: &reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::new(GENERIC_API_ERROR, None)
        } else {
            Self::new(message, err.status().map(|s| s.as_u16()))
        }
    }

    pub fn decode(err: serde_json::Error, status: u16) -> Self {
        Self::new(format!("Resposta inválida da API: {}", err), Some(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_body_message_wins() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"message": "Nome já existe", "detail": "ignored"}"#,
        );
        assert_eq!(err.message, "Nome já existe");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn test_detail_used_when_no_message() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"detail": "collection not found"}"#);
        assert_eq!(err.message, "collection not found");
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn test_empty_or_falsy_message_is_skipped() {
        let err = ApiError::from_response(
            StatusCode::NOT_FOUND,
            r#"{"message": "", "detail": "collection not found"}"#,
        );
        assert_eq!(err.message, "collection not found");

        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"message": false, "detail": 0}"#);
        assert_eq!(err.message, "Bad Request");
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}]}"#,
        );
        assert!(err.message.contains("field required"));
    }

    #[test]
    fn test_falls_back_to_status_text() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.message, "Internal Server Error");
        assert_eq!(err.status, Some(500));
    }

    #[test]
    fn test_display_is_message() {
        let err = ApiError::new("boom", Some(418));
        assert_eq!(err.to_string(), "boom");
    }
}
