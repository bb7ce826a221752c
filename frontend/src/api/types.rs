use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnquiry {
    pub name: String,
    pub mobile: String,
    pub email: String,
}

/// One server page of the admin listing. `count` is the total across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryPage {
    #[serde(default)]
    pub results: Vec<Enquiry>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub access: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Shapes the remote API uses for error bodies (`{"error": ..}` or `{"detail": ..}`).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
    code: Option<String>,
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            status: None,
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            status: None,
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            status: None,
            details: None,
        }
    }

    /// Builds an error for a non-2xx response, keeping the server message when the
    /// body is JSON and falling back to the status line otherwise.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let details: Option<Value> = serde_json::from_slice(body).ok();
        let parsed = details
            .as_ref()
            .and_then(|value| serde_json::from_value::<ErrorBody>(value.clone()).ok())
            .unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.detail)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        let code = parsed.code.unwrap_or_else(|| match status {
            401 => "UNAUTHORIZED".to_string(),
            403 => "FORBIDDEN".to_string(),
            _ => format!("HTTP_{}", status),
        });
        Self {
            error: message,
            code,
            status: Some(status),
            details,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }

    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        self.code == "REQUEST_FAILED"
    }
}
