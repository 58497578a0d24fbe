//! API Response types
//!
//! Standardized response structure for all JSON endpoints.

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All JSON endpoints answer with this shape:
/// ```json
/// {
///     "message": "Category inserted.",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable message
    pub message: String,
    /// Response data (omitted when there is none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn ok(data: T) -> Self {
        Self {
            message: "OK".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response with a custom message and data
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Create a data-less response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}
