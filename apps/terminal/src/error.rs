//! # API Error Type
//!
//! Unified error type for commands, plus the error the terminal loop exits
//! with.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Paradise Nursery                       │
//! │                                                                         │
//! │  "qty 3 abc"                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  ──►  Result<T, ApiError>                      │  │
//! │  │         │                                                        │  │
//! │  │  Validation Error? ─── ValidationError::InvalidFormat ──┐        │  │
//! │  │         │                                               ▼        │  │
//! │  │  Cart Error? ───────── CoreError::PlantNotFound ───── ApiError   │  │
//! │  └──────────────────────────────────────────────────────────┬───────┘  │
//! │                                                             │          │
//! │  Shell prints "error: quantity has invalid format: ..."  ◄──┘          │
//! │  and keeps reading. Only terminal I/O failures (RunError) end the loop.│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use paradise_core::{CoreError, ValidationError};

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Plant not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Plant does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart rule violated
    CartError,

    /// Shell input didn't name a known action
    UnknownCommand,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unknown_command(input: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command '{}'. Type 'help' for a list of commands.", input),
        )
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PlantNotFound(id) => ApiError::not_found("Plant", id),
            CoreError::QuantityTooLarge { requested, max } => ApiError::new(
                ErrorCode::CartError,
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading input or writing a view failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding JSON output failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use paradise_core::PlantId;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::PlantNotFound(PlantId::new(9)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Plant not found: 9");

        let err: ApiError = CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        }
        .into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::not_found("Plant", 42);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Plant not found: 42");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("quantity must be positive");
        assert_eq!(err.to_string(), "[ValidationError] quantity must be positive");
    }
}
