//! Delete-conflict classifier
//!
//! The backend's error payload shape is not fixed: deletes can fail with
//! `{message}`, `{error}`, or a raw network-failure string. This module is
//! the one boundary where string-sniffing is accepted; it is a best-effort
//! classifier, not a guarantee.

use serde_json::Value;

/// Substrings (case-insensitive) that indicate a referential-integrity
/// conflict anywhere in the serialized payload.
const CONFLICT_KEYWORDS: [&str; 4] = ["constraint", "foreign key", "pedido", "order"];

/// User-facing category of a failed product delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFailure {
    /// The product is referenced by one or more orders
    ForeignKeyConflict,
    /// The product no longer exists
    NotFound,
    /// The caller lacks permission
    Forbidden,
    /// Anything else, with the best available message text
    Unknown(String),
}

impl DeleteFailure {
    /// Explanatory message for display
    pub fn user_message(&self) -> &str {
        match self {
            Self::ForeignKeyConflict => {
                "This product cannot be deleted because it is used by one or more orders"
            }
            Self::NotFound => "Product not found",
            Self::Forbidden => "You do not have permission to delete this product",
            Self::Unknown(message) => message,
        }
    }
}

/// Classify a failed delete from its payload and HTTP status.
///
/// The rules form a priority list: the keyword/500 check runs before the
/// status-only checks, so a 500 always classifies as a foreign-key conflict
/// even when no keyword matched.
pub fn classify_delete_failure(payload: &Value, status: Option<u16>) -> DeleteFailure {
    let serialized = payload.to_string().to_lowercase();

    if status == Some(500)
        || CONFLICT_KEYWORDS
            .iter()
            .any(|keyword| serialized.contains(keyword))
    {
        return DeleteFailure::ForeignKeyConflict;
    }

    match status {
        Some(404) => DeleteFailure::NotFound,
        Some(401) | Some(403) => DeleteFailure::Forbidden,
        _ => DeleteFailure::Unknown(best_message(payload)),
    }
}

/// Best-effort message extraction: `message`, then `error`, then a generic
/// phrase.
fn best_message(payload: &Value) -> String {
    payload
        .get("message")
        .or_else(|| payload.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown error".to_string())
}
