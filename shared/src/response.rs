//! Success wrapper
//!
//! Every operation that passes classification returns its payload wrapped as
//! `{success: true, array: ...}`.

use crate::error::ErrorResponse;
use serde::{Deserialize, Serialize};

/// Successful operation result
///
/// ```json
/// { "success": true, "array": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    /// Always `true`
    pub success: bool,
    /// The payload, untouched
    pub array: T,
}

impl<T> SuccessResponse<T> {
    /// Consume the wrapper and return the payload
    pub fn into_inner(self) -> T {
        self.array
    }
}

/// Wrap a payload as a success result
pub fn wrap_success<T>(data: T) -> SuccessResponse<T> {
    SuccessResponse {
        success: true,
        array: data,
    }
}

/// Result of any client operation: the wrapped payload or the uniform error
pub type ApiOutcome<T> = Result<SuccessResponse<T>, ErrorResponse>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_success_keeps_payload() {
        let rows = vec![json!({"id": 1}), json!({"id": 2})];
        let wrapped = wrap_success(rows.clone());
        assert!(wrapped.success);
        assert_eq!(wrapped.array, rows);
    }

    #[test]
    fn test_wrap_success_empty() {
        let wrapped = wrap_success(Vec::<i32>::new());
        assert!(wrapped.success);
        assert!(wrapped.array.is_empty());
    }

    #[test]
    fn test_serialize() {
        let wrapped = wrap_success(json!([{"id": 1}]));
        let json = serde_json::to_value(&wrapped).unwrap();
        assert_eq!(json, json!({"success": true, "array": [{"id": 1}]}));
    }

    #[test]
    fn test_into_inner() {
        let wrapped = wrap_success("hola");
        assert_eq!(wrapped.into_inner(), "hola");
    }
}
