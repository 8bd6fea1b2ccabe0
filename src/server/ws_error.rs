/// Centralized helper for WebSocket error frames.
///
/// Use this helper to keep error messages consistent, explicit, and
/// carrying a code plus optional context.
/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_ACTION").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. viewer_id, session_id).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    let context_str = context.unwrap_or("");
    format!(
        r#"{{"event":"Error","data":{{"code":"{}","message":"{}","context":"{}"}}}}"#,
        code, message, context_str
    )
}
