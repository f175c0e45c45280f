use riptide_core::errors::{RpcError, RpcResult};
use serde_json::Value;

/// Unwrap a rippled HTTP response body.
///
/// Success: `{"result": {...}}`. Errors keep HTTP 200 and carry the code
/// inside the result object: `{"result": {"error": "...", ...}}`.
pub(crate) fn parse_http_envelope(mut body: Value) -> RpcResult<Value> {
    let Some(result) = body.get_mut("result").map(Value::take) else {
        return Err(RpcError::Transport(
            "response body has no result envelope".to_string(),
        ));
    };
    if let Some(code) = result.get("error").and_then(Value::as_str) {
        return Err(protocol_error(code, &result));
    }
    Ok(result)
}

/// Unwrap a rippled WebSocket response frame.
///
/// The WebSocket API wraps results differently from HTTP: the frame carries
/// an explicit `status`, and error frames put the code at the top level.
pub(crate) fn parse_ws_envelope(mut body: Value) -> RpcResult<Value> {
    match body.get("status").and_then(Value::as_str) {
        Some("success") => body.get_mut("result").map(Value::take).ok_or_else(|| {
            RpcError::Transport("response frame has no result".to_string())
        }),
        Some("error") => {
            let Some(code) = body.get("error").and_then(Value::as_str) else {
                return Err(RpcError::Transport(
                    "error frame without error code".to_string(),
                ));
            };
            Err(protocol_error(code, &body))
        }
        _ => Err(RpcError::Transport(
            "response frame has no status".to_string(),
        )),
    }
}

fn protocol_error(code: &str, envelope: &Value) -> RpcError {
    let message = envelope
        .get("error_message")
        .and_then(Value::as_str)
        .unwrap_or(code);
    RpcError::Protocol {
        code: code.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_http_success_unwraps_result() {
        let body = json!({ "result": { "account_data": { "Balance": "1" } } });
        let result = parse_http_envelope(body).unwrap();
        assert_eq!(result["account_data"]["Balance"], "1");
    }

    #[test]
    fn test_http_error_envelope_preserves_code_verbatim() {
        let body = json!({
            "result": {
                "error": "actNotFound",
                "error_code": 19,
                "error_message": "Account not found.",
                "status": "error",
            }
        });
        let err = parse_http_envelope(body).unwrap_err();
        assert_eq!(
            err,
            RpcError::Protocol {
                code: "actNotFound".to_string(),
                message: "Account not found.".to_string(),
            }
        );
    }

    #[test]
    fn test_http_body_without_result_is_a_transport_error() {
        let err = parse_http_envelope(json!({ "unexpected": true })).unwrap_err();
        assert!(matches!(err, RpcError::Transport(_)));
    }

    #[test]
    fn test_ws_success_unwraps_result() {
        let body = json!({
            "id": 1,
            "status": "success",
            "type": "response",
            "result": { "ledger_current_index": 7 },
        });
        let result = parse_ws_envelope(body).unwrap();
        assert_eq!(result["ledger_current_index"], 7);
    }

    #[test]
    fn test_ws_error_frame_preserves_code_verbatim() {
        let body = json!({
            "id": 2,
            "status": "error",
            "error": "actNotFound",
            "error_message": "Account not found.",
        });
        let err = parse_ws_envelope(body).unwrap_err();
        assert_eq!(
            err,
            RpcError::Protocol {
                code: "actNotFound".to_string(),
                message: "Account not found.".to_string(),
            }
        );
    }

    #[test]
    fn test_ws_frame_without_status_is_a_transport_error() {
        let err = parse_ws_envelope(json!({ "id": 3 })).unwrap_err();
        assert!(matches!(err, RpcError::Transport(_)));
    }
}
