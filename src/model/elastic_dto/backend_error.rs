use crate::common::*;

/// Error envelope returned by Elasticsearch for a failed request.
#[derive(Debug, Clone, PartialEq, Getters, new, thiserror::Error)]
#[getset(get = "pub")]
#[error("[{status}] {error_type}: {reason}")]
pub struct EsBackendError {
    pub status: String,
    pub error_type: String,
    pub reason: String,
}

#[doc = "Turns a non-2xx search response body into an error."]
/// # Arguments
/// * `status` - HTTP status line of the response, e.g. `400 Bad Request`
/// * `body`   - raw response body
///
/// # Returns
/// * anyhow::Error - `EsBackendError` when the body carries an `error` object or string
pub fn convert_backend_error(status: &str, body: &str) -> anyhow::Error {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => return anyhow!("error parsing the response body: {}", e),
    };

    match parsed.get("error") {
        Some(Value::Object(err)) => {
            let field = |name: &str| -> String {
                err.get(name)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };

            anyhow::Error::new(EsBackendError::new(
                status.to_string(),
                field("type"),
                field("reason"),
            ))
        }
        Some(Value::String(reason)) => anyhow::Error::new(EsBackendError::new(
            status.to_string(),
            String::new(),
            reason.clone(),
        )),
        _ => anyhow!("error parsing the response body: missing 'error' field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_object_is_structured() {
        let body: String = json!({
            "error": {
                "root_cause": [],
                "type": "index_not_found_exception",
                "reason": "no such index [jaeger-span-2024-07-21]"
            },
            "status": 404
        })
        .to_string();

        let err: anyhow::Error = convert_backend_error("404 Not Found", &body);
        let backend: &EsBackendError = err.downcast_ref::<EsBackendError>().unwrap();

        assert_eq!(backend.status(), "404 Not Found");
        assert_eq!(backend.error_type(), "index_not_found_exception");
        assert_eq!(
            err.to_string(),
            "[404 Not Found] index_not_found_exception: no such index [jaeger-span-2024-07-21]"
        );
    }

    #[test]
    fn test_error_string_keeps_reason() {
        let err: anyhow::Error =
            convert_backend_error("401 Unauthorized", r#"{"error":"missing authentication"}"#);

        assert_eq!(err.to_string(), "[401 Unauthorized] : missing authentication");
    }

    #[test]
    fn test_unparseable_body() {
        let err: anyhow::Error = convert_backend_error("502 Bad Gateway", "<html>bad gateway</html>");

        assert!(err.downcast_ref::<EsBackendError>().is_none());
        assert!(err.to_string().starts_with("error parsing the response body"));
    }
}
