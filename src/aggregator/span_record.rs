use crate::common::*;

use crate::model::transaction::response_body::*;

const RESPONSE_BODY_TAG: &str = "http.response.body";

#[doc = "Extracts the `http.response.body` payload of one span `_source`."]
/// The first tag whose `key` is `http.response.body` wins. A string value is parsed as
/// embedded JSON, an inline object is used as-is.
///
/// # Arguments
/// * `source` - `_source` object of a search hit
///
/// # Returns
/// * Option<ResponseBody> - `None` when the tag is missing or its value is not a JSON object
pub fn extract_response_body(source: &Value) -> Option<ResponseBody> {
    let tag_value: &Value = source
        .get("tags")
        .and_then(Value::as_array)?
        .iter()
        .find(|tag| tag.get("key").and_then(Value::as_str) == Some(RESPONSE_BODY_TAG))?
        .get("value")?;

    match tag_value {
        Value::String(embedded) => match serde_json::from_str::<Value>(embedded) {
            Ok(body) if body.is_object() => Some(ResponseBody::from_value(&body)),
            Ok(_) => None,
            Err(e) => {
                debug!("[extract_response_body] response body is not valid JSON: {:?}", e);
                None
            }
        },
        Value::Object(_) => Some(ResponseBody::from_value(tag_value)),
        _ => None,
    }
}

#[doc = "Parses a raw search response once into the response bodies of its hits."]
/// Hits without a usable response body are dropped here, so they reach no summary.
/// An unparseable payload yields no records.
///
/// # Arguments
/// * `raw` - raw JSON text returned by the corpus query
///
/// # Returns
/// * Vec<ResponseBody>
pub fn parse_span_records(raw: &str) -> Vec<ResponseBody> {
    let response: Value = match serde_json::from_str(raw) {
        Ok(response) => response,
        Err(e) => {
            warn!("[parse_span_records] search response is not valid JSON: {:?}", e);
            return Vec::new();
        }
    };

    let hits: &[Value] = response
        .pointer("/hits/hits")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if let Some(total) = response.pointer("/hits/total/value").and_then(Value::as_u64) {
        if total > hits.len() as u64 {
            debug!(
                "[parse_span_records] {} of {} matching spans are outside the result window",
                total - hits.len() as u64,
                total
            );
        }
    }

    hits.iter()
        .filter_map(|hit| hit.get("_source"))
        .filter_map(extract_response_body)
        .collect()
}
