use crate::common::*;

#[doc = "A search hit whose span carries `body` as its embedded response body."]
pub fn span(body: Value) -> Value {
    json!({
        "_index": "jaeger-span-2024-07-21",
        "_source": {
            "operationName": "POST /api/v1/transactions/transfer",
            "tags": [
                { "key": "span.kind", "value": "server" },
                { "key": "http.response.body", "value": body.to_string() }
            ]
        }
    })
}

pub fn span_without_body() -> Value {
    json!({
        "_index": "jaeger-span-2024-07-21",
        "_source": {
            "operationName": "POST /api/v1/transactions/transfer",
            "tags": [ { "key": "span.kind", "value": "server" } ]
        }
    })
}

pub fn search_response(hits: Vec<Value>) -> String {
    json!({
        "took": 3,
        "timed_out": false,
        "hits": {
            "total": { "value": hits.len(), "relation": "eq" },
            "hits": hits
        }
    })
    .to_string()
}

#[doc = "Response body of a transaction between two banks."]
pub fn transaction(
    transaction_type: &str,
    source: (&str, &str),
    destination: (&str, &str),
    transaction_date: &str,
) -> Value {
    json!({
        "sourceAccount": { "bank": { "bankId": source.0, "name": source.1 } },
        "destinationAccount": { "bank": { "bankId": destination.0, "name": destination.1 } },
        "transactionType": transaction_type,
        "transactionDate": transaction_date
    })
}

#[doc = "Response body of an account-level record, optionally failed with `exception_type`."]
pub fn account_record(bank_id: &str, exception_type: Option<&str>) -> Value {
    let mut body: Value = json!({ "accountDetails": { "bank": { "bankId": bank_id } } });

    if let Some(exception_type) = exception_type {
        body["exceptionType"] = json!(exception_type);
    }

    body
}

pub fn with_exception(mut body: Value, exception_type: &str) -> Value {
    body["exceptionType"] = json!(exception_type);
    body
}
