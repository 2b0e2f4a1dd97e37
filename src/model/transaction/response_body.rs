use crate::common::*;

/// Fields of the `http.response.body` payload that the bank summaries look at.
///
/// Every lookup is optional. A missing field reads as an empty string, and a
/// non-string scalar reads as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ResponseBody {
    source_bank_id: String,
    source_bank_name: String,
    destination_bank_id: String,
    destination_bank_name: String,
    account_bank_id: String,
    transaction_type: String,
    transaction_date: String,
    /// `Some` whenever the key exists, even with a `null` value.
    exception_type: Option<String>,
}

impl ResponseBody {
    #[doc = "Builds a ResponseBody from an already parsed payload object."]
    pub fn from_value(body: &Value) -> Self {
        Self {
            source_bank_id: get_str_by_pointer(body, "/sourceAccount/bank/bankId"),
            source_bank_name: get_str_by_pointer(body, "/sourceAccount/bank/name"),
            destination_bank_id: get_str_by_pointer(body, "/destinationAccount/bank/bankId"),
            destination_bank_name: get_str_by_pointer(body, "/destinationAccount/bank/name"),
            account_bank_id: get_str_by_pointer(body, "/accountDetails/bank/bankId"),
            transaction_type: get_str_by_pointer(body, "/transactionType"),
            transaction_date: get_str_by_pointer(body, "/transactionDate"),
            exception_type: body.get("exceptionType").map(convert_value_to_string),
        }
    }

    #[doc = "A record that carries `exceptionType` is an error record."]
    pub fn has_exception(&self) -> bool {
        self.exception_type.is_some()
    }

    pub fn is_source_bank(&self, bank_id: &str) -> bool {
        self.source_bank_id == bank_id
    }

    pub fn is_destination_bank(&self, bank_id: &str) -> bool {
        self.destination_bank_id == bank_id
    }

    pub fn is_account_bank(&self, bank_id: &str) -> bool {
        self.account_bank_id == bank_id
    }
}

#[doc = "Reads a nested field as text, empty when any segment is missing."]
fn get_str_by_pointer(body: &Value, pointer: &str) -> String {
    body.pointer(pointer)
        .map(convert_value_to_string)
        .unwrap_or_default()
}

fn convert_value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
