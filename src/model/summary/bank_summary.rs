use crate::common::*;

/// bank name -> transaction type -> count
pub type CountSummary = BTreeMap<String, BTreeMap<String, u64>>;

/// `"<bank> (to)"` / `"<bank> (from)"` -> `"TRANSFER"` -> count
pub type TransferSummary = BTreeMap<String, BTreeMap<String, u64>>;

/// exception type -> count
pub type ExceptionSummary = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct BetweenBanksSummary {
    #[serde(rename = "transactionCount")]
    pub transaction_count: u64,
    #[serde(rename = "fromBankID")]
    pub from_bank_id: String,
    #[serde(rename = "toBankID")]
    pub to_bank_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct DateCountSummary {
    #[serde(rename = "transactionCount")]
    pub transaction_count: CountSummary,
    #[serde(rename = "bankID")]
    pub bank_id: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}
