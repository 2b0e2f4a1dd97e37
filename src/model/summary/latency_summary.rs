use crate::common::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct PercentileValues {
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct OperationPercentiles {
    #[serde(rename = "operationName")]
    pub operation_name: String,
    /// Total hit count of the whole search, repeated on every operation.
    #[serde(rename = "transactionCount")]
    pub transaction_count: i64,
    pub percentiles: PercentileValues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SlowTransaction {
    #[serde(rename = "operationName")]
    pub operation_name: String,
    /// Milliseconds with two decimals and an `ms` suffix.
    pub duration: String,
}

/// operation name -> slowest traces, longest first
pub type SlowTransactionSummary = BTreeMap<String, Vec<SlowTransaction>>;
