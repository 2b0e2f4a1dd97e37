use crate::common::*;

/// Where the spans live and which of them count as bank transactions.
#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct IndexConfig {
    /// Index read by the tag-walk summaries (total, count, transfer, date, exception).
    pub corpus_index: String,
    /// Index read by the percentile and slowest aggregations.
    pub aggregation_index: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_operation_names")]
    pub operation_names: Vec<String>,
    /// Fixed result window. Anything beyond it is silently left out.
    #[serde(default = "default_result_window")]
    pub result_window: usize,
    #[serde(default = "default_slowest_per_endpoint")]
    pub slowest_per_endpoint: usize,
    #[serde(default = "default_endpoint_bucket_size")]
    pub endpoint_bucket_size: usize,
}

fn default_service_name() -> String {
    String::from("java-bank-api")
}

fn default_operation_names() -> Vec<String> {
    ["fee", "deposit", "transfer", "withdraw", "refund", "payment"]
        .iter()
        .map(|op| format!("POST /api/v1/transactions/{}", op))
        .collect()
}

fn default_result_window() -> usize {
    1000
}

fn default_slowest_per_endpoint() -> usize {
    5
}

fn default_endpoint_bucket_size() -> usize {
    10
}

impl IndexConfig {
    pub fn with_indices(corpus_index: &str, aggregation_index: &str) -> Self {
        Self {
            corpus_index: corpus_index.to_string(),
            aggregation_index: aggregation_index.to_string(),
            service_name: default_service_name(),
            operation_names: default_operation_names(),
            result_window: default_result_window(),
            slowest_per_endpoint: default_slowest_per_endpoint(),
            endpoint_bucket_size: default_endpoint_bucket_size(),
        }
    }
}
