use crate::common::*;

#[derive(Debug, Deserialize)]
pub struct AggregationResponse<T> {
    pub hits: TotalHitsWrapper,
    pub aggregations: T,
}

#[derive(Debug, Deserialize)]
pub struct TotalHitsWrapper {
    pub total: TotalHits,
}

#[derive(Debug, Deserialize)]
pub struct TotalHits {
    pub value: i64,
}

#[derive(Debug, Deserialize)]
pub struct TermsAggregation<B> {
    pub buckets: Vec<B>,
}

#[derive(Debug, Deserialize)]
pub struct PercentileAggregation {
    pub by_operation: TermsAggregation<OperationPercentileBucket>,
}

#[derive(Debug, Deserialize)]
pub struct OperationPercentileBucket {
    pub key: String,
    pub load_time_percentiles: PercentilesValues,
}

/// `values` is keyed by the requested percent rendered as `"50.0"`, `"75.0"`, ...
#[derive(Debug, Deserialize)]
pub struct PercentilesValues {
    pub values: BTreeMap<String, f64>,
}
