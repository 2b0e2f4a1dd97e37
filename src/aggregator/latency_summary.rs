use crate::common::*;

use crate::model::elastic_dto::elastic_source_parser::*;
use crate::model::summary::latency_summary::*;

use crate::utils_modules::calculate_utils::*;

#[doc = "Reads one percentile from a bucket, failing when it is absent."]
fn get_percentile(bucket: &OperationPercentileBucket, percent: &str) -> anyhow::Result<f64> {
    let micros: f64 = *bucket
        .load_time_percentiles
        .values
        .get(percent)
        .ok_or_else(|| {
            anyhow!(
                "[get_percentile] percentile '{}' missing for operation '{}'",
                percent,
                bucket.key
            )
        })?;

    Ok(convert_micros_to_millis(micros))
}

#[doc = "Latency percentiles per operation from a `by_operation` percentiles aggregation."]
/// The whole payload must match the expected shape; there is no partial result.
/// `transactionCount` is the search-wide `hits.total.value`, the same for every operation.
///
/// # Arguments
/// * `raw` - raw JSON text of the percentile aggregation query
///
/// # Returns
/// * anyhow::Result<Vec<OperationPercentiles>>
pub fn parse_percentiles(raw: &str) -> anyhow::Result<Vec<OperationPercentiles>> {
    let response: AggregationResponse<PercentileAggregation> = serde_json::from_str(raw)
        .context("[parse_percentiles] percentile aggregation has an unexpected shape")?;

    let total_transactions: i64 = response.hits.total.value;

    response
        .aggregations
        .by_operation
        .buckets
        .iter()
        .map(|bucket| -> anyhow::Result<OperationPercentiles> {
            let percentiles: PercentileValues = PercentileValues::new(
                get_percentile(bucket, "50.0")?,
                get_percentile(bucket, "75.0")?,
                get_percentile(bucket, "90.0")?,
                get_percentile(bucket, "95.0")?,
                get_percentile(bucket, "99.0")?,
            );

            Ok(OperationPercentiles::new(
                bucket.key.clone(),
                total_transactions,
                percentiles,
            ))
        })
        .collect()
}

#[doc = "Slowest spans per operation from a `by_endpoint` top-hits aggregation."]
/// Hits keep the order the backend sorted them in. Missing fields read as empty / zero.
///
/// # Arguments
/// * `raw` - raw JSON text of the slowest-transactions aggregation query
///
/// # Returns
/// * SlowTransactionSummary
pub fn parse_slow_transactions(raw: &str) -> SlowTransactionSummary {
    let response: Value = match serde_json::from_str(raw) {
        Ok(response) => response,
        Err(e) => {
            warn!("[parse_slow_transactions] search response is not valid JSON: {:?}", e);
            return BTreeMap::new();
        }
    };

    let buckets: &[Value] = response
        .pointer("/aggregations/by_endpoint/buckets")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    buckets
        .iter()
        .map(|bucket| {
            let endpoint_name: String = bucket
                .get("key")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            let transactions: Vec<SlowTransaction> = bucket
                .pointer("/top_slow_transactions/hits/hits")
                .and_then(Value::as_array)
                .map(|hits| {
                    hits.iter()
                        .map(|hit| {
                            let operation_name: String = hit
                                .pointer("/_source/operationName")
                                .and_then(Value::as_str)
                                .unwrap_or_default()
                                .to_string();
                            let duration: i64 = hit
                                .pointer("/_source/duration")
                                .and_then(|d| d.as_i64().or_else(|| d.as_f64().map(|f| f as i64)))
                                .unwrap_or(0);

                            SlowTransaction::new(operation_name, format_micros_as_millis(duration))
                        })
                        .collect()
                })
                .unwrap_or_default();

            (endpoint_name, transactions)
        })
        .collect()
}
