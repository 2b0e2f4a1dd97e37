use crate::common::*;

use crate::model::configs::index_config::*;

/// Builds the Elasticsearch query bodies run against the Jaeger span indices.
#[derive(Debug, Clone, new)]
pub struct SpanQueryBuilder {
    index_config: Arc<IndexConfig>,
}

impl SpanQueryBuilder {
    pub fn index_config(&self) -> &IndexConfig {
        &self.index_config
    }

    #[doc = "Filter shared by every query: known transaction endpoints of the bank service."]
    /// # Returns
    /// * Value - `bool` query matching one of the operation names, the service name,
    ///           and spans that carry a `http.response.body` tag
    fn build_transaction_filter(&self) -> Value {
        let should_terms: Vec<Value> = self
            .index_config
            .operation_names()
            .iter()
            .map(|op| json!({ "match": { "operationName": op } }))
            .collect();

        json!({
            "bool": {
                "must": [
                    {
                        "bool": {
                            "should": should_terms
                        }
                    },
                    { "match": { "process.serviceName": self.index_config.service_name() } },
                    {
                        "nested": {
                            "path": "tags",
                            "query": {
                                "bool": {
                                    "must": [
                                        { "match": { "tags.key": "http.response.body" } }
                                    ]
                                }
                            }
                        }
                    }
                ]
            }
        })
    }

    #[doc = "Fixed corpus query used by every tag-walk summary."]
    pub fn build_corpus_query(&self) -> Value {
        json!({
            "query": self.build_transaction_filter(),
            "_source": ["operationName", "tags"],
            "from": 0,
            "size": self.index_config.result_window(),
            "track_total_hits": true
        })
    }

    #[doc = "Latency percentiles of `duration` (microseconds) per operation."]
    pub fn build_percentile_query(&self) -> Value {
        json!({
            "size": 0,
            "track_total_hits": true,
            "query": self.build_transaction_filter(),
            "aggs": {
                "by_operation": {
                    "terms": {
                        "field": "operationName",
                        "size": self.index_config.endpoint_bucket_size()
                    },
                    "aggs": {
                        "load_time_percentiles": {
                            "percentiles": {
                                "field": "duration",
                                "percents": [50, 75, 90, 95, 99]
                            }
                        }
                    }
                }
            }
        })
    }

    #[doc = "Slowest spans per operation, sorted by `duration` descending."]
    pub fn build_slowest_query(&self) -> Value {
        json!({
            "size": 0,
            "track_total_hits": true,
            "query": self.build_transaction_filter(),
            "aggs": {
                "by_endpoint": {
                    "terms": {
                        "field": "operationName",
                        "size": self.index_config.endpoint_bucket_size()
                    },
                    "aggs": {
                        "top_slow_transactions": {
                            "top_hits": {
                                "sort": [
                                    { "duration": { "order": "desc" } }
                                ],
                                "_source": ["operationName", "duration"],
                                "size": self.index_config.slowest_per_endpoint()
                            }
                        }
                    }
                }
            }
        })
    }
}
