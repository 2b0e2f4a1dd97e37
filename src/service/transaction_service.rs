use crate::common::*;

use crate::aggregator::{bank_summary::*, latency_summary::*, span_record::*};

use crate::model::elastic_dto::span_query::*;
use crate::model::summary::{bank_summary::*, latency_summary::*};
use crate::model::transaction::response_body::*;

use crate::traits::service::{search_service_trait::*, transaction_service_trait::*};

#[derive(Clone, Debug, new)]
pub struct TransactionServiceImpl<S: SearchService> {
    search_service: Arc<S>,
    query_builder: Arc<SpanQueryBuilder>,
}

impl<S: SearchService + Sync + Send> TransactionServiceImpl<S> {
    #[doc = "Fetches the corpus once and extracts every span's response body."]
    async fn load_span_records(&self) -> anyhow::Result<Vec<ResponseBody>> {
        let raw: String = self.search_service.fetch_corpus().await?;
        Ok(parse_span_records(&raw))
    }
}

#[async_trait]
impl<S> TransactionService for TransactionServiceImpl<S>
where
    S: SearchService + Sync + Send,
{
    async fn get_total(&self, bank_id: &str) -> anyhow::Result<u64> {
        let records: Vec<ResponseBody> = self.load_span_records().await?;
        Ok(summarize_total(&records, bank_id))
    }

    async fn get_count(&self, bank_id: &str) -> anyhow::Result<CountSummary> {
        let records: Vec<ResponseBody> = self.load_span_records().await?;
        Ok(summarize_count(&records, bank_id))
    }

    async fn get_transfer_count(&self, bank_id: &str) -> anyhow::Result<TransferSummary> {
        let records: Vec<ResponseBody> = self.load_span_records().await?;
        Ok(summarize_transfer(&records, bank_id))
    }

    async fn get_between_banks(&self, bank_id1: &str, bank_id2: &str) -> anyhow::Result<u64> {
        let records: Vec<ResponseBody> = self.load_span_records().await?;
        Ok(count_between_banks(&records, bank_id1, bank_id2))
    }

    async fn get_count_by_date(
        &self,
        bank_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> anyhow::Result<CountSummary> {
        let records: Vec<ResponseBody> = self.load_span_records().await?;
        Ok(summarize_count_by_date(&records, bank_id, start_date, end_date))
    }

    async fn get_exceptions(&self, bank_id: &str) -> anyhow::Result<ExceptionSummary> {
        let records: Vec<ResponseBody> = self.load_span_records().await?;
        Ok(summarize_exception(&records, bank_id))
    }

    async fn get_slowest(&self) -> anyhow::Result<SlowTransactionSummary> {
        let query: Value = self.query_builder.build_slowest_query();
        let raw: String = self.search_service.fetch_with_query(&query).await?;
        Ok(parse_slow_transactions(&raw))
    }

    async fn get_percentiles(&self) -> anyhow::Result<Vec<OperationPercentiles>> {
        let query: Value = self.query_builder.build_percentile_query();
        let raw: String = self.search_service.fetch_with_query(&query).await?;
        parse_percentiles(&raw)
    }
}
