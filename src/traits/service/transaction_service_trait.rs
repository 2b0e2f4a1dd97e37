use crate::common::*;

use crate::model::summary::{bank_summary::*, latency_summary::*};

#[async_trait]
pub trait TransactionService {
    async fn get_total(&self, bank_id: &str) -> anyhow::Result<u64>;
    async fn get_count(&self, bank_id: &str) -> anyhow::Result<CountSummary>;
    async fn get_transfer_count(&self, bank_id: &str) -> anyhow::Result<TransferSummary>;
    async fn get_between_banks(&self, bank_id1: &str, bank_id2: &str) -> anyhow::Result<u64>;
    async fn get_count_by_date(
        &self,
        bank_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> anyhow::Result<CountSummary>;
    async fn get_exceptions(&self, bank_id: &str) -> anyhow::Result<ExceptionSummary>;
    async fn get_slowest(&self) -> anyhow::Result<SlowTransactionSummary>;
    async fn get_percentiles(&self) -> anyhow::Result<Vec<OperationPercentiles>>;
}
