use crate::common::*;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::enums::api_error::*;

use crate::model::summary::{bank_summary::*, latency_summary::*};

use crate::traits::service::transaction_service_trait::*;

#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[doc = "Rejects the request when any of the named parameters is empty."]
/// # Arguments
/// * `params`  - parameter values in request order
/// * `message` - error text returned to the client
///
/// # Returns
/// * Result<(), ApiError>
fn require_params(params: &[&str], message: &str) -> Result<(), ApiError> {
    if params.iter().any(|param| param.is_empty()) {
        return Err(ApiError::BadRequest(message.to_string()));
    }

    Ok(())
}

#[derive(new)]
pub struct MainController<T: TransactionService> {
    transaction_service: Arc<T>,
}

impl<T> MainController<T>
where
    T: TransactionService + Send + Sync + 'static,
{
    #[doc = "HTTP routes of the analytics API, sharing this controller as state."]
    pub fn router(self) -> Router {
        Router::new()
            .route("/bank/:bank_id/transactions/total", get(Self::get_total))
            .route("/bank/:bank_id/transactions/count", get(Self::get_count))
            .route(
                "/bank/:bank_id/transactions/count/transfer",
                get(Self::get_transfer_count),
            )
            .route(
                "/transactions/from/:bank_id1/to/:bank_id2",
                get(Self::get_transactions_between_banks),
            )
            .route(
                "/bank/:bank_id/transactions/date/count",
                get(Self::get_transactions_by_date),
            )
            .route(
                "/bank/:bank_id/transactions/exception",
                get(Self::get_exception),
            )
            .route("/transactions/slowest", get(Self::get_slowest_transactions))
            .route(
                "/transactions/percentiles",
                get(Self::get_percentiles_transactions),
            )
            .with_state(Arc::new(self))
    }

    async fn get_total(
        State(controller): State<Arc<Self>>,
        Path(bank_id): Path<String>,
    ) -> Result<Json<u64>, ApiError> {
        let total: u64 = controller
            .transaction_service
            .get_total(&bank_id)
            .await
            .map_err(|e| ApiError::backend("get_total", e))?;

        Ok(Json(total))
    }

    async fn get_count(
        State(controller): State<Arc<Self>>,
        Path(bank_id): Path<String>,
    ) -> Result<Json<CountSummary>, ApiError> {
        let count_data: CountSummary = controller
            .transaction_service
            .get_count(&bank_id)
            .await
            .map_err(|e| ApiError::backend("get_count", e))?;

        Ok(Json(count_data))
    }

    async fn get_transfer_count(
        State(controller): State<Arc<Self>>,
        Path(bank_id): Path<String>,
    ) -> Result<Json<TransferSummary>, ApiError> {
        let transfer_data: TransferSummary = controller
            .transaction_service
            .get_transfer_count(&bank_id)
            .await
            .map_err(|e| ApiError::backend("get_transfer_count", e))?;

        Ok(Json(transfer_data))
    }

    async fn get_transactions_between_banks(
        State(controller): State<Arc<Self>>,
        Path((bank_id1, bank_id2)): Path<(String, String)>,
    ) -> Result<Json<BetweenBanksSummary>, ApiError> {
        require_params(
            &[bank_id1.as_str(), bank_id2.as_str()],
            "Both bankID1 and bankID2 are required in the URL path",
        )?;

        let count: u64 = controller
            .transaction_service
            .get_between_banks(&bank_id1, &bank_id2)
            .await
            .map_err(|e| ApiError::backend_masked("get_transactions_between_banks", e))?;

        Ok(Json(BetweenBanksSummary::new(count, bank_id1, bank_id2)))
    }

    async fn get_transactions_by_date(
        State(controller): State<Arc<Self>>,
        Path(bank_id): Path<String>,
        query: Result<Query<DateRangeParams>, QueryRejection>,
    ) -> Result<Json<DateCountSummary>, ApiError> {
        let Query(params) = query?;
        let start_date: String = params.start.unwrap_or_default();
        let end_date: String = params.end.unwrap_or_default();

        require_params(
            &[bank_id.as_str(), start_date.as_str(), end_date.as_str()],
            "BankID, start date, and end date are required",
        )?;

        let count_data: CountSummary = controller
            .transaction_service
            .get_count_by_date(&bank_id, &start_date, &end_date)
            .await
            .map_err(|e| ApiError::backend_masked("get_transactions_by_date", e))?;

        Ok(Json(DateCountSummary::new(
            count_data, bank_id, start_date, end_date,
        )))
    }

    async fn get_exception(
        State(controller): State<Arc<Self>>,
        Path(bank_id): Path<String>,
    ) -> Result<Json<ExceptionSummary>, ApiError> {
        let exception_data: ExceptionSummary = controller
            .transaction_service
            .get_exceptions(&bank_id)
            .await
            .map_err(|e| ApiError::backend("get_exception", e))?;

        Ok(Json(exception_data))
    }

    async fn get_slowest_transactions(
        State(controller): State<Arc<Self>>,
    ) -> Result<Json<SlowTransactionSummary>, ApiError> {
        let slowest: SlowTransactionSummary = controller
            .transaction_service
            .get_slowest()
            .await
            .map_err(|e| ApiError::backend("get_slowest_transactions", e))?;

        Ok(Json(slowest))
    }

    async fn get_percentiles_transactions(
        State(controller): State<Arc<Self>>,
    ) -> Result<Json<Vec<OperationPercentiles>>, ApiError> {
        let percentiles: Vec<OperationPercentiles> = controller
            .transaction_service
            .get_percentiles()
            .await
            .map_err(|e| ApiError::backend("get_percentiles_transactions", e))?;

        Ok(Json(percentiles))
    }
}
