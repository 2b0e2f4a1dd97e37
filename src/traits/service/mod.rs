pub mod search_service_trait;
pub mod transaction_service_trait;
