pub mod search_service;
pub mod transaction_service;
