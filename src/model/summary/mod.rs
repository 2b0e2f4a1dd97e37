pub mod bank_summary;
pub mod latency_summary;
