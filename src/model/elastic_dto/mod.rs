pub mod backend_error;
pub mod elastic_source_parser;
pub mod span_query;
