//! Pure summaries over raw span search results.
//!
//! Corpus payloads go through [`span_record::parse_span_records`] once; the bank
//! summaries then work on the extracted response bodies.

pub mod bank_summary;
pub mod latency_summary;
pub mod span_record;

#[cfg(test)]
pub mod test_fixtures;
