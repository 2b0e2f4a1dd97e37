use crate::common::*;

use crate::model::summary::bank_summary::*;
use crate::model::transaction::response_body::*;

use crate::utils_modules::time_utils::*;

const TRANSFER_TYPE: &str = "TRANSFER";

fn increment(summary: &mut BTreeMap<String, BTreeMap<String, u64>>, bucket: &str, key: &str) {
    *summary
        .entry(bucket.to_string())
        .or_default()
        .entry(key.to_string())
        .or_insert(0) += 1;
}

#[doc = "Successful transactions of a bank, per bank name and transaction type."]
/// Source and destination side are checked independently, so a transaction inside
/// the same bank counts twice. The destination side also needs a bank name.
///
/// # Arguments
/// * `records` - response bodies of the corpus
/// * `bank_id` - target bank
///
/// # Returns
/// * CountSummary
pub fn summarize_count(records: &[ResponseBody], bank_id: &str) -> CountSummary {
    let mut count_data: CountSummary = BTreeMap::new();

    for record in records.iter().filter(|record| !record.has_exception()) {
        let transaction_type: &str = record.transaction_type();

        if transaction_type.is_empty() {
            continue;
        }

        if record.is_source_bank(bank_id) {
            increment(&mut count_data, record.source_bank_name(), transaction_type);
        }

        if record.is_destination_bank(bank_id) && !record.destination_bank_name().is_empty() {
            increment(&mut count_data, record.destination_bank_name(), transaction_type);
        }
    }

    count_data
}

#[doc = "Successful transfers of a bank, keyed by counterparty and direction."]
/// # Arguments
/// * `records` - response bodies of the corpus
/// * `bank_id` - target bank
///
/// # Returns
/// * TransferSummary - `"<destination> (to)"` for outgoing, `"<source> (from)"` for incoming
pub fn summarize_transfer(records: &[ResponseBody], bank_id: &str) -> TransferSummary {
    let mut transfer_data: TransferSummary = BTreeMap::new();

    for record in records
        .iter()
        .filter(|record| !record.has_exception() && record.transaction_type() == TRANSFER_TYPE)
    {
        if record.is_source_bank(bank_id) {
            let detail: String = format!("{} (to)", record.destination_bank_name());
            increment(&mut transfer_data, &detail, TRANSFER_TYPE);
        }

        if record.is_destination_bank(bank_id) {
            let detail: String = format!("{} (from)", record.source_bank_name());
            increment(&mut transfer_data, &detail, TRANSFER_TYPE);
        }
    }

    transfer_data
}

#[doc = "Number of successful transactions between two banks, in either direction."]
pub fn count_between_banks(records: &[ResponseBody], bank_id1: &str, bank_id2: &str) -> u64 {
    records
        .iter()
        .filter(|record| !record.has_exception())
        .filter(|record| {
            (record.is_source_bank(bank_id1) && record.is_destination_bank(bank_id2))
                || (record.is_source_bank(bank_id2) && record.is_destination_bank(bank_id1))
        })
        .count() as u64
}

#[doc = "`summarize_count_by_date` with an explicit reference time for an open end date."]
pub fn summarize_count_by_date_at(
    records: &[ResponseBody],
    bank_id: &str,
    start_date: &str,
    end_date: &str,
    now: DateTime<Utc>,
) -> CountSummary {
    let mut count_data: CountSummary = BTreeMap::new();

    for record in records {
        if !is_date_in_range_at(record.transaction_date(), start_date, end_date, now) {
            continue;
        }

        if record.has_exception() {
            continue;
        }

        /* One bucket per record: the source name wins when the source is the target bank. */
        let bank_name: &str = if record.is_source_bank(bank_id) {
            record.source_bank_name()
        } else {
            record.destination_bank_name()
        };

        if record.is_source_bank(bank_id) || record.is_destination_bank(bank_id) {
            increment(&mut count_data, bank_name, record.transaction_type());
        }
    }

    count_data
}

#[doc = "Successful transactions of a bank dated within `[start_date, end_date]`."]
/// # Arguments
/// * `records`    - response bodies of the corpus
/// * `bank_id`    - target bank
/// * `start_date` - `YYYY-MM-DD`, exclusive at midnight
/// * `end_date`   - `YYYY-MM-DD`, whole day included; empty means today
///
/// # Returns
/// * CountSummary
pub fn summarize_count_by_date(
    records: &[ResponseBody],
    bank_id: &str,
    start_date: &str,
    end_date: &str,
) -> CountSummary {
    summarize_count_by_date_at(records, bank_id, start_date, end_date, Utc::now())
}

#[doc = "Every record of a bank's accounts, failed ones included."]
pub fn summarize_total(records: &[ResponseBody], bank_id: &str) -> u64 {
    records
        .iter()
        .filter(|record| record.is_account_bank(bank_id))
        .count() as u64
}

#[doc = "Failed records of a bank's accounts, per exception type."]
pub fn summarize_exception(records: &[ResponseBody], bank_id: &str) -> ExceptionSummary {
    let mut exception_data: ExceptionSummary = BTreeMap::new();

    for record in records.iter().filter(|record| record.is_account_bank(bank_id)) {
        if let Some(exception_type) = record.exception_type() {
            *exception_data.entry(exception_type.clone()).or_insert(0) += 1;
        }
    }

    exception_data
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::aggregator::span_record::*;
    use crate::aggregator::test_fixtures::*;

    use pretty_assertions::assert_eq;

    const JULY_21: &str = "2024-07-21T10:15:00Z";

    fn records(bodies: Vec<Value>) -> Vec<ResponseBody> {
        let mut hits: Vec<Value> = bodies.into_iter().map(span).collect();
        hits.push(span_without_body());
        parse_span_records(&search_response(hits))
    }

    fn summary(entries: &[(&str, &[(&str, u64)])]) -> CountSummary {
        entries
            .iter()
            .map(|(bucket, counts)| {
                let inner: BTreeMap<String, u64> = counts
                    .iter()
                    .map(|(key, count)| (key.to_string(), *count))
                    .collect();
                (bucket.to_string(), inner)
            })
            .collect()
    }

    #[test]
    fn test_count_both_sides_fire() {
        let records: Vec<ResponseBody> = records(vec![
            transaction("DEPOSIT", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            transaction("TRANSFER", ("B2", "Beta"), ("B1", "Alpha"), JULY_21),
            transaction("TRANSFER", ("B1", "Alpha"), ("B1", "Alpha"), JULY_21),
            transaction("FEE", ("B3", "Gamma"), ("B2", "Beta"), JULY_21),
        ]);

        assert_eq!(
            summarize_count(&records, "B1"),
            summary(&[("Alpha", &[("DEPOSIT", 1), ("TRANSFER", 3)])])
        );
    }

    #[test]
    fn test_count_skips_exceptions_and_empty_types() {
        let records: Vec<ResponseBody> = records(vec![
            with_exception(
                transaction("DEPOSIT", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
                "InsufficientFundsException",
            ),
            transaction("", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            transaction("WITHDRAW", ("B9", "Omega"), ("B1", ""), JULY_21),
        ]);

        assert!(summarize_count(&records, "B1").is_empty());
    }

    #[test]
    fn test_transfer_directions() {
        let records: Vec<ResponseBody> = records(vec![
            transaction("TRANSFER", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            transaction("TRANSFER", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            transaction("TRANSFER", ("B3", "Gamma"), ("B1", "Alpha"), JULY_21),
            transaction("DEPOSIT", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            with_exception(
                transaction("TRANSFER", ("B1", "Alpha"), ("B3", "Gamma"), JULY_21),
                "AccountLockedException",
            ),
        ]);

        assert_eq!(
            summarize_transfer(&records, "B1"),
            summary(&[
                ("Beta (to)", &[("TRANSFER", 2)]),
                ("Gamma (from)", &[("TRANSFER", 1)]),
            ])
        );
    }

    #[test]
    fn test_transfer_single_outgoing_record() {
        let records: Vec<ResponseBody> = records(vec![
            transaction("TRANSFER", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            json!({ "transactionType": "TRANSFER", "destinationAccount": { "bank": { "bankId": "B5" } } }),
        ]);

        assert_eq!(
            summarize_transfer(&records, "B1"),
            summary(&[("Beta (to)", &[("TRANSFER", 1)])])
        );
    }

    #[test]
    fn test_between_banks_is_symmetric() {
        let records: Vec<ResponseBody> = records(vec![
            transaction("TRANSFER", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            transaction("PAYMENT", ("B2", "Beta"), ("B1", "Alpha"), JULY_21),
            transaction("PAYMENT", ("B1", "Alpha"), ("B3", "Gamma"), JULY_21),
            with_exception(
                transaction("TRANSFER", ("B2", "Beta"), ("B1", "Alpha"), JULY_21),
                "TimeoutException",
            ),
        ]);

        assert_eq!(count_between_banks(&records, "B1", "B2"), 2);
        assert_eq!(count_between_banks(&records, "B2", "B1"), 2);
        assert_eq!(count_between_banks(&records, "B1", "B4"), 0);
    }

    #[test]
    fn test_count_by_date_bucketing_and_range() {
        let records: Vec<ResponseBody> = records(vec![
            transaction("DEPOSIT", ("B1", "Alpha"), ("B2", "Beta"), "2024-07-01T00:00:00Z"),
            transaction("DEPOSIT", ("B1", "Alpha"), ("B2", "Beta"), "2024-07-10T09:00:00Z"),
            transaction("TRANSFER", ("B2", "Beta"), ("B1", "Alpha Dest"), "2024-07-31T23:59:59.999999999Z"),
            transaction("FEE", ("B1", "Alpha"), ("B2", "Beta"), "2024-08-01T00:00:00Z"),
            transaction("FEE", ("B1", "Alpha"), ("B2", "Beta"), "not-a-date"),
            with_exception(
                transaction("FEE", ("B1", "Alpha"), ("B2", "Beta"), "2024-07-15T09:00:00Z"),
                "FraudException",
            ),
        ]);

        assert_eq!(
            summarize_count_by_date(&records, "B1", "2024-07-01", "2024-07-31"),
            summary(&[
                ("Alpha", &[("DEPOSIT", 1)]),
                ("Alpha Dest", &[("TRANSFER", 1)]),
            ])
        );
    }

    #[test]
    fn test_count_by_date_open_end() {
        let now: DateTime<Utc> = convert_str_to_datetime("2024-07-21T12:00:00Z", Utc).unwrap();
        let records: Vec<ResponseBody> = records(vec![
            transaction("DEPOSIT", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            transaction("DEPOSIT", ("B1", "Alpha"), ("B2", "Beta"), "2024-07-25T10:15:00Z"),
        ]);

        assert_eq!(
            summarize_count_by_date_at(&records, "B1", "2024-07-01", "", now),
            summary(&[("Alpha", &[("DEPOSIT", 1)])])
        );
    }

    #[test]
    fn test_total_and_exception_see_failed_records() {
        let records: Vec<ResponseBody> = records(vec![
            account_record("B1", None),
            account_record("B1", Some("InsufficientFundsException")),
            account_record("B1", Some("InsufficientFundsException")),
            account_record("B1", Some("AccountNotFoundException")),
            account_record("B2", Some("InsufficientFundsException")),
        ]);

        assert_eq!(summarize_total(&records, "B1"), 4);
        assert_eq!(summarize_total(&records, "B2"), 1);

        let exceptions: ExceptionSummary = summarize_exception(&records, "B1");
        assert_eq!(exceptions.len(), 2);
        assert_eq!(exceptions["InsufficientFundsException"], 2);
        assert_eq!(exceptions["AccountNotFoundException"], 1);
    }

    #[test]
    fn test_records_without_body_never_count() {
        let records: Vec<ResponseBody> = records(Vec::new());

        assert!(records.is_empty());
        assert!(summarize_count(&records, "").is_empty());
        assert!(summarize_transfer(&records, "").is_empty());
        assert_eq!(count_between_banks(&records, "", ""), 0);
        assert_eq!(summarize_total(&records, ""), 0);
        assert!(summarize_exception(&records, "").is_empty());
    }

    #[test]
    fn test_summaries_are_idempotent() {
        let records: Vec<ResponseBody> = records(vec![
            transaction("TRANSFER", ("B1", "Alpha"), ("B2", "Beta"), JULY_21),
            transaction("DEPOSIT", ("B2", "Beta"), ("B1", "Alpha"), JULY_21),
            account_record("B1", Some("TimeoutException")),
        ]);

        assert_eq!(summarize_count(&records, "B1"), summarize_count(&records, "B1"));
        assert_eq!(summarize_transfer(&records, "B1"), summarize_transfer(&records, "B1"));
        assert_eq!(summarize_exception(&records, "B1"), summarize_exception(&records, "B1"));
        assert_eq!(
            summarize_count_by_date(&records, "B1", "2024-07-01", "2024-07-31"),
            summarize_count_by_date(&records, "B1", "2024-07-01", "2024-07-31")
        );
    }
}
