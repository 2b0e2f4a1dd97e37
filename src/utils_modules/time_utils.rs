use crate::common::*;

#[doc = "Parses a bare calendar date (`YYYY-MM-DD`) into UTC midnight of that day."]
/// # Arguments
/// * `date_str` - date string such as `2024-07-21`
///
/// # Returns
/// * anyhow::Result<DateTime<Utc>>
pub fn convert_ymd_to_utc_midnight(date_str: &str) -> anyhow::Result<DateTime<Utc>> {
    let date: NaiveDate = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .context("[time_utils.rs -> convert_ymd_to_utc_midnight] invalid calendar date")?;

    /* `%Y-%m-%d` also takes `2024-7-1`; only the zero-padded form is a valid date */
    if date.format("%Y-%m-%d").to_string() != date_str {
        return Err(anyhow!(
            "[convert_ymd_to_utc_midnight] '{}' is not a zero-padded YYYY-MM-DD date",
            date_str
        ));
    }

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("[convert_ymd_to_utc_midnight] midnight out of range"))?;

    Ok(Utc.from_utc_datetime(&midnight))
}

pub fn convert_str_to_datetime<Tz>(time: &str, tz: Tz) -> anyhow::Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if time.as_bytes().get(10) != Some(&b'T') {
        return Err(anyhow!(
            "[time_utils.rs -> convert_str_to_datetime] '{}' has no 'T' date/time separator",
            time
        ));
    }

    let dt_datetime: DateTime<Tz> =
        DateTime::parse_from_rfc3339(time)
        .context("[time_utils.rs -> convert_str_to_datetime] An error occurred during the conversion of time information.")?
        .with_timezone(&tz);

    Ok(dt_datetime)
}

#[doc = "Whether an RFC3339 transaction timestamp falls inside a whole-day date range."]
/// The lower bound is `start_date 00:00:00` and is exclusive. The upper bound is the start
/// of the day after `end_date` and is exclusive, so the whole end day is covered.
/// An empty `end_date` means the range runs up to one day past `now`.
///
/// # Arguments
/// * `date`       - transaction timestamp (RFC3339)
/// * `start_date` - `YYYY-MM-DD`
/// * `end_date`   - `YYYY-MM-DD` or empty
/// * `now`        - reference instant used when `end_date` is empty
///
/// # Returns
/// * bool - any parse failure yields `false`
pub fn is_date_in_range_at(date: &str, start_date: &str, end_date: &str, now: DateTime<Utc>) -> bool {
    if date.is_empty() {
        return false;
    }

    let parsed_date: DateTime<Utc> = match convert_str_to_datetime(date, Utc) {
        Ok(parsed_date) => parsed_date,
        Err(e) => {
            debug!("[is_date_in_range] Error parsing the date '{}': {:?}", date, e);
            return false;
        }
    };

    let parsed_start: DateTime<Utc> = match convert_ymd_to_utc_midnight(start_date) {
        Ok(parsed_start) => parsed_start,
        Err(e) => {
            debug!("[is_date_in_range] Error parsing the start date '{}': {:?}", start_date, e);
            return false;
        }
    };

    let parsed_end: DateTime<Utc> = if end_date.is_empty() {
        now
    } else {
        match convert_ymd_to_utc_midnight(end_date) {
            Ok(parsed_end) => parsed_end,
            Err(e) => {
                debug!("[is_date_in_range] Error parsing the end date '{}': {:?}", end_date, e);
                return false;
            }
        }
    };

    let end_exclusive: DateTime<Utc> = parsed_end + chrono::Duration::days(1);

    parsed_start < parsed_date && parsed_date < end_exclusive
}

#[doc = "`is_date_in_range_at` against the current UTC time."]
pub fn is_date_in_range(date: &str, start_date: &str, end_date: &str) -> bool {
    is_date_in_range_at(date, start_date, end_date, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_date_is_out_of_range() {
        assert!(!is_date_in_range("", "2024-07-01", "2024-07-31"));
    }

    #[test]
    fn test_start_midnight_is_excluded() {
        assert!(!is_date_in_range("2024-07-01T00:00:00Z", "2024-07-01", "2024-07-31"));
        assert!(is_date_in_range("2024-07-01T00:00:00.000000001Z", "2024-07-01", "2024-07-31"));
    }

    #[test]
    fn test_whole_end_day_is_included() {
        assert!(is_date_in_range("2024-07-31T23:59:59.999999999Z", "2024-07-01", "2024-07-31"));
        assert!(!is_date_in_range("2024-08-01T00:00:00Z", "2024-07-01", "2024-07-31"));
    }

    #[test]
    fn test_offset_timestamps_compare_as_instants() {
        /* 2024-08-01T01:00:00+03:00 is 2024-07-31T22:00:00Z */
        assert!(is_date_in_range("2024-08-01T01:00:00+03:00", "2024-07-01", "2024-07-31"));
    }

    #[test]
    fn test_unparseable_inputs_are_out_of_range() {
        assert!(!is_date_in_range("21/07/2024", "2024-07-01", "2024-07-31"));
        assert!(!is_date_in_range("2024-07-21T10:00:00Z", "07-01-2024", "2024-07-31"));
        assert!(!is_date_in_range("2024-07-21T10:00:00Z", "2024-07-01", "tomorrow"));
    }

    #[test]
    fn test_range_dates_must_be_zero_padded() {
        assert!(!is_date_in_range("2024-07-21T10:00:00Z", "2024-7-1", "2024-07-31"));
        assert!(!is_date_in_range("2024-07-21T10:00:00Z", "2024-07-01", "2024-7-31"));
        assert!(convert_ymd_to_utc_midnight("2024-7-1").is_err());
        assert!(convert_ymd_to_utc_midnight("2024-07-01").is_ok());
    }

    #[test]
    fn test_timestamp_requires_t_separator() {
        assert!(!is_date_in_range("2024-07-21 10:00:00Z", "2024-07-01", "2024-07-31"));
        assert!(convert_str_to_datetime("2024-07-21 10:00:00Z", Utc).is_err());
        assert!(is_date_in_range("2024-07-21T10:00:00Z", "2024-07-01", "2024-07-31"));
    }

    #[test]
    fn test_missing_end_date_defaults_to_now() {
        let now: DateTime<Utc> = convert_str_to_datetime("2024-07-21T12:00:00Z", Utc).unwrap();

        assert!(is_date_in_range_at("2024-07-21T11:00:00Z", "2024-07-01", "", now));
        assert!(is_date_in_range_at("2024-07-22T11:00:00Z", "2024-07-01", "", now));
        assert!(!is_date_in_range_at("2024-07-22T12:00:00Z", "2024-07-01", "", now));
    }
}
