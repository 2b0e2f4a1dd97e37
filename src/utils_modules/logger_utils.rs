use crate::common::*;

#[doc = "Log line format shared by the console and file writers."]
fn custom_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        std::thread::current().name().unwrap_or("<unnamed>"),
        &record.args()
    )
}

#[doc = "전역 로거설정"]
/// Level comes from `RUST_LOG` (default `info`). Files rotate daily under `./logs`.
///
/// # Returns
/// * Result<LoggerHandle, anyhow::Error> - must be kept alive for the lifetime of the process
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let log_directory: &str = "logs";

    let handle: LoggerHandle = Logger::try_with_env_or_str("info")
        .map_err(|e| anyhow!("[set_global_logger] invalid log level filter: {:?}", e))?
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .discriminant("bank_trace"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .map_err(|e| anyhow!("[set_global_logger] Logger initialization failed: {:?}", e))?;

    Ok(handle)
}
