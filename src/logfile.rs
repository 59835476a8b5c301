/// Wrapper log files: timestamped, leveled, append-only lines.
///
/// These are the wrapper's domain logs (connection events, operator notes),
/// separate from the `tracing` diagnostics on stderr. Each append is an
/// independent open/write/close so concurrent wrapper invocations interleave
/// without corrupting each other; the OS keeps small appends atomic.
use chrono::Local;
use std::io::Write;
use std::path::Path;

/// Level recorded when the caller doesn't pick one.
pub const DEFAULT_LEVEL: &str = "INFO";

/// Create the log file's parent directory if it doesn't exist. Idempotent.
pub fn ensure(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Append `[<timestamp>] [<level>] <message>` to the file at `path`,
/// creating it if absent.
///
/// The timestamp is local wall-clock time at call time, second precision.
/// Returns the formatted line without its trailing newline.
pub fn append(path: &Path, message: &str, level: &str) -> std::io::Result<String> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let line = format!("[{timestamp}] [{level}] {message}");

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;
    // One write call per entry keeps interleaved appends line-atomic.
    file.write_all(format!("{line}\n").as_bytes())?;

    Ok(line)
}
