/// Process inspection: liveness via signal 0 and start time via the
/// process status tool's long-format timestamp.
use crate::probe::StatusProbe;
use chrono::{Local, NaiveDateTime};
use nix::sys::signal::kill;
use nix::unistd::Pid;

/// Long-format start time as emitted by `ps -o lstart=` in the C/POSIX
/// locale, e.g. `Sat Aug 30 10:02:03 2026`. Other locales are not parsed;
/// their output degrades to "no start time".
const LSTART_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Whether `pid` names a live process the wrapper can signal.
///
/// PIDs arrive as strings straight from the PID file; non-numeric or
/// non-positive input is simply "not running", never an error. Zero (the
/// caller's own process group) is rejected here too: the file tracks one
/// client PID, and pid 0 can only mean a corrupt record. A probe denied
/// with EPERM also reads as not running: the tracked client is always ours
/// to signal, so a process we cannot signal is not it.
pub fn is_running(pid: &str) -> bool {
    let raw: i32 = match pid.trim().parse() {
        Ok(n) => n,
        Err(_) => return false,
    };
    if raw <= 0 {
        return false;
    }
    kill(Pid::from_raw(raw), None).is_ok()
}

/// Start time of `pid` as local wall-clock time, or `None` if the status
/// tool fails, reports nothing, or emits something unparseable.
pub fn start_time(probe: &dyn StatusProbe, pid: &str) -> Option<NaiveDateTime> {
    let output = probe.query_process(pid)?;
    let raw = output.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDateTime::parse_from_str(raw, LSTART_FORMAT) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::debug!(pid, raw, error = %e, "unparseable process start time");
            None
        }
    }
}

/// Seconds elapsed since `start`, clamped to zero against clock skew.
pub fn uptime_secs(start: NaiveDateTime) -> i64 {
    (Local::now().naive_local() - start).num_seconds().max(0)
}
