/// Capability seam over the OS status tools the wrapper shells out to.
///
/// `SystemProbe` invokes the real utilities; tests substitute fixed textual
/// outputs instead of spawning anything.
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Queries external status tools for interface and process state.
///
/// All failures (missing tool, non-zero exit, timeout) collapse to `None`;
/// callers treat absent output as a normal "not available" outcome.
pub trait StatusProbe {
    /// Raw stdout of the interface status tool for `name`, if it succeeded.
    fn query_interface(&self, name: &str) -> Option<String>;

    /// Raw stdout of the process status tool for `pid`, if it succeeded.
    fn query_process(&self, pid: &str) -> Option<String>;
}

/// Probe implementation that invokes the real OS utilities.
#[derive(Debug, Default)]
pub struct SystemProbe;

impl SystemProbe {
    /// Hard ceiling on any single tool invocation. The tools answer in
    /// milliseconds; anything slower is treated as a failed probe.
    const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self
    }
}

impl StatusProbe for SystemProbe {
    fn query_interface(&self, name: &str) -> Option<String> {
        let mut cmd = Command::new("ifconfig");
        cmd.arg(name);
        run_with_timeout(cmd, Self::TIMEOUT)
    }

    fn query_process(&self, pid: &str) -> Option<String> {
        let mut cmd = Command::new("ps");
        cmd.args(["-p", pid, "-o", "lstart="]);
        run_with_timeout(cmd, Self::TIMEOUT)
    }
}

/// Run a command to completion and return its stdout, or `None` on spawn
/// failure, non-zero exit, or timeout.
///
/// Exit is polled rather than awaited so a wedged tool cannot hang the
/// caller. Stdout is drained on a helper thread while the poll loop runs,
/// so a tool emitting more than the pipe buffer still exits instead of
/// blocking against a full pipe until the deadline.
fn run_with_timeout(mut cmd: Command, timeout: Duration) -> Option<String> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(error = %e, "failed to spawn status tool");
            return None;
        }
    };

    let mut stdout = child.stdout.take()?;
    let reader = std::thread::spawn(move || {
        let mut buf = String::new();
        stdout.read_to_string(&mut buf).ok().map(|_| buf)
    });

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let output = reader.join().ok().flatten();
                if !status.success() {
                    return None;
                }
                return output;
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    tracing::debug!("status tool exceeded invocation timeout, killing");
                    let _ = child.kill();
                    let _ = child.wait();
                    // Killing the child closes the pipe, so the reader sees
                    // EOF and finishes.
                    let _ = reader.join();
                    return None;
                }
                std::thread::sleep(Duration::from_millis(25));
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to poll status tool");
                let _ = child.kill();
                let _ = child.wait();
                let _ = reader.join();
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", script]);
        cmd
    }

    #[test]
    fn test_run_captures_stdout_on_success() {
        let out = run_with_timeout(sh("printf 'hello world'"), Duration::from_secs(5));
        assert_eq!(out.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_run_nonzero_exit_is_none() {
        let out = run_with_timeout(sh("exit 3"), Duration::from_secs(5));
        assert_eq!(out, None);
    }

    #[test]
    fn test_run_missing_binary_is_none() {
        let cmd = Command::new("definitely-not-a-real-tool-xyz");
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(5)), None);
    }

    #[test]
    fn test_run_drains_output_larger_than_pipe_buffer() {
        // 200 KB is well past the ~64 KiB pipe buffer; the tool must finish
        // promptly rather than blocking on a full pipe until the deadline.
        let start = Instant::now();
        let out = run_with_timeout(sh("yes | head -c 200000"), Duration::from_secs(10));
        assert_eq!(out.map(|s| s.len()), Some(200000));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_run_kills_on_timeout() {
        let start = Instant::now();
        let out = run_with_timeout(sh("sleep 30"), Duration::from_millis(200));
        assert_eq!(out, None);
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
