/// PID file: persists the tracked VPN client PID as a single decimal line.
///
/// The file is overwritten on every write (last writer wins, no locking) and
/// is deliberately left in place after the client exits — staleness is
/// detected with a liveness probe, never inferred from file presence.
use crate::config::Config;
use std::path::{Path, PathBuf};

/// Reads and writes the single tracked PID.
#[derive(Debug, Clone)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Create a PidFile for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a PidFile at the path resolved in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pid_file.clone())
    }

    /// Path to the PID file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with `pid` as decimal text.
    pub fn write(&self, pid: u32) -> Result<(), PidFileError> {
        std::fs::write(&self.path, pid.to_string()).map_err(|e| PidFileError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Read the trimmed file contents.
    ///
    /// A missing file is a normal outcome (nothing tracked yet) and returns
    /// `Ok(None)`; only an unreadable existing file is an error.
    pub fn read(&self) -> Result<Option<String>, PidFileError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| PidFileError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(contents.trim().to_string()))
    }
}

/// Errors from PID file operations.
#[derive(Debug)]
pub enum PidFileError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for PidFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PidFileError::Read { path, source } => {
                write!(f, "failed to read PID file {}: {source}", path.display())
            }
            PidFileError::Write { path, source } => {
                write!(f, "failed to write PID file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PidFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PidFileError::Read { source, .. } => Some(source),
            PidFileError::Write { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let pf = PidFile::new(dir.path().join(".vpn.pid"));

        pf.write(42187).unwrap();
        assert_eq!(pf.read().unwrap(), Some("42187".to_string()));
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let pf = PidFile::new(dir.path().join("nope.pid"));
        assert_eq!(pf.read().unwrap(), None);
    }

    #[test]
    fn test_write_overwrites_previous_record() {
        let dir = tempdir().unwrap();
        let pf = PidFile::new(dir.path().join(".vpn.pid"));

        pf.write(100).unwrap();
        pf.write(7).unwrap();
        assert_eq!(pf.read().unwrap(), Some("7".to_string()));
    }

    #[test]
    fn test_read_trims_surrounding_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".vpn.pid");
        std::fs::write(&path, "  1234\n").unwrap();

        let pf = PidFile::new(&path);
        assert_eq!(pf.read().unwrap(), Some("1234".to_string()));
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let pf = PidFile::new("/nonexistent/dir/.vpn.pid");
        let err = pf.write(1).unwrap_err();
        assert!(err.to_string().contains("failed to write PID file"));
    }

    #[test]
    fn test_from_config_uses_resolved_path() {
        let config = Config {
            pid_file: PathBuf::from("/run/vpnwrap/client.pid"),
            log_dir: PathBuf::from("logs"),
        };
        let pf = PidFile::from_config(&config);
        assert_eq!(pf.path(), Path::new("/run/vpnwrap/client.pid"));
    }
}
