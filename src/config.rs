use std::path::PathBuf;

/// Environment variable naming the PID file path.
pub const PID_FILE_VAR: &str = "VPN_PID_FILE";
/// Environment variable naming the log directory.
pub const LOG_DIR_VAR: &str = "VPN_LOG_DIR";
/// Environment variable holding the base32 TOTP secret. No default.
pub const TOTP_SECRET_VAR: &str = "VPN_TOTP_SECRET";

const DEFAULT_PID_FILE: &str = ".vpn.pid";
const DEFAULT_LOG_DIR: &str = "logs/";

/// Read a named environment variable, falling back to `default` when unset.
///
/// A variable that is unset with no default is a hard configuration error;
/// callers that can tolerate absence pass a default instead.
pub fn read_env(name: &str, default: Option<&str>) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(_) => match default {
            Some(d) => Ok(d.to_string()),
            None => Err(ConfigError::MissingVar {
                name: name.to_string(),
            }),
        },
    }
}

/// Resolved wrapper configuration, captured once and passed by reference.
///
/// Components never read the environment themselves; everything path-shaped
/// flows through this struct.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the tracked VPN client PID is persisted.
    pub pid_file: PathBuf,
    /// Directory holding the wrapper's log files.
    pub log_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            pid_file: PathBuf::from(read_env(PID_FILE_VAR, Some(DEFAULT_PID_FILE))?),
            log_dir: PathBuf::from(read_env(LOG_DIR_VAR, Some(DEFAULT_LOG_DIR))?),
        })
    }

    /// Path to the main wrapper log (e.g. `logs/vpn.log`).
    pub fn vpn_log(&self) -> PathBuf {
        self.log_dir.join("vpn.log")
    }

    /// Path to the connection event log (e.g. `logs/connection.log`).
    pub fn connection_log(&self) -> PathBuf {
        self.log_dir.join("connection.log")
    }
}

/// Errors from configuration resolution.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is unset and has no default.
    MissingVar { name: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar { name } => {
                write!(f, "environment variable {name} not set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
