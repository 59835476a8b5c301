/// One-time auth codes for the VPN login: standard RFC 6238 TOTP over a
/// caller-supplied base32 shared secret (SHA-1, 6 digits, 30-second window).
use totp_rs::{Algorithm, Secret, TOTP};

/// Generate the code for the current time window.
///
/// No caching: two calls inside one window return the same code, and a call
/// in the next window reflects it immediately.
pub fn generate(secret: &str) -> Result<String, OtpError> {
    let key = Secret::Encoded(secret.trim().to_string())
        .to_bytes()
        .map_err(|e| OtpError::Secret(format!("{e:?}")))?;

    // new_unchecked: authenticator secrets in the wild are routinely shorter
    // than the RFC 4226 128-bit minimum that TOTP::new enforces.
    let totp = TOTP::new_unchecked(Algorithm::SHA1, 6, 1, 30, key);
    totp.generate_current().map_err(OtpError::Clock)
}

/// Errors from one-time code generation.
#[derive(Debug)]
pub enum OtpError {
    /// The shared secret is not valid base32.
    Secret(String),
    /// The system clock is unreadable (before the unix epoch).
    Clock(std::time::SystemTimeError),
}

impl std::fmt::Display for OtpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtpError::Secret(detail) => {
                write!(f, "failed to decode TOTP secret: {detail}")
            }
            OtpError::Clock(source) => {
                write!(f, "failed to read system time for TOTP window: {source}")
            }
        }
    }
}

impl std::error::Error for OtpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OtpError::Secret(_) => None,
            OtpError::Clock(source) => Some(source),
        }
    }
}
