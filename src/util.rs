use std::path::Path;

/// Best-effort file removal: missing files, permission errors, and races all
/// vanish silently. Used for auth material and stale PID files where "gone"
/// is the only outcome the caller cares about.
pub fn remove_if_exists(path: &Path) {
    let _ = std::fs::remove_file(path);
}

/// Format a non-negative duration in seconds as a compact string:
/// `"1h 1m 1s"`, `"1m 1s"`, or `"5s"`. Fractional seconds truncate.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn format_duration_hours() {
        assert_eq!(format_duration(3661.0), "1h 1m 1s");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(61.0), "1m 1s");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(5.0), "5s");
    }

    #[test]
    fn format_duration_zero() {
        assert_eq!(format_duration(0.0), "0s");
    }

    #[test]
    fn format_duration_truncates_fractions() {
        assert_eq!(format_duration(3661.9), "1h 1m 1s");
        assert_eq!(format_duration(59.999), "59s");
    }

    #[test]
    fn format_duration_negative_clamps_to_zero() {
        assert_eq!(format_duration(-5.0), "0s");
    }

    #[test]
    fn test_remove_if_exists_deletes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("auth.txt");
        std::fs::write(&path, "secret").unwrap();

        remove_if_exists(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_if_exists_missing_file_is_silent() {
        let dir = tempdir().unwrap();
        remove_if_exists(&dir.path().join("never-existed"));
    }
}
