//! Status messages and progress indicators.

use std::fmt;

/// A one-line success or error message, the terminal counterpart of a
/// toast notification.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

/// Ten-cell bar for a percentage, clamped to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar(pub u8);

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = self.0.min(100);
        let filled = usize::from(percent / 10);
        write!(
            f,
            "[{}{}] {percent}%",
            "█".repeat(filled),
            "░".repeat(10 - filled)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Offboarding completed".to_string());
        assert_eq!(format!("{success}"), "Success: Offboarding completed\n");

        let failure = OperationStatus::failure("Settlement failed".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(ProgressBar(0).to_string(), "[░░░░░░░░░░] 0%");
        assert_eq!(ProgressBar(14).to_string(), "[█░░░░░░░░░] 14%");
        assert_eq!(ProgressBar(100).to_string(), "[██████████] 100%");
        assert_eq!(ProgressBar(250).to_string(), "[██████████] 100%");
    }
}
