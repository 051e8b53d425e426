use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// analysis tools.
///
/// - `Success` (0): Command completed, every collection resolved
/// - `Failure` (1): Command completed but some collections were skipped
/// - `Error` (2): Command failed (config unreadable, parse error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, every collection resolved.
    Success,
    /// Command completed but some collections were skipped.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }
}
