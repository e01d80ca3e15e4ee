//! Exit code definitions for the sitepush CLI

/// Exit codes for the sitepush binary.
///
/// These codes follow a consistent convention to allow scripts and
/// automation to handle different outcomes appropriately. A run that
/// stops before any upload is attempted (usage shown, config still
/// unfilled) exits clean; `ConfigCreated` is the one pre-run signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully, or stopped before any upload
    Success = 0,

    /// Unrecoverable error: I/O failure, malformed config, aborted walk
    GeneralError = 1,

    /// The run finished but at least one upload failed
    UploadsFailed = 2,

    /// A blank config file was written; fill it in and run again
    ConfigCreated = 3,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::UploadsFailed),
            3 => Some(Self::ConfigCreated),
            _ => None,
        }
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",
            Self::GeneralError => "General error",
            Self::UploadsFailed => "One or more uploads failed",
            Self::ConfigCreated => "Blank config file created",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
