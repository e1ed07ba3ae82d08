//! Process exit status.
//!
//! - 0: the run completed
//! - 1: configuration or execution failed

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Execution completed without error.
    Success = 0,
    /// Configuration or execution failed.
    Error = 1,
}

impl ExitStatus {
    /// Numeric code for `std::process::exit`.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
