//! Exit codes shared by both binaries.
//!
//! The tools keep the exit contract small: 0 on success (including runs
//! with reported per-object failures), 1 for anything fatal — bad
//! arguments, an identical source/destination pair, an unavailable root
//! dashboard, or malformed panel JSON.

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The run completed; per-object failures may have been reported.
    Success = 0,
    /// Fatal error: usage, configuration, or an aborted run.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit()`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
