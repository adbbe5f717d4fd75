// SPDX-License-Identifier: MIT OR Apache-2.0
//! Termination status of a subordinate process.

use std::fmt;

/// How a subordinate process ended.
///
/// Recorded exactly once, when the supervisor observes termination. A signal
/// death is kept distinct from an exit code rather than folded into a
/// sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by the given signal (unix).
    Signaled(i32),
    /// The process ended but no status could be read from the OS.
    Undetermined,
}

impl ExitStatus {
    /// `true` only for a normal exit with code 0.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }

    /// The exit code, if the process exited normally.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Exited(code) => Some(*code),
            _ => None,
        }
    }

    /// The killing signal, if the process died to one.
    pub fn signal(&self) -> Option<i32> {
        match self {
            Self::Signaled(sig) => Some(*sig),
            _ => None,
        }
    }

    pub(crate) fn from_std(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = status.signal() {
                return Self::Signaled(sig);
            }
        }
        Self::Undetermined
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exit code {code}"),
            Self::Signaled(sig) => write!(f, "signal {sig}"),
            Self::Undetermined => write!(f, "undetermined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_only_exit_zero() {
        assert!(ExitStatus::Exited(0).is_success());
        assert!(!ExitStatus::Exited(1).is_success());
        assert!(!ExitStatus::Signaled(9).is_success());
        assert!(!ExitStatus::Undetermined.is_success());
    }

    #[test]
    fn accessors_do_not_cross() {
        assert_eq!(ExitStatus::Exited(7).code(), Some(7));
        assert_eq!(ExitStatus::Exited(7).signal(), None);
        assert_eq!(ExitStatus::Signaled(15).signal(), Some(15));
        assert_eq!(ExitStatus::Signaled(15).code(), None);
    }

    #[test]
    fn display_forms() {
        assert_eq!(ExitStatus::Exited(1).to_string(), "exit code 1");
        assert_eq!(ExitStatus::Signaled(9).to_string(), "signal 9");
        assert_eq!(ExitStatus::Undetermined.to_string(), "undetermined");
    }

    #[cfg(unix)]
    #[test]
    fn from_std_decodes_wait_status() {
        use std::os::unix::process::ExitStatusExt;

        // wait(2) encoding: exit code in the high byte, signal in the low.
        let exited_zero = std::process::ExitStatus::from_raw(0);
        assert_eq!(ExitStatus::from_std(exited_zero), ExitStatus::Exited(0));

        let exited_one = std::process::ExitStatus::from_raw(0x0100);
        assert_eq!(ExitStatus::from_std(exited_one), ExitStatus::Exited(1));

        let killed = std::process::ExitStatus::from_raw(9);
        assert_eq!(ExitStatus::from_std(killed), ExitStatus::Signaled(9));
    }
}
