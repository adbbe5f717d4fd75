// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for supervisor operations.

use thiserror::Error;

use crate::exit::ExitStatus;

/// Errors surfaced by the supervisor.
///
/// Exactly two kinds exist: the subordinate process could not be created at
/// all, or it ran and terminated abnormally. The supervisor never retries or
/// restarts on either.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// The subordinate process could not be created (missing executable,
    /// permission denied, missing working directory).
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// The program that failed to launch.
        program: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The subordinate process exited with a non-zero code or was killed by
    /// a signal. Produced by [`ChildHandle::wait_checked`]; purely
    /// observational.
    ///
    /// [`ChildHandle::wait_checked`]: crate::ChildHandle::wait_checked
    #[error("{program} terminated abnormally: {status}")]
    AbnormalTermination {
        /// The program that terminated.
        program: String,
        /// The recorded termination status.
        status: ExitStatus,
    },
}
