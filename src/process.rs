// SPDX-License-Identifier: MIT OR Apache-2.0
//! Spawning and exit observation for a single subordinate process.

use std::process::Stdio;

use tokio::process::{ChildStderr, ChildStdin, ChildStdout, Command};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::error::SupervisorError;
use crate::exit::ExitStatus;
use crate::spec::LaunchSpec;

/// Observable state of a spawned subordinate process.
///
/// A handle only exists for a process that launched successfully, so the
/// pre-spawn and launch-failure states have no representation here: before
/// [`ChildHandle::spawn`] there is no handle, and a launch failure is the
/// `Err` arm of `spawn`. The one transition a live handle makes is
/// `Running` to `Terminated`, exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// The process is running (or has exited but the exit is not yet
    /// observed by the reaper).
    Running,
    /// The process terminated with the recorded status. Terminal.
    Terminated(ExitStatus),
}

/// Handle to one spawned subordinate process: its three piped stdio
/// channels and a subscription point for the termination event.
#[derive(Debug)]
pub struct ChildHandle {
    program: String,
    pid: Option<u32>,
    stdin: Option<ChildStdin>,
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
    status_rx: watch::Receiver<Option<ExitStatus>>,
}

impl ChildHandle {
    /// Spawn the process described by `spec` with stdin, stdout, and stderr
    /// all piped.
    ///
    /// Non-blocking: returns as soon as the OS confirms creation. The child
    /// environment is cleared and populated from `spec.env` verbatim. A
    /// background task observes the exit, records the status exactly once,
    /// and logs it (`info!` on success, `warn!` on abnormal termination).
    ///
    /// # Errors
    ///
    /// [`SupervisorError::Launch`] if the process cannot be created: missing
    /// or non-executable program, or missing working directory. No OS
    /// process exists after a launch failure.
    pub fn spawn(spec: LaunchSpec) -> Result<Self, SupervisorError> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .env_clear()
            .envs(&spec.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        let mut child = cmd.spawn().map_err(|source| SupervisorError::Launch {
            program: spec.program.clone(),
            source,
        })?;

        let pid = child.id();
        debug!(target: "subproc_kit", program = %spec.program, ?pid, "spawned child");

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (status_tx, status_rx) = watch::channel(None);
        let program = spec.program.clone();
        tokio::spawn(async move {
            let status = match child.wait().await {
                Ok(status) => ExitStatus::from_std(status),
                Err(err) => {
                    error!(
                        target: "subproc_kit",
                        %program,
                        error = %err,
                        "failed to observe child exit"
                    );
                    ExitStatus::Undetermined
                }
            };
            if status.is_success() {
                info!(target: "subproc_kit", %program, %status, "child exited");
            } else {
                warn!(target: "subproc_kit", %program, %status, "child terminated abnormally");
            }
            let _ = status_tx.send(Some(status));
        });

        Ok(Self {
            program: spec.program,
            pid,
            stdin,
            stdout,
            stderr,
            status_rx,
        })
    }

    /// Take the writable stdin channel. Yields `Some` exactly once.
    pub fn take_stdin(&mut self) -> Option<ChildStdin> {
        self.stdin.take()
    }

    /// Take the readable stdout channel. Yields `Some` exactly once.
    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.stdout.take()
    }

    /// Take the readable stderr channel. Yields `Some` exactly once.
    pub fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.stderr.take()
    }

    /// OS process id, valid only while the process runs. `None` once
    /// termination has been observed.
    pub fn id(&self) -> Option<u32> {
        if self.exit_status().is_some() {
            None
        } else {
            self.pid
        }
    }

    /// The recorded termination status, or `None` while still running.
    pub fn exit_status(&self) -> Option<ExitStatus> {
        *self.status_rx.borrow()
    }

    /// Snapshot of the handle's state.
    pub fn state(&self) -> ProcessState {
        match self.exit_status() {
            Some(status) => ProcessState::Terminated(status),
            None => ProcessState::Running,
        }
    }

    /// Register an observer invoked exactly once with the termination
    /// status.
    ///
    /// Registered before exit, it fires after exit with the true status;
    /// registered after exit, it fires immediately with the recorded status.
    /// The callback runs on a runtime task, not the caller's thread.
    pub fn on_exit<F>(&self, callback: F)
    where
        F: FnOnce(ExitStatus) + Send + 'static,
    {
        let rx = self.status_rx.clone();
        tokio::spawn(async move {
            callback(resolve(rx).await);
        });
    }

    /// Await termination and return the recorded status.
    ///
    /// Idempotent: every call returns the same status, immediately once the
    /// exit has been observed.
    pub async fn wait(&self) -> ExitStatus {
        resolve(self.status_rx.clone()).await
    }

    /// Await termination, mapping anything but a clean exit to
    /// [`SupervisorError::AbnormalTermination`].
    pub async fn wait_checked(&self) -> Result<(), SupervisorError> {
        let status = self.wait().await;
        if status.is_success() {
            Ok(())
        } else {
            Err(SupervisorError::AbnormalTermination {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// Wait until the reaper publishes a status.
///
/// The sender side only disappears after publishing, so the closed-channel
/// arm is unreachable in practice; it maps to `Undetermined` rather than a
/// panic.
async fn resolve(mut rx: watch::Receiver<Option<ExitStatus>>) -> ExitStatus {
    match rx.wait_for(Option::is_some).await {
        Ok(status) => (*status).unwrap_or(ExitStatus::Undetermined),
        Err(_) => ExitStatus::Undetermined,
    }
}
