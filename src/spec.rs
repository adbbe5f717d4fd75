// SPDX-License-Identifier: MIT OR Apache-2.0
//! Launch specification for a subordinate process.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything needed to launch a subordinate process: program, arguments,
/// working directory, and the *full* child environment.
///
/// `env` is the complete environment the child will see — spawning clears the
/// inherited environment and applies exactly this mapping. [`LaunchSpec::new`]
/// seeds it with a snapshot of the caller's environment, so the default
/// behavior is plain inheritance, but the dependency stays visible and
/// editable rather than ambient.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Executable path or name (resolved via `PATH` by the OS).
    pub program: String,
    /// Arguments passed verbatim, in order.
    pub args: Vec<String>,
    /// Working directory override. `None` inherits the caller's.
    pub cwd: Option<PathBuf>,
    /// The full child environment.
    pub env: BTreeMap<String, String>,
}

impl LaunchSpec {
    /// Create a spec for `program` with no arguments, the caller's working
    /// directory, and a snapshot of the caller's environment.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: std::env::vars().collect(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set or override one environment variable for the child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the child's working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}
