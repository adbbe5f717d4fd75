// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod exit;
pub mod process;
pub mod spec;

pub use error::SupervisorError;
pub use exit::ExitStatus;
pub use process::{ChildHandle, ProcessState};
pub use spec::LaunchSpec;
