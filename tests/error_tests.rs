// SPDX-License-Identifier: MIT OR Apache-2.0
//! Launch-failure tests: errors surface synchronously, with no process left
//! behind.

#![cfg(unix)]

use subproc_kit::{ChildHandle, LaunchSpec, SupervisorError};

#[tokio::test]
async fn missing_executable_is_a_launch_error() {
    let err = ChildHandle::spawn(LaunchSpec::new("/no/such/binary"))
        .expect_err("nonexistent path must fail");

    match &err {
        SupervisorError::Launch { program, source } => {
            assert_eq!(program, "/no/such/binary");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Launch, got: {other}"),
    }
    assert!(err.to_string().contains("/no/such/binary"));
}

#[tokio::test]
async fn missing_working_directory_is_a_launch_error() {
    let spec = LaunchSpec::new("/bin/sh")
        .arg("-c")
        .arg("exit 0")
        .current_dir("/definitely/missing/dir");

    let err = ChildHandle::spawn(spec).expect_err("missing cwd must fail");
    assert!(matches!(err, SupervisorError::Launch { .. }));
}

#[tokio::test]
async fn non_executable_file_is_a_launch_error() {
    // /etc/hostname exists on any Linux box but is not executable.
    let err = ChildHandle::spawn(LaunchSpec::new("/etc/hostname"))
        .expect_err("non-executable file must fail");
    assert!(matches!(err, SupervisorError::Launch { .. }));
}
