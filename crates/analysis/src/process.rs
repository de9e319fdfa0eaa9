// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bounded-wait external process invocation.
//!
//! Trace capture and conversion shell out to external tooling that is not
//! always well behaved; the harness gives a child a fixed amount of time
//! and then reclaims it. A timeout is not an error: the child is killed,
//! reaped, and whatever output it produced is still returned.

use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Errors raised when a child process cannot be run at all.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command could not be spawned.
    #[error("failed to spawn `{command}`")]
    Spawn {
        /// The command that failed to start.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The child's exit status and output could not be collected.
    #[error("failed to collect output of `{command}`")]
    Collect {
        /// The command whose output was lost.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Interval at which the child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run `command` with `args`, waiting at most `timeout` for it to finish.
///
/// On timeout the child is killed and then reaped with a second blocking
/// wait that also drains its pipes. Returns the trimmed stdout and stderr,
/// `None` for whichever is empty; a timeout surfaces only as the absence
/// of output, never as an error.
///
/// # Errors
///
/// Only spawning or collecting can fail, not the child timing out.
pub fn run_with_timeout(
    command: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<(Option<String>, Option<String>), ProcessError> {
    let mut child = Command::new(command)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            command: command.to_owned(),
            source,
        })?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) => {
                if Instant::now() >= deadline {
                    tracing::warn!(command, ?timeout, "child exceeded timeout, killing");
                    let _ = child.kill();
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(_) => break,
        }
    }

    // Reaps the child (killed or not) and drains both pipes.
    let output = child
        .wait_with_output()
        .map_err(|source| ProcessError::Collect {
            command: command.to_owned(),
            source,
        })?;

    Ok((
        non_empty(String::from_utf8_lossy(&output.stdout).trim()),
        non_empty(String::from_utf8_lossy(&output.stderr).trim()),
    ))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_command_returns_stdout() {
        let (out, err) = run_with_timeout("echo", &["hello"], Duration::from_secs(5)).unwrap();
        assert_eq!(out.as_deref(), Some("hello"));
        assert!(err.is_none());
    }

    #[test]
    fn test_timeout_kills_without_raising() {
        let started = Instant::now();
        let result = run_with_timeout("sleep", &["5"], Duration::from_millis(200));
        let elapsed = started.elapsed();

        let (out, err) = result.unwrap();
        assert!(out.is_none());
        assert!(err.is_none());
        // Bounded overhead over the timeout, nowhere near the sleep.
        assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    }

    #[test]
    fn test_missing_command_is_a_spawn_error() {
        assert!(matches!(
            run_with_timeout("robobench-no-such-binary", &[], Duration::from_secs(1)),
            Err(ProcessError::Spawn { .. })
        ));
    }
}
