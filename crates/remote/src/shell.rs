// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot shell commands over a secure-shell session.

use std::path::PathBuf;
use std::process::Stdio;

use thiserror::Error;

/// Errors from the remote one-shot executor and the facade built on it.
#[derive(Debug, Error)]
pub enum SshError {
    /// The local ssh client could not be started.
    #[error("failed to launch ssh client: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// The remote command exited non-zero. Unlike the git dispatch path
    /// there is no raise-on-failure flag here: this is always an error.
    #[error("remote command failed with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    /// The remote side answered something the facade could not parse.
    #[error("unexpected reply from remote command: {reply}")]
    Reply { reply: String },
}

/// Captured output of a successful remote command, trailing whitespace
/// trimmed.
#[derive(Debug, Clone)]
pub struct SshOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A fixed remote host reached through the local ssh client.
#[derive(Debug, Clone)]
pub struct SshSession {
    client: PathBuf,
    host: String,
}

impl SshSession {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            client: PathBuf::from("ssh"),
            host: host.into(),
        }
    }

    /// Use a non-standard ssh client binary.
    pub fn with_client(client: impl Into<PathBuf>, host: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            host: host.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Run one shell command on the remote host and capture its output.
    /// The command text is passed as a single argument, so embedded
    /// quotes and newlines reach the remote shell intact.
    pub async fn run(&self, command: &str) -> Result<SshOutput, SshError> {
        tracing::debug!(host = %self.host, %command, "running remote shell command");

        let output = tokio::process::Command::new(&self.client)
            .arg(&self.host)
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| SshError::Spawn { source })?;

        let stdout = String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string();
        let stderr = String::from_utf8_lossy(&output.stderr)
            .trim_end()
            .to_string();

        if !output.status.success() {
            let status = output.status.code().unwrap_or(-1);
            tracing::warn!(host = %self.host, status, %stderr, "remote command failed");
            return Err(SshError::CommandFailed { status, stderr });
        }

        Ok(SshOutput { stdout, stderr })
    }
}

/// Parse the literal `true`/`false` reply of a remote existence check.
pub(crate) fn parse_bool(reply: &str) -> Result<bool, SshError> {
    match reply.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(SshError::Reply {
            reply: other.to_string(),
        }),
    }
}

/// Parse the single-integer reply of a size/mtime query.
pub(crate) fn parse_integer(reply: &str) -> Result<u64, SshError> {
    reply.trim().parse().map_err(|_| SshError::Reply {
        reply: reply.to_string(),
    })
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
