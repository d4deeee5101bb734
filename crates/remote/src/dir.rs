// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote directory operations, one shell round trip each.

use crate::shell::parse_bool;
use crate::{SshError, SshSession};

/// Whether a directory exists at `path` on the remote host.
pub async fn exists(session: &SshSession, path: &str) -> Result<bool, SshError> {
    let reply = session
        .run(&format!(
            "[ -d \"{path}\" ] && echo \"true\" || echo \"false\""
        ))
        .await?;
    parse_bool(&reply.stdout)
}

/// Create the directory, including missing parents. Idempotent.
pub async fn create(session: &SshSession, path: &str) -> Result<(), SshError> {
    session.run(&format!("mkdir -p \"{path}\"")).await?;
    Ok(())
}

/// Remove the directory. With `recursive` the whole tree goes; without
/// it only an empty directory is removed.
pub async fn delete(session: &SshSession, path: &str, recursive: bool) -> Result<(), SshError> {
    let command = if recursive {
        format!("rm -rf \"{path}\"")
    } else {
        format!("rmdir \"{path}\"")
    };
    session.run(&command).await?;
    Ok(())
}

/// Immediate child files of the directory, full paths.
pub async fn list_files(session: &SshSession, path: &str) -> Result<Vec<String>, SshError> {
    list(session, path, "f").await
}

/// Immediate child directories, full paths. The directory itself is
/// excluded even though find reports it.
pub async fn list_dirs(session: &SshSession, path: &str) -> Result<Vec<String>, SshError> {
    let mut dirs = list(session, path, "d").await?;
    dirs.retain(|d| d.trim_end_matches('/') != path.trim_end_matches('/'));
    Ok(dirs)
}

async fn list(session: &SshSession, path: &str, kind: &str) -> Result<Vec<String>, SshError> {
    let reply = session
        .run(&format!("find \"{path}\" -maxdepth 1 -type {kind}"))
        .await?;
    Ok(reply
        .stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
