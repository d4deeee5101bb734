// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote file operations, one shell round trip each.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::shell::{parse_bool, parse_integer};
use crate::{SshError, SshSession};

/// Whether a regular file exists at `path` on the remote host.
pub async fn exists(session: &SshSession, path: &str) -> Result<bool, SshError> {
    let reply = session
        .run(&format!(
            "[ -f \"{path}\" ] && echo \"true\" || echo \"false\""
        ))
        .await?;
    parse_bool(&reply.stdout)
}

/// Remove the file if present. Missing files are not an error.
pub async fn delete(session: &SshSession, path: &str) -> Result<(), SshError> {
    session.run(&format!("rm -f \"{path}\"")).await?;
    Ok(())
}

/// Write `contents` to the remote file, replacing whatever was there.
/// Uses a quoted heredoc so the payload travels without interpolation;
/// embedded quotes and newlines survive intact.
pub async fn write(session: &SshSession, path: &str, contents: &str) -> Result<(), SshError> {
    session
        .run(&format!("cat > \"{path}\" << 'GITCOURIER_EOF'\n{contents}\nGITCOURIER_EOF"))
        .await?;
    Ok(())
}

/// Append `contents` to the remote file, creating it if absent.
pub async fn append(session: &SshSession, path: &str, contents: &str) -> Result<(), SshError> {
    session
        .run(&format!("cat >> \"{path}\" << 'GITCOURIER_EOF'\n{contents}\nGITCOURIER_EOF"))
        .await?;
    Ok(())
}

/// Read the remote file's contents. Trailing whitespace is trimmed by
/// the transport.
pub async fn read(session: &SshSession, path: &str) -> Result<String, SshError> {
    let reply = session.run(&format!("cat \"{path}\"")).await?;
    Ok(reply.stdout)
}

/// Copy `from` to `to` on the remote host.
pub async fn copy(session: &SshSession, from: &str, to: &str) -> Result<(), SshError> {
    session.run(&format!("cp \"{from}\" \"{to}\"")).await?;
    Ok(())
}

/// Rename (move) `from` to `to` on the remote host.
pub async fn rename(session: &SshSession, from: &str, to: &str) -> Result<(), SshError> {
    session.run(&format!("mv \"{from}\" \"{to}\"")).await?;
    Ok(())
}

/// Last-modification time of the remote file.
pub async fn modified_at(session: &SshSession, path: &str) -> Result<SystemTime, SshError> {
    let reply = session.run(&format!("stat -c %Y \"{path}\"")).await?;
    let secs = parse_integer(&reply.stdout)?;
    Ok(UNIX_EPOCH + Duration::from_secs(secs))
}

/// Size of the remote file in bytes.
pub async fn size(session: &SshSession, path: &str) -> Result<u64, SshError> {
    let reply = session.run(&format!("stat -c %s \"{path}\"")).await?;
    parse_integer(&reply.stdout)
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
