// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote launcher: relays git through a secure-shell client.

use gc_core::ExecutionRequest;

use crate::descriptor::ProcessDescriptor;
use crate::launcher::Launcher;

/// Builds an `ssh <host> <remote command>` invocation. Editor mode and
/// SSH key are ignored here: remote sessions never run interactive hooks,
/// and key selection belongs to the user's ssh configuration.
pub struct RemoteLauncher;

impl Launcher for RemoteLauncher {
    fn descriptor(&self, request: &ExecutionRequest, redirect: bool) -> ProcessDescriptor {
        let mut remote_command = String::new();
        if !request.remote_directory.is_empty() {
            remote_command.push_str(&format!("cd {} && ", request.remote_directory));
        }
        remote_command.push_str("git --no-pager -c core.quotepath=off ");
        remote_command.push_str(&request.args);

        tracing::debug!(
            host = %request.remote_host,
            command = %remote_command,
            "relaying git command over ssh"
        );

        ProcessDescriptor {
            program: "ssh".into(),
            args: vec![request.remote_host.clone(), remote_command],
            env: Vec::new(),
            working_dir: None,
            redirect,
        }
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
