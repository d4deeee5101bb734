// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local launcher: runs the configured git binary as a child process.

use gc_core::{EditorMode, ExecutionRequest, GitContext};

use crate::descriptor::ProcessDescriptor;
use crate::launcher::Launcher;

/// Marker env var telling a re-invoked copy of this application that it
/// is acting as the askpass helper.
pub const ASKPASS_MARKER_ENV: &str = "GITCOURIER_LAUNCH_AS_ASKPASS";

pub struct LocalLauncher {
    context: GitContext,
}

impl LocalLauncher {
    pub fn new(context: GitContext) -> Self {
        Self { context }
    }
}

impl Launcher for LocalLauncher {
    fn descriptor(&self, request: &ExecutionRequest, redirect: bool) -> ProcessDescriptor {
        let self_exe = self.context.self_exe.display().to_string();

        // Any credential prompt is redirected back into this application
        // acting as the askpass helper.
        let mut env = vec![
            ("SSH_ASKPASS".to_string(), self_exe.clone()),
            ("SSH_ASKPASS_REQUIRE".to_string(), "force".to_string()),
            (ASKPASS_MARKER_ENV.to_string(), "TRUE".to_string()),
        ];
        if std::env::var_os("GIT_SSH_COMMAND").is_none() && !request.ssh_key.is_empty() {
            env.push((
                "GIT_SSH_COMMAND".to_string(),
                format!("ssh -o AddKeysToAgent=yes -i \"{}\"", request.ssh_key),
            ));
        }

        // Localized git output would confuse downstream parsing.
        if cfg!(unix) {
            env.push(("LANG".to_string(), "C".to_string()));
            env.push(("LC_ALL".to_string(), "C".to_string()));
        }

        let mut args = vec![
            "--no-pager".to_string(),
            "-c".to_string(),
            "core.quotepath=off".to_string(),
            "-c".to_string(),
            format!("credential.helper={}", self.context.credential_helper),
        ];
        match request.editor {
            EditorMode::CoreEditor => {
                args.push("-c".to_string());
                args.push(format!("core.editor=\"{self_exe}\" --core-editor"));
            }
            EditorMode::RebaseEditor => {
                args.push("-c".to_string());
                args.push(format!("core.editor=\"{self_exe}\" --rebase-message-editor"));
                args.push("-c".to_string());
                args.push(format!("sequence.editor=\"{self_exe}\" --rebase-todo-editor"));
                args.push("-c".to_string());
                args.push("rebase.abbreviateCommands=true".to_string());
            }
            EditorMode::None => {
                args.push("-c".to_string());
                args.push("core.editor=true".to_string());
            }
        }
        args.extend(split_args(&request.args));

        ProcessDescriptor {
            program: self.context.git_binary.clone(),
            args,
            env,
            working_dir: request
                .working_directory
                .as_ref()
                .filter(|dir| !dir.as_os_str().is_empty())
                .cloned(),
            redirect,
        }
    }
}

/// Split a caller-supplied argument string into argv entries. Callers own
/// the shell-safety of embedded values; a string with unbalanced quotes
/// falls back to whitespace splitting.
fn split_args(raw: &str) -> Vec<String> {
    shlex::split(raw).unwrap_or_else(|| raw.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
