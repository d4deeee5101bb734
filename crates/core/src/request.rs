// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fully-specified description of one git invocation.

use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::sink::OutputSink;

/// Transport chosen for one command: a local child process or a relay
/// over a secure-shell session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Local,
    Remote,
}

/// Which editor-hook environment/config flags are injected.
///
/// Only meaningful for local dispatch; remote sessions never run
/// interactive hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Force a no-op editor.
    None,
    /// Point `core.editor` at this application.
    #[default]
    CoreEditor,
    /// Point both the rebase sequence editor and the commit-message
    /// editor at this application.
    RebaseEditor,
}

/// One git invocation, built by a caller that does not know (or care)
/// whether it will run locally or be relayed to a remote host.
///
/// The request owns no OS resources; the underlying process belongs to
/// the runner for the duration of a single dispatch.
#[derive(Clone)]
pub struct ExecutionRequest {
    /// Opaque caller tag used to attribute raised errors.
    pub context: String,
    /// Local working directory. Forced empty for remote dispatch.
    pub working_directory: Option<PathBuf>,
    /// Fully-formed argument string. Callers own the shell-safety of
    /// embedded values.
    pub args: String,
    pub editor: EditorMode,
    /// Optional SSH key path, local strategy only.
    pub ssh_key: String,
    pub strategy: Strategy,
    /// Remote target, filled in by strategy selection.
    pub remote_host: String,
    pub remote_directory: String,
    /// Cooperative cancellation signal, streaming mode only.
    pub cancellation: Option<CancellationToken>,
    /// Whether failures are surfaced to the error reporter.
    pub raise_on_failure: bool,
    /// Live line-sink for raw output echo.
    pub log: Option<Arc<dyn OutputSink>>,
}

impl ExecutionRequest {
    pub fn new(context: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            working_directory: None,
            args: args.into(),
            editor: EditorMode::default(),
            ssh_key: String::new(),
            strategy: Strategy::default(),
            remote_host: String::new(),
            remote_directory: String::new(),
            cancellation: None,
            raise_on_failure: true,
            log: None,
        }
    }

    pub fn working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn editor(mut self, editor: EditorMode) -> Self {
        self.editor = editor;
        self
    }

    pub fn ssh_key(mut self, key: impl Into<String>) -> Self {
        self.ssh_key = key.into();
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn raise_on_failure(mut self, raise: bool) -> Self {
        self.raise_on_failure = raise;
        self
    }

    pub fn log(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.log = Some(sink);
        self
    }

    /// True once cancellation has been requested for this invocation.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}

// An empty request still raises on failure, same as `new`.
impl Default for ExecutionRequest {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl std::fmt::Debug for ExecutionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionRequest")
            .field("context", &self.context)
            .field("working_directory", &self.working_directory)
            .field("args", &self.args)
            .field("editor", &self.editor)
            .field("strategy", &self.strategy)
            .field("remote_host", &self.remote_host)
            .field("remote_directory", &self.remote_directory)
            .field("raise_on_failure", &self.raise_on_failure)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
