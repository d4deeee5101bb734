// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command runner: streaming, buffered, and fire-and-forget dispatch.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use gc_core::{is_noise, ErrorReporter, ExecutionRequest, GitContext, NodeRegistry, OutputSink, Strategy};

use crate::guard::KillGuard;
use crate::launcher::{attach_strategy, Launcher};

/// Outcome of a buffered (non-streaming) execution.
#[derive(Debug, Clone, Default)]
pub struct ExecResult {
    pub succeeded: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ExecResult {
    /// A failed result carrying the launch error text in stderr.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            stdout: String::new(),
            stderr: reason.into(),
        }
    }
}

/// Owns one [`ExecutionRequest`] and the process it dispatches. The
/// underlying OS process is never retained past a single invocation.
pub struct CommandRunner {
    request: ExecutionRequest,
    launcher: Box<dyn Launcher>,
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl CommandRunner {
    pub fn new(request: ExecutionRequest, launcher: Box<dyn Launcher>) -> Self {
        Self {
            request,
            launcher,
            reporter: None,
        }
    }

    /// Bind a request to a strategy, resolving remote host details from
    /// the node registry.
    pub fn bind(
        mut request: ExecutionRequest,
        strategy: Strategy,
        context: &GitContext,
        registry: &NodeRegistry,
    ) -> Self {
        let launcher = attach_strategy(&mut request, strategy, context, registry);
        Self::new(request, launcher)
    }

    pub fn reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn request(&self) -> &ExecutionRequest {
        &self.request
    }

    /// Streaming execution: consume output line by line, honor
    /// cancellation, report failures once.
    ///
    /// Returns `true` iff the process exited with status 0 and
    /// cancellation was not requested.
    pub async fn exec(&mut self) -> bool {
        if let Some(sink) = &self.request.log {
            sink.append_line(&format!("$ git {}", self.request.args));
        }
        self.scrub_remote_working_dir();

        let descriptor = self.launcher.descriptor(&self.request, true);
        let span = tracing::info_span!(
            "git.cmd",
            context = %self.request.context,
            command = %descriptor.command_line(),
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let start = Instant::now();

        let mut child = match descriptor.spawn() {
            Ok(child) => child,
            Err(source) => {
                if self.request.raise_on_failure {
                    self.raise(&source.to_string());
                }
                // Terminate the log block even on a failed launch.
                if let Some(sink) = &self.request.log {
                    sink.append_line("");
                }
                return false;
            }
        };

        // Register the kill callback before consuming any output, so a
        // cancellation can interrupt a process that never writes a line.
        let guard = KillGuard::armed(child.id());
        let watcher = self.request.cancellation.clone().map(|token| {
            let guard = guard.clone();
            tokio::spawn(async move {
                token.cancelled().await;
                guard.kill_if_armed();
            })
        });

        let errs: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(tokio::spawn(drain_lines(
                stdout,
                self.request.log.clone(),
                Arc::clone(&errs),
            )));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(tokio::spawn(drain_lines(
                stderr,
                self.request.log.clone(),
                Arc::clone(&errs),
            )));
        }

        let exit_code = match child.wait().await {
            Ok(status) => status.code().unwrap_or(-1),
            Err(source) => {
                // The wait operation itself failed, not the process.
                // Treat its message as one more error line.
                classify_line(&source.to_string(), self.request.log.as_deref(), &errs);
                -1
            }
        };

        // Detach under the lock so a cancellation firing now finds
        // nothing left to kill.
        guard.disarm();
        if let Some(watcher) = watcher {
            watcher.abort();
        }
        for reader in readers {
            let _ = reader.await;
        }

        if let Some(sink) = &self.request.log {
            sink.append_line("");
        }

        span.record("exit_code", exit_code);
        span.record("duration_ms", start.elapsed().as_millis() as u64);

        let cancelled = self.request.is_cancelled();
        if !cancelled && exit_code != 0 && self.request.raise_on_failure {
            let message = errs.lock().join("\n").trim().to_string();
            if !message.is_empty() {
                self.raise(&message);
            }
        }

        exit_code == 0 && !cancelled
    }

    /// Buffered execution for quick read-only queries: capture both
    /// streams wholesale and never raise to the error reporter. A failed
    /// launch yields a failed result carrying the error text in stderr.
    pub async fn read_to_end(&mut self) -> ExecResult {
        self.scrub_remote_working_dir();

        let descriptor = self.launcher.descriptor(&self.request, true);
        let mut child = match descriptor.spawn() {
            Ok(child) => child,
            Err(source) => return ExecResult::failed(source.to_string()),
        };

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let io = async move {
            let read_stdout = async {
                let mut buf = String::new();
                if let Some(mut pipe) = stdout_pipe {
                    pipe.read_to_string(&mut buf).await?;
                }
                Ok::<_, std::io::Error>(buf)
            };
            let read_stderr = async {
                let mut buf = String::new();
                if let Some(mut pipe) = stderr_pipe {
                    pipe.read_to_string(&mut buf).await?;
                }
                Ok::<_, std::io::Error>(buf)
            };
            let (stdout, stderr) = tokio::try_join!(read_stdout, read_stderr)?;
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((status, stdout, stderr))
        };

        let outcome = match &self.request.cancellation {
            Some(token) => match token.run_until_cancelled(io).await {
                Some(outcome) => outcome,
                None => return ExecResult::failed("command cancelled before completion"),
            },
            None => io.await,
        };

        match outcome {
            Ok((status, stdout, stderr)) => ExecResult {
                succeeded: status.success(),
                stdout,
                stderr,
            },
            Err(source) => ExecResult::failed(source.to_string()),
        }
    }

    /// Fire-and-forget dispatch without output redirection. A launch
    /// failure is the only reportable outcome.
    pub fn exec_detached(&mut self) {
        self.scrub_remote_working_dir();
        let descriptor = self.launcher.descriptor(&self.request, false);
        if let Err(source) = descriptor.spawn() {
            self.raise(&source.to_string());
        }
    }

    fn raise(&self, message: &str) {
        if let Some(reporter) = &self.reporter {
            reporter.report(&self.request.context, message);
        }
    }

    // Remote execution has no meaningful local working directory.
    fn scrub_remote_working_dir(&mut self) {
        if self.request.strategy == Strategy::Remote {
            self.request.working_directory = None;
        }
    }
}

/// Drain one output stream line by line, echoing to the sink and
/// accumulating non-noise lines for error reporting.
async fn drain_lines<R>(
    reader: R,
    sink: Option<Arc<dyn OutputSink>>,
    errs: Arc<Mutex<Vec<String>>>,
) where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        classify_line(&line, sink.as_deref(), &errs);
    }
}

/// Forward a line to the sink, then append it to the error buffer unless
/// it is empty or recognized noise.
fn classify_line(line: &str, sink: Option<&dyn OutputSink>, errs: &Mutex<Vec<String>>) {
    if let Some(sink) = sink {
        sink.append_line(line);
    }
    if line.is_empty() || is_noise(line) {
        return;
    }
    errs.lock().push(line.to_string());
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
