// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line sinks for live output echo and the caller-facing error channel.

use std::sync::Arc;

use parking_lot::Mutex;

/// Receives every raw output line of a running command, in arrival order
/// per stream, including lines later classified as noise.
pub trait OutputSink: Send + Sync {
    fn append_line(&self, line: &str);
}

/// In-memory sink that accumulates lines. Useful for audit views and
/// for asserting on output in tests.
#[derive(Default, Clone)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn text(&self) -> String {
        self.lines.lock().join("\n")
    }
}

impl OutputSink for BufferSink {
    fn append_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Caller-facing error channel. A streaming dispatch raises here at most
/// once, tagged with the request's context for attribution.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &str, message: &str);
}

/// Reporter that forwards raised failures to the tracing subscriber.
#[derive(Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, context: &str, message: &str) {
        tracing::error!(context, "{message}");
    }
}

/// In-memory reporter for tests and deferred display.
#[derive(Default, Clone)]
pub struct BufferReporter {
    reports: Arc<Mutex<Vec<(String, String)>>>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl ErrorReporter for BufferReporter {
    fn report(&self, context: &str, message: &str) {
        self.reports
            .lock()
            .push((context.to_string(), message.to_string()));
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
