// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutex-guarded kill handle shared by cancellation and completion.

use std::sync::Arc;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use parking_lot::Mutex;

/// An atomically-swappable handle to a live child process.
///
/// The cancellation callback and the completion path run on different
/// tasks and share this guard: completion calls [`KillGuard::disarm`]
/// under the lock once the process has exited, so a cancellation firing
/// afterwards finds nothing to kill instead of signalling a process that
/// is already gone.
#[derive(Clone, Default)]
pub struct KillGuard {
    pid: Arc<Mutex<Option<Pid>>>,
}

impl KillGuard {
    /// Guard a freshly-spawned process. A `None` pid (process already
    /// reaped at spawn time) arms an empty guard.
    pub fn armed(pid: Option<u32>) -> Self {
        Self {
            pid: Arc::new(Mutex::new(pid.map(|raw| Pid::from_raw(raw as i32)))),
        }
    }

    /// Detach the process from the guard. Called by the completion path
    /// once the exit status has been observed.
    pub fn disarm(&self) {
        self.pid.lock().take();
    }

    /// Forcibly terminate the guarded process if it is still attached.
    /// Returns whether a kill was attempted.
    pub fn kill_if_armed(&self) -> bool {
        let guarded = self.pid.lock();
        match *guarded {
            Some(pid) => {
                if let Err(errno) = kill(pid, Signal::SIGKILL) {
                    tracing::warn!(%pid, %errno, "kill on cancellation failed");
                }
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
