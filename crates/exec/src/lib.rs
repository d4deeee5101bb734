// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gc-exec: launchers and the command runner for git dispatch

pub mod descriptor;
pub mod guard;
pub mod launcher;
pub mod local;
pub mod remote;
pub mod runner;

pub use descriptor::ProcessDescriptor;
pub use guard::KillGuard;
pub use launcher::{attach_strategy, Launcher, ACTIVE_NODE};
pub use local::LocalLauncher;
pub use remote::RemoteLauncher;
pub use runner::{CommandRunner, ExecResult};
