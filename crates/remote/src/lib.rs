// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gc-remote: one-shot remote shell commands and a filesystem facade
//!
//! Every operation here is a single secure-shell round trip against a
//! fixed host. This is a lower-level transport than the git launcher
//! path, used where a full git dispatch is not needed.

pub mod dir;
pub mod file;
pub mod shell;

pub use shell::{SshError, SshOutput, SshSession};
