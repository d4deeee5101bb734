// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gc-core: data model for the gitcourier command-execution engine

pub mod context;
pub mod node;
pub mod noise;
pub mod request;
pub mod sink;

pub use context::GitContext;
pub use node::{NodeMapping, NodeRegistry};
pub use noise::is_noise;
pub use request::{EditorMode, ExecutionRequest, Strategy};
pub use sink::{BufferReporter, BufferSink, ErrorReporter, LogReporter, OutputSink};
