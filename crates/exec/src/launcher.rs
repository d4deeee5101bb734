// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launcher contract and strategy selection.

use gc_core::{ExecutionRequest, GitContext, NodeRegistry, Strategy};

use crate::descriptor::ProcessDescriptor;
use crate::local::LocalLauncher;
use crate::remote::RemoteLauncher;

/// Registry key of the single active remote node.
// TODO: key the lookup off the active repository session instead of one
// "current" slot once multiple remote sessions can be open at a time.
pub const ACTIVE_NODE: &str = "current";

/// Turns an abstract invocation into a concrete process descriptor.
pub trait Launcher: Send + Sync {
    fn descriptor(&self, request: &ExecutionRequest, redirect: bool) -> ProcessDescriptor;
}

/// Bind a request to a transport strategy and resolve its launcher.
///
/// Selecting [`Strategy::Remote`] copies the active node mapping's host
/// and directory onto the request; with no mapping registered, both stay
/// empty and the remote command degrades to running bare git with no
/// directory change.
pub fn attach_strategy(
    request: &mut ExecutionRequest,
    strategy: Strategy,
    context: &GitContext,
    registry: &NodeRegistry,
) -> Box<dyn Launcher> {
    request.strategy = strategy;
    match strategy {
        Strategy::Local => Box::new(LocalLauncher::new(context.clone())),
        Strategy::Remote => {
            if let Some(mapping) = registry.find(ACTIVE_NODE) {
                request.remote_host = mapping.hostname;
                request.remote_directory = mapping.remote_directory;
            }
            Box::new(RemoteLauncher)
        }
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
