// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locally-configured executable paths shared by every launcher.

use std::path::PathBuf;

/// Paths and flags resolved once at startup and passed by reference to
/// whichever component builds a process descriptor.
#[derive(Debug, Clone)]
pub struct GitContext {
    /// Path of the git executable used for local dispatch.
    pub git_binary: PathBuf,
    /// Value for the `credential.helper` config flag.
    pub credential_helper: String,
    /// Path of this application, re-invoked as the askpass helper and as
    /// the editor for interactive hooks.
    pub self_exe: PathBuf,
}

impl GitContext {
    pub fn new(git_binary: impl Into<PathBuf>) -> Self {
        Self {
            git_binary: git_binary.into(),
            credential_helper: "store".to_string(),
            self_exe: std::env::current_exe().unwrap_or_else(|_| PathBuf::from("gitcourier")),
        }
    }

    pub fn credential_helper(mut self, helper: impl Into<String>) -> Self {
        self.credential_helper = helper.into();
        self
    }

    pub fn self_exe(mut self, exe: impl Into<PathBuf>) -> Self {
        self.self_exe = exe.into();
        self
    }
}

impl Default for GitContext {
    fn default() -> Self {
        Self::new("git")
    }
}
