// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node mappings: logical node id -> remote host and working directory.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A named association between a logical node and a remote target.
///
/// Equality and hashing are defined solely on `node_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeMapping {
    #[serde(rename = "nodeId")]
    pub node_id: String,
    pub hostname: String,
    #[serde(rename = "remoteDirectory")]
    pub remote_directory: String,
}

impl NodeMapping {
    pub fn new(
        node_id: impl Into<String>,
        hostname: impl Into<String>,
        remote_directory: impl Into<String>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            hostname: hostname.into(),
            remote_directory: remote_directory.into(),
        }
    }
}

impl PartialEq for NodeMapping {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

impl Eq for NodeMapping {}

impl std::hash::Hash for NodeMapping {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.node_id.hash(state);
    }
}

impl std::fmt::Display for NodeMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NodeMapping(id: {}, host: {}, dir: {})",
            self.node_id, self.hostname, self.remote_directory
        )
    }
}

/// Process-wide registry of node mappings, read by strategy selection and
/// written by explicit registration. Entries live for the process
/// lifetime; persistence belongs to the settings layer, which uses
/// [`NodeRegistry::snapshot`] and [`NodeRegistry::restore`].
#[derive(Default)]
pub struct NodeRegistry {
    entries: RwLock<HashMap<String, NodeMapping>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the mapping for its node id.
    pub fn add(&self, mapping: NodeMapping) {
        self.entries
            .write()
            .insert(mapping.node_id.clone(), mapping);
    }

    pub fn find(&self, node_id: &str) -> Option<NodeMapping> {
        self.entries.read().get(node_id).cloned()
    }

    /// Look up a mapping, inserting an empty one under `node_id` when
    /// none is registered yet.
    pub fn find_or_create(&self, node_id: &str) -> NodeMapping {
        if let Some(found) = self.find(node_id) {
            return found;
        }
        let mut entries = self.entries.write();
        entries
            .entry(node_id.to_string())
            .or_insert_with(|| NodeMapping::new(node_id, "", ""))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All mappings, for external persistence.
    pub fn snapshot(&self) -> Vec<NodeMapping> {
        let mut all: Vec<_> = self.entries.read().values().cloned().collect();
        all.sort_by(|a, b| a.node_id.cmp(&b.node_id));
        all
    }

    /// Replace the registry contents, typically from persisted settings.
    pub fn restore(&self, mappings: Vec<NodeMapping>) {
        let mut entries = self.entries.write();
        entries.clear();
        for mapping in mappings {
            entries.insert(mapping.node_id.clone(), mapping);
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
