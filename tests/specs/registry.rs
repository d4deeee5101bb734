// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry persistence through the JSON settings shape.

use gc_core::{NodeMapping, NodeRegistry};

#[test]
fn snapshot_round_trips_through_json_settings() {
    let registry = NodeRegistry::new();
    registry.add(NodeMapping::new("current", "deploy@build-03", "/srv/app"));
    registry.add(NodeMapping::new("staging", "deploy@stage-01", "/srv/stage"));

    let json = serde_json::to_string(&registry.snapshot()).unwrap();
    assert!(json.contains("\"nodeId\":\"current\""));
    assert!(json.contains("\"remoteDirectory\":\"/srv/app\""));

    let restored = NodeRegistry::new();
    restored.restore(serde_json::from_str(&json).unwrap());
    assert_eq!(restored.len(), 2);
    let current = restored.find("current").unwrap();
    assert_eq!(current.hostname, "deploy@build-03");
    assert_eq!(current.remote_directory, "/srv/app");
}

#[test]
fn restore_replaces_whatever_was_registered() {
    let registry = NodeRegistry::new();
    registry.add(NodeMapping::new("old", "host-a", "/a"));

    registry.restore(vec![NodeMapping::new("new", "host-b", "/b")]);

    assert!(registry.find("old").is_none());
    assert_eq!(registry.find("new").unwrap().hostname, "host-b");
    assert_eq!(registry.len(), 1);
}

#[test]
fn find_or_create_registers_an_empty_placeholder() {
    let registry = NodeRegistry::new();

    let created = registry.find_or_create("current");
    assert_eq!(created.node_id, "current");
    assert!(created.hostname.is_empty());

    // The placeholder is now registered, so later edits see one entry.
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find_or_create("current"), created);
    assert_eq!(registry.len(), 1);
}
