// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end dispatch through a scripted git binary.

use std::sync::Arc;
use std::time::Duration;

use gc_core::{
    BufferReporter, BufferSink, EditorMode, ExecutionRequest, GitContext, NodeRegistry, Strategy,
};
use gc_exec::CommandRunner;

use crate::prelude::FakeGit;

fn context_for(git: &FakeGit) -> GitContext {
    GitContext::new(git.binary()).self_exe("/opt/gitcourier")
}

#[tokio::test]
async fn local_dispatch_passes_global_flags_then_command_args() {
    let git = FakeGit::new();
    let registry = NodeRegistry::new();
    let request = ExecutionRequest::new("repo", "fetch --prune origin");
    let mut runner =
        CommandRunner::bind(request, Strategy::Local, &context_for(&git), &registry);

    assert!(runner.exec().await);

    let argv = git.argv();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    assert_eq!(
        argv[..5],
        [
            "--no-pager",
            "-c",
            "core.quotepath=off",
            "-c",
            "credential.helper=store",
        ]
    );
    assert_eq!(argv[argv.len() - 3..], ["fetch", "--prune", "origin"]);
}

#[tokio::test]
async fn local_dispatch_injects_the_askpass_environment() {
    let git = FakeGit::new();
    let registry = NodeRegistry::new();
    let request = ExecutionRequest::new("repo", "pull");
    let mut runner =
        CommandRunner::bind(request, Strategy::Local, &context_for(&git), &registry);

    assert!(runner.exec().await);

    assert_eq!(git.env_var("SSH_ASKPASS").as_deref(), Some("/opt/gitcourier"));
    assert_eq!(git.env_var("SSH_ASKPASS_REQUIRE").as_deref(), Some("force"));
    assert_eq!(
        git.env_var("GITCOURIER_LAUNCH_AS_ASKPASS").as_deref(),
        Some("TRUE")
    );
}

#[tokio::test]
async fn rebase_editor_mode_configures_both_editors() {
    let git = FakeGit::new();
    let registry = NodeRegistry::new();
    let request = ExecutionRequest::new("repo", "rebase -i HEAD~3").editor(EditorMode::RebaseEditor);
    let mut runner =
        CommandRunner::bind(request, Strategy::Local, &context_for(&git), &registry);

    assert!(runner.exec().await);

    let argv = git.argv();
    assert!(argv
        .iter()
        .any(|a| a.starts_with("core.editor=") && a.ends_with("--rebase-message-editor")));
    assert!(argv
        .iter()
        .any(|a| a.starts_with("sequence.editor=") && a.ends_with("--rebase-todo-editor")));
    assert!(argv.contains(&"rebase.abbreviateCommands=true".to_string()));
}

#[tokio::test]
async fn streaming_run_echoes_a_complete_log_block() {
    let git = FakeGit::new();
    git.stage_stdout("Already up to date.\n");
    let sink = Arc::new(BufferSink::new());
    let registry = NodeRegistry::new();
    let request = ExecutionRequest::new("repo", "pull").log(sink.clone());
    let mut runner =
        CommandRunner::bind(request, Strategy::Local, &context_for(&git), &registry);

    assert!(runner.exec().await);

    let lines = sink.lines();
    assert_eq!(lines.first().map(String::as_str), Some("$ git pull"));
    assert!(lines.contains(&"Already up to date.".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some(""));
}

#[tokio::test]
async fn failing_run_raises_filtered_stderr_to_the_reporter() {
    let git = FakeGit::new();
    git.stage_stderr("hint: use --force\nfatal: refusing to merge\n");
    git.stage_exit(128);
    let reporter = Arc::new(BufferReporter::new());
    let registry = NodeRegistry::new();
    let request = ExecutionRequest::new("/work/repo", "merge topic");
    let mut runner = CommandRunner::bind(request, Strategy::Local, &context_for(&git), &registry)
        .reporter(reporter.clone());

    assert!(!runner.exec().await);

    let reports = reporter.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, "/work/repo");
    assert_eq!(reports[0].1, "fatal: refusing to merge");
}

#[tokio::test]
async fn buffered_query_returns_captured_stdout() {
    let git = FakeGit::new();
    git.stage_stdout("a1b2c3 HEAD\n");
    let registry = NodeRegistry::new();
    let request = ExecutionRequest::new("repo", "rev-parse HEAD");
    let mut runner =
        CommandRunner::bind(request, Strategy::Local, &context_for(&git), &registry);

    let result = runner.read_to_end().await;
    assert!(result.succeeded);
    assert_eq!(result.stdout, "a1b2c3 HEAD\n");
}

#[tokio::test]
async fn detached_dispatch_eventually_invokes_the_binary() {
    let git = FakeGit::new();
    let registry = NodeRegistry::new();
    let request = ExecutionRequest::new("repo", "gc --auto");
    let mut runner =
        CommandRunner::bind(request, Strategy::Local, &context_for(&git), &registry);

    runner.exec_detached();

    for _ in 0..50 {
        if git.was_invoked() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(40)).await;
    }
    panic!("detached invocation never recorded");
}

#[tokio::test]
async fn remote_bind_copies_the_active_node_mapping() {
    let git = FakeGit::new();
    let registry = NodeRegistry::new();
    registry.add(gc_core::NodeMapping::new(
        gc_exec::ACTIVE_NODE,
        "deploy@build-03",
        "/srv/repos/app",
    ));
    let request = ExecutionRequest::new("repo", "status").working_directory("/local/checkout");
    let runner = CommandRunner::bind(request, Strategy::Remote, &context_for(&git), &registry);

    assert_eq!(runner.request().remote_host, "deploy@build-03");
    assert_eq!(runner.request().remote_directory, "/srv/repos/app");
    assert_eq!(runner.request().strategy, Strategy::Remote);
}
