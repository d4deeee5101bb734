// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote filesystem facade exercised against a local ssh stand-in.

use gc_remote::{dir, file};

use crate::prelude::SshShim;

#[tokio::test]
async fn deploy_layout_can_be_built_and_torn_down() {
    let shim = SshShim::new();
    let root = shim.path("deploy");
    let conf = format!("{root}/app.conf");

    dir::create(&shim.session, &root).await.unwrap();
    assert!(dir::exists(&shim.session, &root).await.unwrap());

    file::write(&shim.session, &conf, "port = 8080\nname = \"app\"")
        .await
        .unwrap();
    assert!(file::exists(&shim.session, &conf).await.unwrap());
    assert_eq!(
        file::read(&shim.session, &conf).await.unwrap(),
        "port = 8080\nname = \"app\""
    );

    file::append(&shim.session, &conf, "debug = false")
        .await
        .unwrap();
    assert!(file::read(&shim.session, &conf)
        .await
        .unwrap()
        .ends_with("debug = false"));

    let files = dir::list_files(&shim.session, &root).await.unwrap();
    assert_eq!(files, vec![conf.clone()]);

    dir::delete(&shim.session, &root, true).await.unwrap();
    assert!(!dir::exists(&shim.session, &root).await.unwrap());
}

#[tokio::test]
async fn staged_file_promotion_uses_copy_then_rename() {
    let shim = SshShim::new();
    let staged = shim.path("app.conf.staged");
    let backup = shim.path("app.conf.bak");
    let live = shim.path("app.conf");

    file::write(&shim.session, &live, "old").await.unwrap();
    file::write(&shim.session, &staged, "new").await.unwrap();

    file::copy(&shim.session, &live, &backup).await.unwrap();
    file::rename(&shim.session, &staged, &live).await.unwrap();

    assert_eq!(file::read(&shim.session, &live).await.unwrap(), "new");
    assert_eq!(file::read(&shim.session, &backup).await.unwrap(), "old");
    assert!(!file::exists(&shim.session, &staged).await.unwrap());

    assert_eq!(file::size(&shim.session, &live).await.unwrap(), 4);
}

#[tokio::test]
async fn facade_errors_surface_the_remote_stderr() {
    let shim = SshShim::new();
    let missing = shim.path("never-written");

    let err = file::read(&shim.session, &missing).await.unwrap_err();
    let text = err.to_string();
    assert!(text.contains("remote command failed"), "got: {text}");
}
