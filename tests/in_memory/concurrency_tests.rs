//! Parallel requests against a shared in-memory store.

use std::collections::BTreeSet;

use rstest::rstest;
use taskdesk::task::domain::TaskPayload;

use super::helpers::{Harness, harness};

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_receive_unique_identifiers(harness: Harness) -> Result<(), eyre::Report> {
    let mut handles = Vec::new();
    for index in 0..32 {
        let service = harness.service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create(TaskPayload::new(format!("task {index}"), "parallel"))
                .await
        }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        let task = handle.await??;
        ids.insert(task.id());
    }

    eyre::ensure!(ids.len() == 32, "identifiers were reused");
    eyre::ensure!(
        harness.service.read_all(None).await?.len() == 32,
        "not every task was stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_resolve_to_one_writer(harness: Harness) -> Result<(), eyre::Report> {
    let created = harness
        .service
        .create(TaskPayload::new("Paint fence", "White"))
        .await?;
    let raw_id = created.id().to_string();

    let mut handles = Vec::new();
    for colour in ["Red", "Green", "Blue", "Yellow"] {
        let service = harness.service.clone();
        let raw_id = raw_id.clone();
        handles.push(tokio::spawn(async move {
            service
                .update(&raw_id, TaskPayload::new("Paint fence", colour))
                .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let stored = harness.service.read_one(&raw_id).await?;
    eyre::ensure!(
        ["Red", "Green", "Blue", "Yellow"].contains(&stored.description()),
        "unexpected description {}",
        stored.description()
    );
    Ok(())
}
