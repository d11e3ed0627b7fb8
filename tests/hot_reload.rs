//! Config file changes reaching a running runner.

use std::fs;
use std::time::Duration;
use trending_client::config::watcher::{apply_reloads, ConfigWatcher};
use trending_client::lifecycle::startup::Overrides;
use trending_client::{MemoryPage, StaticForm};
use uuid::Uuid;

mod common;

#[tokio::test]
async fn test_rewritten_file_switches_endpoint() {
    let (first, first_seen) = common::start_analyze_backend(Duration::ZERO).await;
    let (second, second_seen) = common::start_analyze_backend(Duration::ZERO).await;

    let path = std::env::temp_dir().join(format!("trending-client-{}.toml", Uuid::new_v4()));
    fs::write(&path, format!("[endpoint]\nbase_url = \"http://{}\"\n", first)).unwrap();

    let memory = MemoryPage::new();
    let runner = common::runner_for(first, 5_000, &memory);
    let (_watcher, updates) = ConfigWatcher::new(&path, Overrides::default())
        .settle_for(Duration::from_millis(50))
        .spawn()
        .unwrap();
    apply_reloads(runner.clone(), updates);

    assert!(runner.run(&StaticForm::new("before", "Day")).await.is_success());

    tokio::time::sleep(Duration::from_millis(100)).await;
    fs::write(&path, format!("[endpoint]\nbase_url = \"http://{}\"\n", second)).unwrap();

    let mut switched = false;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(runner.run(&StaticForm::new("after", "Day")).await.is_success());
        if !second_seen.lock().unwrap().is_empty() {
            switched = true;
            break;
        }
    }
    assert!(switched, "runner never picked up the rewritten config");
    assert_eq!(first_seen.lock().unwrap()[0].body["keyword"], "before");
    assert_eq!(second_seen.lock().unwrap()[0].body["keyword"], "after");

    fs::remove_file(&path).unwrap_or_default();
}
