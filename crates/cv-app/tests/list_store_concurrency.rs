//! Integration tests for store behaviour under overlapping calls
//!
//! Uses a hand-written catalog whose fetches block on a gate, so a second call
//! can be issued while the first one is still pending.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cv_app::{DetailLoader, IncrementalListStore, LoadOutcome};
use cv_core::detail::{DetailError, DetailPhase};
use cv_core::{CatalogError, CatalogPort, Entry, EntryId, ListStatus, PageNumber};
use tokio::sync::Notify;

struct GatedCatalog {
    gate: Notify,
    list_calls: AtomicUsize,
}

impl GatedCatalog {
    fn new() -> Self {
        Self {
            gate: Notify::new(),
            list_calls: AtomicUsize::new(0),
        }
    }
}

fn entry(id: &str) -> Entry {
    Entry {
        identifier: id.into(),
        display_name: format!("entry-{id}"),
        categories: vec!["normal".to_string()],
        abilities: vec![],
        moves: vec![],
        image_ref: None,
    }
}

#[async_trait]
impl CatalogPort for GatedCatalog {
    async fn list_page(
        &self,
        page: PageNumber,
        page_size: usize,
    ) -> Result<Vec<Entry>, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        let start = page.offset(page_size) + 1;
        Ok((start..start + page_size)
            .map(|id| entry(&id.to_string()))
            .collect())
    }

    async fn get_entry(&self, id: &EntryId) -> Result<Entry, CatalogError> {
        if id.as_str() == "slow" {
            self.gate.notified().await;
        }
        Ok(entry(id.as_str()))
    }

    async fn get_ability_description(&self, _ability: &str) -> Result<String, CatalogError> {
        Ok(String::new())
    }
}

#[tokio::test]
async fn second_load_while_pending_issues_no_fetch() {
    let catalog = Arc::new(GatedCatalog::new());
    let store = IncrementalListStore::new(catalog.clone(), 9);

    let (first, second) = tokio::join!(store.load_next_page(), async {
        let outcome = store.load_next_page().await;
        catalog.gate.notify_one();
        outcome
    });

    assert!(matches!(first, LoadOutcome::Loaded { appended: 9, .. }));
    assert_eq!(second, LoadOutcome::AlreadyLoading);
    assert_eq!(catalog.list_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.items_len(), 9);
    assert_eq!(store.next_page().get(), 2);
}

#[tokio::test]
async fn reset_during_fetch_discards_late_page() {
    let catalog = Arc::new(GatedCatalog::new());
    let store = IncrementalListStore::new(catalog.clone(), 9);

    let (outcome, _) = tokio::join!(store.load_next_page(), async {
        tokio::task::yield_now().await;
        store.reset();
        catalog.gate.notify_one();
    });

    assert_eq!(outcome, LoadOutcome::Stale);
    assert_eq!(store.items_len(), 0);
    assert_eq!(store.status(), ListStatus::Idle);
}

#[tokio::test]
async fn newer_detail_load_wins_over_slow_older_one() {
    let catalog = Arc::new(GatedCatalog::new());
    let loader = DetailLoader::new(catalog.clone());

    let (slow, fast) = tokio::join!(loader.load("slow".into()), async {
        tokio::task::yield_now().await;
        let result = loader.load("7".into()).await;
        catalog.gate.notify_one();
        result
    });

    assert!(matches!(slow, Err(DetailError::Superseded)));
    assert_eq!(fast.unwrap().entry().identifier, EntryId::from("7"));
    match loader.phase() {
        DetailPhase::Ready(snapshot) => {
            assert_eq!(snapshot.entry().identifier, EntryId::from("7"))
        }
        other => panic!("expected ready phase, got {other:?}"),
    }
}
