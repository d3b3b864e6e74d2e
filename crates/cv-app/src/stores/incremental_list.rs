use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cv_core::list::{LoadApplied, LOAD_ERROR_MESSAGE};
use cv_core::{CatalogPort, CategoryFilter, Entry, ListState, ListStatus, PageNumber};
use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};

/// What a call to [`IncrementalListStore::load_next_page`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded {
        page: PageNumber,
        appended: usize,
        duplicates: usize,
    },
    /// Another load was in flight; no fetch was issued.
    AlreadyLoading,
    /// The fetch failed; status is `Error` and the same page will be retried.
    Failed { page: PageNumber },
    /// The store was reset while the fetch was pending; the result was dropped.
    Stale,
}

/// Accumulates paginated catalog results for the list view.
///
/// 列表视图的增量加载 store。
pub struct IncrementalListStore {
    catalog: Arc<dyn CatalogPort>,
    page_size: usize,
    state: Mutex<ListState>,
    changes: watch::Sender<ListStatus>,
}

impl IncrementalListStore {
    pub fn new(catalog: Arc<dyn CatalogPort>, page_size: usize) -> Self {
        let (changes, _) = watch::channel(ListStatus::Idle);
        Self {
            catalog,
            page_size,
            state: Mutex::new(ListState::new()),
            changes,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch the page under the cursor and append it.
    ///
    /// Never returns an error: failures become `status = Error` plus a
    /// user-facing message, leaving items and cursor as they were.
    pub async fn load_next_page(&self) -> LoadOutcome {
        let begun = self.lock().begin_load();
        let request = match begun {
            Some(request) => request,
            None => {
                debug!("Page load already in flight, ignoring request");
                return LoadOutcome::AlreadyLoading;
            }
        };
        self.notify();

        let span = info_span!(
            "list.load_next_page",
            page = %request.page,
            page_size = self.page_size
        );
        let result = self
            .catalog
            .list_page(request.page, self.page_size)
            .instrument(span)
            .await;

        let outcome = {
            let mut state = self.lock();
            match result {
                Ok(entries) => match state.complete_load(request, entries) {
                    LoadApplied::Appended {
                        appended,
                        duplicates,
                    } => {
                        info!(
                            page = %request.page,
                            appended,
                            duplicates,
                            total = state.items().len(),
                            "Catalog page loaded"
                        );
                        LoadOutcome::Loaded {
                            page: request.page,
                            appended,
                            duplicates,
                        }
                    }
                    LoadApplied::Stale => LoadOutcome::Stale,
                },
                Err(err) => {
                    warn!(page = %request.page, error = %err, "Failed to load catalog page");
                    if state.fail_load(request, LOAD_ERROR_MESSAGE) {
                        LoadOutcome::Failed { page: request.page }
                    } else {
                        LoadOutcome::Stale
                    }
                }
            }
        };

        if outcome == LoadOutcome::Stale {
            debug!(page = %request.page, "Dropping result for a reset list");
        } else {
            self.notify();
        }
        outcome
    }

    /// Change the active filter. Never touches the network or the cursor.
    pub fn set_filter(&self, filter: impl Into<CategoryFilter>) {
        let filter = filter.into();
        debug!(filter = %filter, "List filter changed");
        self.lock().set_filter(filter);
        self.notify();
    }

    /// Entries matching the active filter, recomputed on each call.
    pub fn filtered_view(&self) -> Vec<Arc<Entry>> {
        self.lock().filtered_view().into_iter().cloned().collect()
    }

    pub fn snapshot(&self) -> ListState {
        self.lock().clone()
    }

    pub fn status(&self) -> ListStatus {
        self.lock().status()
    }

    pub fn items_len(&self) -> usize {
        self.lock().items().len()
    }

    pub fn next_page(&self) -> PageNumber {
        self.lock().next_page()
    }

    /// Receiver woken on every state change, carrying the latest status.
    pub fn subscribe(&self) -> watch::Receiver<ListStatus> {
        self.changes.subscribe()
    }

    /// Discard all progress (view unmount). Pending fetches become stale.
    pub fn reset(&self) {
        self.lock().reset();
        self.notify();
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        let status = self.lock().status();
        self.changes.send_replace(status);
    }
}
