use std::collections::HashSet;
use std::sync::Arc;

use super::PageNumber;
use crate::catalog::{CategoryFilter, Entry};
use crate::ids::EntryId;

/// User-facing message shown when a page fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Error while loading data. Try again later.";

/// Fetch status of the list.
///
/// 列表加载状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Ticket handed out by [`ListState::begin_load`].
///
/// Carries the cursor to fetch and the generation it was issued for, so a
/// result arriving after [`ListState::reset`] can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: PageNumber,
    pub generation: u64,
}

/// Result of applying a finished fetch to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadApplied {
    Appended { appended: usize, duplicates: usize },
    /// The request belongs to an older generation; nothing changed.
    Stale,
}

/// Accumulated pagination progress.
///
/// Invariants:
/// - `items` only grows within a generation, insertion order is kept;
/// - an identifier appears at most once in `items`;
/// - `next_page` advances only on a successful load.
///
/// 累积的分页进度。`items` 只增不减。
#[derive(Debug, Clone, Default)]
pub struct ListState {
    items: Vec<Arc<Entry>>,
    seen: HashSet<EntryId>,
    next_page: PageNumber,
    status: ListStatus,
    error_message: Option<String>,
    active_filter: CategoryFilter,
    generation: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Arc<Entry>] {
        &self.items
    }

    pub fn next_page(&self) -> PageNumber {
        self.next_page
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.active_filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// Enter `Loading` and hand out the cursor to fetch.
    ///
    /// Returns `None` while a load is already in flight; this is the only
    /// re-entrancy guard for page fetches.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.is_loading() {
            return None;
        }
        self.status = ListStatus::Loading;
        Some(PageRequest {
            page: self.next_page,
            generation: self.generation,
        })
    }

    /// Append a fetched page and advance the cursor.
    ///
    /// Entries whose identifier is already loaded are skipped; the first
    /// occurrence keeps its position.
    pub fn complete_load(&mut self, request: PageRequest, entries: Vec<Entry>) -> LoadApplied {
        if !self.is_current(request) {
            return LoadApplied::Stale;
        }

        let mut appended = 0;
        let mut duplicates = 0;
        for entry in entries {
            if self.seen.insert(entry.identifier.clone()) {
                self.items.push(Arc::new(entry));
                appended += 1;
            } else {
                duplicates += 1;
            }
        }

        self.next_page = request.page.next();
        self.status = ListStatus::Ready;
        self.error_message = None;
        LoadApplied::Appended {
            appended,
            duplicates,
        }
    }

    /// Record a failed fetch. Items and cursor stay untouched so the same
    /// page is retried next time. Returns `false` for stale requests.
    pub fn fail_load(&mut self, request: PageRequest, message: impl Into<String>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.status = ListStatus::Error;
        self.error_message = Some(message.into());
        true
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.active_filter = filter;
    }

    /// Entries matching the active filter, recomputed on every call.
    pub fn filtered_view(&self) -> Vec<&Arc<Entry>> {
        self.active_filter.apply(&self.items)
    }

    /// Drop all progress and invalidate any in-flight request.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    fn is_current(&self, request: PageRequest) -> bool {
        request.generation == self.generation && self.is_loading()
    }
}
