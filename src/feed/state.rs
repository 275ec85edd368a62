//! Loaded sequence and the loading/refreshing state machine.
//!
//! [`ListState`] never performs I/O. Starting a fetch hands out a request
//! stamped with a generation number; the matching completion is applied later
//! by whoever owns the state. Completions whose generation no longer matches
//! the request in flight are discarded.

use crate::source::{FetchError, Item};

/// Arguments for a load-more fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreRequest {
    pub generation: u64,
    pub last_item: Option<Item>,
    pub page_size: usize,
    pub cap: usize,
}

/// Arguments for a refresh fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshRequest {
    pub generation: u64,
    pub page_size: usize,
}

/// Result of applying a fetch completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Load-more appended this many items.
    Appended(usize),
    /// Refresh replaced the sequence with this many items.
    Replaced(usize),
    /// The fetch failed; the sequence is unchanged.
    Failed(FetchError),
    /// The completion belonged to a superseded or cancelled request.
    Stale,
}

/// Ordered sequence of loaded items plus the two fetch flags.
#[derive(Debug, Clone)]
pub struct ListState {
    items: Vec<Item>,
    page_size: usize,
    max_items: usize,
    loading_more: Option<u64>,
    refreshing: Option<u64>,
    exhausted: bool,
    next_generation: u64,
}

impl ListState {
    /// Create a state seeded with `items`, truncated to `max_items`.
    pub fn new(mut items: Vec<Item>, page_size: usize, max_items: usize) -> Self {
        items.truncate(max_items);
        Self {
            items,
            page_size,
            max_items,
            loading_more: None,
            refreshing: None,
            exhausted: false,
            next_generation: 1,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more.is_some()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing.is_some()
    }

    /// Generation of the load-more in flight, if any.
    pub fn loading_generation(&self) -> Option<u64> {
        self.loading_more
    }

    /// Generation of the refresh in flight, if any.
    pub fn refreshing_generation(&self) -> Option<u64> {
        self.refreshing
    }

    /// True once the sequence is full or the source returned an empty page.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted || self.items.len() >= self.max_items
    }

    /// Whether a load-more would start right now.
    pub fn can_load_more(&self) -> bool {
        self.loading_more.is_none() && self.refreshing.is_none() && !self.is_exhausted()
    }

    /// Mark a load-more as started and return its arguments.
    ///
    /// Returns `None` while a load-more or refresh is in flight, or when the
    /// sequence cannot grow any further.
    pub fn begin_load_more(&mut self) -> Option<LoadMoreRequest> {
        if !self.can_load_more() {
            return None;
        }

        let generation = self.bump_generation();
        self.loading_more = Some(generation);

        Some(LoadMoreRequest {
            generation,
            last_item: self.items.last().copied(),
            page_size: self.page_size,
            cap: self.max_items,
        })
    }

    /// Apply the outcome of a load-more fetch.
    pub fn complete_load_more(&mut self, generation: u64, result: Result<Vec<Item>, FetchError>) -> Completion {
        if self.loading_more != Some(generation) {
            return Completion::Stale;
        }
        self.loading_more = None;

        match result {
            Ok(mut page) => {
                let room = self.max_items.saturating_sub(self.items.len());
                page.truncate(room);
                if page.is_empty() {
                    self.exhausted = true;
                }
                let appended = page.len();
                self.items.extend(page);
                Completion::Appended(appended)
            }
            Err(e) => Completion::Failed(e),
        }
    }

    /// Drop the load-more in flight without applying anything.
    ///
    /// Returns the generation that was cancelled.
    pub fn cancel_load_more(&mut self) -> Option<u64> {
        self.loading_more.take()
    }

    /// Mark a refresh as started and return its arguments.
    ///
    /// A refresh supersedes any load-more in flight: that request is cancelled
    /// and its completion will be reported as stale.
    pub fn begin_refresh(&mut self) -> Option<RefreshRequest> {
        if self.refreshing.is_some() {
            return None;
        }

        self.loading_more = None;
        let generation = self.bump_generation();
        self.refreshing = Some(generation);

        Some(RefreshRequest {
            generation,
            page_size: self.page_size,
        })
    }

    /// Apply the outcome of a refresh fetch.
    pub fn complete_refresh(&mut self, generation: u64, result: Result<Vec<Item>, FetchError>) -> Completion {
        if self.refreshing != Some(generation) {
            return Completion::Stale;
        }
        self.refreshing = None;

        match result {
            Ok(mut page) => {
                page.truncate(self.max_items);
                self.items = page;
                self.exhausted = false;
                Completion::Replaced(self.items.len())
            }
            Err(e) => Completion::Failed(e),
        }
    }

    /// Drop the refresh in flight without applying anything.
    pub fn cancel_refresh(&mut self) -> Option<u64> {
        self.refreshing.take()
    }

    fn bump_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }
}
