use async_trait::async_trait;
use pullfeed::{DataSource, FeedSettings, FetchError, Item, MockDataSource};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn settings(max_items: usize) -> FeedSettings {
    FeedSettings {
        page_size: 15,
        max_items,
        prefetch_distance: 0,
        fetch_timeout: Duration::from_secs(5),
    }
}

pub fn seed() -> Vec<Item> {
    (1..=15).collect()
}

/// What a scripted fetch does once its queued results run out.
#[derive(Clone, Copy, PartialEq)]
pub enum Fallback {
    /// Answer like the mock source, fresh pages starting at 42
    Answer,
    /// Never resolve
    Hang,
    /// Panic inside the fetch
    Panic,
}

/// Data source with queued results and call counters.
pub struct ScriptedSource {
    next_fallback: Fallback,
    fresh_fallback: Fallback,
    next_results: Mutex<VecDeque<Result<Vec<Item>, FetchError>>>,
    fresh_results: Mutex<VecDeque<Result<Vec<Item>, FetchError>>>,
    next_args: Mutex<Vec<(Option<Item>, usize, usize)>>,
    next_calls: AtomicUsize,
    fresh_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::with_fallbacks(Fallback::Answer, Fallback::Answer)
    }

    pub fn with_fallbacks(next_fallback: Fallback, fresh_fallback: Fallback) -> Self {
        Self {
            next_fallback,
            fresh_fallback,
            next_results: Mutex::new(VecDeque::new()),
            fresh_results: Mutex::new(VecDeque::new()),
            next_args: Mutex::new(Vec::new()),
            next_calls: AtomicUsize::new(0),
            fresh_calls: AtomicUsize::new(0),
        }
    }

    pub fn queue_next(self, result: Result<Vec<Item>, FetchError>) -> Self {
        self.next_results.lock().unwrap().push_back(result);
        self
    }

    pub fn queue_fresh(self, result: Result<Vec<Item>, FetchError>) -> Self {
        self.fresh_results.lock().unwrap().push_back(result);
        self
    }

    pub fn next_calls(&self) -> usize {
        self.next_calls.load(Ordering::SeqCst)
    }

    pub fn fresh_calls(&self) -> usize {
        self.fresh_calls.load(Ordering::SeqCst)
    }

    pub fn next_args(&self) -> Vec<(Option<Item>, usize, usize)> {
        self.next_args.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn next_page(&self, last_item: Option<Item>, page_size: usize, cap: usize) -> Result<Vec<Item>, FetchError> {
        self.next_calls.fetch_add(1, Ordering::SeqCst);
        self.next_args.lock().unwrap().push((last_item, page_size, cap));

        let queued = self.next_results.lock().unwrap().pop_front();
        if let Some(result) = queued {
            return result;
        }
        match self.next_fallback {
            Fallback::Answer => Ok(MockDataSource::page_after(last_item, page_size, cap)),
            Fallback::Hang => std::future::pending::<Result<Vec<Item>, FetchError>>().await,
            Fallback::Panic => panic!("scripted next_page panic"),
        }
    }

    async fn fresh_page(&self, page_size: usize) -> Result<Vec<Item>, FetchError> {
        self.fresh_calls.fetch_add(1, Ordering::SeqCst);

        let queued = self.fresh_results.lock().unwrap().pop_front();
        if let Some(result) = queued {
            return result;
        }
        match self.fresh_fallback {
            Fallback::Answer => Ok(MockDataSource::page_from(42, page_size)),
            Fallback::Hang => std::future::pending::<Result<Vec<Item>, FetchError>>().await,
            Fallback::Panic => panic!("scripted fresh_page panic"),
        }
    }
}
