//! Feed controller: owns the list state and runs fetches in the background.
//!
//! The controller is driven from a single control loop. Fetches run in
//! spawned tasks which only report back through a channel; every state
//! mutation happens when the loop calls [`FeedController::process_events`] or
//! [`FeedController::wait_for_updates`]. Subscribers get a fresh
//! [`FeedSnapshot`] after each mutation.

use super::state::{Completion, ListState, LoadMoreRequest, RefreshRequest};
use crate::config::Config;
use crate::source::{DataSource, FetchError, Item};
use log::{debug, info, warn};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// How long [`FeedController::wait_for_updates`] waits before checking for
/// fetch tasks that ended without reporting.
const REAP_INTERVAL: Duration = Duration::from_millis(50);

/// Tunables for a [`FeedController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    pub page_size: usize,
    pub max_items: usize,
    pub prefetch_distance: usize,
    pub fetch_timeout: Duration,
}

impl FeedSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.feed.page_size,
            max_items: config.feed.max_items,
            prefetch_distance: config.feed.prefetch_distance,
            fetch_timeout: Duration::from_millis(config.source.fetch_timeout_ms),
        }
    }
}

/// What the view layer needs to draw the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub items: Vec<Item>,
    pub loading_more: bool,
    pub refreshing: bool,
    pub exhausted: bool,
    pub last_error: Option<String>,
}

/// Report sent by a fetch task when it finishes.
#[derive(Debug)]
pub enum FeedEvent {
    LoadMoreFinished {
        generation: u64,
        result: Result<Vec<Item>, FetchError>,
    },
    RefreshFinished {
        generation: u64,
        result: Result<Vec<Item>, FetchError>,
    },
}

/// Outcome of applying one fetch completion, for the UI to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedUpdate {
    Appended(usize),
    Refreshed(usize),
    LoadMoreFailed(FetchError),
    RefreshFailed(FetchError),
    Stale,
}

impl FeedUpdate {
    pub fn is_failure(&self) -> bool {
        matches!(self, FeedUpdate::LoadMoreFailed(_) | FeedUpdate::RefreshFailed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    LoadMore,
    Refresh,
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchKind::LoadMore => write!(f, "Load more"),
            FetchKind::Refresh => write!(f, "Refresh"),
        }
    }
}

pub struct FeedController {
    state: ListState,
    settings: FeedSettings,
    source: Arc<dyn DataSource>,
    event_sender: mpsc::UnboundedSender<FeedEvent>,
    event_receiver: mpsc::UnboundedReceiver<FeedEvent>,
    snapshot_sender: watch::Sender<FeedSnapshot>,
    load_task: Option<JoinHandle<()>>,
    refresh_task: Option<JoinHandle<()>>,
    last_error: Option<FetchError>,
    closed: bool,
}

impl FeedController {
    /// Create a controller seeded with `initial` items.
    pub fn new(source: Arc<dyn DataSource>, settings: FeedSettings, initial: Vec<Item>) -> Self {
        let state = ListState::new(initial, settings.page_size, settings.max_items);
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let (snapshot_sender, _) = watch::channel(FeedSnapshot::default());

        let controller = Self {
            state,
            settings,
            source,
            event_sender,
            event_receiver,
            snapshot_sender,
            load_task: None,
            refresh_task: None,
            last_error: None,
            closed: false,
        };
        controller.publish();
        controller
    }

    /// Subscribe to snapshots published after every change.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshot_sender.subscribe()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            items: self.state.items().to_vec(),
            loading_more: self.state.is_loading_more(),
            refreshing: self.state.is_refreshing(),
            exhausted: self.state.is_exhausted(),
            last_error: self.last_error.as_ref().map(|e| e.to_string()),
        }
    }

    pub fn items(&self) -> &[Item] {
        self.state.items()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    pub fn is_loading_more(&self) -> bool {
        self.state.is_loading_more()
    }

    pub fn is_refreshing(&self) -> bool {
        self.state.is_refreshing()
    }

    pub fn has_fetch_in_flight(&self) -> bool {
        self.state.is_loading_more() || self.state.is_refreshing()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Start a load-more if the viewport shows the end of the feed.
    ///
    /// `last_visible_index` is the index of the last row currently on screen.
    /// Returns true if a fetch was started. Does nothing while a load-more or
    /// refresh is in flight, or once the feed is full.
    pub fn maybe_load_more(&mut self, last_visible_index: Option<usize>) -> bool {
        if self.closed {
            return false;
        }
        if !super::is_near_end(last_visible_index, self.state.len(), self.settings.prefetch_distance) {
            return false;
        }

        let Some(request) = self.state.begin_load_more() else {
            return false;
        };

        info!(
            "Loading more after {:?} ({}/{} items)",
            request.last_item,
            self.state.len(),
            self.state.max_items()
        );
        self.spawn_load_more(request);
        self.publish();
        true
    }

    /// Start a refresh unless one is already running.
    ///
    /// A load-more in flight is aborted; the refreshed page replaces whatever
    /// it would have appended. Returns true if a fetch was started.
    pub fn refresh(&mut self) -> bool {
        if self.closed {
            return false;
        }

        let Some(request) = self.state.begin_refresh() else {
            return false;
        };

        if let Some(task) = self.load_task.take() {
            debug!("Aborting load-more superseded by refresh");
            task.abort();
        }

        info!("Refreshing feed ({} items discarded on success)", self.state.len());
        self.spawn_refresh(request);
        self.publish();
        true
    }

    /// Apply every completion reported so far without waiting.
    pub fn process_events(&mut self) -> Vec<FeedUpdate> {
        // Sample task liveness before draining: a task that had finished by now
        // has already queued its report, so anything left in flight after the
        // drain belongs to a task that died without reporting.
        let load_finished = self.load_task.as_ref().is_some_and(|task| task.is_finished());
        let refresh_finished = self.refresh_task.as_ref().is_some_and(|task| task.is_finished());

        let mut updates = Vec::new();
        while let Ok(event) = self.event_receiver.try_recv() {
            updates.push(self.apply_event(event));
        }

        if load_finished {
            self.load_task = None;
            if let Some(generation) = self.state.loading_generation() {
                updates.push(self.apply_event(FeedEvent::LoadMoreFinished {
                    generation,
                    result: Err(FetchError::Aborted),
                }));
            }
        }
        if refresh_finished {
            self.refresh_task = None;
            if let Some(generation) = self.state.refreshing_generation() {
                updates.push(self.apply_event(FeedEvent::RefreshFinished {
                    generation,
                    result: Err(FetchError::Aborted),
                }));
            }
        }

        updates
    }

    /// Wait until at least one fetch completes, then apply everything pending.
    ///
    /// Returns immediately with an empty list when nothing is in flight.
    pub async fn wait_for_updates(&mut self) -> Vec<FeedUpdate> {
        loop {
            let updates = self.process_events();
            if !updates.is_empty() || self.closed || !self.has_fetch_in_flight() {
                return updates;
            }

            if let Ok(Some(event)) = tokio::time::timeout(REAP_INTERVAL, self.event_receiver.recv()).await {
                let mut updates = vec![self.apply_event(event)];
                updates.extend(self.process_events());
                return updates;
            }
        }
    }

    /// Abort in-flight fetches and stop accepting triggers.
    ///
    /// Both flags are cleared and late reports are ignored.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        for task in [self.load_task.take(), self.refresh_task.take()].into_iter().flatten() {
            task.abort();
        }
        self.state.cancel_load_more();
        self.state.cancel_refresh();
        while self.event_receiver.try_recv().is_ok() {}

        info!("Feed controller shut down");
        self.publish();
    }

    fn spawn_load_more(&mut self, request: LoadMoreRequest) {
        let source = Arc::clone(&self.source);
        let sender = self.event_sender.clone();
        let timeout = self.settings.fetch_timeout;

        let handle = tokio::spawn(async move {
            let result = bounded(
                timeout,
                source.next_page(request.last_item, request.page_size, request.cap),
            )
            .await;
            let _ = sender.send(FeedEvent::LoadMoreFinished {
                generation: request.generation,
                result,
            });
        });

        self.load_task = Some(handle);
    }

    fn spawn_refresh(&mut self, request: RefreshRequest) {
        let source = Arc::clone(&self.source);
        let sender = self.event_sender.clone();
        let timeout = self.settings.fetch_timeout;

        let handle = tokio::spawn(async move {
            let result = bounded(timeout, source.fresh_page(request.page_size)).await;
            let _ = sender.send(FeedEvent::RefreshFinished {
                generation: request.generation,
                result,
            });
        });

        self.refresh_task = Some(handle);
    }

    fn apply_event(&mut self, event: FeedEvent) -> FeedUpdate {
        if self.closed {
            return FeedUpdate::Stale;
        }

        let (kind, completion) = match event {
            FeedEvent::LoadMoreFinished { generation, result } => {
                (FetchKind::LoadMore, self.state.complete_load_more(generation, result))
            }
            FeedEvent::RefreshFinished { generation, result } => {
                (FetchKind::Refresh, self.state.complete_refresh(generation, result))
            }
        };

        let update = match completion {
            Completion::Appended(count) => {
                info!("Appended {} items ({}/{})", count, self.state.len(), self.state.max_items());
                self.last_error = None;
                FeedUpdate::Appended(count)
            }
            Completion::Replaced(count) => {
                info!("Feed refreshed with {} items", count);
                self.last_error = None;
                FeedUpdate::Refreshed(count)
            }
            Completion::Failed(e) => {
                warn!("{} failed: {}", kind, e);
                self.last_error = Some(e.clone());
                match kind {
                    FetchKind::LoadMore => FeedUpdate::LoadMoreFailed(e),
                    FetchKind::Refresh => FeedUpdate::RefreshFailed(e),
                }
            }
            Completion::Stale => {
                debug!("Discarded stale {} result", kind);
                return FeedUpdate::Stale;
            }
        };

        self.publish();
        update
    }

    fn publish(&self) {
        self.snapshot_sender.send_replace(self.snapshot());
    }
}

impl Drop for FeedController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run a fetch with an upper bound on how long it may take.
async fn bounded<F>(timeout: Duration, fetch: F) -> Result<Vec<Item>, FetchError>
where
    F: Future<Output = Result<Vec<Item>, FetchError>>,
{
    tokio::time::timeout(timeout, fetch)
        .await
        .unwrap_or(Err(FetchError::Timeout(timeout)))
}
