//! Data source abstraction for the feed.
//!
//! This module defines the interface the feed controller uses to fetch pages,
//! along with the error type fetches can fail with.

use async_trait::async_trait;
use std::time::Duration;

pub mod mock;

pub use mock::MockDataSource;

/// A single feed element. Only its position and identity matter to the feed.
pub type Item = i64;

/// Errors a page fetch can end with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Fetch failed: {0}")]
    Failed(String),

    #[error("Fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("Fetch task ended without a result")]
    Aborted,
}

/// Source of feed pages.
///
/// Implementations may take as long as they like; the controller bounds every
/// call with its configured timeout and runs it off the control loop.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns up to `page_size` items following `last_item`, never past `cap`.
    ///
    /// `last_item` is `None` when the feed is empty.
    async fn next_page(&self, last_item: Option<Item>, page_size: usize, cap: usize) -> Result<Vec<Item>, FetchError>;

    /// Returns a fresh first page of `page_size` items.
    async fn fresh_page(&self, page_size: usize) -> Result<Vec<Item>, FetchError>;
}
