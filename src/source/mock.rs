//! Mock data source with simulated latency.

use super::{DataSource, FetchError, Item};
use crate::config::SourceConfig;
use async_trait::async_trait;
use log::debug;
use rand::Rng;
use std::time::Duration;

/// Generates consecutive integers after an artificial delay.
///
/// `next_page` continues from the last item and stops at `cap`; `fresh_page`
/// starts from a random origin below `fresh_start_max`.
#[derive(Debug, Clone)]
pub struct MockDataSource {
    load_more_delay: Duration,
    refresh_delay: Duration,
    fresh_start_max: Item,
}

impl MockDataSource {
    pub fn new(load_more_delay: Duration, refresh_delay: Duration, fresh_start_max: Item) -> Self {
        Self {
            load_more_delay,
            refresh_delay,
            fresh_start_max: fresh_start_max.max(1),
        }
    }

    /// Build a mock source from the `[source]` config section.
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(
            Duration::from_millis(config.load_more_delay_ms),
            Duration::from_millis(config.refresh_delay_ms),
            config.fresh_start_max,
        )
    }

    /// A source that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, 100)
    }

    /// Items following `last_item`, clamped so no item exceeds `cap`.
    ///
    /// The cap applies to item values, not to the feed length. After a
    /// refresh starting above 1 the feed reaches `cap` with fewer than `cap`
    /// items, and the next empty page marks it exhausted.
    pub fn page_after(last_item: Option<Item>, page_size: usize, cap: usize) -> Vec<Item> {
        let first = last_item.map_or(1, |last| last + 1);
        let last = (first + page_size as Item - 1).min(cap as Item);
        (first..=last).collect()
    }

    /// `page_size` consecutive items starting at `start`.
    pub fn page_from(start: Item, page_size: usize) -> Vec<Item> {
        (start..start + page_size as Item).collect()
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn next_page(&self, last_item: Option<Item>, page_size: usize, cap: usize) -> Result<Vec<Item>, FetchError> {
        tokio::time::sleep(self.load_more_delay).await;
        let page = Self::page_after(last_item, page_size, cap);
        debug!("Mock source produced {} items after {:?}", page.len(), last_item);
        Ok(page)
    }

    async fn fresh_page(&self, page_size: usize) -> Result<Vec<Item>, FetchError> {
        tokio::time::sleep(self.refresh_delay).await;
        let start = rand::rng().random_range(0..self.fresh_start_max);
        debug!("Mock source produced fresh page starting at {}", start);
        Ok(Self::page_from(start, page_size))
    }
}
