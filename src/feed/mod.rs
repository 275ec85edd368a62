//! Infinite-scroll feed with pull-to-refresh.
//!
//! - [`state`] - the loaded sequence and its fetch flags
//! - [`controller`] - background fetching and change notification
//! - [`viewport`] - visible window and end-of-list detection
//! - [`pull`] - pull gesture distance tracking

pub mod controller;
pub mod pull;
pub mod state;
pub mod viewport;

pub use controller::{FeedController, FeedEvent, FeedSettings, FeedSnapshot, FeedUpdate};
pub use pull::PullGesture;
pub use state::{Completion, ListState, LoadMoreRequest, RefreshRequest};
pub use viewport::{is_near_end, Viewport};
