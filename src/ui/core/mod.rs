//! Core UI functionality.
//!
//! - [`actions`] - Action definitions and focus handling
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//!
//! Components turn input into [`Action`]s, the app applies them to the feed
//! controller and the other widgets, and the next frame renders the result.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
