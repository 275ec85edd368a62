//! UI components.
//!
//! Panes implement [`Component`](crate::ui::core::Component); the status bar
//! and debug panel are stateless renderers.

pub mod debug_panel;
pub mod feed_list;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod tab_bar;
pub mod text_field;

pub use debug_panel::DebugPanel;
pub use feed_list::FeedListComponent;
pub use scrollbar_helper::ScrollbarHelper;
pub use status_bar::StatusBar;
pub use tab_bar::TabBarComponent;
pub use text_field::TextFieldComponent;
