//! Application state: the feed controller plus the widgets around it.

use crate::config::Config;
use crate::feed::{FeedController, FeedSettings, FeedSnapshot, FeedUpdate};
use crate::logger::LogBuffer;
use crate::source::DataSource;
use crate::tabs::TabBar;
use crate::text_field::{FieldVariant, TextField, DEFAULT_TEXT};
use crate::ui::components::{DebugPanel, FeedListComponent, StatusBar, TabBarComponent, TextFieldComponent};
use crate::ui::core::{Action, Component, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{info, warn};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::watch;

pub struct App {
    feed: FeedController,
    feed_updates: watch::Receiver<FeedSnapshot>,
    pub feed_list: FeedListComponent,
    pub tab_bar: TabBarComponent,
    pub basic_field: TextFieldComponent,
    pub outlined_field: TextFieldComponent,
    pub focus: Focus,
    pub show_debug: bool,
    logs: LogBuffer,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, source: Arc<dyn DataSource>, logs: LogBuffer) -> Self {
        let feed = FeedController::new(source, FeedSettings::from_config(config), config.initial_items());
        let mut feed_updates = feed.subscribe();

        let mut feed_list =
            FeedListComponent::new(config.refresh.threshold, config.refresh.pull_step, config.feed.max_items);
        feed_list.set_snapshot(feed_updates.borrow_and_update().clone());

        Self {
            feed,
            feed_updates,
            feed_list,
            tab_bar: TabBarComponent::new(TabBar::from_config(&config.tabs, 0)),
            basic_field: TextFieldComponent::new(TextField::new(DEFAULT_TEXT, FieldVariant::Basic), "Basic"),
            outlined_field: TextFieldComponent::new(TextField::new(DEFAULT_TEXT, FieldVariant::Outlined), "Outlined"),
            focus: Focus::default(),
            show_debug: false,
            logs,
            should_quit: false,
        }
    }

    pub fn feed(&self) -> &FeedController {
        &self.feed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route a key press. Global keys win unless a text field is focused.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.dispatch(Action::Quit);
            return;
        }

        if self.show_debug {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('q')) {
                self.dispatch(Action::ToggleDebugLogs);
            }
            return;
        }

        let global = match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Esc if self.feed_list.pull.is_active() => Some(Action::CancelPull),
            KeyCode::Esc if self.focus.is_text_field() => Some(Action::Focus(Focus::Feed)),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::F(5) => Some(Action::Refresh),
            KeyCode::Char('q') if !self.focus.is_text_field() => Some(Action::Quit),
            KeyCode::Char('g') if !self.focus.is_text_field() => Some(Action::ToggleDebugLogs),
            _ => None,
        };

        let action = match global {
            Some(action) => action,
            None => self.focused_component().handle_events(Some(Event::Key(key))),
        };
        self.dispatch(action);
    }

    /// Route a mouse event to every pane; the first that claims it wins.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_debug {
            return;
        }
        let event = Some(Event::Mouse(mouse));
        let mut action = self.feed_list.handle_events(event.clone());
        if action == Action::None {
            action = self.tab_bar.handle_events(event);
        }
        self.dispatch(action);
    }

    /// Apply finished fetches and check whether the feed needs more items.
    pub fn on_tick(&mut self) {
        for update in self.feed.process_events() {
            self.on_feed_update(update);
        }
        self.sync_snapshot();

        if self.feed.maybe_load_more(self.feed_list.last_visible_index()) {
            self.sync_snapshot();
        }
    }

    /// Pass an action through the panes, then handle what is left at app level.
    pub fn dispatch(&mut self, action: Action) {
        let action = self.feed_list.update(action);
        let action = self.tab_bar.update(action);

        match action {
            Action::Quit => {
                info!("Quit requested");
                self.feed.shutdown();
                self.should_quit = true;
            }
            Action::FocusNext => self.focus = self.focus.next(),
            Action::Focus(focus) => self.focus = focus,
            Action::ToggleDebugLogs => self.show_debug = !self.show_debug,
            Action::Refresh => {
                if self.feed.refresh() {
                    self.feed_list.viewport.scroll_to_top();
                    self.sync_snapshot();
                }
            }
            Action::Handled | Action::None => {}
            other => warn!("Unhandled action: {:?}", other),
        }
    }

    fn on_feed_update(&mut self, update: FeedUpdate) {
        match update {
            FeedUpdate::Refreshed(_) => self.feed_list.viewport.scroll_to_top(),
            FeedUpdate::LoadMoreFailed(e) | FeedUpdate::RefreshFailed(e) => {
                warn!("Feed fetch failed: {}", e);
            }
            FeedUpdate::Appended(_) | FeedUpdate::Stale => {}
        }
    }

    fn sync_snapshot(&mut self) {
        if self.feed_updates.has_changed().unwrap_or(false) {
            let snapshot = self.feed_updates.borrow_and_update().clone();
            self.feed_list.set_snapshot(snapshot);
        }
    }

    fn focused_component(&mut self) -> &mut dyn Component {
        match self.focus {
            Focus::Feed => &mut self.feed_list,
            Focus::Tabs => &mut self.tab_bar,
            Focus::BasicField => &mut self.basic_field,
            Focus::OutlinedField => &mut self.outlined_field,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let layout = LayoutManager::main_layout(area);

        self.tab_bar.render(f, layout.tabs, self.focus == Focus::Tabs);
        self.feed_list.render(f, layout.feed, self.focus == Focus::Feed);
        self.basic_field.render(f, layout.basic_field, self.focus == Focus::BasicField);
        self.outlined_field
            .render(f, layout.outlined_field, self.focus == Focus::OutlinedField);
        StatusBar::render(f, layout.status, self.feed_list.snapshot());

        if self.show_debug {
            DebugPanel::render(f, area, &self.logs);
        }
    }
}
