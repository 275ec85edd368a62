/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Feed,
    Tabs,
    BasicField,
    OutlinedField,
}

impl Focus {
    /// Next pane in Tab order
    pub fn next(self) -> Self {
        match self {
            Focus::Feed => Focus::Tabs,
            Focus::Tabs => Focus::BasicField,
            Focus::BasicField => Focus::OutlinedField,
            Focus::OutlinedField => Focus::Feed,
        }
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::BasicField | Focus::OutlinedField)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Application
    Quit,
    FocusNext,
    Focus(Focus),
    ToggleDebugLogs,

    // Feed
    ScrollFeed(isize),
    ScrollFeedToTop,
    Refresh,
    PullBy(f32),
    ReleasePull,
    CancelPull,

    // Tabs
    SelectTab(usize),
    NextTab,
    PreviousTab,
    PageTabsBackward,
    PageTabsForward,

    // Handled inside the component that produced it
    Handled,
    None,
}
