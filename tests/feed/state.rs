use pullfeed::feed::{Completion, ListState};
use pullfeed::{FetchError, MockDataSource};

fn seeded(max_items: usize) -> ListState {
    ListState::new((1..=15).collect(), 15, max_items)
}

#[test]
fn test_flags_start_clear() {
    let state = seeded(50);
    assert!(!state.is_loading_more());
    assert!(!state.is_refreshing());
}

#[test]
fn test_load_more_appends_next_page() {
    let mut state = seeded(50);
    let request = state.begin_load_more().unwrap();
    assert_eq!(request.last_item, Some(15));
    assert_eq!(request.page_size, 15);
    assert_eq!(request.cap, 50);
    assert!(state.is_loading_more());

    let page = MockDataSource::page_after(request.last_item, request.page_size, request.cap);
    assert_eq!(state.complete_load_more(request.generation, Ok(page)), Completion::Appended(15));
    assert_eq!(state.items(), (1..=30).collect::<Vec<_>>().as_slice());
    assert!(!state.is_loading_more());
}

#[test]
fn test_load_more_is_a_noop_while_loading() {
    let mut state = seeded(50);
    assert!(state.begin_load_more().is_some());
    assert!(state.begin_load_more().is_none());
    assert_eq!(state.len(), 15);
}

#[test]
fn test_load_more_clamped_by_source_stops_at_max() {
    let mut state = seeded(20);
    let request = state.begin_load_more().unwrap();
    let page = MockDataSource::page_after(request.last_item, request.page_size, request.cap);
    assert_eq!(page.len(), 5);

    state.complete_load_more(request.generation, Ok(page));
    assert_eq!(state.items(), (1..=20).collect::<Vec<_>>().as_slice());
    assert!(state.is_exhausted());
    assert!(state.begin_load_more().is_none());
}

#[test]
fn test_overlong_page_is_truncated_to_max() {
    let mut state = seeded(20);
    let request = state.begin_load_more().unwrap();

    // Source ignored the cap
    let completion = state.complete_load_more(request.generation, Ok((16..=40).collect()));
    assert_eq!(completion, Completion::Appended(5));
    assert_eq!(state.len(), 20);
}

#[test]
fn test_length_never_exceeds_max() {
    for max_items in [1, 7, 15, 16, 20, 44, 50] {
        let mut state = ListState::new(Vec::new(), 15, max_items);
        while let Some(request) = state.begin_load_more() {
            let page = (1..=request.page_size as i64).collect();
            state.complete_load_more(request.generation, Ok(page));
            assert!(state.len() <= max_items);
        }
        assert_eq!(state.len(), max_items);
    }
}

#[test]
fn test_failed_load_more_clears_flag_and_keeps_items() {
    let mut state = seeded(50);
    let request = state.begin_load_more().unwrap();

    let completion = state.complete_load_more(request.generation, Err(FetchError::Failed("offline".to_string())));
    assert_eq!(completion, Completion::Failed(FetchError::Failed("offline".to_string())));
    assert!(!state.is_loading_more());
    assert_eq!(state.len(), 15);

    // Retrying is just triggering again
    assert!(state.begin_load_more().is_some());
}

#[test]
fn test_empty_page_marks_feed_exhausted_until_refresh() {
    let mut state = ListState::new(vec![48, 49, 50], 15, 50);
    let request = state.begin_load_more().unwrap();
    assert_eq!(state.complete_load_more(request.generation, Ok(Vec::new())), Completion::Appended(0));
    assert!(state.is_exhausted());
    assert!(state.begin_load_more().is_none());

    let refresh = state.begin_refresh().unwrap();
    state.complete_refresh(refresh.generation, Ok(vec![1, 2, 3]));
    assert!(!state.is_exhausted());
    assert!(state.begin_load_more().is_some());
}

#[test]
fn test_refresh_replaces_everything() {
    let mut state = ListState::new((1..=45).collect(), 15, 50);
    let request = state.begin_refresh().unwrap();
    assert!(state.is_refreshing());

    let page = MockDataSource::page_from(42, request.page_size);
    assert_eq!(state.complete_refresh(request.generation, Ok(page)), Completion::Replaced(15));
    assert_eq!(state.items(), (42..=56).collect::<Vec<_>>().as_slice());
    assert!(!state.is_refreshing());
}

#[test]
fn test_refresh_is_a_noop_while_refreshing() {
    let mut state = seeded(50);
    assert!(state.begin_refresh().is_some());
    assert!(state.begin_refresh().is_none());
}

#[test]
fn test_failed_refresh_keeps_items() {
    let mut state = seeded(50);
    let request = state.begin_refresh().unwrap();
    let completion = state.complete_refresh(request.generation, Err(FetchError::Timeout(std::time::Duration::from_secs(1))));
    assert!(matches!(completion, Completion::Failed(FetchError::Timeout(_))));
    assert!(!state.is_refreshing());
    assert_eq!(state.len(), 15);
}

#[test]
fn test_refresh_supersedes_load_more() {
    let mut state = seeded(50);
    let load = state.begin_load_more().unwrap();
    let refresh = state.begin_refresh().unwrap();
    assert!(!state.is_loading_more());

    // Load-more can't start while refreshing
    assert!(state.begin_load_more().is_none());

    // The superseded page arrives late and is dropped
    assert_eq!(state.complete_load_more(load.generation, Ok((16..=30).collect())), Completion::Stale);
    assert_eq!(state.len(), 15);

    state.complete_refresh(refresh.generation, Ok((42..=56).collect()));
    assert_eq!(state.items().first(), Some(&42));
}

#[test]
fn test_completion_for_unknown_generation_is_stale() {
    let mut state = seeded(50);
    let request = state.begin_load_more().unwrap();
    assert_eq!(state.complete_load_more(request.generation + 100, Ok(vec![99])), Completion::Stale);
    assert!(state.is_loading_more());
}

#[test]
fn test_cancel_clears_flags() {
    let mut state = seeded(50);
    let load = state.begin_load_more().unwrap();
    assert_eq!(state.cancel_load_more(), Some(load.generation));
    let refresh = state.begin_refresh().unwrap();
    assert_eq!(state.cancel_refresh(), Some(refresh.generation));
    assert!(!state.is_loading_more());
    assert!(!state.is_refreshing());
}
