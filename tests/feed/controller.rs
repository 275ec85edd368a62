use super::support::{seed, settings, Fallback, ScriptedSource};
use pullfeed::{FeedController, FeedUpdate, FetchError, MockDataSource};
use std::sync::Arc;
use std::time::Duration;

fn controller(source: &Arc<ScriptedSource>, max_items: usize) -> FeedController {
    FeedController::new(source.clone(), settings(max_items), seed())
}

#[tokio::test]
async fn test_load_more_at_end_appends_next_page() {
    let source = Arc::new(ScriptedSource::new());
    let mut feed = controller(&source, 50);
    assert!(!feed.is_loading_more());
    assert!(!feed.is_refreshing());

    assert!(feed.maybe_load_more(Some(14)));
    assert!(feed.is_loading_more());

    let updates = feed.wait_for_updates().await;
    assert_eq!(updates, vec![FeedUpdate::Appended(15)]);
    assert_eq!(feed.items(), (1..=30).collect::<Vec<_>>().as_slice());
    assert!(!feed.is_loading_more());
    assert_eq!(source.next_args(), vec![(Some(15), 15, 50)]);
}

#[tokio::test]
async fn test_no_load_more_before_end_is_visible() {
    let source = Arc::new(ScriptedSource::new());
    let mut feed = controller(&source, 50);

    assert!(!feed.maybe_load_more(Some(10)));
    assert!(!feed.maybe_load_more(None));
    assert!(feed.wait_for_updates().await.is_empty());
    assert_eq!(source.next_calls(), 0);
}

#[tokio::test]
async fn test_prefetch_distance_triggers_early() {
    let source = Arc::new(ScriptedSource::new());
    let mut settings = settings(50);
    settings.prefetch_distance = 4;
    let mut feed = FeedController::new(source.clone(), settings, seed());

    assert!(!feed.maybe_load_more(Some(9)));
    assert!(feed.maybe_load_more(Some(10)));
}

#[tokio::test]
async fn test_immediate_second_trigger_starts_one_fetch() {
    let source = Arc::new(ScriptedSource::new());
    let mut feed = controller(&source, 50);

    assert!(feed.maybe_load_more(Some(14)));
    assert!(!feed.maybe_load_more(Some(14)));

    feed.wait_for_updates().await;
    assert_eq!(source.next_calls(), 1);
    assert_eq!(feed.len(), 30);
}

#[tokio::test]
async fn test_small_cap_stops_growth() {
    let source = Arc::new(ScriptedSource::new());
    let mut feed = controller(&source, 20);

    assert!(feed.maybe_load_more(Some(14)));
    assert_eq!(feed.wait_for_updates().await, vec![FeedUpdate::Appended(5)]);
    assert_eq!(feed.items(), (1..=20).collect::<Vec<_>>().as_slice());

    assert!(!feed.maybe_load_more(Some(19)));
    assert_eq!(source.next_calls(), 1);
    assert!(feed.snapshot().exhausted);
}

#[tokio::test]
async fn test_scrolling_to_the_end_fills_the_feed() {
    let source = Arc::new(ScriptedSource::new());
    let mut feed = controller(&source, 50);

    while feed.maybe_load_more(Some(feed.len() - 1)) {
        feed.wait_for_updates().await;
        assert!(feed.len() <= 50);
    }
    assert_eq!(feed.items(), (1..=50).collect::<Vec<_>>().as_slice());
    assert_eq!(source.next_calls(), 3);
}

#[tokio::test]
async fn test_refresh_replaces_sequence() {
    let source = Arc::new(ScriptedSource::new().queue_fresh(Ok((42..=56).collect())));
    let mut feed = FeedController::new(source.clone(), settings(50), (1..=45).collect());

    assert!(feed.refresh());
    assert!(feed.is_refreshing());
    assert_eq!(feed.wait_for_updates().await, vec![FeedUpdate::Refreshed(15)]);
    assert_eq!(feed.items(), (42..=56).collect::<Vec<_>>().as_slice());
    assert!(!feed.is_refreshing());
}

#[tokio::test]
async fn test_refresh_is_a_noop_while_refreshing() {
    let source = Arc::new(ScriptedSource::with_fallbacks(Fallback::Answer, Fallback::Hang));
    let mut feed = controller(&source, 50);

    assert!(feed.refresh());
    assert!(!feed.refresh());
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(source.fresh_calls(), 1);
}

#[tokio::test]
async fn test_refresh_aborts_load_more_in_flight() {
    let source = Arc::new(ScriptedSource::with_fallbacks(Fallback::Hang, Fallback::Answer));
    let mut feed = controller(&source, 50);

    assert!(feed.maybe_load_more(Some(14)));
    assert!(feed.refresh());
    assert!(!feed.is_loading_more());
    assert!(!feed.maybe_load_more(Some(14)));

    assert_eq!(feed.wait_for_updates().await, vec![FeedUpdate::Refreshed(15)]);
    assert_eq!(feed.items().first(), Some(&42));
    assert!(!feed.is_loading_more());
    assert!(!feed.is_refreshing());
}

#[tokio::test]
async fn test_failed_load_more_clears_flag_and_can_retry() {
    let failure = FetchError::Failed("connection reset".to_string());
    let source = Arc::new(ScriptedSource::new().queue_next(Err(failure.clone())));
    let mut feed = controller(&source, 50);

    assert!(feed.maybe_load_more(Some(14)));
    assert_eq!(feed.wait_for_updates().await, vec![FeedUpdate::LoadMoreFailed(failure.clone())]);
    assert!(!feed.is_loading_more());
    assert_eq!(feed.len(), 15);
    assert_eq!(feed.last_error(), Some(&failure));

    assert!(feed.maybe_load_more(Some(14)));
    assert_eq!(feed.wait_for_updates().await, vec![FeedUpdate::Appended(15)]);
    assert_eq!(feed.last_error(), None);
}

#[tokio::test]
async fn test_failed_refresh_keeps_items() {
    let source = Arc::new(ScriptedSource::new().queue_fresh(Err(FetchError::Failed("503".to_string()))));
    let mut feed = controller(&source, 50);

    assert!(feed.refresh());
    let updates = feed.wait_for_updates().await;
    assert!(matches!(updates.as_slice(), [FeedUpdate::RefreshFailed(FetchError::Failed(_))]));
    assert!(updates[0].is_failure());
    assert_eq!(feed.items(), (1..=15).collect::<Vec<_>>().as_slice());
    assert!(!feed.is_refreshing());
}

#[tokio::test]
async fn test_slow_fetch_times_out() {
    let source = Arc::new(ScriptedSource::with_fallbacks(Fallback::Hang, Fallback::Hang));
    let mut settings = settings(50);
    settings.fetch_timeout = Duration::from_millis(20);
    let mut feed = FeedController::new(source.clone(), settings, seed());

    assert!(feed.maybe_load_more(Some(14)));
    assert_eq!(
        feed.wait_for_updates().await,
        vec![FeedUpdate::LoadMoreFailed(FetchError::Timeout(Duration::from_millis(20)))]
    );
    assert!(!feed.is_loading_more());

    assert!(feed.refresh());
    assert_eq!(
        feed.wait_for_updates().await,
        vec![FeedUpdate::RefreshFailed(FetchError::Timeout(Duration::from_millis(20)))]
    );
    assert!(!feed.is_refreshing());
    assert_eq!(feed.len(), 15);
}

#[tokio::test]
async fn test_panicking_fetch_does_not_leave_flag_set() {
    let source = Arc::new(ScriptedSource::with_fallbacks(Fallback::Panic, Fallback::Answer));
    let mut feed = controller(&source, 50);

    assert!(feed.maybe_load_more(Some(14)));
    assert_eq!(feed.wait_for_updates().await, vec![FeedUpdate::LoadMoreFailed(FetchError::Aborted)]);
    assert!(!feed.is_loading_more());
    assert_eq!(feed.len(), 15);
}

#[tokio::test]
async fn test_shutdown_cancels_and_blocks_triggers() {
    let source = Arc::new(ScriptedSource::with_fallbacks(Fallback::Hang, Fallback::Hang));
    let mut feed = controller(&source, 50);

    assert!(feed.maybe_load_more(Some(14)));
    feed.shutdown();

    assert!(feed.is_closed());
    assert!(!feed.is_loading_more());
    assert!(!feed.maybe_load_more(Some(14)));
    assert!(!feed.refresh());
    assert!(feed.wait_for_updates().await.is_empty());
    assert_eq!(feed.len(), 15);
}

#[tokio::test]
async fn test_subscribers_see_every_change() {
    let source = Arc::new(ScriptedSource::new());
    let mut feed = controller(&source, 50);
    let mut view = feed.subscribe();

    assert_eq!(view.borrow().items.len(), 15);

    feed.maybe_load_more(Some(14));
    assert!(view.has_changed().unwrap());
    assert!(view.borrow_and_update().loading_more);

    feed.wait_for_updates().await;
    assert!(view.has_changed().unwrap());
    let snapshot = view.borrow_and_update().clone();
    assert!(!snapshot.loading_more);
    assert_eq!(snapshot.items, (1..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_dropping_controller_aborts_fetch() {
    let source = Arc::new(ScriptedSource::with_fallbacks(Fallback::Hang, Fallback::Hang));
    let view = {
        let mut feed = controller(&source, 50);
        feed.maybe_load_more(Some(14));
        feed.subscribe()
    };

    // Teardown published a final snapshot with no fetch in flight
    assert!(!view.borrow().loading_more);
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(Arc::strong_count(&source), 1);
}

#[tokio::test]
async fn test_mock_feed_after_offset_refresh_ends_below_max() {
    // A refreshed page starting at 5 reaches item 50 with only 46 items
    let mut feed = FeedController::new(Arc::new(MockDataSource::instant()), settings(50), (5..=19).collect());

    for _ in 0..10 {
        if !feed.maybe_load_more(Some(feed.len() - 1)) {
            break;
        }
        feed.wait_for_updates().await;
    }

    assert_eq!(feed.len(), 46);
    assert_eq!(feed.items().last(), Some(&50));
    assert!(feed.snapshot().exhausted);
    assert!(!feed.maybe_load_more(Some(45)));
}
