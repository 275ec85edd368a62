use pullfeed::feed::PullGesture;

#[test]
fn test_release_past_threshold_fires() {
    let mut pull = PullGesture::new(100.0);
    pull.drag(60.0);
    assert!(!pull.is_armed());
    assert!((pull.progress() - 0.6).abs() < f32::EPSILON);

    pull.drag(40.0);
    assert!(pull.is_armed());
    assert!(pull.release());
    assert_eq!(pull.distance(), 0.0);
}

#[test]
fn test_release_short_of_threshold_does_not_fire() {
    let mut pull = PullGesture::new(100.0);
    pull.drag(99.0);
    assert!(!pull.release());
    assert!(!pull.is_active());
}

#[test]
fn test_pulling_back_up_reduces_distance() {
    let mut pull = PullGesture::new(100.0);
    pull.drag(120.0);
    assert!(pull.progress() > 1.0);
    pull.drag(-50.0);
    assert!(!pull.is_armed());
    pull.drag(-500.0);
    assert_eq!(pull.distance(), 0.0);
}

#[test]
fn test_cancel_never_fires() {
    let mut pull = PullGesture::new(100.0);
    pull.drag(150.0);
    pull.cancel();
    assert!(!pull.release());
}
