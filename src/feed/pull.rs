//! Pull-to-refresh gesture tracking.

/// Accumulated drag distance of a pull-down gesture.
///
/// The gesture fires a refresh when it is released with the distance at or
/// past the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullGesture {
    threshold: f32,
    distance: f32,
}

impl PullGesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(f32::EPSILON),
            distance: 0.0,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Add `delta` to the pull distance. The distance never goes below zero.
    pub fn drag(&mut self, delta: f32) {
        self.distance = (self.distance + delta).max(0.0);
    }

    /// Fraction of the threshold covered so far; exceeds 1.0 on overpull.
    pub fn progress(&self) -> f32 {
        self.distance / self.threshold
    }

    pub fn is_armed(&self) -> bool {
        self.distance >= self.threshold
    }

    pub fn is_active(&self) -> bool {
        self.distance > 0.0
    }

    /// End the gesture. Returns true if a refresh should fire.
    pub fn release(&mut self) -> bool {
        let fired = self.is_armed();
        self.distance = 0.0;
        fired
    }

    /// End the gesture without firing.
    pub fn cancel(&mut self) {
        self.distance = 0.0;
    }
}
