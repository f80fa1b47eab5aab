use crate::animation::{Animator, DEFAULT_MOVE_DURATION};
use crate::formation::Formation;
use crate::marker::Marker;
use crate::pitch::Point;

/// The player registry plus its animation scheduler. Markers and tasks
/// always live and die together: clearing one clears the other, so a
/// formation switch can never leave a task pointing at a stale marker.
#[derive(Debug, Default)]
pub struct Board {
    markers: Vec<Marker>,
    animator: Animator,
}

impl Board {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            animator: Animator::new(),
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn in_flight(&self) -> usize {
        self.animator.in_flight()
    }

    /// Drop all markers and all in-flight animations.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.animator.clear();
    }

    /// Replace the whole board with one marker per placement. Any
    /// animations still running against the previous markers are
    /// discarded with them.
    pub fn apply_formation(&mut self, formation: &Formation) {
        self.clear();
        for placement in &formation.placements {
            self.markers.push(Marker::new(
                placement.position,
                placement.team,
                placement.role,
                placement.number,
            ));
        }
    }

    /// Schedule a move from the marker's current position to `target`.
    pub fn move_marker(&mut self, index: usize, target: Point, duration: f32, now: f64) {
        let Some(marker) = self.markers.get(index) else {
            return;
        };
        self.animator
            .schedule(index, marker.position, target, duration, now);
    }

    /// Animate every marker back to its formation slot. Markers are kept,
    /// not recreated, so their identity and kit survive the reset.
    pub fn reset_positions(&mut self, now: f64) {
        for (index, marker) in self.markers.iter().enumerate() {
            self.animator.schedule(
                index,
                marker.position,
                marker.original_position,
                DEFAULT_MOVE_DURATION,
                now,
            );
        }
    }

    /// Per-frame tick: advance all animations to `now`.
    pub fn advance(&mut self, now: f64) {
        self.animator.advance(&mut self.markers, now);
    }
}
