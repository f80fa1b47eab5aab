use crate::marker::Marker;
use crate::pitch::Point;

/// How long a scheduled move takes when the caller does not say otherwise,
/// in seconds.
pub const DEFAULT_MOVE_DURATION: f32 = 2.0;

/// One in-flight position interpolation, addressed by marker index so the
/// task list and the marker list can be cleared together.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnimation {
    pub marker: usize,
    pub start: Point,
    pub end: Point,
    pub start_time: f64,
    pub duration: f32,
}

impl MoveAnimation {
    /// Normalized completion fraction at `now`, clamped to [0, 1].
    pub fn progress_at(&self, now: f64) -> f32 {
        let elapsed = (now - self.start_time) as f32;
        (elapsed / self.duration).clamp(0.0, 1.0)
    }
}

pub fn lerp(start: Point, end: Point, progress: f32) -> Point {
    [
        start[0] + (end[0] - start[0]) * progress,
        start[1] + (end[1] - start[1]) * progress,
        start[2] + (end[2] - start[2]) * progress,
    ]
}

/// Ordered list of active interpolation tasks, advanced once per frame.
#[derive(Debug, Default)]
pub struct Animator {
    tasks: Vec<MoveAnimation>,
}

impl Animator {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn schedule(
        &mut self,
        marker: usize,
        start: Point,
        end: Point,
        duration: f32,
        now: f64,
    ) {
        self.tasks.push(MoveAnimation {
            marker,
            start,
            end,
            start_time: now,
            duration,
        });
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Advance every task to `now` and write the interpolated positions
    /// into `markers`. Finished tasks snap their marker to the end
    /// position exactly and are removed.
    ///
    /// Tasks are walked newest-first. Nothing stops two tasks from
    /// targeting the same marker; when that happens the earliest-scheduled
    /// task writes last each frame and therefore wins until it completes.
    pub fn advance(&mut self, markers: &mut [Marker], now: f64) {
        let mut index = self.tasks.len();
        while index > 0 {
            index -= 1;
            let task = &self.tasks[index];
            let Some(marker) = markers.get_mut(task.marker) else {
                // Target no longer exists; drop the task without effect.
                self.tasks.remove(index);
                continue;
            };

            let progress = task.progress_at(now);
            if progress < 1.0 {
                marker.position = lerp(task.start, task.end, progress);
            } else {
                marker.position = task.end;
                self.tasks.remove(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{Marker, Role, Team};

    fn marker_at(position: Point) -> Marker {
        Marker::new(position, Team::Home, Role::Outfield, None)
    }

    #[test]
    fn progress_clamps_to_unit_interval() {
        let task = MoveAnimation {
            marker: 0,
            start: [0.0; 3],
            end: [1.0; 3],
            start_time: 10.0,
            duration: 2.0,
        };
        assert_eq!(task.progress_at(9.0), 0.0);
        assert_eq!(task.progress_at(11.0), 0.5);
        assert_eq!(task.progress_at(30.0), 1.0);
    }

    #[test]
    fn midpoint_is_componentwise_interpolation() {
        let mut markers = vec![marker_at([0.0, 1.0, 0.0])];
        let mut animator = Animator::new();
        animator.schedule(0, [0.0, 1.0, 0.0], [10.0, 1.0, -4.0], 2.0, 0.0);

        animator.advance(&mut markers, 1.0);
        assert_eq!(markers[0].position, [5.0, 1.0, -2.0]);
        assert_eq!(animator.in_flight(), 1);
    }

    #[test]
    fn completion_snaps_to_end_and_removes_the_task() {
        let end = [3.3, 1.0, -7.7];
        let mut markers = vec![marker_at([0.0, 1.0, 0.0])];
        let mut animator = Animator::new();
        animator.schedule(0, markers[0].position, end, 2.0, 0.0);

        animator.advance(&mut markers, 2.0);
        // Exactly the end position, not an accumulation of lerp steps.
        assert_eq!(markers[0].position, end);
        assert_eq!(animator.in_flight(), 0);
    }

    #[test]
    fn task_before_its_start_time_holds_the_start_position() {
        let mut markers = vec![marker_at([2.0, 1.0, 2.0])];
        let mut animator = Animator::new();
        animator.schedule(0, [4.0, 1.0, 4.0], [8.0, 1.0, 8.0], 2.0, 100.0);

        animator.advance(&mut markers, 99.0);
        assert_eq!(markers[0].position, [4.0, 1.0, 4.0]);
        assert_eq!(animator.in_flight(), 1);
    }

    #[test]
    fn overlapping_tasks_earliest_write_wins() {
        let mut markers = vec![marker_at([0.0, 1.0, 0.0])];
        let mut animator = Animator::new();
        animator.schedule(0, [0.0, 1.0, 0.0], [10.0, 1.0, 0.0], 2.0, 0.0);
        animator.schedule(0, [0.0, 1.0, 0.0], [-10.0, 1.0, 0.0], 2.0, 0.0);

        animator.advance(&mut markers, 1.0);
        // Both tasks ran; the earliest-scheduled one wrote last.
        assert_eq!(markers[0].position, [5.0, 1.0, 0.0]);

        animator.advance(&mut markers, 2.0);
        assert_eq!(markers[0].position, [10.0, 1.0, 0.0]);
        assert_eq!(animator.in_flight(), 0);
    }

    #[test]
    fn task_for_a_missing_marker_is_discarded() {
        let mut markers = vec![marker_at([0.0, 1.0, 0.0])];
        let mut animator = Animator::new();
        animator.schedule(5, [0.0; 3], [1.0; 3], 2.0, 0.0);
        animator.schedule(0, [0.0, 1.0, 0.0], [2.0, 1.0, 0.0], 2.0, 0.0);

        animator.advance(&mut markers, 1.0);
        assert_eq!(animator.in_flight(), 1);
        assert_eq!(markers[0].position, [1.0, 1.0, 0.0]);
    }
}
