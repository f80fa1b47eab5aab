use macroquad::prelude::*;
use pitchboard_core::pitch;
use pitchboard_core::{GoalFrame, Point, Polyline};

pub const TURF_COLOR: Color = Color::from_rgba(46, 139, 87, 255);
pub const LINE_COLOR: Color = WHITE;
pub const GOAL_COLOR: Color = WHITE;

pub fn to_vec3(point: Point) -> Vec3 {
    vec3(point[0], point[1], point[2])
}

/// Draw the static scene: turf quad, marking polylines, goal frames.
/// Geometry comes in as data so the caller can build it once at startup.
pub fn draw_pitch(markings: &[Polyline], goal_frames: &[GoalFrame]) {
    draw_plane(
        vec3(0.0, 0.0, 0.0),
        vec2(pitch::half_length(), pitch::half_width()),
        None,
        TURF_COLOR,
    );

    for polyline in markings {
        for (start, end) in polyline.segments() {
            draw_line_3d(to_vec3(start), to_vec3(end), LINE_COLOR);
        }
    }

    for frame in goal_frames {
        draw_cube_wires(to_vec3(frame.center), to_vec3(frame.size), GOAL_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_vec3_preserves_components() {
        assert_eq!(to_vec3([1.0, -2.0, 3.5]), vec3(1.0, -2.0, 3.5));
    }
}
