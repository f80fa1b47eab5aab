//! Pitch dimensions and marking geometry, expressed as plain data so the
//! renderer only has to walk polylines and boxes.

/// Field length along the x axis, in meters.
pub const PITCH_LENGTH: f32 = 105.0;
/// Field width along the z axis, in meters.
pub const PITCH_WIDTH: f32 = 68.0;
pub const CENTER_CIRCLE_RADIUS: f32 = 9.15;
pub const CENTER_CIRCLE_SEGMENTS: usize = 32;
pub const PENALTY_AREA_DEPTH: f32 = 16.5;
pub const PENALTY_AREA_HALF_WIDTH: f32 = 20.16;
pub const GOAL_MOUTH_WIDTH: f32 = 7.32;
pub const GOAL_HEIGHT: f32 = 2.44;
pub const GOAL_DEPTH: f32 = 2.0;
/// Markings float slightly above the turf so they are not swallowed by it.
pub const LINE_HEIGHT: f32 = 0.01;

pub type Point = [f32; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Axis-aligned wireframe box for one goal. `size` is the full extent on
/// each axis; `center` sits half the mouth height above the ground, one
/// frame depth behind the goal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalFrame {
    pub center: Point,
    pub size: [f32; 3],
}

pub fn half_length() -> f32 {
    PITCH_LENGTH / 2.0
}

pub fn half_width() -> f32 {
    PITCH_WIDTH / 2.0
}

/// Touch lines and goal lines as one closed loop (first point repeated).
pub fn outline() -> Polyline {
    let x = half_length();
    let z = half_width();
    Polyline::new(vec![
        [-x, LINE_HEIGHT, z],
        [x, LINE_HEIGHT, z],
        [x, LINE_HEIGHT, -z],
        [-x, LINE_HEIGHT, -z],
        [-x, LINE_HEIGHT, z],
    ])
}

pub fn halfway_line() -> Polyline {
    let z = half_width();
    Polyline::new(vec![[0.0, LINE_HEIGHT, z], [0.0, LINE_HEIGHT, -z]])
}

pub fn center_circle() -> Polyline {
    let mut points = Vec::with_capacity(CENTER_CIRCLE_SEGMENTS + 1);
    for segment in 0..=CENTER_CIRCLE_SEGMENTS {
        let theta = segment as f32 / CENTER_CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
        points.push([
            theta.cos() * CENTER_CIRCLE_RADIUS,
            LINE_HEIGHT,
            theta.sin() * CENTER_CIRCLE_RADIUS,
        ]);
    }
    Polyline::new(points)
}

/// Both penalty areas. Each is an open three-sided polyline; the fourth
/// side is the goal line, which the outline already draws.
pub fn penalty_areas() -> [Polyline; 2] {
    let goal_line = half_length();
    let z = PENALTY_AREA_HALF_WIDTH;
    let left_edge = -goal_line + PENALTY_AREA_DEPTH;
    let right_edge = goal_line - PENALTY_AREA_DEPTH;
    [
        Polyline::new(vec![
            [-goal_line, LINE_HEIGHT, z],
            [left_edge, LINE_HEIGHT, z],
            [left_edge, LINE_HEIGHT, -z],
            [-goal_line, LINE_HEIGHT, -z],
        ]),
        Polyline::new(vec![
            [goal_line, LINE_HEIGHT, z],
            [right_edge, LINE_HEIGHT, z],
            [right_edge, LINE_HEIGHT, -z],
            [goal_line, LINE_HEIGHT, -z],
        ]),
    ]
}

/// Every marking polyline on the field, in draw order.
pub fn markings() -> Vec<Polyline> {
    let [left_area, right_area] = penalty_areas();
    vec![
        outline(),
        halfway_line(),
        center_circle(),
        left_area,
        right_area,
    ]
}

pub fn goal_frames() -> [GoalFrame; 2] {
    let x = half_length() + GOAL_DEPTH / 2.0;
    let size = [GOAL_DEPTH, GOAL_HEIGHT, GOAL_MOUTH_WIDTH];
    [
        GoalFrame {
            center: [-x, GOAL_HEIGHT / 2.0, 0.0],
            size,
        },
        GoalFrame {
            center: [x, GOAL_HEIGHT / 2.0, 0.0],
            size,
        },
    ]
}
