use macroquad::prelude::*;

const ZOOM_FACTOR: f32 = 1.1;
const MIN_ZOOM_POWER: i32 = -12;
const MAX_ZOOM_POWER: i32 = 20;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Fraction of the orbit velocity shed per frame once the drag releases.
const ORBIT_DAMPING: f32 = 0.05;
const MIN_PITCH: f32 = 0.05;
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

fn clamp_zoom_power(power: i32) -> i32 {
    power.clamp(MIN_ZOOM_POWER, MAX_ZOOM_POWER)
}

fn radius_from_power(base_radius: f32, power: i32) -> f32 {
    base_radius * ZOOM_FACTOR.powi(-power)
}

/// Spherical orbit around a fixed target. Drags feed yaw/pitch velocity
/// that keeps gliding after release; the wheel steps a clamped integer
/// zoom power instead of scaling the radius freely.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    base_radius: f32,
    zoom_power: i32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    last_drag: Option<Vec2>,
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).asin().clamp(MIN_PITCH, MAX_PITCH),
            base_radius: radius,
            zoom_power: 0,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            last_drag: None,
        }
    }

    pub fn radius(&self) -> f32 {
        radius_from_power(self.base_radius, self.zoom_power)
    }

    pub fn eye(&self) -> Vec3 {
        let radius = self.radius();
        self.target
            + vec3(
                radius * self.pitch.cos() * self.yaw.sin(),
                radius * self.pitch.sin(),
                radius * self.pitch.cos() * self.yaw.cos(),
            )
    }

    pub fn zoom_by_steps(&mut self, steps: i32) {
        self.zoom_power = clamp_zoom_power(self.zoom_power + steps);
    }

    pub fn apply_drag_delta(&mut self, delta: Vec2) {
        self.yaw_velocity -= delta.x * ORBIT_SENSITIVITY;
        self.pitch_velocity += delta.y * ORBIT_SENSITIVITY;
    }

    pub fn handle_mouse_wheel(&mut self) {
        let (_wheel_x, wheel_y) = mouse_wheel();
        if wheel_y == 0.0 {
            return;
        }
        self.zoom_by_steps(wheel_y.signum() as i32);
    }

    /// Left-drag orbits unless the pointer is captured by the UI layer.
    pub fn handle_drag(&mut self, pointer_captured: bool) {
        let dragging = is_mouse_button_down(MouseButton::Left) && !pointer_captured;
        let (mouse_x, mouse_y) = mouse_position();
        let current = vec2(mouse_x, mouse_y);

        if dragging {
            if let Some(last) = self.last_drag {
                self.apply_drag_delta(current - last);
            }
            self.last_drag = Some(current);
        } else {
            self.last_drag = None;
        }
    }

    /// Per-frame integration: apply the orbit velocities, then let them
    /// decay so a released drag glides to rest.
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(MIN_PITCH, MAX_PITCH);
        self.yaw_velocity *= 1.0 - ORBIT_DAMPING;
        self.pitch_velocity *= 1.0 - ORBIT_DAMPING;
    }

    pub fn camera3d(&self, aspect: f32) -> Camera3D {
        Camera3D {
            position: self.eye(),
            target: self.target,
            up: vec3(0.0, 1.0, 0.0),
            aspect: Some(aspect),
            ..Default::default()
        }
    }
}

/// Project a world-space point into screen space through `camera`.
/// Returns `None` for points on or behind the camera plane.
pub fn world_to_screen(camera: &Camera3D, world: Vec3, viewport: Vec2) -> Option<Vec2> {
    let clip = camera.matrix() * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(vec2(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_camera() -> OrbitCamera {
        OrbitCamera::looking_from(vec3(0.0, 50.0, 80.0), Vec3::ZERO)
    }

    #[test]
    fn spherical_decomposition_round_trips_the_eye() {
        let camera = start_camera();
        let eye = camera.eye();
        assert!((eye - vec3(0.0, 50.0, 80.0)).length() < 1e-3, "{:?}", eye);
    }

    #[test]
    fn zoom_power_clamps_at_both_ends() {
        let mut camera = start_camera();
        let base = camera.radius();

        camera.zoom_by_steps(1000);
        assert_eq!(camera.radius(), radius_from_power(base, MAX_ZOOM_POWER));

        camera.zoom_by_steps(-2000);
        assert_eq!(camera.radius(), radius_from_power(base, MIN_ZOOM_POWER));
    }

    #[test]
    fn zooming_in_shrinks_the_radius() {
        let mut camera = start_camera();
        let before = camera.radius();
        camera.zoom_by_steps(1);
        assert!(camera.radius() < before);
    }

    #[test]
    fn pitch_stays_clamped_above_the_turf() {
        let mut camera = start_camera();
        camera.apply_drag_delta(vec2(0.0, -100_000.0));
        camera.update();
        assert_eq!(camera.pitch, MIN_PITCH);
        assert!(camera.eye().y > 0.0);

        camera.apply_drag_delta(vec2(0.0, 1_000_000.0));
        camera.update();
        assert_eq!(camera.pitch, MAX_PITCH);
    }

    #[test]
    fn released_drag_glides_to_rest() {
        let mut camera = start_camera();
        camera.apply_drag_delta(vec2(40.0, 0.0));
        camera.update();
        let after_one = camera.clone();
        camera.update();
        // Still moving, but slower than the first frame.
        assert!(camera.yaw_velocity.abs() < after_one.yaw_velocity.abs());
        for _ in 0..2000 {
            camera.update();
        }
        assert!(camera.yaw_velocity.abs() < 1e-6);
    }

    #[test]
    fn orbit_target_projects_to_the_viewport_center() {
        let camera = start_camera().camera3d(16.0 / 9.0);
        let viewport = vec2(1280.0, 720.0);
        let screen = world_to_screen(&camera, Vec3::ZERO, viewport).unwrap();
        assert!((screen.x - 640.0).abs() < 1.0, "{:?}", screen);
        assert!((screen.y - 360.0).abs() < 1.0, "{:?}", screen);
    }

    #[test]
    fn points_behind_the_camera_do_not_project() {
        let orbit = start_camera();
        let camera = orbit.camera3d(16.0 / 9.0);
        let behind = orbit.eye() * 2.0;
        assert_eq!(world_to_screen(&camera, behind, vec2(1280.0, 720.0)), None);
    }
}
