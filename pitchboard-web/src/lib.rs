#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
use macroquad::prelude::*;
use pitchboard_core::pitch;
use pitchboard_core::{Board, FormationCatalog, FormationKind, GoalFrame, Polyline};
use std::sync::atomic::{AtomicU8, Ordering};

mod camera;
mod marker;
mod scene;
mod ui;

use crate::camera::{OrbitCamera, world_to_screen};
use crate::marker::MarkerDrawConfig;
use crate::ui::ControlPanel;

const SKY_COLOR: Color = Color::from_rgba(135, 206, 235, 255);
const CAMERA_START_EYE: Vec3 = vec3(0.0, 50.0, 80.0);

const ACTION_NONE: u8 = 0;
const ACTION_CLASSIC: u8 = 1;
const ACTION_ATTACK: u8 = 2;
const ACTION_DEFENSE: u8 = 3;
const ACTION_RESET: u8 = 4;

// Button handlers may fire from the hosting page between frames; the cell
// is drained exactly once per frame and the last queued action wins.
static PENDING_ACTION: AtomicU8 = AtomicU8::new(ACTION_NONE);

/// Everything the four UI buttons can ask of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    ApplyFormation(FormationKind),
    ResetPositions,
}

#[unsafe(no_mangle)]
pub extern "C" fn formation_classic() {
    log::debug!("ui action: formation 4-4-2");
    queue_action(ACTION_CLASSIC);
}

#[unsafe(no_mangle)]
pub extern "C" fn formation_attack() {
    log::debug!("ui action: formation 4-3-3");
    queue_action(ACTION_ATTACK);
}

#[unsafe(no_mangle)]
pub extern "C" fn formation_defense() {
    log::debug!("ui action: formation 5-3-2");
    queue_action(ACTION_DEFENSE);
}

#[unsafe(no_mangle)]
pub extern "C" fn reset_positions() {
    log::debug!("ui action: reset positions");
    queue_action(ACTION_RESET);
}

fn queue_action(code: u8) {
    PENDING_ACTION.store(code, Ordering::SeqCst);
}

fn take_pending_action() -> Option<BoardAction> {
    match PENDING_ACTION.swap(ACTION_NONE, Ordering::SeqCst) {
        ACTION_CLASSIC => Some(BoardAction::ApplyFormation(FormationKind::Classic)),
        ACTION_ATTACK => Some(BoardAction::ApplyFormation(FormationKind::Attack)),
        ACTION_DEFENSE => Some(BoardAction::ApplyFormation(FormationKind::Defense)),
        ACTION_RESET => Some(BoardAction::ResetPositions),
        _ => None,
    }
}

pub struct GameState {
    board: Board,
    catalog: FormationCatalog,
    active_formation: FormationKind,
    camera: OrbitCamera,
    panel: ControlPanel,
    marker_draw: MarkerDrawConfig,
    markings: Vec<Polyline>,
    goal_frames: [GoalFrame; 2],
    fps: f32,
    fps_frame_count: u32,
    fps_last_update_time: f64,
}

impl GameState {
    pub fn new() -> Self {
        let catalog = FormationCatalog::builtin();
        let panel = ControlPanel::new(&catalog);
        let mut game = Self {
            board: Board::new(),
            catalog,
            active_formation: FormationKind::Classic,
            camera: OrbitCamera::looking_from(CAMERA_START_EYE, Vec3::ZERO),
            panel,
            marker_draw: MarkerDrawConfig::default(),
            markings: pitch::markings(),
            goal_frames: pitch::goal_frames(),
            fps: 0.0,
            fps_frame_count: 0,
            fps_last_update_time: get_time(),
        };
        game.apply_formation(FormationKind::Classic);
        game
    }

    fn apply_formation(&mut self, kind: FormationKind) {
        let Some(formation) = self.catalog.get(kind) else {
            log::warn!("no formation registered for {:?}", kind);
            return;
        };
        log::info!(
            "applying formation {} ({} markers)",
            formation.label,
            formation.placements.len()
        );
        self.board.apply_formation(formation);
        self.active_formation = kind;
    }

    fn apply_action(&mut self, action: BoardAction) {
        match action {
            BoardAction::ApplyFormation(kind) => self.apply_formation(kind),
            BoardAction::ResetPositions => {
                log::info!("resetting {} markers", self.board.markers().len());
                self.board.reset_positions(get_time());
            }
        }
    }

    fn apply_pending_ui_actions(&mut self) {
        if let Some(action) = take_pending_action() {
            self.apply_action(action);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (mouse_x, mouse_y) = mouse_position();
            if let Some(action) = self.panel.action_at(vec2(mouse_x, mouse_y)) {
                self.apply_action(action);
            }
        }
    }

    fn handle_camera_input(&mut self) {
        let (mouse_x, mouse_y) = mouse_position();
        let pointer_over_panel = self.panel.contains(vec2(mouse_x, mouse_y));
        self.camera.handle_mouse_wheel();
        self.camera.handle_drag(pointer_over_panel);
        self.camera.update();
    }

    fn update(&mut self) {
        self.board.advance(get_time());
    }

    fn update_fps_if_due(&mut self) {
        let now = get_time();
        self.fps_frame_count += 1;
        let elapsed = now - self.fps_last_update_time;
        if elapsed >= 1.0 {
            self.fps = self.fps_frame_count as f32 / elapsed as f32;
            self.fps_frame_count = 0;
            self.fps_last_update_time = now;
        }
    }

    fn render(&mut self) {
        clear_background(SKY_COLOR);

        // Recomputing the aspect every frame keeps the projection in step
        // with the surface through resizes.
        let aspect = screen_width() / screen_height();
        let camera = self.camera.camera3d(aspect);
        set_camera(&camera);

        scene::draw_pitch(&self.markings, &self.goal_frames);
        for player in self.board.markers() {
            marker::draw_marker(player, &self.marker_draw);
        }

        set_default_camera();
        self.render_labels(&camera);

        let (mouse_x, mouse_y) = mouse_position();
        self.panel.draw(self.active_formation, vec2(mouse_x, mouse_y));

        draw_text(
            &format!("fps: {:.1}", self.fps),
            20.0,
            screen_height() - 16.0,
            24.0,
            WHITE,
        );
    }

    fn render_labels(&self, camera: &Camera3D) {
        let viewport = vec2(screen_width(), screen_height());
        for player in self.board.markers() {
            let Some(number) = player.number else {
                continue;
            };
            let anchor = marker::label_anchor(player, &self.marker_draw);
            if let Some(screen) = world_to_screen(camera, anchor, viewport) {
                marker::draw_marker_label(&number.to_string(), screen, &self.marker_draw);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn run() {
    install_panic_hook();
    let mut game = GameState::new();

    loop {
        game.apply_pending_ui_actions();
        game.handle_camera_input();
        game.update();
        game.update_fps_if_due();

        game.render();

        next_frame().await;
    }
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}
