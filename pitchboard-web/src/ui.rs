use macroquad::prelude::*;
use pitchboard_core::{FormationCatalog, FormationKind};

use crate::BoardAction;

const PANEL_MARGIN: f32 = 10.0;
const BUTTON_WIDTH: f32 = 96.0;
const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_SPACING: f32 = 8.0;
const BUTTON_FONT_SIZE: f32 = 18.0;

const SELECTED_FILL: Color = Color::from_rgba(100, 200, 100, 255);
const SELECTED_BORDER: Color = Color::from_rgba(50, 150, 50, 255);
const HOVERED_FILL: Color = Color::from_rgba(220, 220, 220, 255);
const IDLE_FILL: Color = Color::from_rgba(200, 200, 200, 255);
const IDLE_BORDER: Color = Color::from_rgba(100, 100, 100, 255);

#[derive(Debug, Clone)]
struct Button {
    action: BoardAction,
    label: String,
}

/// One row of buttons: a button per catalog formation plus Reset. Layout
/// is computed from the index so hit-testing stays a pure function.
pub struct ControlPanel {
    buttons: Vec<Button>,
    origin: Vec2,
}

impl ControlPanel {
    pub fn new(catalog: &FormationCatalog) -> Self {
        let mut buttons: Vec<Button> = catalog
            .formations()
            .iter()
            .map(|formation| Button {
                action: BoardAction::ApplyFormation(formation.kind),
                label: formation.label.clone(),
            })
            .collect();
        buttons.push(Button {
            action: BoardAction::ResetPositions,
            label: "Reset".to_string(),
        });

        Self {
            buttons,
            origin: vec2(PANEL_MARGIN, PANEL_MARGIN),
        }
    }

    fn button_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.origin.x + index as f32 * (BUTTON_WIDTH + BUTTON_SPACING),
            self.origin.y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    /// Whether the pointer is over any button; used to keep panel clicks
    /// away from the orbit controls.
    pub fn contains(&self, point: Vec2) -> bool {
        (0..self.buttons.len()).any(|index| self.button_rect(index).contains(point))
    }

    pub fn action_at(&self, point: Vec2) -> Option<BoardAction> {
        self.buttons
            .iter()
            .enumerate()
            .find(|(index, _)| self.button_rect(*index).contains(point))
            .map(|(_, button)| button.action)
    }

    pub fn draw(&self, active: FormationKind, mouse: Vec2) {
        for (index, button) in self.buttons.iter().enumerate() {
            let rect = self.button_rect(index);
            let selected = matches!(
                button.action,
                BoardAction::ApplyFormation(kind) if kind == active
            );
            let hovered = rect.contains(mouse);

            let fill = if selected {
                SELECTED_FILL
            } else if hovered {
                HOVERED_FILL
            } else {
                IDLE_FILL
            };
            let border = if selected { SELECTED_BORDER } else { IDLE_BORDER };

            draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);

            let dimensions = measure_text(&button.label, None, BUTTON_FONT_SIZE as u16, 1.0);
            draw_text(
                &button.label,
                rect.x + (rect.w - dimensions.width) / 2.0,
                rect.y + (rect.h + dimensions.height) / 2.0,
                BUTTON_FONT_SIZE,
                BLACK,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ControlPanel {
        ControlPanel::new(&FormationCatalog::builtin())
    }

    #[test]
    fn panel_has_one_button_per_formation_plus_reset() {
        assert_eq!(panel().buttons.len(), 4);
    }

    #[test]
    fn clicks_resolve_to_the_right_action() {
        let panel = panel();
        for (index, button) in panel.buttons.iter().enumerate() {
            let rect = panel.button_rect(index);
            let center = vec2(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
            assert_eq!(panel.action_at(center), Some(button.action));
        }
        assert_eq!(
            panel.buttons.last().unwrap().action,
            BoardAction::ResetPositions
        );
    }

    #[test]
    fn clicks_outside_every_button_miss() {
        let panel = panel();
        assert_eq!(panel.action_at(vec2(0.0, 0.0)), None);
        assert_eq!(panel.action_at(vec2(5000.0, 15.0)), None);
        assert!(!panel.contains(vec2(5000.0, 15.0)));

        // The gap between the first two buttons is dead space.
        let gap_x = PANEL_MARGIN + BUTTON_WIDTH + BUTTON_SPACING / 2.0;
        assert_eq!(panel.action_at(vec2(gap_x, PANEL_MARGIN + 5.0)), None);
    }
}
