use macroquad::prelude::*;
use pitchboard_core::Marker;

use crate::scene::to_vec3;

#[derive(Debug, Clone)]
pub struct MarkerDrawConfig {
    pub radius: f32,
    /// How far above the marker center its shirt number floats.
    pub label_offset: f32,
    pub label_font_size: f32,
    pub label_color: Color,
}

impl Default for MarkerDrawConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            label_offset: 1.5,
            label_font_size: 18.0,
            label_color: WHITE,
        }
    }
}

pub fn marker_color(marker: &Marker) -> Color {
    let [red, green, blue] = marker.color();
    Color::from_rgba(red, green, blue, 255)
}

pub fn label_anchor(marker: &Marker, config: &MarkerDrawConfig) -> Vec3 {
    to_vec3(marker.position) + vec3(0.0, config.label_offset, 0.0)
}

pub fn draw_marker(marker: &Marker, config: &MarkerDrawConfig) {
    draw_sphere(
        to_vec3(marker.position),
        config.radius,
        None,
        marker_color(marker),
    );
}

/// Draw one shirt-number label, centered on its projected screen position.
pub fn draw_marker_label(label: &str, screen: Vec2, config: &MarkerDrawConfig) {
    let dimensions = measure_text(label, None, config.label_font_size as u16, 1.0);
    draw_text(
        label,
        screen.x - dimensions.width / 2.0,
        screen.y,
        config.label_font_size,
        config.label_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchboard_core::{Role, Team};

    #[test]
    fn marker_color_follows_the_kit_palette() {
        let keeper = Marker::new([0.0, 1.0, 0.0], Team::Home, Role::Keeper, Some(1));
        let color = marker_color(&keeper);
        assert_eq!(color, Color::from_rgba(255, 153, 0, 255));
    }

    #[test]
    fn label_anchor_floats_above_the_marker() {
        let marker = Marker::new([3.0, 1.0, -4.0], Team::Away, Role::Outfield, Some(9));
        let anchor = label_anchor(&marker, &MarkerDrawConfig::default());
        assert_eq!(anchor, vec3(3.0, 2.5, -4.0));
    }
}
