use crate::pitch::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Keeper,
    Outfield,
}

impl Default for Role {
    fn default() -> Self {
        Role::Outfield
    }
}

/// Kit palette. The away keeper wears the same blue as the away outfield
/// players; only the home keeper gets a distinct shirt.
pub fn kit_color(team: Team, role: Role) -> [u8; 3] {
    match (team, role) {
        (Team::Home, Role::Keeper) => [255, 153, 0],
        (Team::Home, Role::Outfield) => [255, 0, 0],
        (Team::Away, _) => [0, 0, 255],
    }
}

/// One player marker on the board. `original_position` is frozen at
/// creation so a reset can always animate back to the formation slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub original_position: Point,
    pub team: Team,
    pub role: Role,
    pub number: Option<u8>,
}

impl Marker {
    pub fn new(position: Point, team: Team, role: Role, number: Option<u8>) -> Self {
        Self {
            position,
            original_position: position,
            team,
            role,
            number,
        }
    }

    pub fn color(&self) -> [u8; 3] {
        kit_color(self.team, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_marker_freezes_original_position() {
        let mut marker = Marker::new([1.0, 1.0, 2.0], Team::Home, Role::Outfield, Some(7));
        marker.position = [5.0, 1.0, -3.0];
        assert_eq!(marker.original_position, [1.0, 1.0, 2.0]);
    }

    #[test]
    fn home_keeper_wears_a_distinct_shirt() {
        assert_ne!(
            kit_color(Team::Home, Role::Keeper),
            kit_color(Team::Home, Role::Outfield)
        );
    }

    #[test]
    fn away_keeper_wears_outfield_blue() {
        assert_eq!(
            kit_color(Team::Away, Role::Keeper),
            kit_color(Team::Away, Role::Outfield)
        );
    }
}
