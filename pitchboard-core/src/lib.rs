pub mod animation;
pub mod board;
pub mod formation;
pub mod marker;
pub mod pitch;

pub use animation::{Animator, DEFAULT_MOVE_DURATION, MoveAnimation, lerp};
pub use board::Board;
pub use formation::{CatalogError, Formation, FormationCatalog, FormationKind, Placement};
pub use marker::{Marker, Role, Team, kit_color};
pub use pitch::{GoalFrame, Point, Polyline};
