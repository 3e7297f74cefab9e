//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep, sanitized per frame
//! - Seeded RNG only (spawner)
//! - No rendering, storage or platform dependencies

pub mod avatar;
pub mod collision;
pub mod hazard;
pub mod spawner;
pub mod state;
pub mod tick;

pub use avatar::{Ability, Avatar, DashState};
pub use collision::{Circle, Rect, rect_circle_intersects};
pub use hazard::{AreaPhase, Hazard, HazardKind};
pub use spawner::{Edge, Spawner};
pub use state::{Arena, GameEvent, GamePhase, GameState};
pub use tick::tick;
