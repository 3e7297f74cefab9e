//! Dodge Arena - survive an escalating stream of projectiles
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (avatar, hazards, spawner, collisions, game flow)
//! - `renderer`: Backend-agnostic render commands built from the simulation
//! - `input`: Normalized per-frame input snapshot
//! - `persistence`: High score storage port and adapters
//! - `tuning`: Data-driven game balance and cosmetic presets

pub mod game;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Simulation;
pub use input::{InputSnapshot, Key};
pub use persistence::{HighScoreStore, MemoryStore};
pub use tuning::Tuning;

use glam::Vec2;

/// Engine constants that are not part of the balance tuning
pub mod consts {
    /// Default arena width in pixels
    pub const ARENA_WIDTH: f32 = 1280.0;
    /// Default arena height in pixels
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Longest frame the simulation will integrate in one step (seconds).
    /// Anything longer (tab switch, debugger pause) is truncated.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Direction used when an aim vector has no length
    pub const FALLBACK_DIRECTION: glam::Vec2 = glam::Vec2::X;
}

/// Sanitize a host-supplied frame delta.
///
/// Non-finite and negative values become zero; large values are capped at
/// [`consts::MAX_FRAME_DT`].
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(consts::MAX_FRAME_DT)
}

/// Unit vector from `from` toward `to`, or the fallback direction when they coincide
#[inline]
pub fn direction_or_fallback(from: Vec2, to: Vec2) -> Vec2 {
    (to - from)
        .try_normalize()
        .unwrap_or(consts::FALLBACK_DIRECTION)
}
