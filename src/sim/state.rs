//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::hazard::Hazard;
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a click
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a click to restart
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Left the menu
    Started,
    /// Restarted after a game over
    Restarted,
    /// Run ended
    GameOver { score: f32 },
    /// The run beat the stored record
    NewHighScore { high_score: u32 },
}

/// Fixed-size play area with its origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a box's top-left so the whole box stays inside
    #[inline]
    pub fn clamp_box(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let max = (Vec2::new(self.width, self.height) - size).max(Vec2::ZERO);
        pos.clamp(Vec2::ZERO, max)
    }

    /// Fully outside on some side while moving further out on that side.
    ///
    /// Hazards spawn beyond the edge heading inward; those must not count.
    #[inline]
    pub fn circle_exited(&self, center: Vec2, radius: f32, vel: Vec2) -> bool {
        (center.x + radius < 0.0 && vel.x <= 0.0)
            || (center.x - radius > self.width && vel.x >= 0.0)
            || (center.y + radius < 0.0 && vel.y <= 0.0)
            || (center.y - radius > self.height && vel.y >= 0.0)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(crate::consts::ARENA_WIDTH, crate::consts::ARENA_HEIGHT)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Seconds survived in the current run
    pub score: f32,
    /// Best whole-second score seen so far
    pub high_score: u32,
    pub arena: Arena,
    pub avatar: Avatar,
    pub spawner: Spawner,
    /// Live hazards; order carries no meaning
    pub hazards: Vec<Hazard>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: &Tuning, arena: Arena, high_score: u32, seed: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0.0,
            high_score,
            arena,
            avatar: Avatar::new(&tuning.avatar, &arena),
            spawner: Spawner::new(tuning.spawner.clone(), tuning.hazards.clone(), seed),
            hazards: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Back to the start of a run (phase untouched)
    pub fn reset_run(&mut self) {
        self.avatar.reset();
        self.spawner.reset();
        self.hazards.clear();
        self.score = 0.0;
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_box() {
        let arena = Arena::new(100.0, 50.0);
        let size = Vec2::new(10.0, 10.0);
        assert_eq!(arena.clamp_box(Vec2::new(-5.0, 60.0), size), Vec2::new(0.0, 40.0));
        assert_eq!(arena.clamp_box(Vec2::new(95.0, 20.0), size), Vec2::new(90.0, 20.0));
    }

    #[test]
    fn test_circle_exited_needs_outward_motion() {
        let arena = Arena::new(100.0, 100.0);
        let spawn = Vec2::new(50.0, -20.0);
        assert!(!arena.circle_exited(spawn, 8.0, Vec2::new(0.0, 200.0)));
        assert!(arena.circle_exited(spawn, 8.0, Vec2::new(0.0, -200.0)));
        assert!(!arena.circle_exited(Vec2::new(50.0, 50.0), 8.0, Vec2::X));
        // Still overlapping the edge
        assert!(!arena.circle_exited(Vec2::new(-5.0, 50.0), 8.0, -Vec2::X));
        assert!(arena.circle_exited(Vec2::new(-9.0, 50.0), 8.0, -Vec2::X));
    }

    #[test]
    fn test_new_state_starts_in_menu() {
        let state = GameState::new(&Tuning::classic(), Arena::default(), 12, 1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.high_score, 12);
        assert!(state.hazards.is_empty());
    }
}
