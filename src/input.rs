//! Normalized per-frame input
//!
//! The host translates platform events into an [`InputSnapshot`] and hands it
//! to [`crate::Simulation::update`] once per frame. The simulation only reads
//! it, except for clearing one-shot flags it has consumed.

use std::collections::HashSet;

use glam::Vec2;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Dash,
    Flash,
}

impl Key {
    /// Map a platform key name (`KeyboardEvent.key` style) to a logical key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" | "arrowup" => Some(Key::Up),
            "s" | "arrowdown" => Some(Key::Down),
            "a" | "arrowleft" => Some(Key::Left),
            "d" | "arrowright" => Some(Key::Right),
            "e" => Some(Key::Dash),
            "f" => Some(Key::Flash),
            _ => None,
        }
    }
}

/// Input state for a single update
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub held_keys: HashSet<Key>,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    /// Primary pointer button currently held
    pub pointer_down: bool,
    /// Primary pointer button went down since the last update (one-shot)
    pub primary_click: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held_keys.contains(&key)
    }

    pub fn press(&mut self, key: Key) {
        self.held_keys.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held_keys.remove(&key);
    }

    /// Direction from held movement keys, normalized so diagonals are not faster
    pub fn move_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.is_held(Key::Up) {
            axis.y -= 1.0;
        }
        if self.is_held(Key::Down) {
            axis.y += 1.0;
        }
        if self.is_held(Key::Left) {
            axis.x -= 1.0;
        }
        if self.is_held(Key::Right) {
            axis.x += 1.0;
        }
        axis.normalize_or_zero()
    }

    /// Take the primary-action edge, clearing it so it fires once
    pub fn consume_primary(&mut self) -> bool {
        std::mem::take(&mut self.primary_click)
    }
}
