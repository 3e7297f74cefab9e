//! The player's avatar: movement, Dash and Flash
//!
//! Position is the top-left corner of the avatar box. Abilities aim from the
//! box center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Arena;
use crate::direction_or_fallback;
use crate::input::{InputSnapshot, Key};
use crate::tuning::{AvatarTuning, MovementPolicy};

/// Cooldown-gated ability timer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub cooldown: f32,
    /// Seconds since last use, saturates at `cooldown`
    pub timer: f32,
    /// Distance (dash) or max range (flash)
    pub reach: f32,
}

impl Ability {
    pub fn new(cooldown: f32, reach: f32) -> Self {
        Self {
            cooldown,
            timer: cooldown,
            reach,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.timer >= self.cooldown
    }

    /// Seconds until ready (0 when ready)
    #[inline]
    pub fn remaining(&self) -> f32 {
        (self.cooldown - self.timer).max(0.0)
    }

    #[inline]
    fn advance(&mut self, dt: f32) {
        self.timer = (self.timer + dt).min(self.cooldown);
    }

    /// Start the cooldown if ready; returns whether the ability fired
    fn try_use(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.timer = 0.0;
        true
    }

    fn make_ready(&mut self) {
        self.timer = self.cooldown;
    }
}

/// Dash in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashState {
    /// Top-left position the dash ends at
    pub target: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub size: Vec2,
    /// 1 alive, 0 dead
    pub health: u8,
    pub speed: f32,
    pub movement: MovementPolicy,
    pub dash: Ability,
    pub dash_speed: f32,
    pub flash: Ability,
    /// Set while a dash is moving the avatar
    pub dashing: Option<DashState>,
    /// Center point the avatar walks toward (seek-to-pointer movement)
    pub seek_target: Option<Vec2>,
    spawn_pos: Vec2,
}

impl Avatar {
    /// Avatar centered in the arena with both abilities ready
    pub fn new(tuning: &AvatarTuning, arena: &Arena) -> Self {
        let size = Vec2::new(tuning.width, tuning.height);
        let spawn_pos = arena.center() - size / 2.0;
        Self {
            pos: spawn_pos,
            size,
            health: 1,
            speed: tuning.speed,
            movement: tuning.movement,
            dash: Ability::new(tuning.dash.cooldown, tuning.dash.reach),
            dash_speed: tuning.dash_speed,
            flash: Ability::new(tuning.flash.cooldown, tuning.flash.reach),
            dashing: None,
            seek_target: None,
            spawn_pos,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[inline]
    pub fn is_dashing(&self) -> bool {
        self.dashing.is_some()
    }

    pub fn spawn_pos(&self) -> Vec2 {
        self.spawn_pos
    }

    pub fn update(&mut self, dt: f32, input: &InputSnapshot, arena: &Arena) {
        self.dash.advance(dt);
        self.flash.advance(dt);

        if self.dashing.is_some() {
            self.advance_dash(dt);
            return;
        }

        match self.movement {
            MovementPolicy::Keys => {
                self.pos += input.move_axis() * self.speed * dt;
            }
            MovementPolicy::SeekPointer => {
                if input.pointer_down {
                    self.seek_target = Some(input.pointer);
                }
                self.advance_seek(dt);
            }
        }

        // Held keys fire as soon as the ability is ready
        if input.is_held(Key::Dash) {
            self.dash(input.pointer, arena);
        }
        if input.is_held(Key::Flash) {
            self.flash(input.pointer);
        }

        // A dash that just started leaves the box where it is this frame
        self.pos = arena.clamp_box(self.pos, self.size);
    }

    fn advance_seek(&mut self, dt: f32) {
        let Some(target) = self.seek_target else {
            return;
        };
        let to_target = target - self.center();
        let distance = to_target.length();
        let step = self.speed * dt;
        if distance <= step {
            self.pos = target - self.size / 2.0;
            self.seek_target = None;
        } else {
            self.pos += to_target / distance * step;
        }
    }

    fn advance_dash(&mut self, dt: f32) {
        let Some(DashState { target }) = self.dashing else {
            return;
        };
        let to_target = target - self.pos;
        let distance = to_target.length();
        let step = self.dash_speed * dt;
        if distance <= step {
            self.pos = target;
            self.dashing = None;
        } else {
            self.pos += to_target / distance * step;
        }
    }

    /// Start a dash of fixed length toward `aim`.
    ///
    /// The end point is kept inside the arena, so near a wall the dash is shorter.
    pub fn dash(&mut self, aim: Vec2, arena: &Arena) -> bool {
        if self.is_dashing() || !self.dash.try_use() {
            return false;
        }
        let dir = direction_or_fallback(self.center(), aim);
        let target = arena.clamp_box(self.pos + dir * self.dash.reach, self.size);
        self.dashing = Some(DashState { target });
        self.seek_target = None;
        log::trace!("dash from {:?} to {:?}", self.pos, target);
        true
    }

    /// Instant teleport toward `aim`, at most `flash.reach` away
    pub fn flash(&mut self, aim: Vec2) -> bool {
        if !self.flash.try_use() {
            return false;
        }
        let center = self.center();
        let offset = aim - center;
        let distance = offset.length();
        if distance <= self.flash.reach {
            self.pos = aim - self.size / 2.0;
        } else {
            self.pos += offset * (self.flash.reach / distance);
        }
        self.seek_target = None;
        log::trace!("flash from {:?} to {:?}", center, self.center());
        true
    }

    pub fn take_damage(&mut self) {
        self.health = 0;
    }

    pub fn reset(&mut self) {
        self.pos = self.spawn_pos;
        self.health = 1;
        self.dash.make_ready();
        self.flash.make_ready();
        self.dashing = None;
        self.seek_target = None;
    }
}
