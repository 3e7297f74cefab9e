//! Hazards the avatar has to dodge
//!
//! Two variants share one lifecycle: they are created active, advance on their
//! own each frame, and are dropped by the game loop once inactive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::state::Arena;
use crate::direction_or_fallback;
use crate::tuning::{HazardShape, HazardTuning};

/// Phase of an area hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaPhase {
    /// Telegraph only, harmless
    Warning,
    /// Damages on overlap
    Active,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Skillshot flying in a fixed direction
    Linear {
        vel: Vec2,
        shape: HazardShape,
    },
    /// Delayed blast on a fixed spot
    AreaEffect {
        phase: AreaPhase,
        elapsed: f32,
        warning_duration: f32,
        active_duration: f32,
        warning_alpha_floor: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
    pub kind: HazardKind,
}

impl Hazard {
    /// Projectile from `start` toward `target`; the heading never changes afterwards.
    pub fn linear(start: Vec2, target: Vec2, speed: f32, tuning: &HazardTuning) -> Self {
        let dir = direction_or_fallback(start, target);
        Self {
            pos: start,
            radius: tuning.linear_radius,
            active: true,
            kind: HazardKind::Linear {
                vel: dir * speed,
                shape: tuning.linear_shape,
            },
        }
    }

    pub fn area(center: Vec2, tuning: &HazardTuning) -> Self {
        Self {
            pos: center,
            radius: tuning.area_radius,
            active: true,
            kind: HazardKind::AreaEffect {
                phase: AreaPhase::Warning,
                elapsed: 0.0,
                warning_duration: tuning.warning_duration,
                active_duration: tuning.active_duration,
                warning_alpha_floor: tuning.warning_alpha_floor,
            },
        }
    }

    pub fn update(&mut self, dt: f32, arena: &Arena) {
        if !self.active {
            return;
        }
        match &mut self.kind {
            HazardKind::Linear { vel, .. } => {
                self.pos += *vel * dt;
                if arena.circle_exited(self.pos, self.radius, *vel) {
                    self.active = false;
                }
            }
            HazardKind::AreaEffect {
                phase,
                elapsed,
                warning_duration,
                active_duration,
                ..
            } => {
                *elapsed += dt;
                if *phase == AreaPhase::Warning && *elapsed >= *warning_duration {
                    *phase = AreaPhase::Active;
                }
                if *phase == AreaPhase::Active && *elapsed >= *warning_duration + *active_duration
                {
                    self.active = false;
                }
            }
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Whether an overlap with this hazard right now hurts
    pub fn is_damaging(&self) -> bool {
        self.active
            && match &self.kind {
                HazardKind::Linear { .. } => true,
                HazardKind::AreaEffect { phase, .. } => *phase == AreaPhase::Active,
            }
    }

    /// Heading of a linear hazard in radians; area hazards have none
    pub fn orientation(&self) -> Option<f32> {
        match &self.kind {
            HazardKind::Linear { vel, .. } => Some(vel.y.atan2(vel.x)),
            HazardKind::AreaEffect { .. } => None,
        }
    }

    pub fn phase(&self) -> Option<AreaPhase> {
        match &self.kind {
            HazardKind::Linear { .. } => None,
            HazardKind::AreaEffect { phase, .. } => Some(*phase),
        }
    }

    /// Telegraph intensity: lerps from the floor to 1.0 across the warning window
    pub fn warning_alpha(&self) -> f32 {
        match &self.kind {
            HazardKind::AreaEffect {
                phase: AreaPhase::Warning,
                elapsed,
                warning_duration,
                warning_alpha_floor,
                ..
            } => {
                let t = (*elapsed / *warning_duration).clamp(0.0, 1.0);
                warning_alpha_floor + (1.0 - warning_alpha_floor) * t
            }
            _ => 1.0,
        }
    }
}
