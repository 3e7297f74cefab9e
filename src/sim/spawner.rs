//! Hazard spawner with score-driven difficulty

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::avatar::Avatar;
use super::hazard::Hazard;
use super::state::Arena;
use crate::tuning::{HazardTuning, SpawnerTuning};

/// Arena edge a linear hazard enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

#[derive(Debug, Clone)]
pub struct Spawner {
    pub tuning: SpawnerTuning,
    pub hazard_tuning: HazardTuning,
    /// Interval in effect this frame, derived from score
    pub spawn_interval: f32,
    /// Seconds since the last spawn tick
    pub spawn_timer: f32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(tuning: SpawnerTuning, hazard_tuning: HazardTuning, seed: u64) -> Self {
        Self {
            spawn_interval: tuning.base_interval,
            spawn_timer: 0.0,
            tuning,
            hazard_tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn interval for a score: shrinks linearly, never below the floor
    pub fn interval_for(tuning: &SpawnerTuning, score: f32) -> f32 {
        (tuning.base_interval - score / tuning.score_divisor).max(tuning.min_interval)
    }

    /// Linear hazard speed for a score
    pub fn speed_for(tuning: &SpawnerTuning, score: f32) -> f32 {
        tuning.base_speed + score * tuning.speed_per_score
    }

    pub fn update(
        &mut self,
        dt: f32,
        score: f32,
        avatar: &Avatar,
        arena: &Arena,
        hazards: &mut Vec<Hazard>,
    ) {
        // A rejected frame must not roll for hazards
        if dt <= 0.0 {
            return;
        }
        self.spawn_timer += dt;
        self.spawn_interval = Self::interval_for(&self.tuning, score);

        if self.spawn_timer >= self.spawn_interval {
            self.spawn_timer = 0.0;
            hazards.push(self.spawn_linear(score, avatar, arena));

            if score > self.tuning.double_spawn_score
                && self.rng.random_bool(self.tuning.double_spawn_chance.clamp(0.0, 1.0))
            {
                hazards.push(self.spawn_linear(score, avatar, arena));
            }
        }

        if score > self.tuning.area_min_score
            && self.rng.random_bool(self.tuning.area_chance_per_frame.clamp(0.0, 1.0))
        {
            log::debug!("area hazard at {:?} (score {:.1})", avatar.center(), score);
            hazards.push(Hazard::area(avatar.center(), &self.hazard_tuning));
        }
    }

    fn spawn_linear(&mut self, score: f32, avatar: &Avatar, arena: &Arena) -> Hazard {
        let edge = Edge::ALL[self.rng.random_range(0..Edge::ALL.len())];
        let along: f32 = self.rng.random();
        let start = self.edge_point(edge, along, arena);
        let speed = Self::speed_for(&self.tuning, score);
        log::trace!("linear hazard from {:?} ({:?}) at {:.0}px/s", start, edge, speed);
        Hazard::linear(start, avatar.pos, speed, &self.hazard_tuning)
    }

    /// Point `along` (0..1) the given edge, pushed `edge_margin` outside the arena
    fn edge_point(&self, edge: Edge, along: f32, arena: &Arena) -> Vec2 {
        let m = self.tuning.edge_margin;
        match edge {
            Edge::Top => Vec2::new(along * arena.width, -m),
            Edge::Right => Vec2::new(arena.width + m, along * arena.height),
            Edge::Bottom => Vec2::new(along * arena.width, arena.height + m),
            Edge::Left => Vec2::new(-m, along * arena.height),
        }
    }

    pub fn reset(&mut self) {
        self.spawn_interval = self.tuning.base_interval;
        self.spawn_timer = 0.0;
    }
}
