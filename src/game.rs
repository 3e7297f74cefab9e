//! Host-facing simulation object
//!
//! The host constructs one [`Simulation`] and, once per frame, calls
//! [`Simulation::update`] with the elapsed time and a fresh input snapshot,
//! then [`Simulation::draw`] to get the frame's render commands.

use crate::input::InputSnapshot;
use crate::persistence::HighScoreStore;
use crate::renderer::{RenderCommand, build_draw_list};
use crate::sim::{Arena, GameEvent, GamePhase, GameState, tick};
use crate::tuning::Tuning;

pub struct Simulation<S: HighScoreStore> {
    state: GameState,
    tuning: Tuning,
    store: S,
}

impl<S: HighScoreStore> Simulation<S> {
    /// New simulation in the menu, with the high score read from `store`
    pub fn new(tuning: Tuning, arena: Arena, store: S, seed: u64) -> Self {
        let high_score = store.get_high_score();
        log::info!(
            "Simulation ready: {}x{} arena, high score {}",
            arena.width,
            arena.height,
            high_score
        );
        Self {
            state: GameState::new(&tuning, arena, high_score, seed),
            tuning,
            store,
        }
    }

    /// Advance one frame. Consumes the snapshot's one-shot flags.
    pub fn update(&mut self, dt: f32, input: &mut InputSnapshot) -> Vec<GameEvent> {
        tick(&mut self.state, input, dt);
        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::NewHighScore { high_score } = event {
                self.store.set_high_score(*high_score);
            }
        }
        events
    }

    pub fn draw(&self) -> Vec<RenderCommand> {
        build_draw_list(&self.state, &self.tuning.theme)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> f32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts that script scenarios (tests, replays)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::Hazard;

    const DT: f32 = 1.0 / 60.0;

    fn calm() -> Tuning {
        let mut tuning = Tuning::classic();
        tuning.spawner.base_speed = 10.0;
        tuning.spawner.speed_per_score = 0.0;
        tuning.spawner.area_chance_per_frame = 0.0;
        tuning
    }

    fn click() -> InputSnapshot {
        InputSnapshot {
            primary_click: true,
            ..Default::default()
        }
    }

    fn kill(sim: &mut Simulation<MemoryStore>) {
        let center = sim.state().avatar.center();
        let hazards = sim.tuning().hazards.clone();
        sim.state_mut()
            .hazards
            .push(Hazard::linear(center, center + glam::Vec2::Y, 1.0, &hazards));
    }

    #[test]
    fn test_full_run_persists_record() {
        let mut sim = Simulation::new(calm(), Arena::default(), MemoryStore::with_high_score(3), 9);
        assert_eq!(sim.phase(), GamePhase::Menu);
        assert_eq!(sim.high_score(), 3);

        assert_eq!(sim.update(DT, &mut click()), vec![GameEvent::Started]);
        assert_eq!(sim.phase(), GamePhase::Playing);

        let mut idle = InputSnapshot::new();
        for _ in 0..300 {
            sim.update(DT, &mut idle);
        }
        assert!((sim.score() - 5.0).abs() < 1e-3);
        assert_eq!(sim.state().avatar.health, 1);

        kill(&mut sim);
        let events = sim.update(DT, &mut idle);
        assert_eq!(sim.phase(), GamePhase::GameOver);
        assert!(events.contains(&GameEvent::NewHighScore { high_score: 5 }));
        assert_eq!(sim.store().get_high_score(), 5);
        assert_eq!(sim.store().writes, 1);
    }

    #[test]
    fn test_no_write_when_record_stands() {
        let mut sim = Simulation::new(calm(), Arena::default(), MemoryStore::with_high_score(100), 9);
        sim.update(DT, &mut click());
        kill(&mut sim);
        sim.update(DT, &mut InputSnapshot::new());
        assert_eq!(sim.phase(), GamePhase::GameOver);
        assert_eq!(sim.store().writes, 0);
        assert_eq!(sim.high_score(), 100);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut sim = Simulation::new(calm(), Arena::default(), MemoryStore::new(), 9);
        sim.update(DT, &mut click());
        for _ in 0..30 {
            sim.update(DT, &mut InputSnapshot::new());
        }
        kill(&mut sim);
        sim.update(DT, &mut InputSnapshot::new());
        assert_eq!(sim.phase(), GamePhase::GameOver);

        let events = sim.update(DT, &mut click());
        assert_eq!(events, vec![GameEvent::Restarted]);
        let state = sim.state();
        assert_eq!(state.score, 0.0);
        assert_eq!(state.avatar.pos, state.avatar.spawn_pos());
        assert_eq!(state.avatar.health, 1);
        assert!(state.avatar.dash.timer >= state.avatar.dash.cooldown);
        assert!(state.avatar.flash.timer >= state.avatar.flash.cooldown);
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_draw_follows_phase() {
        let mut sim = Simulation::new(Tuning::themed(), Arena::default(), MemoryStore::new(), 1);
        assert_eq!(sim.draw().len(), 1);
        sim.update(DT, &mut click());
        assert!(matches!(sim.draw()[0], RenderCommand::Avatar { .. }));
    }
}
