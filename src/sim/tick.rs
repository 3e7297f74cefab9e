//! Per-frame simulation step
//!
//! Drives the Menu -> Playing -> GameOver -> Playing loop.

use super::collision::rect_circle_intersects;
use super::state::{GameEvent, GamePhase, GameState};
use crate::input::InputSnapshot;
use crate::sanitize_dt;

/// Advance the game by one frame of `dt` seconds.
///
/// The primary-action edge on `input` is consumed whatever the phase, so a
/// single click can cause at most one transition.
pub fn tick(state: &mut GameState, input: &mut InputSnapshot, dt: f32) {
    let dt = sanitize_dt(dt);
    let clicked = input.consume_primary();

    match state.phase {
        GamePhase::Menu => {
            if clicked {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Started);
                log::info!("Run started");
            }
        }
        GamePhase::Playing => step_playing(state, input, dt),
        GamePhase::GameOver => {
            if clicked {
                state.reset_run();
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Restarted);
                log::info!("Run restarted");
            }
        }
    }
}

fn step_playing(state: &mut GameState, input: &InputSnapshot, dt: f32) {
    state.score += dt;

    state.avatar.update(dt, input, &state.arena);
    state
        .spawner
        .update(dt, state.score, &state.avatar, &state.arena, &mut state.hazards);

    let bounds = state.avatar.bounds();
    for hazard in &mut state.hazards {
        hazard.update(dt, &state.arena);
        if hazard.is_damaging() && rect_circle_intersects(&bounds, &hazard.circle()) {
            state.avatar.take_damage();
        }
    }

    state.hazards.retain(|h| h.active);

    if !state.avatar.is_alive() {
        end_run(state);
    }
}

fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!(
        "Game over after {:.1}s ({} hazards live)",
        state.score,
        state.hazards.len()
    );

    if state.score > state.high_score as f32 {
        state.high_score = state.score.floor() as u32;
        state.events.push(GameEvent::NewHighScore {
            high_score: state.high_score,
        });
        log::info!("New high score: {}", state.high_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::sim::hazard::{AreaPhase, Hazard};
    use crate::sim::state::Arena;
    use crate::tuning::Tuning;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    /// Hazards too slow to reach the center within the test windows
    fn calm_tuning() -> Tuning {
        let mut tuning = Tuning::classic();
        tuning.spawner.base_speed = 10.0;
        tuning.spawner.speed_per_score = 0.0;
        tuning.spawner.area_chance_per_frame = 0.0;
        tuning
    }

    fn playing_state(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning, Arena::default(), 0, 42);
        let mut click = InputSnapshot {
            primary_click: true,
            ..Default::default()
        };
        tick(&mut state, &mut click, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_menu_waits_for_click() {
        let mut state = GameState::new(&Tuning::classic(), Arena::default(), 0, 1);
        let mut input = InputSnapshot::new();
        for _ in 0..10 {
            tick(&mut state, &mut input, DT);
        }
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0.0);

        input.primary_click = true;
        tick(&mut state, &mut input, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!input.primary_click);
        // Click frame does not count as play time
        assert_eq!(state.score, 0.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_survive_then_get_hit() {
        let tuning = calm_tuning();
        let mut state = playing_state(&tuning);
        let mut input = InputSnapshot::new();
        for _ in 0..300 {
            tick(&mut state, &mut input, DT);
        }
        assert!((state.score - 5.0).abs() < 1e-3);
        assert_eq!(state.avatar.health, 1);
        assert_eq!(state.phase, GamePhase::Playing);

        let center = state.avatar.center();
        state.hazards.push(Hazard::linear(
            center,
            center + Vec2::X,
            10.0,
            &tuning.hazards,
        ));
        tick(&mut state, &mut input, DT);
        assert_eq!(state.avatar.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 5);
    }

    #[test]
    fn test_warning_area_is_harmless() {
        let tuning = calm_tuning();
        let mut state = playing_state(&tuning);
        state.spawner.spawn_timer = -100.0;
        state
            .hazards
            .push(Hazard::area(state.avatar.center(), &tuning.hazards));

        let mut input = InputSnapshot::new();
        // Just short of the warning window
        for _ in 0..55 {
            tick(&mut state, &mut input, DT);
        }
        assert_eq!(state.hazards[0].phase(), Some(AreaPhase::Warning));
        assert_eq!(state.avatar.health, 1);

        for _ in 0..10 {
            tick(&mut state, &mut input, DT);
        }
        assert_eq!(state.avatar.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_resets_run() {
        let tuning = calm_tuning();
        let mut state = playing_state(&tuning);
        let mut input = InputSnapshot::new();
        input.press(Key::Left);
        input.press(Key::Dash);
        for _ in 0..120 {
            tick(&mut state, &mut input, DT);
        }
        state.avatar.take_damage();
        tick(&mut state, &mut input, DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen while game over
        let score = state.score;
        tick(&mut state, &mut input, DT);
        assert_eq!(state.score, score);

        input.primary_click = true;
        tick(&mut state, &mut input, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.avatar.pos, state.avatar.spawn_pos());
        assert_eq!(state.avatar.health, 1);
        assert!(state.avatar.dash.is_ready() && state.avatar.flash.is_ready());
        assert!(state.hazards.is_empty());

        // The same click is gone: another frame keeps playing
        tick(&mut state, &mut input, DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_high_score_only_grows() {
        let tuning = calm_tuning();
        let mut state = GameState::new(&tuning, Arena::default(), 50, 3);
        state.phase = GamePhase::Playing;
        state.score = 10.0;
        state.avatar.take_damage();
        tick(&mut state, &mut InputSnapshot::new(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 50);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::NewHighScore { .. }))
        );
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let tuning = calm_tuning();
        let mut state = playing_state(&tuning);
        let mut input = InputSnapshot::new();
        input.press(Key::Right);
        let pos = state.avatar.pos;
        tick(&mut state, &mut input, f32::NAN);
        tick(&mut state, &mut input, -1.0);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.avatar.pos, pos);
    }

    #[test]
    fn test_bad_dt_spawns_nothing() {
        let mut tuning = calm_tuning();
        tuning.spawner.area_chance_per_frame = 1.0;
        let mut state = playing_state(&tuning);
        state.score = 11.0;
        let mut input = InputSnapshot::new();
        tick(&mut state, &mut input, f32::NAN);
        tick(&mut state, &mut input, -1.0);
        assert!(state.hazards.is_empty());
        assert_eq!(state.score, 11.0);
    }

    #[test]
    fn test_inactive_hazards_are_purged() {
        let tuning = calm_tuning();
        let mut state = playing_state(&tuning);
        state.hazards.push(Hazard::linear(
            Vec2::new(-30.0, 100.0),
            Vec2::new(-100.0, 100.0),
            100.0,
            &tuning.hazards,
        ));
        tick(&mut state, &mut InputSnapshot::new(), DT);
        assert!(state.hazards.is_empty());
    }
}
