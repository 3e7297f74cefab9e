//! Dodge Arena headless driver
//!
//! Runs the simulation at a fixed 60 Hz with a simple scripted pilot, logging
//! each run. Rendering and real input belong to the host platform; this binary
//! only exercises the core.
//!
//! Usage: `dodge-arena [classic|themed] [seed]` (set `RUST_LOG=info` for output)

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use dodge_arena::persistence::FileStore;
    use dodge_arena::renderer::RenderCommand;
    use dodge_arena::sim::{Arena, GameEvent, GamePhase, GameState};
    use dodge_arena::tuning::{MovementPolicy, Preset};
    use dodge_arena::{InputSnapshot, Key, Simulation};
    use glam::Vec2;

    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Runs to play before exiting
    const RUNS: u32 = 3;
    /// Upper bound per run so a lucky pilot cannot loop forever
    const MAX_FRAMES_PER_RUN: u32 = 60 * 600;
    /// Hazards closer than this make the pilot react
    const DANGER_RADIUS: f32 = 160.0;

    pub fn run() {
        env_logger::init();

        let mut args = std::env::args().skip(1);
        let preset = args
            .next()
            .and_then(|s| Preset::from_str(&s))
            .unwrap_or_default();
        let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

        let store = FileStore::new(std::env::temp_dir().join("dodge-arena-highscore.json"));
        let mut sim = Simulation::new(preset.tuning(), Arena::default(), store, seed);
        log::info!("Dodge Arena ({}) seed {seed}", preset.as_str());

        let mut input = InputSnapshot::new();
        for run in 1..=RUNS {
            input.primary_click = true;
            let mut frames = 0;
            loop {
                for event in sim.update(FRAME_DT, &mut input) {
                    if let GameEvent::GameOver { score } = event {
                        log::info!("Run {run}: survived {score:.1}s");
                    }
                }
                if sim.phase() == GamePhase::GameOver || frames >= MAX_FRAMES_PER_RUN {
                    break;
                }
                pilot(sim.state(), &mut input);
                frames += 1;
            }
        }

        let hud = sim
            .draw()
            .into_iter()
            .filter_map(|c| match c {
                RenderCommand::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{hud}");
        println!("High score: {}", sim.high_score());
    }

    /// Steer away from the nearest threat and burn abilities when it gets close
    fn pilot(state: &GameState, input: &mut InputSnapshot) {
        input.held_keys.clear();
        input.pointer_down = false;

        let me = state.avatar.center();
        let threat = state
            .hazards
            .iter()
            .map(|h| (h, h.pos.distance(me) - h.radius))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((hazard, distance)) = threat else {
            return;
        };
        if distance > DANGER_RADIUS {
            return;
        }

        // Sidestep perpendicular to the threat, biased toward the arena center
        let away = (me - hazard.pos).normalize_or_zero();
        let side = away.perp();
        let toward_center = (state.arena.center() - me).normalize_or_zero();
        let escape = if side.dot(toward_center) >= 0.0 { side } else { -side };
        let goal = me + (escape + away * 0.5).normalize_or_zero() * 120.0;

        match state.avatar.movement {
            MovementPolicy::Keys => press_toward(input, goal - me),
            MovementPolicy::SeekPointer => input.pointer_down = true,
        }
        input.pointer = goal;

        if distance < DANGER_RADIUS / 2.0 {
            input.press(Key::Dash);
        }
        if distance < DANGER_RADIUS / 4.0 {
            input.press(Key::Flash);
        }
    }

    fn press_toward(input: &mut InputSnapshot, dir: Vec2) {
        if dir.x > 0.3 {
            input.press(Key::Right);
        } else if dir.x < -0.3 {
            input.press(Key::Left);
        }
        if dir.y > 0.3 {
            input.press(Key::Down);
        } else if dir.y < -0.3 {
            input.press(Key::Up);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the library directly
}
