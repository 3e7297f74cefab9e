//! Per-phase draw list construction

use glam::Vec2;

use super::RenderCommand;
use crate::sim::{AreaPhase, GamePhase, GameState, Hazard, HazardKind};
use crate::tuning::{Color, HazardShape, Theme};

/// Telegraph ring stroke width
const RING_WIDTH: f32 = 4.0;
/// Alpha of an area hazard while it damages
const ACTIVE_AREA_ALPHA: f32 = 0.8;
/// Ability icon edge length
const ICON_SIZE: f32 = 60.0;
/// Horizontal distance of each ability icon from the arena center
const ICON_SPACING: f32 = 120.0;

/// Everything to draw this frame, back to front
pub fn build_draw_list(state: &GameState, theme: &Theme) -> Vec<RenderCommand> {
    let center = state.arena.center();
    match state.phase {
        GamePhase::Menu => vec![RenderCommand::text(
            theme.title.clone(),
            center,
            60.0,
            theme.text_color,
        )],
        GamePhase::Playing => playing(state, theme),
        GamePhase::GameOver => vec![
            RenderCommand::text(
                theme.game_over.clone(),
                center + Vec2::new(0.0, -60.0),
                80.0,
                theme.accent_color,
            ),
            RenderCommand::text(
                format!("Score: {}", state.score.floor() as u32),
                center + Vec2::new(0.0, 10.0),
                40.0,
                theme.text_color,
            ),
            RenderCommand::text(
                format!("High Score: {}", state.high_score),
                center + Vec2::new(0.0, 60.0),
                30.0,
                theme.muted_color,
            ),
            RenderCommand::text(
                theme.restart_prompt.clone(),
                center + Vec2::new(0.0, 120.0),
                30.0,
                theme.text_color,
            ),
        ],
    }
}

fn playing(state: &GameState, theme: &Theme) -> Vec<RenderCommand> {
    let avatar = &state.avatar;
    let mut out = Vec::with_capacity(state.hazards.len() + 5);

    out.push(RenderCommand::Avatar {
        rect: avatar.bounds(),
        color: theme.avatar_color,
        health_ratio: avatar.health as f32,
    });

    out.extend(state.hazards.iter().filter(|h| h.active).map(|h| hazard(h, theme.hazard_color)));

    out.push(RenderCommand::text_left(
        format!("Score: {}", state.score.floor() as u32),
        Vec2::new(20.0, 40.0),
        30.0,
        theme.text_color,
    ));
    out.push(RenderCommand::text_left(
        format!("High Score: {}", state.high_score),
        Vec2::new(20.0, 80.0),
        20.0,
        theme.muted_color,
    ));

    let icon_y = state.arena.height - 40.0;
    let mid = state.arena.width / 2.0;
    for (x, label, ability) in [
        (mid - ICON_SPACING, &theme.dash_label, &avatar.dash),
        (mid + ICON_SPACING, &theme.flash_label, &avatar.flash),
    ] {
        out.push(RenderCommand::AbilityIcon {
            center: Vec2::new(x, icon_y),
            size: ICON_SIZE,
            label: label.clone(),
            ready: ability.is_ready(),
            remaining: ability.remaining(),
        });
    }

    out
}

fn hazard(h: &Hazard, color: Color) -> RenderCommand {
    match &h.kind {
        HazardKind::Linear { vel, shape } => match shape {
            HazardShape::Orb => RenderCommand::Orb {
                center: h.pos,
                radius: h.radius,
                color,
            },
            HazardShape::Bolt { length, width } => RenderCommand::Bolt {
                center: h.pos,
                length: *length,
                width: *width,
                angle: vel.y.atan2(vel.x),
                color,
            },
        },
        HazardKind::AreaEffect { phase, .. } => match phase {
            AreaPhase::Warning => RenderCommand::Ring {
                center: h.pos,
                radius: h.radius,
                line_width: RING_WIDTH,
                color: with_alpha(color, h.warning_alpha()),
            },
            AreaPhase::Active => RenderCommand::Disc {
                center: h.pos,
                radius: h.radius,
                color: with_alpha(color, ACTIVE_AREA_ALPHA),
            },
        },
    }
}

#[inline]
fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Arena;
    use crate::tuning::Tuning;

    fn state(tuning: &Tuning) -> GameState {
        GameState::new(tuning, Arena::default(), 12, 1)
    }

    #[test]
    fn test_menu_is_one_centered_label() {
        let tuning = Tuning::classic();
        let list = build_draw_list(&state(&tuning), &tuning.theme);
        assert_eq!(list.len(), 1);
        assert!(matches!(
            &list[0],
            RenderCommand::Text { text, pos, .. } if text == "CLICK TO START" && *pos == Vec2::new(640.0, 360.0)
        ));
    }

    #[test]
    fn test_playing_lists_avatar_hazards_and_hud() {
        let tuning = Tuning::classic();
        let mut s = state(&tuning);
        s.phase = GamePhase::Playing;
        s.score = 3.7;
        s.hazards.push(Hazard::linear(Vec2::ZERO, Vec2::X, 100.0, &tuning.hazards));
        s.hazards.push(Hazard::area(Vec2::new(50.0, 50.0), &tuning.hazards));
        s.avatar.dash.timer = 1.0;

        let list = build_draw_list(&s, &tuning.theme);
        assert!(matches!(list[0], RenderCommand::Avatar { health_ratio, .. } if health_ratio == 1.0));
        assert!(matches!(list[1], RenderCommand::Orb { .. }));
        assert!(matches!(list[2], RenderCommand::Ring { color, .. } if (color[3] - 0.2).abs() < 1e-6));
        assert!(list.iter().any(|c| matches!(c, RenderCommand::Text { text, .. } if text == "Score: 3")));

        let icons: Vec<_> = list
            .iter()
            .filter_map(|c| match c {
                RenderCommand::AbilityIcon { ready, remaining, .. } => Some((*ready, *remaining)),
                _ => None,
            })
            .collect();
        assert_eq!(icons, vec![(false, 2.0), (true, 0.0)]);
    }

    #[test]
    fn test_themed_bolts_are_oriented() {
        let tuning = Tuning::themed();
        let mut s = state(&tuning);
        s.phase = GamePhase::Playing;
        s.hazards.push(Hazard::linear(Vec2::ZERO, Vec2::new(0.0, 10.0), 100.0, &tuning.hazards));
        let list = build_draw_list(&s, &tuning.theme);
        assert!(list.iter().any(|c| matches!(
            c,
            RenderCommand::Bolt { angle, .. } if (angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6
        )));
    }

    #[test]
    fn test_game_over_screen() {
        let tuning = Tuning::classic();
        let mut s = state(&tuning);
        s.phase = GamePhase::GameOver;
        s.score = 8.9;
        let texts: Vec<String> = build_draw_list(&s, &tuning.theme)
            .into_iter()
            .filter_map(|c| match c {
                RenderCommand::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec!["GAME OVER", "Score: 8", "High Score: 12", "Click to Play Again"]
        );
    }
}
