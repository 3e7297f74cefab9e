//! Backend-agnostic render output
//!
//! `draw_list` turns a [`crate::sim::GameState`] into a flat list of
//! [`RenderCommand`]s. Whatever draws pixels (canvas, wgpu, terminal) only has
//! to know these shapes.

pub mod draw_list;

pub use draw_list::build_draw_list;

use glam::Vec2;
use serde::Serialize;

use crate::sim::Rect;
use crate::tuning::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderCommand {
    /// Label anchored at `pos` (vertically centered)
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
        align: TextAlign,
    },
    /// The player's box
    Avatar {
        rect: Rect,
        color: Color,
        /// 1.0 alive, 0.0 dead
        health_ratio: f32,
    },
    /// Round linear hazard
    Orb { center: Vec2, radius: f32, color: Color },
    /// Oriented linear hazard, `angle` in radians along its heading
    Bolt {
        center: Vec2,
        length: f32,
        width: f32,
        angle: f32,
        color: Color,
    },
    /// Area hazard still in its warning phase
    Ring {
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Color,
    },
    /// Area hazard dealing damage
    Disc { center: Vec2, radius: f32, color: Color },
    /// Ability slot with its key label and cooldown state
    AbilityIcon {
        center: Vec2,
        size: f32,
        label: String,
        ready: bool,
        /// Seconds until ready, 0 when ready
        remaining: f32,
    },
}

impl RenderCommand {
    pub(crate) fn text(text: impl Into<String>, pos: Vec2, size: f32, color: Color) -> Self {
        RenderCommand::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Center,
        }
    }

    pub(crate) fn text_left(text: impl Into<String>, pos: Vec2, size: f32, color: Color) -> Self {
        RenderCommand::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Left,
        }
    }
}
