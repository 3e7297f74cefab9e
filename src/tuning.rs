//! Game balance and cosmetic presets
//!
//! Both game variants (classic and themed) run the same simulation code; they
//! differ only in the values collected here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// How the avatar turns input into movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MovementPolicy {
    /// Held direction keys set the velocity directly
    #[default]
    Keys,
    /// Holding the pointer button sets a point the avatar walks toward
    SeekPointer,
}

/// Named preset selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    #[default]
    Classic,
    Themed,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Themed => "Themed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "themed" | "theme" => Some(Preset::Themed),
            _ => None,
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            Preset::Classic => Tuning::classic(),
            Preset::Themed => Tuning::themed(),
        }
    }
}

/// Cooldown and reach of one ability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityTuning {
    /// Seconds between uses
    pub cooldown: f32,
    /// Dash distance or flash max range (pixels)
    pub reach: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarTuning {
    pub width: f32,
    pub height: f32,
    /// Walking speed (pixels/s)
    pub speed: f32,
    pub movement: MovementPolicy,
    pub dash: AbilityTuning,
    /// Dash travel speed (pixels/s)
    pub dash_speed: f32,
    pub flash: AbilityTuning,
}

impl Default for AvatarTuning {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 30.0,
            speed: 350.0,
            movement: MovementPolicy::Keys,
            dash: AbilityTuning {
                cooldown: 3.0,
                reach: 200.0,
            },
            dash_speed: 1500.0,
            flash: AbilityTuning {
                cooldown: 15.0,
                reach: 450.0,
            },
        }
    }
}

/// Difficulty curve and spawn placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerTuning {
    /// Interval at score 0 (seconds)
    pub base_interval: f32,
    /// Interval floor (seconds)
    pub min_interval: f32,
    /// Score needed to shave one second off the interval
    pub score_divisor: f32,
    /// Linear hazard speed at score 0 (pixels/s)
    pub base_speed: f32,
    /// Extra speed per point of score
    pub speed_per_score: f32,
    /// How far outside the arena edge hazards appear
    pub edge_margin: f32,
    /// Score above which a second hazard may join a spawn tick
    pub double_spawn_score: f32,
    pub double_spawn_chance: f64,
    /// Score above which area hazards may appear
    pub area_min_score: f32,
    /// Chance per playing frame of dropping an area hazard on the avatar
    pub area_chance_per_frame: f64,
}

impl Default for SpawnerTuning {
    fn default() -> Self {
        Self {
            base_interval: 2.0,
            min_interval: 0.1,
            score_divisor: 30.0,
            base_speed: 200.0,
            speed_per_score: 4.0,
            edge_margin: 20.0,
            double_spawn_score: 20.0,
            double_spawn_chance: 0.3,
            area_min_score: 10.0,
            area_chance_per_frame: 0.002,
        }
    }
}

/// Drawn outline of a linear hazard. Collision always uses the radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HazardShape {
    Orb,
    /// Oriented rectangle along the velocity
    Bolt { length: f32, width: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    pub linear_radius: f32,
    pub linear_shape: HazardShape,
    pub area_radius: f32,
    /// Seconds of harmless telegraph
    pub warning_duration: f32,
    /// Seconds the area damages
    pub active_duration: f32,
    /// Telegraph ring alpha at the start of the warning
    pub warning_alpha_floor: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            linear_radius: 8.0,
            linear_shape: HazardShape::Orb,
            area_radius: 60.0,
            warning_duration: 1.0,
            active_duration: 0.3,
            warning_alpha_floor: 0.2,
        }
    }
}

/// Text and colors handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub title: String,
    pub game_over: String,
    pub restart_prompt: String,
    pub dash_label: String,
    pub flash_label: String,
    pub avatar_color: Color,
    pub hazard_color: Color,
    pub text_color: Color,
    pub accent_color: Color,
    pub muted_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "CLICK TO START".to_string(),
            game_over: "GAME OVER".to_string(),
            restart_prompt: "Click to Play Again".to_string(),
            dash_label: "E".to_string(),
            flash_label: "F".to_string(),
            avatar_color: rgb(0x4a, 0x90, 0xe2),
            hazard_color: rgb(0xff, 0x41, 0x36),
            text_color: [1.0, 1.0, 1.0, 1.0],
            accent_color: rgb(0xff, 0x41, 0x36),
            muted_color: rgb(0xaa, 0xaa, 0xaa),
        }
    }
}

/// Complete balance + cosmetic configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tuning {
    pub avatar: AvatarTuning,
    pub spawner: SpawnerTuning,
    pub hazards: HazardTuning,
    pub theme: Theme,
}

/// Rejected tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning value `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("tuning value `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("tuning value `{field}` must be a probability in 0..=1, got {value}")]
    NotAProbability { field: &'static str, value: f64 },
}

impl Tuning {
    /// Velocity-driven movement, round projectiles
    pub fn classic() -> Self {
        Self::default()
    }

    /// Seek-to-pointer movement, bolt projectiles, steeper curve
    pub fn themed() -> Self {
        Self {
            avatar: AvatarTuning {
                width: 32.0,
                height: 32.0,
                speed: 320.0,
                movement: MovementPolicy::SeekPointer,
                ..AvatarTuning::default()
            },
            spawner: SpawnerTuning {
                base_interval: 1.5,
                min_interval: 0.08,
                score_divisor: 40.0,
                base_speed: 260.0,
                speed_per_score: 5.0,
                ..SpawnerTuning::default()
            },
            hazards: HazardTuning {
                linear_radius: 10.0,
                linear_shape: HazardShape::Bolt {
                    length: 36.0,
                    width: 10.0,
                },
                area_radius: 70.0,
                ..HazardTuning::default()
            },
            theme: Theme {
                title: "CLICK TO ENTER THE RIFT".to_string(),
                game_over: "DEFEATED".to_string(),
                restart_prompt: "Click to try again".to_string(),
                avatar_color: rgb(0xc8, 0x9b, 0x3c),
                hazard_color: rgb(0x7b, 0x2c, 0xbf),
                accent_color: rgb(0xc8, 0x9b, 0x3c),
                ..Theme::default()
            },
        }
    }

    /// Parse a tuning override (missing fields take classic defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let checks = [
            ("avatar.width", self.avatar.width),
            ("avatar.height", self.avatar.height),
            ("avatar.speed", self.avatar.speed),
            ("avatar.dash.cooldown", self.avatar.dash.cooldown),
            ("avatar.dash_speed", self.avatar.dash_speed),
            ("avatar.flash.cooldown", self.avatar.flash.cooldown),
            ("spawner.base_interval", self.spawner.base_interval),
            ("spawner.min_interval", self.spawner.min_interval),
            ("spawner.score_divisor", self.spawner.score_divisor),
            ("spawner.base_speed", self.spawner.base_speed),
            ("hazards.linear_radius", self.hazards.linear_radius),
            ("hazards.area_radius", self.hazards.area_radius),
            ("hazards.warning_duration", self.hazards.warning_duration),
            ("hazards.active_duration", self.hazards.active_duration),
        ];
        for (field, value) in checks {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("spawner.speed_per_score", self.spawner.speed_per_score),
            ("spawner.edge_margin", self.spawner.edge_margin),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        let chances = [
            ("spawner.double_spawn_chance", self.spawner.double_spawn_chance),
            ("spawner.area_chance_per_frame", self.spawner.area_chance_per_frame),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::NotAProbability { field, value });
            }
        }
        Ok(())
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}
