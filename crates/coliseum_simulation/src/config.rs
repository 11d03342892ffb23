//! Duel tuning: every gameplay constant lives here.
//!
//! `DuelConfig::default()` is the canonical rule set. Hosts may override it from
//! a RON document (`DuelConfig::from_ron`); missing fields fall back to defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Which side of the resolver owns hit detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum HitResolution {
    /// Arbiter checks both swings every frame inside the hit window (25 dmg).
    #[default]
    Centralized,
    /// Each swing checks itself once, past the midpoint (10 dmg).
    SelfResolved,
}

/// Per-fighter constants (copied onto the entity at spawn).
///
/// No field-level defaults: a RON override must spell out the whole fighter,
/// otherwise an `enemy` block would silently inherit player numbers.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
pub struct FighterTuning {
    pub max_health: u32,
    /// Units per second
    pub move_speed: f32,
    /// Full swing length (seconds)
    pub attack_duration: f32,
    pub attack_cooldown: f32,
    pub block_cooldown: f32,
    /// Spawn / reset position, `[x, y, z]`
    pub start_position: [f32; 3],
}

impl FighterTuning {
    pub fn player() -> Self {
        Self {
            max_health: 100,
            move_speed: 5.0,
            attack_duration: 0.4,
            attack_cooldown: 0.2,
            block_cooldown: 0.1,
            start_position: [0.0, 0.0, 5.0],
        }
    }

    /// Slower on its feet, slower swing, longer guard recovery.
    pub fn enemy() -> Self {
        Self {
            max_health: 100,
            move_speed: 3.0,
            attack_duration: 0.5,
            attack_cooldown: 0.2,
            block_cooldown: 0.5,
            start_position: [0.0, 0.0, -5.0],
        }
    }

    pub fn start_translation(&self) -> Vec3 {
        Vec3::from_array(self.start_position)
    }
}

/// Enemy brain constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct AiTuning {
    pub decision_interval: f32,
    pub behavior_interval: f32,
    /// Below this distance the brain attacks or backs off
    pub close_range: f32,
    /// At or beyond this distance the brain always approaches
    pub far_range: f32,
    pub close_attack_chance: f64,
    pub mid_approach_chance: f64,
    pub mid_circle_chance: f64,
    /// Behavior timer weights: idle, approach, retreat, circle
    pub behavior_weights: [f64; 4],
    /// Per-frame chances
    pub random_attack_chance: f64,
    pub random_block_chance: f64,
    /// How long a random guard is held before it auto-releases (seconds)
    pub block_hold: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            decision_interval: 2.0,
            behavior_interval: 3.0,
            close_range: 3.0,
            far_range: 6.0,
            close_attack_chance: 0.7,
            mid_approach_chance: 0.3,
            mid_circle_chance: 0.6,
            behavior_weights: [0.3, 0.3, 0.2, 0.2],
            random_attack_chance: 0.02,
            random_block_chance: 0.01,
            block_hold: 1.0,
        }
    }
}

/// Hit arbitration constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct ResolverTuning {
    pub mode: HitResolution,
    /// Open interval of swing progress where centralized contact registers
    pub hit_window: (f32, f32),
    /// Strict `<` range for centralized contact
    pub melee_range: f32,
    pub centralized_damage: u32,
    /// Progress past which a self-resolved swing checks for contact
    pub self_check_progress: f32,
    /// Inclusive `<=` range for self-resolved contact
    pub self_hit_range: f32,
    pub self_resolved_damage: u32,
}

impl Default for ResolverTuning {
    fn default() -> Self {
        Self {
            mode: HitResolution::Centralized,
            hit_window: (0.4, 0.6),
            melee_range: 3.0,
            centralized_damage: 25,
            self_check_progress: 0.5,
            self_hit_range: 3.0,
            self_resolved_damage: 10,
        }
    }
}

/// Circular arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct ArenaConfig {
    /// Visual floor radius
    pub radius: f32,
    /// Fighters stay `inset` units inside the wall
    pub inset: f32,
    /// Nudge toward the centre on wall contact
    pub bounce_strength: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            inset: 1.0,
            bounce_strength: 0.3,
        }
    }
}

impl ArenaConfig {
    pub fn walkable_radius(&self) -> f32 {
        self.radius - self.inset
    }
}

/// All duel tuning in one resource.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct DuelConfig {
    pub player: FighterTuning,
    pub enemy: FighterTuning,
    pub ai: AiTuning,
    pub resolver: ResolverTuning,
    pub arena: ArenaConfig,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            player: FighterTuning::player(),
            enemy: FighterTuning::enemy(),
            ai: AiTuning::default(),
            resolver: ResolverTuning::default(),
            arena: ArenaConfig::default(),
        }
    }
}

/// Config parse / validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    NonPositive { field: &'static str, value: f32 },
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    EmptyHitWindow { start: f32, end: f32 },
    BadRanges { close: f32, far: f32 },
    ZeroHealth { side: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "Parse error: {}", message),
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be > 0 (got {})", field, value)
            }
            ConfigError::ProbabilityOutOfRange { field, value } => {
                write!(f, "{} must be within [0, 1] (got {})", field, value)
            }
            ConfigError::EmptyHitWindow { start, end } => {
                write!(f, "hit window ({}, {}) is empty or outside [0, 1]", start, end)
            }
            ConfigError::BadRanges { close, far } => {
                write!(f, "close range {} must be below far range {}", close, far)
            }
            ConfigError::ZeroHealth { side } => write!(f, "{}.max_health must be > 0", side),
        }
    }
}

impl std::error::Error for ConfigError {}

impl DuelConfig {
    pub fn fighter(&self, side: Side) -> &FighterTuning {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Parse a RON override and validate it.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
        let config: DuelConfig = options
            .from_str(source)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (side, fighter) in [("player", &self.player), ("enemy", &self.enemy)] {
            if fighter.max_health == 0 {
                return Err(ConfigError::ZeroHealth { side });
            }
            positive("move_speed", fighter.move_speed)?;
            positive("attack_duration", fighter.attack_duration)?;
            non_negative("attack_cooldown", fighter.attack_cooldown)?;
            non_negative("block_cooldown", fighter.block_cooldown)?;
        }

        positive("ai.decision_interval", self.ai.decision_interval)?;
        positive("ai.behavior_interval", self.ai.behavior_interval)?;
        positive("ai.block_hold", self.ai.block_hold)?;
        if self.ai.close_range >= self.ai.far_range {
            return Err(ConfigError::BadRanges {
                close: self.ai.close_range,
                far: self.ai.far_range,
            });
        }
        probability("ai.close_attack_chance", self.ai.close_attack_chance)?;
        probability("ai.mid_approach_chance", self.ai.mid_approach_chance)?;
        probability("ai.mid_circle_chance", self.ai.mid_circle_chance)?;
        probability("ai.random_attack_chance", self.ai.random_attack_chance)?;
        probability("ai.random_block_chance", self.ai.random_block_chance)?;
        for weight in self.ai.behavior_weights {
            probability("ai.behavior_weights", weight)?;
        }

        let (start, end) = self.resolver.hit_window;
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start >= end {
            return Err(ConfigError::EmptyHitWindow { start, end });
        }
        positive("resolver.melee_range", self.resolver.melee_range)?;
        positive("resolver.self_hit_range", self.resolver.self_hit_range)?;

        positive("arena.radius", self.arena.radius)?;
        positive("arena.walkable_radius", self.arena.walkable_radius())?;
        non_negative("arena.bounce_strength", self.arena.bounce_strength)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}
