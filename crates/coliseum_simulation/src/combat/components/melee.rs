//! Melee combat components.
//!
//! One `Combatant` state machine drives both sides of the duel: the player's
//! input and the enemy brain only differ in how they fill `FighterIntent`.

use bevy::prelude::*;

use crate::components::FighterIntent;
use crate::config::FighterTuning;

/// Progress slack so a swing of N equal frames ends on frame N despite f32 drift.
const PROGRESS_EPSILON: f32 = 1e-4;

// ============================================================================
// Directions & Poses
// ============================================================================

/// Directional label shared by attacks and guards.
///
/// A guard negates a swing only when both carry the same label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum SwingDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwingDirection {
    pub const ALL: [SwingDirection; 4] = [
        SwingDirection::Up,
        SwingDirection::Down,
        SwingDirection::Left,
        SwingDirection::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SwingDirection::Up => "up",
            SwingDirection::Down => "down",
            SwingDirection::Left => "left",
            SwingDirection::Right => "right",
        }
    }
}

/// Stance key handed to the rendering layer.
///
/// The core only picks the key; how a windup or a guard looks is the
/// renderer's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Reflect)]
pub enum Pose {
    #[default]
    Idle,
    /// Swing in progress
    Windup(SwingDirection),
    /// Guard raised
    Guard(SwingDirection),
    /// Health reached 0
    Fallen,
}

// ============================================================================
// Swing / Guard
// ============================================================================

/// One attack lifecycle (idle → windup → contact window → idle).
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Swing {
    pub direction: SwingDirection,
    /// Seconds since the swing started
    pub elapsed: f32,
    /// Total swing length (seconds)
    pub duration: f32,
    /// `min(elapsed / duration, 1)`
    pub progress: f32,
    /// Latch: damage already applied during the current contact window
    pub has_dealt_damage: bool,
    /// Latch: block feedback already emitted for this swing
    pub block_reported: bool,
}

impl Swing {
    pub fn new(direction: SwingDirection, duration: f32) -> Self {
        Self {
            direction,
            elapsed: 0.0,
            duration,
            progress: 0.0,
            has_dealt_damage: false,
            block_reported: false,
        }
    }

    /// Open interval check (`start < progress < end`).
    pub fn in_window(&self, window: (f32, f32)) -> bool {
        self.progress > window.0 && self.progress < window.1
    }
}

/// Raised guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct Guard {
    pub direction: SwingDirection,
}

// ============================================================================
// Combatant State Machine
// ============================================================================

/// What happened during one `Combatant::step`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    pub swing_started: Option<SwingDirection>,
    pub swing_finished: bool,
    pub guard_raised: Option<SwingDirection>,
    pub guard_lowered: bool,
}

/// Attack/guard lifecycle of one fighter.
///
/// # Invariants
/// - never swinging and guarding at the same time
/// - cooldowns are never negative
/// - `Swing::has_dealt_damage` is the only at-most-once-per-window guard
#[derive(Component, Clone, Debug, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Combatant {
    pub swing: Option<Swing>,
    pub guard: Option<Guard>,
    /// Seconds before a new swing may start
    pub attack_cooldown: f32,
    /// Seconds before a guard may be raised again
    pub block_cooldown: f32,
    pub pose: Pose,
}

impl Combatant {
    pub fn is_attacking(&self) -> bool {
        self.swing.is_some()
    }

    pub fn is_blocking(&self) -> bool {
        self.guard.is_some()
    }

    pub fn can_attack(&self) -> bool {
        self.swing.is_none() && self.attack_cooldown <= 0.0
    }

    pub fn can_block(&self) -> bool {
        self.swing.is_none() && self.block_cooldown <= 0.0
    }

    /// Label-equality check; no partial credit.
    pub fn is_blocking_attack(&self, direction: SwingDirection) -> bool {
        self.guard.is_some_and(|guard| guard.direction == direction)
    }

    pub fn attack_progress(&self) -> f32 {
        self.swing.as_ref().map_or(0.0, |swing| swing.progress)
    }

    /// Idle → Attacking. Drops a raised guard first (attacking preempts blocking).
    pub fn start_swing(&mut self, direction: SwingDirection, tuning: &FighterTuning) -> bool {
        if !self.can_attack() {
            return false;
        }
        if self.guard.is_some() {
            self.lower_guard(tuning.block_cooldown);
        }
        self.swing = Some(Swing::new(direction, tuning.attack_duration));
        self.pose = Pose::Windup(direction);
        true
    }

    /// Advance the swing clock; returns true when the swing just ended.
    pub fn advance_swing(&mut self, delta: f32, tuning: &FighterTuning) -> bool {
        let Some(swing) = self.swing.as_mut() else {
            return false;
        };

        swing.elapsed += delta;
        swing.progress = (swing.elapsed / swing.duration).min(1.0);

        if swing.progress >= 1.0 - PROGRESS_EPSILON {
            // Attacking → Idle
            self.swing = None;
            self.attack_cooldown = tuning.attack_cooldown;
            self.pose = Pose::Idle;
            return true;
        }
        false
    }

    /// Idle → Blocking (or switch guard direction without cooldown).
    pub fn raise_guard(&mut self, direction: SwingDirection) -> bool {
        if !self.can_block() {
            return false;
        }
        if self.guard.is_some_and(|guard| guard.direction == direction) {
            return false;
        }
        self.guard = Some(Guard { direction });
        self.pose = Pose::Guard(direction);
        true
    }

    /// Blocking → Idle.
    pub fn lower_guard(&mut self, block_cooldown: f32) -> bool {
        if self.guard.take().is_none() {
            return false;
        }
        self.block_cooldown = block_cooldown;
        if !matches!(self.pose, Pose::Fallen) {
            self.pose = Pose::Idle;
        }
        true
    }

    pub fn tick_cooldowns(&mut self, delta: f32) {
        self.attack_cooldown = (self.attack_cooldown - delta).max(0.0);
        self.block_cooldown = (self.block_cooldown - delta).max(0.0);
    }

    /// One frame of the shared machine: attack, then guard, then cooldowns.
    ///
    /// A swing started this frame is not advanced until the next one.
    pub fn step(&mut self, intent: &FighterIntent, tuning: &FighterTuning, delta: f32) -> StepReport {
        let mut report = StepReport::default();
        let had_guard = self.guard.is_some();

        // Attack lifecycle
        if self.swing.is_some() {
            report.swing_finished = self.advance_swing(delta, tuning);
        } else if let Some(direction) = intent.attack {
            if self.start_swing(direction, tuning) {
                report.swing_started = Some(direction);
            }
        }

        // Guard lifecycle
        if self.swing.is_some() || self.block_cooldown > 0.0 {
            self.lower_guard(tuning.block_cooldown);
        } else if let Some(direction) = intent.block {
            if self.raise_guard(direction) {
                report.guard_raised = Some(direction);
            }
        } else {
            self.lower_guard(tuning.block_cooldown);
        }

        report.guard_lowered = had_guard && self.guard.is_none();
        self.tick_cooldowns(delta);
        report
    }

    /// Dead is terminal: drop everything and show the fallen pose.
    pub fn fall(&mut self) {
        self.swing = None;
        self.guard = None;
        self.pose = Pose::Fallen;
    }

    /// Back to a fresh idle fighter (match restart).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
