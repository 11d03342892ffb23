//! Coliseum Duel Simulation Core
//!
//! Headless ECS simulation of a one-on-one melee duel on Bevy 0.16.
//!
//! - components: fighter identity, health, intent
//! - combat: shared combatant state machine, resolver, damage
//! - ai: enemy brain writing the same intent the player input writes
//! - movement: arena wall, locomotion, facing
//! - input: raw keys → player intent
//! - match_flow: start / restart / menu, winner
//!
//! Rendering and UI stay outside: they read `Transform`s and the events
//! re-exported here (`PoseChanged`, `HealthChanged`, `CombatFeedback`,
//! `BoundaryHit`, `MatchEnded`).

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod match_flow;
pub mod movement;

pub use ai::{AIPlugin, Behavior, EnemyBrain};
pub use combat::{
    CombatFeedback, CombatPlugin, Combatant, DamageDealt, FeedbackKind, FighterDied, HealthChanged,
    MeleeHit, Pose, PoseChanged, SwingDirection,
};
pub use components::*;
pub use config::{ConfigError, DuelConfig, FighterTuning, HitResolution};
pub use input::{KeyState, PlayerInput, PlayerInputPlugin};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use match_flow::{MatchEnded, MatchPhase, MatchPlugin, MatchRequest, MatchState};
pub use movement::{ArenaPlugin, BoundaryHit};

/// Global per-frame order inside FixedUpdate.
///
/// Intent → Ai → Movement → Actions → Resolve → Damage → Flow.
/// Everything but `Flow` is gated on a running match.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuelSet {
    /// Player input → intent
    Intent,
    /// Enemy brain → intent
    Ai,
    /// Locomotion, arena wall, facing
    Movement,
    /// Combatant step: attack → guard → cooldowns
    Actions,
    /// Swing arbitration
    Resolve,
    /// Health, death
    Damage,
    /// Match lifecycle
    Flow,
}

/// Main simulation plugin (aggregates every domain)
pub struct DuelPlugin;

impl Plugin for DuelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DuelConfig>()
            .register_type::<Fighter>()
            .register_type::<Health>()
            .register_type::<FighterIntent>()
            .register_type::<FighterTuning>();

        app.configure_sets(
            FixedUpdate,
            (
                DuelSet::Intent,
                DuelSet::Ai,
                DuelSet::Movement,
                DuelSet::Actions,
                DuelSet::Resolve,
                DuelSet::Damage,
                DuelSet::Flow,
            )
                .chain(),
        );
        for set in [
            DuelSet::Intent,
            DuelSet::Ai,
            DuelSet::Movement,
            DuelSet::Actions,
            DuelSet::Resolve,
            DuelSet::Damage,
        ] {
            app.configure_sets(FixedUpdate, set.run_if(match_flow::match_running));
        }

        app.add_plugins((
            PlayerInputPlugin,
            AIPlugin,
            ArenaPlugin,
            CombatPlugin,
            MatchPlugin,
        ));
    }
}

/// Deterministic RNG resource (seeded). Every random decision draws from it.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Minimal headless Bevy App running the duel with the default rules.
pub fn create_headless_app(seed: u64) -> App {
    create_headless_app_with_config(seed, DuelConfig::default())
}

/// Headless App with custom tuning (e.g. loaded through `DuelConfig::from_ron`).
pub fn create_headless_app_with_config(seed: u64, config: DuelConfig) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)) // 60Hz FixedUpdate
        .insert_resource(config)
        .add_plugins(DuelPlugin);

    app
}

/// World snapshot for determinism comparisons
///
/// Entities sorted by index, components serialized through `Debug`.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
