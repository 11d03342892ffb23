//! Headless Coliseum Duel
//!
//! Runs an AI-vs-AI duel without rendering and prints the result.
//!
//! Usage: `coliseum_simulation [seed] [config.ron]`

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use coliseum_simulation::{
    create_headless_app_with_config, log_error, log_info, set_log_level, DuelConfig, EnemyBrain,
    Fighter, Health, LogLevel, MatchRequest, MatchState, PlayerControlled, Side,
};

/// Five simulated minutes at 60Hz
const MAX_TICKS: u32 = 60 * 60 * 5;

fn load_config(path: Option<String>) -> DuelConfig {
    let Some(path) = path else {
        return DuelConfig::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(source) => match DuelConfig::from_ron(&source) {
            Ok(config) => config,
            Err(e) => {
                log_error(&format!("Invalid config {}: {} (using defaults)", path, e));
                DuelConfig::default()
            }
        },
        Err(e) => {
            log_error(&format!("Cannot read {}: {} (using defaults)", path, e));
            DuelConfig::default()
        }
    }
}

/// Let a brain play the player's side.
fn hand_player_to_ai(world: &mut World) {
    let mut query = world.query_filtered::<Entity, With<PlayerControlled>>();
    let players: Vec<Entity> = query.iter(world).collect();
    for entity in players {
        world
            .entity_mut(entity)
            .remove::<PlayerControlled>()
            .insert(EnemyBrain::default());
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    let config = load_config(args.next());

    let mut app = create_headless_app_with_config(seed, config);
    set_log_level(LogLevel::Info);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));

    log_info(&format!("Starting Coliseum Duel headless (seed: {})", seed));

    // The first update only primes the clock; the request lands on the next fixed step
    app.world_mut().send_event(MatchRequest::Start);
    let mut ticks = 0;
    while !app.world().resource::<MatchState>().is_running() && ticks < 10 {
        app.update();
        ticks += 1;
    }
    hand_player_to_ai(app.world_mut());

    while ticks < MAX_TICKS {
        app.update();
        ticks += 1;

        if app.world().resource::<MatchState>().winner().is_some() {
            break;
        }
        if ticks % 600 == 0 {
            let mut query = app.world_mut().query::<(&Fighter, &Health)>();
            let status: Vec<String> = query
                .iter(app.world())
                .map(|(fighter, health)| format!("{} {}/{}", fighter.side.as_str(), health.current, health.max))
                .collect();
            log_info(&format!("Tick {}: {}", ticks, status.join(", ")));
        }
    }

    match app.world().resource::<MatchState>().winner() {
        Some(Side::Player) => println!("Player wins after {} ticks ({:.1}s)", ticks, ticks as f32 / 60.0),
        Some(Side::Enemy) => println!("Enemy wins after {} ticks ({:.1}s)", ticks, ticks as f32 / 60.0),
        None => println!("No winner after {} ticks", ticks),
    }
}
