//! AI reaction systems (wall contact).

use bevy::prelude::*;

use crate::ai::EnemyBrain;
use crate::config::DuelConfig;
use crate::movement::BoundaryHit;

/// System: a brain that bumped into the wall backs off for a full behavior period.
pub fn retreat_on_boundary(
    mut boundary_events: EventReader<BoundaryHit>,
    mut brains: Query<&mut EnemyBrain>,
    config: Res<DuelConfig>,
) {
    for event in boundary_events.read() {
        let Ok(mut brain) = brains.get_mut(event.entity) else {
            continue;
        };
        brain.retreat_from_wall(config.ai.behavior_interval);
        crate::logger::log(&format!(
            "🧱 {:?} hit the arena wall at ({:.1}, {:.1}) → retreat",
            event.entity, event.position.x, event.position.z
        ));
    }
}
