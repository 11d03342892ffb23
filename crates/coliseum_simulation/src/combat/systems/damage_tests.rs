//! Tests for damage application.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::ai::{BlockRelease, EnemyBrain};
    use crate::combat::{
        apply_melee_hits, DamageDealt, FighterDied, HealthChanged, MeleeHit, Pose, PoseChanged,
        SwingDirection,
    };
    use crate::components::{Dead, Fighter, Health, Side};
    use crate::combat::Combatant;

    fn damage_app() -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_event::<MeleeHit>()
            .add_event::<DamageDealt>()
            .add_event::<HealthChanged>()
            .add_event::<FighterDied>()
            .add_event::<PoseChanged>()
            .add_systems(Update, apply_melee_hits);

        let player = app.world_mut().spawn(Fighter { side: Side::Player }).id();
        let enemy = app
            .world_mut()
            .spawn((
                Fighter { side: Side::Enemy },
                EnemyBrain {
                    block_release: Some(BlockRelease {
                        direction: SwingDirection::Up,
                        remaining: 0.8,
                    }),
                    ..Default::default()
                },
            ))
            .id();
        (app, player, enemy)
    }

    fn hit(app: &mut App, attacker: Entity, target: Entity, damage: u32) {
        app.world_mut().send_event(MeleeHit {
            attacker,
            target,
            direction: SwingDirection::Left,
            damage,
        });
    }

    fn drain<E: Event + Clone>(app: &mut App) -> Vec<E> {
        app.world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_hit_reduces_health() {
        let (mut app, player, enemy) = damage_app();
        hit(&mut app, player, enemy, 25);
        app.update();

        let health = app.world().get::<Health>(enemy).unwrap();
        assert_eq!(health.current, 75);

        let changed = drain::<HealthChanged>(&mut app);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].side, Side::Enemy);
        assert_eq!(changed[0].current, 75);
        assert_eq!(changed[0].max, 100);

        let dealt = drain::<DamageDealt>(&mut app);
        assert_eq!(dealt.len(), 1);
        assert!(!dealt[0].target_died);
    }

    #[test]
    fn test_death_is_reported_once() {
        let (mut app, player, enemy) = damage_app();
        for _ in 0..5 {
            hit(&mut app, player, enemy, 25);
        }
        app.update();
        hit(&mut app, player, enemy, 25);
        app.update();

        let health = app.world().get::<Health>(enemy).unwrap();
        assert_eq!(health.current, 0);
        assert!(app.world().get::<Dead>(enemy).is_some());

        let deaths = drain::<FighterDied>(&mut app);
        assert_eq!(deaths.len(), 1);
        assert_eq!(deaths[0].side, Side::Enemy);
        assert_eq!(deaths[0].killer, Some(player));

        let dealt = drain::<DamageDealt>(&mut app);
        assert_eq!(dealt.len(), 4);
        assert!(dealt[3].target_died);
    }

    #[test]
    fn test_death_drops_stance_and_pending_guard() {
        let (mut app, player, enemy) = damage_app();
        hit(&mut app, player, enemy, 150);
        app.update();

        let combatant = app.world().get::<Combatant>(enemy).unwrap();
        assert_eq!(combatant.pose, Pose::Fallen);
        let brain = app.world().get::<EnemyBrain>(enemy).unwrap();
        assert!(brain.block_release.is_none());

        let poses = drain::<PoseChanged>(&mut app);
        assert_eq!(poses.len(), 1);
        assert_eq!(poses[0].pose, Pose::Fallen);
    }

    #[test]
    fn test_self_hit_ignored() {
        let (mut app, player, _enemy) = damage_app();
        hit(&mut app, player, player, 25);
        app.update();

        assert_eq!(app.world().get::<Health>(player).unwrap().current, 100);
    }
}
