//! Headless app tests: commands in through messages, targets out through
//! components and `TargetChanged`.

use bevy_app::App;
use bevy_ecs::message::Messages;

use threat_engine::ecs::{
    CombatTick, CombatantDirectory, CurrentTarget, TargetChanged, ThreatCommand, build_combat_app,
    spawn_hostile,
};
use threat_engine::model::{InvalidReason, Role, ThreatConfig, Validity};
use threat_engine::sim::TauntOptions;

fn tick(app: &mut App) {
    app.world_mut().run_schedule(CombatTick);
}

fn write_command(app: &mut App, command: ThreatCommand) {
    app.world_mut()
        .resource_mut::<Messages<ThreatCommand>>()
        .write(command);
}

fn drain_changes(app: &mut App) -> Vec<TargetChanged> {
    app.world_mut()
        .resource_mut::<Messages<TargetChanged>>()
        .drain()
        .collect()
}

#[test]
fn provoked_actor_acquires_a_target() {
    let mut app = build_combat_app(100, ThreatConfig::default());
    app.world_mut()
        .resource_mut::<CombatantDirectory>()
        .register(10, Role::Dps);
    let actor = spawn_hostile(app.world_mut(), 1);

    write_command(
        &mut app,
        ThreatCommand::Provoke {
            actor: 1,
            source: 10,
            amount: 12.0,
        },
    );
    tick(&mut app);

    let target = app.world().get::<CurrentTarget>(actor).unwrap();
    assert_eq!(target.0, Some(10));

    let changes = drain_changes(&mut app);
    assert_eq!(
        changes,
        vec![TargetChanged {
            actor: 1,
            previous: None,
            current: Some(10),
        }]
    );
}

#[test]
fn command_for_unknown_actor_is_dropped() {
    let mut app = build_combat_app(100, ThreatConfig::default());
    let actor = spawn_hostile(app.world_mut(), 1);

    write_command(
        &mut app,
        ThreatCommand::Provoke {
            actor: 99,
            source: 10,
            amount: 12.0,
        },
    );
    tick(&mut app);

    let target = app.world().get::<CurrentTarget>(actor).unwrap();
    assert_eq!(target.0, None);
    assert!(app.world().resource::<Messages<TargetChanged>>().is_empty());
}

#[test]
fn taunt_overrides_until_the_window_expires() {
    let mut app = build_combat_app(1_000, ThreatConfig::default());
    {
        let mut directory = app.world_mut().resource_mut::<CombatantDirectory>();
        directory.register(10, Role::Tank);
        directory.register(11, Role::Dps);
    }
    let actor = spawn_hostile(app.world_mut(), 1);

    write_command(
        &mut app,
        ThreatCommand::Provoke {
            actor: 1,
            source: 10,
            amount: 20.0,
        },
    );
    tick(&mut app);
    assert_eq!(app.world().get::<CurrentTarget>(actor).unwrap().0, Some(10));

    write_command(
        &mut app,
        ThreatCommand::Taunt {
            actor: 1,
            source: 11,
            opts: TauntOptions::default(),
        },
    );
    tick(&mut app);
    assert_eq!(app.world().get::<CurrentTarget>(actor).unwrap().0, Some(11));

    // Ride out the 4s window. The tank's accumulated lead reclaims the
    // actor's attention the moment the override lapses.
    for _ in 0..4 {
        tick(&mut app);
    }
    assert_eq!(app.world().get::<CurrentTarget>(actor).unwrap().0, Some(10));
}

#[test]
fn dead_target_is_released() {
    let mut app = build_combat_app(100, ThreatConfig::default());
    app.world_mut()
        .resource_mut::<CombatantDirectory>()
        .register(10, Role::Dps);
    let actor = spawn_hostile(app.world_mut(), 1);

    write_command(
        &mut app,
        ThreatCommand::Provoke {
            actor: 1,
            source: 10,
            amount: 5.0,
        },
    );
    tick(&mut app);
    assert_eq!(app.world().get::<CurrentTarget>(actor).unwrap().0, Some(10));
    drain_changes(&mut app);

    app.world_mut()
        .resource_mut::<CombatantDirectory>()
        .set_validity(10, Validity::Invalid(InvalidReason::Dead));
    tick(&mut app);

    assert_eq!(app.world().get::<CurrentTarget>(actor).unwrap().0, None);
    let changes = drain_changes(&mut app);
    assert_eq!(
        changes,
        vec![TargetChanged {
            actor: 1,
            previous: Some(10),
            current: None,
        }]
    );
}
