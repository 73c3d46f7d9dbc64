//! Spawn and destroy integration tests against a live world.

use bevy_ecs::prelude::*;
use glam::Vec3;

use spawndestroy::components::actorclass::ActorClass;
use spawndestroy::components::collider::SphereCollider;
use spawndestroy::components::rotation::Rotation;
use spawndestroy::components::spawnable::{ParticleEffect, SpawnableProp, StaticMesh};
use spawndestroy::components::worldposition::WorldPosition;
use spawndestroy::events::input::{InputAction, InputEvent};
use spawndestroy::game;
use spawndestroy::resources::gameconfig::GameConfig;
use spawndestroy::resources::inputfeed::{InputFeed, InputSample};
use spawndestroy::resources::montagestore::MontageStore;
use spawndestroy::resources::spawnregistry::SpawnRegistry;
use spawndestroy::systems::time::update_world_time;

fn make_world() -> World {
    let config = GameConfig {
        seed: Some(1),
        spawner_location: Vec3::new(100.0, 200.0, 50.0),
        spawner_rotation: Rotation::new(0.0, 45.0, 0.0),
        ..GameConfig::new()
    };
    let mut world = game::build_world(config, MontageStore::default(), InputFeed::default());
    game::start_session(&mut world).unwrap();
    world
}

fn press(world: &mut World, action: InputAction) {
    world.trigger(InputEvent::pressed(action));
    world.flush();
}

fn prop_count(world: &mut World) -> usize {
    world.query::<&SpawnableProp>().iter(world).count()
}

fn registered_props(world: &World) -> usize {
    world
        .resource::<SpawnRegistry>()
        .count(ActorClass::SpawnableProp)
}

#[test]
fn spawn_places_prop_at_spawner_pose() {
    let mut world = make_world();
    press(&mut world, InputAction::SpawnActors);

    let prop = world
        .resource::<SpawnRegistry>()
        .find_first(ActorClass::SpawnableProp)
        .unwrap();
    assert_eq!(
        world.get::<WorldPosition>(prop).unwrap().pos,
        Vec3::new(100.0, 200.0, 50.0)
    );
    assert_eq!(world.get::<Rotation>(prop).unwrap().yaw, 45.0);
    let collider = world.get::<SphereCollider>(prop).unwrap();
    assert_eq!(collider.radius, 16.0);
    assert!(collider.simulate_physics);
    assert!(collider.query_collision);
    assert!(world.get::<StaticMesh>(prop).is_some());
    assert!(world.get::<ParticleEffect>(prop).is_some());
    assert_eq!(
        *world.get::<ActorClass>(prop).unwrap(),
        ActorClass::SpawnableProp
    );
}

#[test]
fn release_edges_do_nothing() {
    let mut world = make_world();
    world.trigger(InputEvent::released(InputAction::SpawnActors));
    world.flush();
    assert_eq!(prop_count(&mut world), 0);
}

#[test]
fn destroy_all_leaves_no_props() {
    for n in [0usize, 1, 7] {
        let mut world = make_world();
        for _ in 0..n {
            press(&mut world, InputAction::SpawnActors);
        }
        assert_eq!(prop_count(&mut world), n);
        assert_eq!(registered_props(&world), n);

        press(&mut world, InputAction::DestroyActors);
        assert_eq!(prop_count(&mut world), 0, "n = {}", n);
        assert_eq!(registered_props(&world), 0, "n = {}", n);
    }
}

#[test]
fn destroy_leaves_pawn_and_spawner() {
    let mut world = make_world();
    press(&mut world, InputAction::SpawnActors);
    press(&mut world, InputAction::DestroyActors);

    let registry = world.resource::<SpawnRegistry>();
    let pawn = registry.find_first(ActorClass::Pawn).unwrap();
    let spawner = registry.find_first(ActorClass::ActorSpawner).unwrap();
    assert!(world.get_entity(pawn).is_ok());
    assert!(world.get_entity(spawner).is_ok());
}

#[test]
fn destroy_skips_props_already_gone() {
    let mut world = make_world();
    for _ in 0..3 {
        press(&mut world, InputAction::SpawnActors);
    }
    let stale = world
        .resource::<SpawnRegistry>()
        .find_first(ActorClass::SpawnableProp)
        .unwrap();
    world.despawn(stale);

    press(&mut world, InputAction::DestroyActors);
    assert_eq!(prop_count(&mut world), 0);
    assert_eq!(registered_props(&world), 0);
}

#[test]
fn spawn_without_spawner_is_noop() {
    let mut world = make_world();
    let spawner = world
        .resource::<SpawnRegistry>()
        .find_first(ActorClass::ActorSpawner)
        .unwrap();
    world.despawn(spawner);

    press(&mut world, InputAction::SpawnActors);
    assert_eq!(prop_count(&mut world), 0);
    assert_eq!(registered_props(&world), 0);
}

#[test]
fn first_registered_spawner_is_used() {
    let mut world = make_world();
    let second = world
        .spawn(game::actor_spawner(
            Vec3::new(-5.0, 0.0, 0.0),
            Rotation::default(),
        ))
        .id();
    world
        .resource_mut::<SpawnRegistry>()
        .register(ActorClass::ActorSpawner, second);

    press(&mut world, InputAction::SpawnActors);
    let prop = world
        .resource::<SpawnRegistry>()
        .find_first(ActorClass::SpawnableProp)
        .unwrap();
    assert_eq!(
        world.get::<WorldPosition>(prop).unwrap().pos,
        Vec3::new(100.0, 200.0, 50.0)
    );
}

#[test]
fn scripted_spawns_through_schedule() {
    let samples = vec![
        InputSample::Action {
            frame: 0,
            action: InputAction::SpawnActors,
            pressed: true,
        },
        // Held: no new edge
        InputSample::Action {
            frame: 1,
            action: InputAction::SpawnActors,
            pressed: true,
        },
        InputSample::Action {
            frame: 2,
            action: InputAction::SpawnActors,
            pressed: false,
        },
        InputSample::Action {
            frame: 3,
            action: InputAction::SpawnActors,
            pressed: true,
        },
    ];
    let mut world = game::build_world(
        GameConfig::new(),
        MontageStore::default(),
        InputFeed::new(samples),
    );
    game::start_session(&mut world).unwrap();
    let mut schedule = game::build_schedule();
    for _ in 0..5 {
        update_world_time(&mut world, 1.0 / 60.0);
        schedule.run(&mut world);
    }
    assert_eq!(prop_count(&mut world), 2);
}
