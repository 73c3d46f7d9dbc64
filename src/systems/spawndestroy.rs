//! Spawn and destroy commands.
//!
//! - [`spawn_actor`] creates one prop at a spawner's pose.
//! - [`spawn_actors`] asks the first registered spawner to spawn.
//! - [`destroy_actors`] destroys every registered prop.
//! - [`spawn_destroy_observer`] maps the `SpawnActors` and `DestroyActors`
//!   presses to the two commands.
//!
//! Neither command reports failure: no spawner means nothing is spawned,
//! no props means nothing is destroyed.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actorclass::ActorClass;
use crate::components::rotation::Rotation;
use crate::components::spawnable::spawnable_prop;
use crate::components::spawner::ActorSpawner;
use crate::components::worldposition::WorldPosition;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::spawnregistry::SpawnRegistry;

/// Create one prop at the spawner's location and rotation.
pub fn spawn_actor(
    commands: &mut Commands,
    registry: &mut SpawnRegistry,
    position: &WorldPosition,
    rotation: &Rotation,
) -> Entity {
    registry.create(
        commands,
        ActorClass::SpawnableProp,
        spawnable_prop(position.pos, *rotation),
    )
}

/// Spawn one prop from the first live spawner in registration order.
pub fn spawn_actors(
    commands: &mut Commands,
    registry: &mut SpawnRegistry,
    spawners: &Query<(&WorldPosition, &Rotation), With<ActorSpawner>>,
) -> Option<Entity> {
    let (position, rotation) = registry
        .iter(ActorClass::ActorSpawner)
        .find_map(|entity| spawners.get(entity).ok())?;
    let prop = spawn_actor(commands, registry, position, rotation);
    debug!("spawned prop {:?} at {:?}", prop, position.pos);
    Some(prop)
}

/// Destroy every registered prop. Returns how many were still alive.
pub fn destroy_actors(commands: &mut Commands, registry: &mut SpawnRegistry) -> usize {
    let mut destroyed = 0;
    for entity in registry.find_all(ActorClass::SpawnableProp) {
        // Each prop is independent; a stale handle does not stop the loop
        if registry.destroy(commands, entity) {
            destroyed += 1;
        }
    }
    debug!("destroyed {} props", destroyed);
    destroyed
}

/// Maps spawn/destroy presses to [`spawn_actors`] and [`destroy_actors`].
pub fn spawn_destroy_observer(
    trigger: On<InputEvent>,
    mut commands: Commands,
    mut registry: ResMut<SpawnRegistry>,
    spawners: Query<(&WorldPosition, &Rotation), With<ActorSpawner>>,
) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    match event.action {
        InputAction::SpawnActors => {
            spawn_actors(&mut commands, &mut registry, &spawners);
        }
        InputAction::DestroyActors => {
            destroy_actors(&mut commands, &mut registry);
        }
        _ => {}
    }
}
