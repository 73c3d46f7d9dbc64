//! Spawn registry: creates, tracks and destroys actors by class.
//!
//! The registry owns every actor it creates. Lookups by [`ActorClass`] answer
//! in registration order, so "find first" is deterministic: the earliest
//! registered actor of the class that is still alive.
//!
//! # Usage
//!
//! ```ignore
//! let prop = registry.create(&mut commands, ActorClass::SpawnableProp, bundle);
//! let first = registry.find_first(ActorClass::ActorSpawner);
//! for entity in registry.find_all(ActorClass::SpawnableProp) {
//!     registry.destroy(&mut commands, entity);
//! }
//! ```
//!
//! # Related
//!
//! - [`crate::components::actorclass::ActorClass`] – the class tag stored on each actor
//! - [`crate::systems::spawndestroy`] – spawn/destroy commands built on the registry

use bevy_ecs::prelude::*;
use log::trace;
use rustc_hash::FxHashMap;

use crate::components::actorclass::ActorClass;

#[derive(Debug, Clone, Resource, Default)]
pub struct SpawnRegistry {
    by_class: FxHashMap<ActorClass, Vec<Entity>>,
}

impl SpawnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `bundle` tagged with `class` and track it.
    pub fn create(
        &mut self,
        commands: &mut Commands,
        class: ActorClass,
        bundle: impl Bundle,
    ) -> Entity {
        let entity = commands.spawn((class, bundle)).id();
        self.register(class, entity);
        trace!("created {} {:?}", class.name(), entity);
        entity
    }

    /// Track an entity spawned elsewhere.
    pub fn register(&mut self, class: ActorClass, entity: Entity) {
        let list = self.by_class.entry(class).or_default();
        if !list.contains(&entity) {
            list.push(entity);
        }
    }

    /// Stop tracking `entity`. Returns `true` if it was tracked.
    pub fn unregister(&mut self, entity: Entity) -> bool {
        let mut found = false;
        for list in self.by_class.values_mut() {
            if let Some(idx) = list.iter().position(|e| *e == entity) {
                list.remove(idx);
                found = true;
            }
        }
        found
    }

    /// Stop tracking and despawn `entity`.
    ///
    /// Returns `false` when the entity no longer exists; the registry entry is
    /// dropped either way.
    pub fn destroy(&mut self, commands: &mut Commands, entity: Entity) -> bool {
        self.unregister(entity);
        match commands.get_entity(entity) {
            Ok(mut entity_commands) => {
                entity_commands.try_despawn();
                trace!("destroyed {:?}", entity);
                true
            }
            Err(_) => false,
        }
    }

    /// Earliest registered actor of `class`.
    pub fn find_first(&self, class: ActorClass) -> Option<Entity> {
        self.by_class.get(&class).and_then(|list| list.first().copied())
    }

    /// All actors of `class` in registration order.
    pub fn find_all(&self, class: ActorClass) -> Vec<Entity> {
        self.by_class.get(&class).cloned().unwrap_or_default()
    }

    /// Iterate actors of `class` in registration order.
    pub fn iter(&self, class: ActorClass) -> impl Iterator<Item = Entity> + '_ {
        self.by_class
            .get(&class)
            .into_iter()
            .flat_map(|list| list.iter().copied())
    }

    pub fn count(&self, class: ActorClass) -> usize {
        self.by_class.get(&class).map_or(0, Vec::len)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains(&self, entity: Entity) -> bool {
        self.by_class.values().any(|list| list.contains(&entity))
    }
}
