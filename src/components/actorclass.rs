//! Type tag used by the spawn registry to answer "find by class" queries.

use bevy_ecs::prelude::Component;

/// Class of an actor, as understood by [`SpawnRegistry`](crate::resources::spawnregistry::SpawnRegistry).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActorClass {
    /// Player-controlled or default pawn.
    Pawn,
    /// Placement marker that creates props on request.
    ActorSpawner,
    /// Passive physics prop created by a spawner.
    SpawnableProp,
}

impl ActorClass {
    pub fn name(&self) -> &'static str {
        match self {
            ActorClass::Pawn => "Pawn",
            ActorClass::ActorSpawner => "ActorSpawner",
            ActorClass::SpawnableProp => "SpawnableProp",
        }
    }
}
