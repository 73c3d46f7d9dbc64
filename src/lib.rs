//! SpawnDestroy gameplay library.
//!
//! This module exposes the gameplay ECS components, resources, systems, and
//! events for use in integration tests and by the headless session binary.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
