//! Collision shapes. They carry data only; simulation is left to the host.

use bevy_ecs::prelude::Component;

/// Sphere root collider of a spawned prop.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SphereCollider {
    pub radius: f32,
    pub simulate_physics: bool,
    /// Answers overlap and trace queries.
    pub query_collision: bool,
}

/// Upright capsule around a character.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CapsuleCollider {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for CapsuleCollider {
    fn default() -> Self {
        Self {
            radius: 42.0,
            half_height: 96.0,
        }
    }
}
