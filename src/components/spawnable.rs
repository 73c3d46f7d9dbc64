//! Spawnable prop actor.
//!
//! A prop is passive: a physics-enabled sphere root with a small sphere mesh
//! and a fire particle effect attached. It has no behaviour of its own; the
//! registry owns it from creation until it is destroyed.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::collider::SphereCollider;
use crate::components::rotation::Rotation;
use crate::components::worldposition::WorldPosition;

const PROP_SPHERE_RADIUS: f32 = 16.0;
const PROP_MESH_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -12.0);
const PROP_MESH_SCALE: f32 = 0.25;
const PROP_MESH_ASSET: &str = "Shape_Sphere";
const PROP_PARTICLE_ASSET: &str = "P_Fire";

/// Tag for props created by an [`ActorSpawner`](crate::components::spawner::ActorSpawner).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SpawnableProp;

/// Static mesh attached to the root, relative to it.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct StaticMesh {
    pub mesh: String,
    pub relative_location: Vec3,
    pub relative_scale: Vec3,
}

/// Particle system attached to the mesh.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ParticleEffect {
    pub template: String,
}

/// Components of a freshly spawned prop at the given pose.
pub fn spawnable_prop(position: Vec3, rotation: Rotation) -> impl Bundle {
    (
        SpawnableProp,
        WorldPosition::from_vec(position),
        rotation,
        SphereCollider {
            radius: PROP_SPHERE_RADIUS,
            simulate_physics: true,
            query_collision: true,
        },
        StaticMesh {
            mesh: PROP_MESH_ASSET.to_string(),
            relative_location: PROP_MESH_OFFSET,
            relative_scale: Vec3::splat(PROP_MESH_SCALE),
        },
        ParticleEffect {
            template: PROP_PARTICLE_ASSET.to_string(),
        },
    )
}
