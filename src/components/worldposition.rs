use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space location of an actor's root.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPosition {
    pub pos: Vec3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    pub fn from_vec(pos: Vec3) -> Self {
        Self { pos }
    }
}
