//! Actor spawner placement marker.
//!
//! An [`ActorSpawner`] is an invisible actor with a box-shaped [`SpawnVolume`].
//! When asked, it creates one [`SpawnableProp`](crate::components::spawnable::SpawnableProp)
//! at its own position and rotation through
//! [`spawn_actor`](crate::systems::spawndestroy::spawn_actor).

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Tag for spawner actors.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ActorSpawner;

/// Box volume marking where the spawner sits in the level.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SpawnVolume {
    /// Half size of the box along each axis.
    pub box_extent: Vec3,
}

impl Default for SpawnVolume {
    fn default() -> Self {
        Self {
            box_extent: Vec3::splat(32.0),
        }
    }
}

impl SpawnVolume {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains(&self, center: Vec3, point: Vec3) -> bool {
        let d = (point - center).abs();
        d.x <= self.box_extent.x && d.y <= self.box_extent.y && d.z <= self.box_extent.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_contains_center_and_edges() {
        let vol = SpawnVolume::default();
        let c = Vec3::new(100.0, 0.0, 50.0);
        assert!(vol.contains(c, c));
        assert!(vol.contains(c, c + Vec3::splat(32.0)));
        assert!(!vol.contains(c, c + Vec3::new(33.0, 0.0, 0.0)));
    }
}
