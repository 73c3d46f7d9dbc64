//! Actor orientation as pitch/yaw/roll in degrees.
//!
//! Axes follow the Z-up convention used throughout the crate: X is forward,
//! Y is right and yaw turns around Z.

use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation with only the yaw component kept.
    pub fn yaw_only(&self) -> Self {
        Self {
            pitch: 0.0,
            yaw: self.yaw,
            roll: 0.0,
        }
    }

    /// Unit X axis of the yaw rotation (forward on the ground plane).
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos, sin, 0.0)
    }

    /// Unit Y axis of the yaw rotation (right on the ground plane).
    pub fn right(&self) -> Vec3 {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        Vec3::new(-sin, cos, 0.0)
    }
}

/// Wrap an angle in degrees into `(-180, 180]`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}
