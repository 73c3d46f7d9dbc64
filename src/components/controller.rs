//! Control rotation owned by the agent possessing a pawn.
//!
//! The camera and locomotion read their orientation from here rather than
//! from the pawn itself. A pawn without a [`Controller`] is unpossessed and
//! ignores movement input.

use bevy_ecs::prelude::Component;

use crate::components::rotation::{Rotation, normalize_degrees};

/// Highest pitch the controller can look up or down, in degrees.
const PITCH_LIMIT: f32 = 89.0;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Controller {
    pub control_rotation: Rotation,
}

impl Controller {
    pub fn new(control_rotation: Rotation) -> Self {
        Self { control_rotation }
    }

    pub fn add_yaw_input(&mut self, degrees: f32) {
        if degrees != 0.0 {
            self.control_rotation.yaw = normalize_degrees(self.control_rotation.yaw + degrees);
        }
    }

    pub fn add_pitch_input(&mut self, degrees: f32) {
        if degrees != 0.0 {
            self.control_rotation.pitch =
                (self.control_rotation.pitch + degrees).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }
}

/// Marker for pawns whose input bindings are set up (the possessed player).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PlayerInput;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_wraps() {
        let mut c = Controller::default();
        c.add_yaw_input(190.0);
        assert!((c.control_rotation.yaw + 170.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_clamps() {
        let mut c = Controller::default();
        c.add_pitch_input(120.0);
        assert_eq!(c.control_rotation.pitch, PITCH_LIMIT);
        c.add_pitch_input(-400.0);
        assert_eq!(c.control_rotation.pitch, -PITCH_LIMIT);
    }
}
