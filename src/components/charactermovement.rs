//! Character locomotion settings and per-frame movement input.
//!
//! Movement handlers accumulate input into [`CharacterMovement::pending_input`];
//! the [`movement`](crate::systems::movement::movement) system consumes it once
//! per frame.

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::resources::gameconfig::GameConfig;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CharacterMovement {
    /// Ground speed at full input, units per second.
    pub max_walk_speed: f32,
    /// Yaw turn rate when orienting to movement, degrees per second.
    pub rotation_rate: f32,
    /// Turn the pawn to face its movement direction.
    pub orient_rotation_to_movement: bool,
    pub jump_z_velocity: f32,
    pub air_control: f32,
    /// Set by Jump press, cleared by release.
    pub jump_requested: bool,
    /// Movement input accumulated this frame.
    pub pending_input: Vec3,
    /// Velocity applied in the last movement step.
    pub velocity: Vec3,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self {
            max_walk_speed: 600.0,
            rotation_rate: 540.0,
            orient_rotation_to_movement: true,
            jump_z_velocity: 600.0,
            air_control: 0.2,
            jump_requested: false,
            pending_input: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }
}

impl CharacterMovement {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            max_walk_speed: config.max_walk_speed,
            rotation_rate: config.rotation_rate,
            jump_z_velocity: config.jump_z_velocity,
            air_control: config.air_control,
            ..Self::default()
        }
    }

    pub fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
    }

    /// Take the accumulated input, leaving zero behind.
    pub fn consume_input(&mut self) -> Vec3 {
        std::mem::replace(&mut self.pending_input, Vec3::ZERO)
    }
}

/// Base rates for rate-style look axes (gamepad sticks), degrees per second.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct LookRates {
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
}

impl Default for LookRates {
    fn default() -> Self {
        Self {
            base_turn_rate: 45.0,
            base_look_up_rate: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_accumulates_and_consumes() {
        let mut cm = CharacterMovement::default();
        cm.add_movement_input(Vec3::X, 0.5);
        cm.add_movement_input(Vec3::Y, 1.0);
        assert_eq!(cm.consume_input(), Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(cm.pending_input, Vec3::ZERO);
    }
}
