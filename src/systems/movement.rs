//! Movement integration.
//!
//! Consumes the movement input accumulated by the axis handlers and moves
//! each character along it. Input longer than 1 is clamped so diagonal input
//! is not faster than straight input. Characters that orient to movement turn
//! towards their direction of travel at a limited rate.

use bevy_ecs::prelude::*;

use crate::components::charactermovement::CharacterMovement;
use crate::components::rotation::{Rotation, normalize_degrees};
use crate::components::worldposition::WorldPosition;
use crate::resources::worldtime::WorldTime;

/// Move `current` towards `target` (degrees) by at most `max_step`, taking
/// the short way around.
pub fn step_towards_angle(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = normalize_degrees(target - current);
    if diff.abs() <= max_step {
        normalize_degrees(target)
    } else {
        normalize_degrees(current + max_step.copysign(diff))
    }
}

pub fn movement(
    mut query: Query<(&mut WorldPosition, &mut Rotation, &mut CharacterMovement)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut position, mut rotation, mut cm) in query.iter_mut() {
        let input = cm.consume_input().clamp_length_max(1.0);
        cm.velocity = input * cm.max_walk_speed;
        if input == glam::Vec3::ZERO {
            continue;
        }
        position.pos += cm.velocity * dt;

        if cm.orient_rotation_to_movement {
            let target = input.y.atan2(input.x).to_degrees();
            rotation.yaw = step_towards_angle(rotation.yaw, target, cm.rotation_rate * dt);
        }
    }
}
