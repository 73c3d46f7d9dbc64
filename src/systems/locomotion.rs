//! Axis handlers for the player character.
//!
//! Reads the axis values in [`InputState`] every frame and applies them:
//!
//! - `MoveForward` / `MoveRight` add movement input along the controller's
//!   yaw basis via [`move_forward`] and [`move_right`].
//! - `Turn` / `LookUp` add yaw / pitch to the controller directly.
//! - `TurnRate` / `LookUpRate` are scaled by the base rates and frame delta.
//!
//! Movement input is dropped while the character is attacking, when the
//! pawn has no controller, or when the value is zero. Dropped input is not
//! buffered.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::attack::AttackState;
use crate::components::charactermovement::{CharacterMovement, LookRates};
use crate::components::controller::{Controller, PlayerInput};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Controller whose yaw drives movement, if input may be applied now.
fn movement_controller<'a>(
    controller: Option<&'a Controller>,
    value: f32,
    attack: Option<&AttackState>,
) -> Option<&'a Controller> {
    if value == 0.0 || attack.is_some_and(|a| a.is_attacking) {
        return None;
    }
    controller
}

/// Add forward movement input along the controller's yaw.
///
/// Returns the input vector that was added, or zero if it was dropped.
pub fn move_forward(
    controller: Option<&Controller>,
    attack: Option<&AttackState>,
    movement: &mut CharacterMovement,
    value: f32,
) -> Vec3 {
    let Some(controller) = movement_controller(controller, value, attack) else {
        return Vec3::ZERO;
    };
    let direction = controller.control_rotation.yaw_only().forward();
    movement.add_movement_input(direction, value);
    direction * value
}

/// Add strafe movement input along the controller's yaw.
///
/// Returns the input vector that was added, or zero if it was dropped.
pub fn move_right(
    controller: Option<&Controller>,
    attack: Option<&AttackState>,
    movement: &mut CharacterMovement,
    value: f32,
) -> Vec3 {
    let Some(controller) = movement_controller(controller, value, attack) else {
        return Vec3::ZERO;
    };
    let direction = controller.control_rotation.yaw_only().right();
    movement.add_movement_input(direction, value);
    direction * value
}

/// Apply movement axes to every player character.
pub fn movement_input_system(
    mut query: Query<
        (
            Option<&Controller>,
            Option<&AttackState>,
            &mut CharacterMovement,
        ),
        With<PlayerInput>,
    >,
    input: Res<InputState>,
) {
    for (controller, attack, mut movement) in query.iter_mut() {
        move_forward(controller, attack, &mut movement, input.axes.move_forward);
        move_right(controller, attack, &mut movement, input.axes.move_right);
    }
}

/// Apply look axes to every player controller.
pub fn look_input_system(
    mut query: Query<(&mut Controller, Option<&LookRates>), With<PlayerInput>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    let axes = input.axes;
    for (mut controller, rates) in query.iter_mut() {
        let rates = rates.copied().unwrap_or_default();
        controller.add_yaw_input(axes.turn);
        controller.add_yaw_input(axes.turn_rate * rates.base_turn_rate * time.delta);
        controller.add_pitch_input(axes.look_up);
        controller.add_pitch_input(axes.look_up_rate * rates.base_look_up_rate * time.delta);
    }
}
