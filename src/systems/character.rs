//! Character action handlers other than the attack.
//!
//! - `Jump` and `Touch` presses request a jump, releases stop it.
//! - `ResetVR` re-centres a head-mounted display; without one it only logs.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::charactermovement::CharacterMovement;
use crate::components::controller::PlayerInput;
use crate::events::input::{InputAction, InputEvent};

pub fn character_action_observer(
    trigger: On<InputEvent>,
    mut query: Query<&mut CharacterMovement, With<PlayerInput>>,
) {
    let event = trigger.event();
    match event.action {
        InputAction::Jump | InputAction::Touch => {
            for mut movement in query.iter_mut() {
                movement.jump_requested = event.pressed;
            }
        }
        InputAction::ResetVr if event.pressed => {
            debug!("reset VR requested; no head-mounted display present");
        }
        _ => {}
    }
}
