//! Input systems.
//!
//! - [`apply_input_feed`] pops the samples scheduled for this frame from the
//!   [`InputFeed`] and writes them into [`InputState`].
//! - An [`InputEvent`] is triggered for every press/release edge so observers
//!   can react without polling. Axis values are left in [`InputState`] for the
//!   per-frame axis systems.
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::input::InputEvent;
use crate::resources::input::InputState;
use crate::resources::inputfeed::{InputFeed, InputSample};

/// Apply this frame's scripted input to the `InputState` resource.
pub fn apply_input_feed(
    mut feed: ResMut<InputFeed>,
    mut input: ResMut<InputState>,
    mut commands: Commands,
) {
    input.clear_edges();

    for sample in feed.drain_frame() {
        match sample {
            InputSample::Action {
                action, pressed, ..
            } => {
                // Repeated presses without a release are not new edges
                if input.action_mut(action).set(pressed) {
                    trace!("input {:?} pressed={}", action, pressed);
                    commands.trigger(InputEvent { action, pressed });
                }
            }
            InputSample::Axis { axis, value, .. } => {
                input.axes.set(axis, value);
            }
        }
    }
}
