//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when a bound input
//! action is pressed or released. The [`InputAction`] enum lists the named
//! actions, [`InputAxis`] the named axes.
//!
//! Actions are edge-triggered and delivered to observers. Axes are sampled
//! every frame from [`InputState`](crate::resources::input::InputState).

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Named press/release actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    Jump,
    SpawnActors,
    DestroyActors,
    /// Pointer button driving the melee attack.
    Click,
    #[serde(rename = "ResetVR")]
    ResetVr,
    /// Touch screen contact; behaves like Jump.
    Touch,
}

/// Named per-frame axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAxis {
    MoveForward,
    MoveRight,
    /// Absolute yaw delta (mouse).
    Turn,
    /// Normalized yaw rate (gamepad stick).
    TurnRate,
    /// Absolute pitch delta (mouse).
    LookUp,
    /// Normalized pitch rate (gamepad stick).
    LookUpRate,
}

/// Event emitted when an input action is pressed or released.
///
/// The `action` field identifies which logical action occurred, and `pressed`
/// indicates whether it was a press (true) or release (false).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}

impl InputEvent {
    pub fn pressed(action: InputAction) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn released(action: InputAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}
