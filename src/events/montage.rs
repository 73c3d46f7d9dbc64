//! Montage completion events.
//!
//! When the montage on an [`AnimInstance`](crate::components::animinstance::AnimInstance)
//! runs out, [`montage_playback`](crate::systems::montage::montage_playback)
//! triggers a [`MontageEndedEvent`]. The attack controller observes it to
//! finish the current attack.

use bevy_ecs::prelude::*;

use crate::components::animinstance::MontageToken;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct MontageEndedEvent {
    /// Entity owning the animation instance.
    pub entity: Entity,
    /// Montage asset that finished.
    pub asset: String,
    /// Token returned when the montage was started.
    pub token: MontageToken,
}
