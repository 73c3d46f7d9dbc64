//! Montage playback systems.
//!
//! - [`montage_playback`] advances the active montage of every
//!   [`AnimInstance`] and triggers a [`MontageEndedEvent`] when one finishes.
//! - [`update_animation_properties`] refreshes the locomotion values the
//!   animation graph reads (speed, jumping).
//!
//! A montage that ends triggers its event through `Commands`, so observers
//! run after this system, interleaved with input edges in the order they were
//! queued.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animinstance::AnimInstance;
use crate::components::charactermovement::CharacterMovement;
use crate::events::montage::MontageEndedEvent;
use crate::resources::worldtime::WorldTime;

pub fn montage_playback(
    mut query: Query<(Entity, &mut AnimInstance)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut anim) in query.iter_mut() {
        if anim.active().is_none() {
            continue;
        }
        if let Some(finished) = anim.advance(dt) {
            trace!("montage '{}' ended on {:?}", finished.asset, entity);
            commands.trigger(MontageEndedEvent {
                entity,
                asset: finished.asset,
                token: finished.token,
            });
        }
    }
}

pub fn update_animation_properties(
    mut query: Query<(&mut AnimInstance, Option<&CharacterMovement>)>,
) {
    for (mut anim, movement) in query.iter_mut() {
        let (speed, jumping) = movement
            .map(|m| (m.velocity.length(), m.jump_requested))
            .unwrap_or((0.0, false));
        anim.movement_speed = speed;
        anim.is_jumping = jumping;
    }
}
