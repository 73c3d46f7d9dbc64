//! Frame clock.
//!
//! Called by the main loop before each run of the frame schedule, so every
//! system of a frame sees the same [`WorldTime`](crate::resources::worldtime::WorldTime).
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the clock by one frame of `dt` unscaled seconds.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
