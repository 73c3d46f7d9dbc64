use bevy_ecs::prelude::Component;

use crate::resources::gamemode::PawnClass;

/// An actor that can be possessed by a controller.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pawn {
    pub class: PawnClass,
}
