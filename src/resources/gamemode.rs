//! Game mode: which pawn the session starts with.
//!
//! The pawn class is configured by class path. When the path does not name a
//! known class the lookup fails quietly and the default pawn is kept.

use bevy_ecs::prelude::Resource;
use log::debug;

/// Pawn classes the game mode can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PawnClass {
    /// Bare possessable pawn without character features.
    #[default]
    DefaultPawn,
    /// Third person character with melee attack and locomotion.
    ThirdPersonCharacter,
}

impl PawnClass {
    /// Resolve a class path such as
    /// `/Game/ThirdPersonCPP/Blueprints/ThirdPersonCharacter` by its last
    /// segment.
    pub fn find_class(path: &str) -> Option<PawnClass> {
        let name = path.trim().rsplit('/').next()?;
        let name = name.split('.').next().unwrap_or(name);
        match name {
            "ThirdPersonCharacter" => Some(PawnClass::ThirdPersonCharacter),
            "DefaultPawn" => Some(PawnClass::DefaultPawn),
            _ => None,
        }
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMode {
    pub default_pawn: PawnClass,
}

impl GameMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game mode whose default pawn is the class at `path`, if it resolves.
    pub fn from_pawn_path(path: &str) -> Self {
        let mut mode = Self::new();
        match PawnClass::find_class(path) {
            Some(class) => mode.default_pawn = class,
            None => debug!("pawn class '{}' not found, keeping {:?}", path, mode.default_pawn),
        }
        mode
    }
}
