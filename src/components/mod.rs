//! ECS components for actors.
//!
//! This module groups all component types that can be attached to actors in
//! the game world.
//!
//! Submodules overview:
//! - [`actorclass`] – class tag used by the spawn registry
//! - [`animinstance`] – animation handle owning the active montage
//! - [`attack`] – click/attack flags and punch variants
//! - [`charactermovement`] – locomotion settings and pending movement input
//! - [`collider`] – sphere and capsule collision shapes
//! - [`controller`] – control rotation of the possessing agent
//! - [`pawn`] – possessable actor and its class
//! - [`rotation`] – pitch/yaw/roll orientation in degrees
//! - [`spawnable`] – passive prop created by spawners
//! - [`spawner`] – placement marker with a spawn volume
//! - [`worldposition`] – world-space location

pub mod actorclass;
pub mod animinstance;
pub mod attack;
pub mod charactermovement;
pub mod collider;
pub mod controller;
pub mod pawn;
pub mod rotation;
pub mod spawnable;
pub mod spawner;
pub mod worldposition;
