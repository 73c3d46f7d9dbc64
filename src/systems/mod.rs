//! Gameplay systems and observers.
//!
//! Submodules overview
//! - [`attack`] – click/attack state machine and montage start
//! - [`character`] – jump, touch and VR reset actions
//! - [`input`] – apply scripted input and emit action edges
//! - [`locomotion`] – movement and look axis handlers
//! - [`montage`] – advance montages and report completion
//! - [`movement`] – integrate movement input into positions
//! - [`spawndestroy`] – spawn props from spawners and destroy them
//! - [`time`] – update simulation time and delta

pub mod attack;
pub mod character;
pub mod input;
pub mod locomotion;
pub mod montage;
pub mod movement;
pub mod spawndestroy;
pub mod time;
