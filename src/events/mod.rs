//! Event types exchanged between systems and observers.
//!
//! Submodules:
//! - [`input`] – press/release edges of the bound input actions
//! - [`montage`] – montage completion notifications from the animation handle
pub mod input;
pub mod montage;
