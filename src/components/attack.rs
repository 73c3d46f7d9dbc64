//! Melee attack state for the player character.
//!
//! [`AttackState`] holds the two flags that drive the click/attack state
//! machine:
//!
//! - `is_clicking` mirrors the pointer button (pressed/released).
//! - `is_attacking` is set while an attack is in flight and cleared when the
//!   animation subsystem reports the attack montage finished.
//!
//! Holding the button keeps re-triggering attacks: every time an attack ends
//! with `is_clicking` still set, a new one begins immediately.
//!
//! The transitions here only touch the flags. Starting the montage is done by
//! [`attack_begin`](crate::systems::attack::attack_begin).

use bevy_ecs::prelude::Component;
use fastrand::Rng;

/// Click and attack flags of a character.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackState {
    pub is_attacking: bool,
    pub is_clicking: bool,
}

impl AttackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button pressed. Returns `true` when an attack should begin now.
    ///
    /// While an attack is already in flight the press is only latched in
    /// `is_clicking` and picked up by [`AttackState::attack_end`].
    pub fn click_begin(&mut self) -> bool {
        self.is_clicking = true;
        !self.is_attacking
    }

    /// Button released. Never interrupts the attack in flight.
    pub fn click_end(&mut self) {
        self.is_clicking = false;
    }

    /// Mark an attack as in flight.
    pub fn start_attack(&mut self) {
        self.is_attacking = true;
    }

    /// The attack montage finished. Returns `true` when the button is still
    /// held and a new attack should begin.
    pub fn attack_end(&mut self) -> bool {
        self.is_attacking = false;
        self.is_clicking
    }

    pub fn is_idle(&self) -> bool {
        !self.is_attacking
    }
}

/// Which punch section of the attack montage to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttackVariant {
    Punch1,
    Punch2,
}

impl AttackVariant {
    pub const ALL: [AttackVariant; 2] = [AttackVariant::Punch1, AttackVariant::Punch2];

    /// Pick one of the two variants with equal probability.
    pub fn pick(rng: &mut Rng) -> Self {
        if rng.bool() {
            AttackVariant::Punch1
        } else {
            AttackVariant::Punch2
        }
    }

    /// Montage section name for this variant.
    pub fn section(&self) -> &'static str {
        match self {
            AttackVariant::Punch1 => "Punch1",
            AttackVariant::Punch2 => "Punch2",
        }
    }
}

/// Attack montage configured on a character. `None` means unset.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackMontage {
    pub asset: Option<String>,
}

impl AttackMontage {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: Some(asset.into()),
        }
    }

    pub fn unset() -> Self {
        Self { asset: None }
    }

    pub fn asset(&self) -> Option<&str> {
        self.asset.as_deref()
    }
}
