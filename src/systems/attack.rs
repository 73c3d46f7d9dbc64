//! Melee attack controller.
//!
//! Turns pointer press/release edges into a single-attack-in-flight state
//! machine on [`AttackState`]:
//!
//! - [`click_observer`] handles `Click` presses and releases.
//! - [`attack_end_observer`] handles the attack montage finishing and
//!   re-arms the attack while the button is held.
//! - [`attack_begin`] marks the attack in flight and starts the montage on a
//!   random punch section.
//!
//! # Silent no-ops
//!
//! A missing [`AnimInstance`], an unset [`AttackMontage`] or a montage that
//! is already playing never produce an error. The character is still marked
//! as attacking; only the playback side effect is skipped.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::{debug, trace};

use crate::components::animinstance::AnimInstance;
use crate::components::attack::{AttackMontage, AttackState, AttackVariant};
use crate::components::controller::PlayerInput;
use crate::events::input::{InputAction, InputEvent};
use crate::events::montage::MontageEndedEvent;
use crate::resources::montagestore::MontageStore;
use crate::resources::rng::GameRng;

/// Mark an attack in flight and start the attack montage.
///
/// Returns the punch variant whose section was jumped to, or `None` when no
/// playback was started.
pub fn attack_begin(
    attack: &mut AttackState,
    anim: Option<&mut AnimInstance>,
    montage: Option<&str>,
    store: &MontageStore,
    rng: &mut Rng,
) -> Option<AttackVariant> {
    attack.start_attack();

    let (Some(anim), Some(asset)) = (anim, montage) else {
        trace!("attack begin without animation handle or montage");
        return None;
    };
    if anim.montage_is_playing(asset) {
        return None;
    }
    anim.montage_play(asset, store)?;

    let variant = AttackVariant::pick(rng);
    anim.montage_jump_to_section(variant.section(), asset, store);
    debug!("attack: {:?}", variant);
    Some(variant)
}

/// Press edge of the attack button.
pub fn on_click_begin(
    attack: &mut AttackState,
    anim: Option<&mut AnimInstance>,
    montage: Option<&str>,
    store: &MontageStore,
    rng: &mut Rng,
) -> Option<AttackVariant> {
    if attack.click_begin() {
        attack_begin(attack, anim, montage, store, rng)
    } else {
        None
    }
}

/// The attack animation finished.
pub fn on_attack_end(
    attack: &mut AttackState,
    anim: Option<&mut AnimInstance>,
    montage: Option<&str>,
    store: &MontageStore,
    rng: &mut Rng,
) -> Option<AttackVariant> {
    if attack.attack_end() {
        attack_begin(attack, anim, montage, store, rng)
    } else {
        None
    }
}

/// Routes `Click` input edges to every player character.
pub fn click_observer(
    trigger: On<InputEvent>,
    mut query: Query<
        (
            &mut AttackState,
            Option<&mut AnimInstance>,
            Option<&AttackMontage>,
        ),
        With<PlayerInput>,
    >,
    store: Res<MontageStore>,
    mut rng: ResMut<GameRng>,
) {
    let event = trigger.event();
    if event.action != InputAction::Click {
        return;
    }

    for (mut attack, mut anim, montage) in query.iter_mut() {
        if event.pressed {
            on_click_begin(
                &mut attack,
                anim.as_deref_mut(),
                montage.and_then(AttackMontage::asset),
                &store,
                &mut rng.rng,
            );
        } else {
            attack.click_end();
        }
    }
}

/// Finishes the attack when the character's attack montage ends.
///
/// Endings of other montages, and endings carrying a token other than the
/// last play request, are ignored.
pub fn attack_end_observer(
    trigger: On<MontageEndedEvent>,
    mut query: Query<(
        &mut AttackState,
        Option<&mut AnimInstance>,
        Option<&AttackMontage>,
    )>,
    store: Res<MontageStore>,
    mut rng: ResMut<GameRng>,
) {
    let event = trigger.event();
    let Ok((mut attack, mut anim, montage)) = query.get_mut(event.entity) else {
        return;
    };
    let asset = montage.and_then(AttackMontage::asset);
    if asset != Some(event.asset.as_str()) {
        return;
    }
    if anim.as_deref().and_then(AnimInstance::last_token) != Some(event.token) {
        trace!("stale montage end {:?} on {:?}", event.token, event.entity);
        return;
    }

    on_attack_end(&mut attack, anim.as_deref_mut(), asset, &store, &mut rng.rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::montagestore::PUNCH_MONTAGE;

    fn setup() -> (AttackState, AnimInstance, MontageStore, Rng) {
        (
            AttackState::new(),
            AnimInstance::new(),
            MontageStore::default(),
            Rng::with_seed(1),
        )
    }

    #[test]
    fn test_begin_plays_montage_on_punch_section() {
        let (mut attack, mut anim, store, mut rng) = setup();
        let variant =
            attack_begin(&mut attack, Some(&mut anim), Some(PUNCH_MONTAGE), &store, &mut rng)
                .unwrap();
        assert!(attack.is_attacking);
        assert!(anim.montage_is_playing(PUNCH_MONTAGE));
        assert_eq!(
            anim.active().unwrap().section.as_deref(),
            Some(variant.section())
        );
    }

    #[test]
    fn test_begin_without_anim_still_attacks() {
        let (mut attack, _, store, mut rng) = setup();
        assert_eq!(
            attack_begin(&mut attack, None, Some(PUNCH_MONTAGE), &store, &mut rng),
            None
        );
        assert!(attack.is_attacking);
    }

    #[test]
    fn test_begin_with_unset_montage_still_attacks() {
        let (mut attack, mut anim, store, mut rng) = setup();
        assert_eq!(
            attack_begin(&mut attack, Some(&mut anim), None, &store, &mut rng),
            None
        );
        assert!(attack.is_attacking);
        assert!(anim.active().is_none());
    }

    #[test]
    fn test_begin_with_unknown_montage_still_attacks() {
        let (mut attack, mut anim, store, mut rng) = setup();
        assert_eq!(
            attack_begin(&mut attack, Some(&mut anim), Some("ghost"), &store, &mut rng),
            None
        );
        assert!(attack.is_attacking);
    }

    #[test]
    fn test_begin_while_playing_does_not_restart() {
        let (mut attack, mut anim, store, mut rng) = setup();
        attack_begin(&mut attack, Some(&mut anim), Some(PUNCH_MONTAGE), &store, &mut rng);
        let token = anim.active().unwrap().token;
        assert_eq!(
            attack_begin(&mut attack, Some(&mut anim), Some(PUNCH_MONTAGE), &store, &mut rng),
            None
        );
        assert_eq!(anim.active().unwrap().token, token);
    }

    #[test]
    fn test_click_while_attacking_does_not_begin() {
        let (mut attack, mut anim, store, mut rng) = setup();
        assert!(
            on_click_begin(&mut attack, Some(&mut anim), Some(PUNCH_MONTAGE), &store, &mut rng)
                .is_some()
        );
        let token = anim.active().unwrap().token;
        assert!(
            on_click_begin(&mut attack, Some(&mut anim), Some(PUNCH_MONTAGE), &store, &mut rng)
                .is_none()
        );
        assert_eq!(anim.active().unwrap().token, token);
    }

    #[test]
    fn test_attack_end_while_held_restarts_montage() {
        let (mut attack, mut anim, store, mut rng) = setup();
        on_click_begin(&mut attack, Some(&mut anim), Some(PUNCH_MONTAGE), &store, &mut rng);
        anim.montage_stop();
        assert!(
            on_attack_end(&mut attack, Some(&mut anim), Some(PUNCH_MONTAGE), &store, &mut rng)
                .is_some()
        );
        assert!(attack.is_attacking);
        assert!(anim.montage_is_playing(PUNCH_MONTAGE));
    }
}
