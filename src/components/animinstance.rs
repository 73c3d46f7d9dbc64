//! Animation subsystem handle attached to a character.
//!
//! [`AnimInstance`] owns at most one active montage. Playback is advanced by
//! [`montage_playback`](crate::systems::montage::montage_playback), which
//! triggers a [`MontageEndedEvent`](crate::events::montage::MontageEndedEvent)
//! carrying the [`MontageToken`] handed out by [`AnimInstance::montage_play`].
//!
//! Every operation degrades to a no-op when the montage is unknown to the
//! [`MontageStore`], mirroring how the engine ignores a null asset.

use bevy_ecs::prelude::Component;
use log::trace;

use crate::resources::montagestore::MontageStore;

/// Identifies one play request of a montage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MontageToken(pub u64);

/// Montage currently playing on an [`AnimInstance`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveMontage {
    pub asset: String,
    pub token: MontageToken,
    /// Playback position in seconds from the start of the montage.
    pub position: f32,
    /// Position at which playback stops.
    pub end: f32,
    /// Section jumped to, if any.
    pub section: Option<String>,
}

/// Per-character animation state.
#[derive(Component, Clone, Debug, Default)]
pub struct AnimInstance {
    active: Option<ActiveMontage>,
    next_token: u64,
    /// Ground speed of the owning pawn, refreshed every frame.
    pub movement_speed: f32,
    /// Whether the owning pawn currently requests a jump.
    pub is_jumping: bool,
}

impl AnimInstance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ActiveMontage> {
        self.active.as_ref()
    }

    /// Token of the most recent successful [`AnimInstance::montage_play`].
    pub fn last_token(&self) -> Option<MontageToken> {
        (self.next_token > 0).then_some(MontageToken(self.next_token))
    }

    pub fn montage_is_playing(&self, asset: &str) -> bool {
        self.active.as_ref().is_some_and(|m| m.asset == asset)
    }

    /// Start `asset` from its beginning, replacing whatever was playing.
    ///
    /// Returns `None` (and plays nothing) when the store has no such montage.
    pub fn montage_play(&mut self, asset: &str, store: &MontageStore) -> Option<MontageToken> {
        let def = store.get(asset)?;
        self.next_token += 1;
        let token = MontageToken(self.next_token);
        self.active = Some(ActiveMontage {
            asset: asset.to_string(),
            token,
            position: 0.0,
            end: def.length(),
            section: None,
        });
        trace!("montage '{}' started ({:?})", asset, token);
        Some(token)
    }

    /// Move playback of `asset` to the start of `section`; playback then stops
    /// at the end of that section.
    ///
    /// Ignored unless `asset` is the active montage and defines `section`.
    pub fn montage_jump_to_section(&mut self, section: &str, asset: &str, store: &MontageStore) {
        let Some(active) = self.active.as_mut().filter(|m| m.asset == asset) else {
            return;
        };
        let Some(sec) = store.get(asset).and_then(|def| def.section(section)) else {
            return;
        };
        active.position = sec.start;
        active.end = sec.start + sec.length;
        active.section = Some(section.to_string());
    }

    /// Advance the active montage by `dt` seconds.
    ///
    /// Returns the finished montage when it ran out this step.
    pub fn advance(&mut self, dt: f32) -> Option<ActiveMontage> {
        let active = self.active.as_mut()?;
        active.position += dt;
        if active.position >= active.end {
            return self.active.take();
        }
        None
    }

    /// Drop the active montage without reporting completion.
    pub fn montage_stop(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MontageStore {
        MontageStore::default()
    }

    #[test]
    fn test_play_unknown_asset_is_noop() {
        let mut anim = AnimInstance::new();
        assert_eq!(anim.montage_play("missing", &store()), None);
        assert!(anim.active().is_none());
    }

    #[test]
    fn test_play_sets_playing_and_unique_tokens() {
        let mut anim = AnimInstance::new();
        let first = anim.montage_play("punch_montage", &store()).unwrap();
        assert!(anim.montage_is_playing("punch_montage"));
        assert!(!anim.montage_is_playing("other"));
        let second = anim.montage_play("punch_montage", &store()).unwrap();
        assert_ne!(first, second);
        assert_eq!(anim.last_token(), Some(second));
    }

    #[test]
    fn test_jump_to_section_limits_playback_to_section() {
        let store = store();
        let mut anim = AnimInstance::new();
        anim.montage_play("punch_montage", &store);
        anim.montage_jump_to_section("Punch2", "punch_montage", &store);
        let active = anim.active().unwrap();
        assert_eq!(active.section.as_deref(), Some("Punch2"));
        assert!((active.position - 0.6).abs() < 1e-6);
        assert!((active.end - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_jump_to_unknown_section_is_ignored() {
        let store = store();
        let mut anim = AnimInstance::new();
        anim.montage_play("punch_montage", &store);
        anim.montage_jump_to_section("Kick", "punch_montage", &store);
        assert_eq!(anim.active().unwrap().section, None);
    }

    #[test]
    fn test_advance_finishes_and_clears() {
        let store = store();
        let mut anim = AnimInstance::new();
        let token = anim.montage_play("punch_montage", &store).unwrap();
        anim.montage_jump_to_section("Punch1", "punch_montage", &store);
        assert!(anim.advance(0.3).is_none());
        let finished = anim.advance(0.3).unwrap();
        assert_eq!(finished.token, token);
        assert!(!anim.montage_is_playing("punch_montage"));
        assert!(anim.advance(1.0).is_none());
    }
}
