//! Per-frame input resource.
//!
//! Captures the state of the bound actions and axes and exposes it to systems
//! via the [`InputState`] resource. Actions track press/release edges; axes
//! hold the last value written, like an analog stick that stays where it was
//! left.
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputAxis};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state.
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed this frame.
    pub just_pressed: bool,
    /// Whether the action was released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Apply a press (`true`) or release (`false`).
    ///
    /// Returns `true` when this changed the held state, i.e. an edge happened.
    pub fn set(&mut self, pressed: bool) -> bool {
        if self.active == pressed {
            return false;
        }
        self.active = pressed;
        if pressed {
            self.just_pressed = true;
        } else {
            self.just_released = true;
        }
        true
    }

    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Current values of the named axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisValues {
    pub move_forward: f32,
    pub move_right: f32,
    pub turn: f32,
    pub turn_rate: f32,
    pub look_up: f32,
    pub look_up_rate: f32,
}

impl AxisValues {
    pub fn get(&self, axis: InputAxis) -> f32 {
        match axis {
            InputAxis::MoveForward => self.move_forward,
            InputAxis::MoveRight => self.move_right,
            InputAxis::Turn => self.turn,
            InputAxis::TurnRate => self.turn_rate,
            InputAxis::LookUp => self.look_up,
            InputAxis::LookUpRate => self.look_up_rate,
        }
    }

    pub fn set(&mut self, axis: InputAxis, value: f32) {
        let slot = match axis {
            InputAxis::MoveForward => &mut self.move_forward,
            InputAxis::MoveRight => &mut self.move_right,
            InputAxis::Turn => &mut self.turn,
            InputAxis::TurnRate => &mut self.turn_rate,
            InputAxis::LookUp => &mut self.look_up,
            InputAxis::LookUpRate => &mut self.look_up_rate,
        };
        *slot = value;
    }
}

/// Resource capturing the per-frame input state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub jump: BoolState,
    pub spawn_actors: BoolState,
    pub destroy_actors: BoolState,
    pub click: BoolState,
    pub reset_vr: BoolState,
    pub touch: BoolState,
    pub axes: AxisValues,
}

impl InputState {
    pub fn action(&self, action: InputAction) -> &BoolState {
        match action {
            InputAction::Jump => &self.jump,
            InputAction::SpawnActors => &self.spawn_actors,
            InputAction::DestroyActors => &self.destroy_actors,
            InputAction::Click => &self.click,
            InputAction::ResetVr => &self.reset_vr,
            InputAction::Touch => &self.touch,
        }
    }

    pub fn action_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Jump => &mut self.jump,
            InputAction::SpawnActors => &mut self.spawn_actors,
            InputAction::DestroyActors => &mut self.destroy_actors,
            InputAction::Click => &mut self.click,
            InputAction::ResetVr => &mut self.reset_vr,
            InputAction::Touch => &mut self.touch,
        }
    }

    /// Forget last frame's press/release edges.
    pub fn clear_edges(&mut self) {
        self.jump.clear_edges();
        self.spawn_actors.clear_edges();
        self.destroy_actors.clear_edges();
        self.click.clear_edges();
        self.reset_vr.clear_edges();
        self.touch.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::default();
        assert!(bs.set(true));
        assert!(bs.just_pressed);
        assert!(!bs.set(true));
        bs.clear_edges();
        assert!(bs.set(false));
        assert!(bs.just_released);
        assert!(!bs.just_pressed);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        for action in [
            InputAction::Jump,
            InputAction::SpawnActors,
            InputAction::DestroyActors,
            InputAction::Click,
            InputAction::ResetVr,
            InputAction::Touch,
        ] {
            assert!(!input.action(action).active);
        }
        assert_eq!(input.axes, AxisValues::default());
    }

    #[test]
    fn test_axis_set_get() {
        let mut axes = AxisValues::default();
        axes.set(InputAxis::MoveRight, -0.5);
        axes.set(InputAxis::LookUpRate, 1.0);
        assert_eq!(axes.get(InputAxis::MoveRight), -0.5);
        assert_eq!(axes.get(InputAxis::LookUpRate), 1.0);
        assert_eq!(axes.get(InputAxis::MoveForward), 0.0);
    }
}
