//! Scripted input source for headless sessions.
//!
//! An [`InputFeed`] is a list of frame-stamped input samples loaded from JSON.
//! [`apply_input_feed`](crate::systems::input::apply_input_feed) pops the
//! samples due each frame and applies them to
//! [`InputState`](crate::resources::input::InputState).
//!
//! # File Format
//!
//! ```json
//! {
//!   "samples": [
//!     { "frame": 0,  "action": "SpawnActors", "pressed": true },
//!     { "frame": 1,  "action": "SpawnActors", "pressed": false },
//!     { "frame": 5,  "axis": "MoveForward", "value": 1.0 },
//!     { "frame": 30, "action": "Click", "pressed": true }
//!   ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::events::input::{InputAction, InputAxis};

/// One scheduled input change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputSample {
    Action {
        frame: u64,
        action: InputAction,
        pressed: bool,
    },
    Axis {
        frame: u64,
        axis: InputAxis,
        value: f32,
    },
}

impl InputSample {
    pub fn frame(&self) -> u64 {
        match self {
            InputSample::Action { frame, .. } | InputSample::Axis { frame, .. } => *frame,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct InputScript {
    samples: Vec<InputSample>,
}

/// Frame-ordered queue of input samples.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputFeed {
    samples: Vec<InputSample>,
    cursor: usize,
    /// Frame the next call to [`InputFeed::drain_frame`] serves.
    pub frame: u64,
}

impl InputFeed {
    /// Build a feed; samples are stably sorted by frame.
    pub fn new(mut samples: Vec<InputSample>) -> Self {
        samples.sort_by_key(InputSample::frame);
        Self {
            samples,
            cursor: 0,
            frame: 0,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let script: InputScript =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse input script: {}", e))?;
        Ok(Self::new(script.samples))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {:?}: {}", path, e))?;
        Self::from_json(&text)
    }

    /// Samples scheduled up to and including the current frame, then advance
    /// to the next frame.
    pub fn drain_frame(&mut self) -> Vec<InputSample> {
        let start = self.cursor;
        while self
            .samples
            .get(self.cursor)
            .is_some_and(|s| s.frame() <= self.frame)
        {
            self.cursor += 1;
        }
        self.frame += 1;
        self.samples[start..self.cursor].to_vec()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.samples.len()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_samples() {
        let feed = InputFeed::from_json(
            r#"{ "samples": [
                { "frame": 2, "axis": "MoveForward", "value": 1.0 },
                { "frame": 0, "action": "Click", "pressed": true },
                { "frame": 1, "action": "ResetVR", "pressed": true }
            ] }"#,
        )
        .unwrap();
        assert_eq!(feed.len(), 3);
        assert!(!feed.is_finished());
    }

    #[test]
    fn test_drain_by_frame() {
        let mut feed = InputFeed::new(vec![
            InputSample::Axis {
                frame: 2,
                axis: InputAxis::Turn,
                value: 0.5,
            },
            InputSample::Action {
                frame: 0,
                action: InputAction::Click,
                pressed: true,
            },
        ]);
        assert_eq!(feed.drain_frame().len(), 1);
        assert!(feed.drain_frame().is_empty());
        let third = feed.drain_frame();
        assert_eq!(third.len(), 1);
        assert_eq!(third[0].frame(), 2);
        assert!(feed.is_finished());
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(InputFeed::from_json("{ \"samples\": [ { \"frame\": 0 } ] }").is_err());
        assert!(InputFeed::load_from_file("./no/such/script.json").is_err());
    }
}
