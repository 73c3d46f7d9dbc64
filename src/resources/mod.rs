//! ECS resources made available to systems.
//!
//! Overview
//! - `gameconfig` – INI-backed session, character and level settings
//! - `gamemode` – pawn class spawned at session start
//! - `input` – per-frame action and axis state
//! - `inputfeed` – frame-stamped input script for headless sessions
//! - `montagestore` – montage definitions keyed by asset name
//! - `rng` – seeded random source for gameplay choices
//! - `spawnregistry` – actor creation, lookup and destruction by class
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod gamemode;
pub mod input;
pub mod inputfeed;
pub mod montagestore;
pub mod rng;
pub mod spawnregistry;
pub mod worldtime;
