//! Game configuration resource.
//!
//! Manages session, character and level settings loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [session]
//! frames = 600
//! fixed_delta = 0.0166667
//! seed = 42
//!
//! [character]
//! base_turn_rate = 45
//! base_look_up_rate = 45
//! max_walk_speed = 600
//! rotation_rate = 540
//! jump_z_velocity = 600
//! air_control = 0.2
//!
//! [attack]
//! montage = punch_montage
//!
//! [game]
//! default_pawn = /Game/ThirdPersonCPP/Blueprints/ThirdPersonCharacter
//! player_start = 0, 0, 100
//! spawner_location = 400, 0, 200
//! spawner_rotation = 0, 0, 0
//! ```
//!
//! A `montage` value of `none` (or empty) leaves the attack montage unset.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec3;
use log::info;
use std::path::PathBuf;

use crate::components::rotation::Rotation;

/// Default safe values for startup
const DEFAULT_FRAMES: u32 = 600;
const DEFAULT_FIXED_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_TURN_RATE: f32 = 45.0;
const DEFAULT_LOOK_UP_RATE: f32 = 45.0;
const DEFAULT_MAX_WALK_SPEED: f32 = 600.0;
const DEFAULT_ROTATION_RATE: f32 = 540.0;
const DEFAULT_JUMP_Z_VELOCITY: f32 = 600.0;
const DEFAULT_AIR_CONTROL: f32 = 0.2;
const DEFAULT_ATTACK_MONTAGE: &str = "punch_montage";
const DEFAULT_PAWN_PATH: &str = "/Game/ThirdPersonCPP/Blueprints/ThirdPersonCharacter";
const DEFAULT_PLAYER_START: Vec3 = Vec3::new(0.0, 0.0, 100.0);
const DEFAULT_SPAWNER_LOCATION: Vec3 = Vec3::new(400.0, 0.0, 200.0);
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of frames a headless session runs.
    pub frames: u32,
    /// Fixed frame delta in seconds.
    pub fixed_delta: f32,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
    pub max_walk_speed: f32,
    pub rotation_rate: f32,
    pub jump_z_velocity: f32,
    pub air_control: f32,
    /// Attack montage asset key; `None` when unset.
    pub attack_montage: Option<String>,
    /// Class path of the pawn spawned at session start.
    pub default_pawn: String,
    pub player_start: Vec3,
    pub spawner_location: Vec3,
    pub spawner_rotation: Rotation,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            fixed_delta: DEFAULT_FIXED_DELTA,
            seed: None,
            base_turn_rate: DEFAULT_TURN_RATE,
            base_look_up_rate: DEFAULT_LOOK_UP_RATE,
            max_walk_speed: DEFAULT_MAX_WALK_SPEED,
            rotation_rate: DEFAULT_ROTATION_RATE,
            jump_z_velocity: DEFAULT_JUMP_Z_VELOCITY,
            air_control: DEFAULT_AIR_CONTROL,
            attack_montage: Some(DEFAULT_ATTACK_MONTAGE.to_string()),
            default_pawn: DEFAULT_PAWN_PATH.to_string(),
            player_start: DEFAULT_PLAYER_START,
            spawner_location: DEFAULT_SPAWNER_LOCATION,
            spawner_rotation: Rotation::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)?;

        info!(
            "Loaded config from {:?}: {} frames @ {:.4}s, pawn={}, montage={:?}",
            self.config_path, self.frames, self.fixed_delta, self.default_pawn, self.attack_montage
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    /// Apply every present key, or none of them if any key is invalid.
    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        let mut next = self.clone();
        next.apply_keys(config)?;
        *self = next;
        Ok(())
    }

    fn apply_keys(&mut self, config: &Ini) -> Result<(), String> {
        // [session] section
        if let Some(frames) = config.getuint("session", "frames")? {
            self.frames = u32::try_from(frames)
                .map_err(|_| format!("session.frames is out of range, got {}", frames))?;
        }
        if let Some(delta) = config.getfloat("session", "fixed_delta")? {
            if !delta.is_finite() || delta <= 0.0 {
                return Err(format!("session.fixed_delta must be positive, got {}", delta));
            }
            self.fixed_delta = delta as f32;
        }
        if let Some(seed) = config.getuint("session", "seed")? {
            self.seed = Some(seed);
        }

        // [character] section
        if let Some(v) = finite_float(config, "character", "base_turn_rate")? {
            self.base_turn_rate = v;
        }
        if let Some(v) = finite_float(config, "character", "base_look_up_rate")? {
            self.base_look_up_rate = v;
        }
        if let Some(v) = finite_float(config, "character", "max_walk_speed")? {
            self.max_walk_speed = v;
        }
        if let Some(v) = finite_float(config, "character", "rotation_rate")? {
            self.rotation_rate = v;
        }
        if let Some(v) = finite_float(config, "character", "jump_z_velocity")? {
            self.jump_z_velocity = v;
        }
        if let Some(v) = finite_float(config, "character", "air_control")? {
            self.air_control = v;
        }

        // [attack] section
        if let Some(montage) = config.get("attack", "montage") {
            let montage = montage.trim();
            self.attack_montage = (!montage.is_empty() && !montage.eq_ignore_ascii_case("none"))
                .then(|| montage.to_string());
        }

        // [game] section
        if let Some(pawn) = config.get("game", "default_pawn") {
            self.default_pawn = pawn.trim().to_string();
        }
        if let Some(v) = config.get("game", "player_start") {
            self.player_start = parse_vec3(&v)?;
        }
        if let Some(v) = config.get("game", "spawner_location") {
            self.spawner_location = parse_vec3(&v)?;
        }
        if let Some(v) = config.get("game", "spawner_rotation") {
            let r = parse_vec3(&v)?;
            self.spawner_rotation = Rotation::new(r.x, r.y, r.z);
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [session] section
        config.set("session", "frames", Some(self.frames.to_string()));
        config.set("session", "fixed_delta", Some(self.fixed_delta.to_string()));
        if let Some(seed) = self.seed {
            config.set("session", "seed", Some(seed.to_string()));
        }

        // [character] section
        config.set("character", "base_turn_rate", Some(self.base_turn_rate.to_string()));
        config.set(
            "character",
            "base_look_up_rate",
            Some(self.base_look_up_rate.to_string()),
        );
        config.set("character", "max_walk_speed", Some(self.max_walk_speed.to_string()));
        config.set("character", "rotation_rate", Some(self.rotation_rate.to_string()));
        config.set(
            "character",
            "jump_z_velocity",
            Some(self.jump_z_velocity.to_string()),
        );
        config.set("character", "air_control", Some(self.air_control.to_string()));

        // [attack] section
        config.set(
            "attack",
            "montage",
            Some(
                self.attack_montage
                    .clone()
                    .unwrap_or_else(|| "none".to_string()),
            ),
        );

        // [game] section
        config.set("game", "default_pawn", Some(self.default_pawn.clone()));
        config.set("game", "player_start", Some(format_vec3(self.player_start)));
        config.set(
            "game",
            "spawner_location",
            Some(format_vec3(self.spawner_location)),
        );
        let r = self.spawner_rotation;
        config.set(
            "game",
            "spawner_rotation",
            Some(format_vec3(Vec3::new(r.pitch, r.yaw, r.roll))),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn finite_float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, String> {
    match config.getfloat(section, key)? {
        Some(v) if !v.is_finite() => Err(format!("{}.{} must be finite, got {}", section, key, v)),
        v => Ok(v.map(|v| v as f32)),
    }
}

/// Parse `"x, y, z"` into a vector.
pub fn parse_vec3(text: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("Expected three comma separated numbers, got '{}'", text));
    }
    let mut out = [0.0f32; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f32>()
            .map_err(|e| format!("Invalid number '{}' in '{}': {}", part, text, e))?;
        if !slot.is_finite() {
            return Err(format!("Non-finite number '{}' in '{}'", part, text));
        }
    }
    Ok(Vec3::from_array(out))
}

fn format_vec3(v: Vec3) -> String {
    format!("{}, {}, {}", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.frames, 600);
        assert_eq!(config.base_turn_rate, 45.0);
        assert_eq!(config.attack_montage.as_deref(), Some("punch_montage"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[session]\nframes = 120\nseed = 9\n[character]\nmax_walk_speed = 300\n[game]\nspawner_location = 1, 2, 3\n",
            )
            .unwrap();
        assert_eq!(config.frames, 120);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_walk_speed, 300.0);
        assert_eq!(config.spawner_location, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.rotation_rate, 540.0);
    }

    #[test]
    fn test_empty_montage_is_unset() {
        let mut config = GameConfig::new();
        config.load_from_str("[attack]\nmontage = none\n").unwrap();
        assert_eq!(config.attack_montage, None);
    }

    #[test]
    fn test_bad_vector_is_error() {
        let mut config = GameConfig::new();
        assert!(config.load_from_str("[game]\nplayer_start = 1, 2\n").is_err());
        assert!(parse_vec3("a, b, c").is_err());
    }

    #[test]
    fn test_non_positive_delta_is_error() {
        let mut config = GameConfig::new();
        assert!(config.load_from_str("[session]\nfixed_delta = 0\n").is_err());
    }

    #[test]
    fn test_non_finite_values_are_errors() {
        let mut config = GameConfig::new();
        assert!(config.load_from_str("[session]\nfixed_delta = nan\n").is_err());
        assert!(config.load_from_str("[session]\nfixed_delta = inf\n").is_err());
        assert!(config.load_from_str("[character]\nmax_walk_speed = NaN\n").is_err());
        assert!(config.load_from_str("[game]\nplayer_start = 0, nan, 0\n").is_err());
        assert_eq!(config, GameConfig::new());
    }

    #[test]
    fn test_frames_out_of_range_is_error() {
        let mut config = GameConfig::new();
        let text = format!("[session]\nframes = {}\n", u64::from(u32::MAX) + 1);
        assert!(config.load_from_str(&text).is_err());
        assert_eq!(config.frames, 600);
    }

    #[test]
    fn test_failed_load_keeps_previous_values() {
        let mut config = GameConfig::new();
        let result = config.load_from_str(
            "[session]\nframes = 5\n[character]\nmax_walk_speed = 1\n[game]\nplayer_start = 1, 2\n",
        );
        assert!(result.is_err());
        assert_eq!(config, GameConfig::new());
        assert_eq!(config.frames, 600);
        assert_eq!(config.max_walk_speed, 600.0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config, GameConfig::with_path("./definitely/not/here.ini"));
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let path = std::env::temp_dir().join(format!("spawndestroy_cfg_{}.ini", std::process::id()));
        let mut config = GameConfig::with_path(&path);
        config.frames = 42;
        config.seed = Some(5);
        config.attack_montage = None;
        config.spawner_rotation = Rotation::new(0.0, 90.0, 0.0);
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.frames, 42);
        assert_eq!(loaded.seed, Some(5));
        assert_eq!(loaded.attack_montage, None);
        assert_eq!(loaded.spawner_rotation.yaw, 90.0);
    }
}
