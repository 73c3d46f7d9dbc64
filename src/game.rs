//! Session setup: world resources, observers, the frame schedule and the
//! actors placed by the game mode at start.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::actorclass::ActorClass;
use crate::components::animinstance::AnimInstance;
use crate::components::attack::{AttackMontage, AttackState};
use crate::components::charactermovement::{CharacterMovement, LookRates};
use crate::components::collider::CapsuleCollider;
use crate::components::controller::{Controller, PlayerInput};
use crate::components::pawn::Pawn;
use crate::components::rotation::Rotation;
use crate::components::spawner::{ActorSpawner, SpawnVolume};
use crate::components::worldposition::WorldPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamemode::{GameMode, PawnClass};
use crate::resources::input::InputState;
use crate::resources::inputfeed::InputFeed;
use crate::resources::montagestore::MontageStore;
use crate::resources::rng::GameRng;
use crate::resources::spawnregistry::SpawnRegistry;
use crate::resources::worldtime::WorldTime;
use crate::systems::attack::{attack_end_observer, click_observer};
use crate::systems::character::character_action_observer;
use crate::systems::input::apply_input_feed;
use crate::systems::locomotion::{look_input_system, movement_input_system};
use crate::systems::montage::{montage_playback, update_animation_properties};
use crate::systems::movement::movement;
use crate::systems::spawndestroy::spawn_destroy_observer;

/// Components of a third person character with attack and locomotion.
pub fn third_person_character(config: &GameConfig, position: Vec3) -> impl Bundle {
    let montage = match &config.attack_montage {
        Some(asset) => AttackMontage::new(asset.clone()),
        None => AttackMontage::unset(),
    };
    (
        Pawn {
            class: PawnClass::ThirdPersonCharacter,
        },
        WorldPosition::from_vec(position),
        Rotation::default(),
        Controller::default(),
        PlayerInput,
        CapsuleCollider::default(),
        AttackState::new(),
        montage,
        AnimInstance::new(),
        CharacterMovement::from_config(config),
        LookRates {
            base_turn_rate: config.base_turn_rate,
            base_look_up_rate: config.base_look_up_rate,
        },
    )
}

/// Components of a bare possessable pawn.
pub fn default_pawn(position: Vec3) -> impl Bundle {
    (
        Pawn {
            class: PawnClass::DefaultPawn,
        },
        WorldPosition::from_vec(position),
        Rotation::default(),
        Controller::default(),
        PlayerInput,
    )
}

/// Components of an actor spawner at the given pose.
pub fn actor_spawner(position: Vec3, rotation: Rotation) -> impl Bundle {
    (
        ActorSpawner,
        SpawnVolume::default(),
        WorldPosition::from_vec(position),
        rotation,
    )
}

/// Place the default pawn and the level's spawner.
pub fn setup(
    mut commands: Commands,
    mut registry: ResMut<SpawnRegistry>,
    config: Res<GameConfig>,
    mode: Res<GameMode>,
) {
    let pawn = match mode.default_pawn {
        PawnClass::ThirdPersonCharacter => registry.create(
            &mut commands,
            ActorClass::Pawn,
            third_person_character(&config, config.player_start),
        ),
        PawnClass::DefaultPawn => registry.create(
            &mut commands,
            ActorClass::Pawn,
            default_pawn(config.player_start),
        ),
    };
    let spawner = registry.create(
        &mut commands,
        ActorClass::ActorSpawner,
        actor_spawner(config.spawner_location, config.spawner_rotation),
    );
    info!(
        "Session started: {:?} {:?} at {:?}, spawner {:?} at {:?}",
        mode.default_pawn, pawn, config.player_start, spawner, config.spawner_location
    );
}

/// Build a world with every resource and observer the session needs.
///
/// No actors are placed; run [`setup`] for that.
pub fn build_world(config: GameConfig, montages: MontageStore, feed: InputFeed) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameRng::new(config.seed));
    world.insert_resource(GameMode::from_pawn_path(&config.default_pawn));
    world.insert_resource(config);
    world.insert_resource(montages);
    world.insert_resource(feed);
    world.insert_resource(InputState::default());
    world.insert_resource(SpawnRegistry::new());

    world.add_observer(click_observer);
    world.add_observer(attack_end_observer);
    world.add_observer(spawn_destroy_observer);
    world.add_observer(character_action_observer);
    world.flush();
    world
}

/// Per-frame schedule: input, look, movement, then animation.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(apply_input_feed);
    update.add_systems(look_input_system.after(apply_input_feed));
    update.add_systems(movement_input_system.after(look_input_system));
    update.add_systems(movement.after(movement_input_system));
    update.add_systems(montage_playback.after(movement));
    update.add_systems(update_animation_properties.after(montage_playback));
    update
}

/// Run [`setup`] once on `world`.
pub fn start_session(world: &mut World) -> Result<(), String> {
    let setup_id = world.register_system(setup);
    world
        .run_system(setup_id)
        .map_err(|e| format!("Failed to run session setup: {}", e))?;
    world
        .unregister_system(setup_id)
        .map_err(|e| format!("Failed to unregister session setup: {}", e))?;
    Ok(())
}
