//! Horda - a side-scrolling zombie gauntlet
//!
//! Core modules:
//! - `sim`: Deterministic simulation (locomotion, combat, AI, horde director)
//! - `clock`: Fixed-timestep accumulator decoupling ticks from frames
//! - `level`: Static level data (platforms, spawns, collectibles)
//!
//! Rendering, input capture and audio are external collaborators: they feed
//! an [`sim::InputFrame`] in and read [`sim::WorldState`] snapshots and
//! [`sim::GameEvent`]s out. Nothing in this crate draws or blocks.

pub mod clock;
pub mod level;
pub mod sim;

pub use clock::SimClock;
pub use level::LevelData;

/// Game tuning constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Largest frame delta the clock will honor, to prevent runaway
    /// catch-up after a stall (tab backgrounding etc.)
    pub const MAX_FRAME_DELTA_MS: f64 = 100.0;

    // Physics (per-tick units)
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_FORCE: f32 = -16.0;
    pub const WALL_JUMP_FORCE_X: f32 = 10.0;
    pub const WALL_JUMP_FORCE_Y: f32 = -14.0;
    pub const TERMINAL_VELOCITY: f32 = 18.0;

    // Run speed & acceleration
    pub const MOVE_SPEED: f32 = 7.0;
    pub const ACCELERATION: f32 = 1.5;
    pub const AIR_ACCELERATION: f32 = 0.8;
    pub const FRICTION: f32 = 0.82;
    pub const AIR_FRICTION: f32 = 0.95;

    // Advanced locomotion
    pub const WALL_SLIDE_SPEED: f32 = 2.0;
    pub const SLIDE_SPEED: f32 = 12.0;
    pub const SLIDE_DURATION: u32 = 35;
    pub const MAX_JUMPS: u32 = 2;
    pub const DASH_SPEED: f32 = 20.0;
    pub const DASH_DURATION: u32 = 15;
    pub const DASH_COOLDOWN: u32 = 90;

    // Gameplay
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const INVINCIBLE_TICKS: u32 = 90;
    pub const MAX_HEALTH: i32 = 3;
    pub const MAX_WEAPONS: usize = 2;
    pub const MAX_MEDKITS: u32 = 1;
    /// Ticks between full hordes (60 seconds at 60 Hz)
    pub const HORDE_INTERVAL: u32 = 3600;
    pub const HORDE_WARNING_TICKS: u32 = 180;
    pub const HORDE_SIZE: u32 = 8;
    pub const MINI_HORDE_SIZE: u32 = 3;
    /// Cooldown applied when firing on an empty clip
    pub const DRY_FIRE_TICKS: u32 = 15;
    pub const PROJECTILE_LIFE: u32 = 60;

    // World
    pub const WORLD_WIDTH: f32 = 14000.0;
    pub const WORLD_HEIGHT: f32 = 1000.0;
    pub const FLOOR_Y: f32 = 600.0;
    /// Falling this far below the floor line is a void event
    pub const VOID_Y: f32 = FLOOR_Y + 400.0;
    /// Logical viewport width used for camera follow and horde spawn points
    pub const VIEW_WIDTH: f32 = 960.0;
    pub const CAMERA_LERP: f32 = 0.1;

    // Zombie AI
    pub const SIGHT_RADIUS: f32 = 400.0;
    pub const SIGHT_BAND: f32 = 200.0;
    pub const SEARCH_TICKS: u32 = 180;
    pub const SPAWNED_SEARCH_TICKS: u32 = 300;
    pub const SCREAM_COOLDOWN: u32 = 600;
    pub const SCREAM_RADIUS: f32 = 800.0;
    pub const SUMMON_CADENCE: u32 = 120;
    pub const AI_JUMP_FORCE: f32 = -13.0;

    // Scoring
    pub const SCORE_KILL: u64 = 100;
    pub const SCORE_TANK_BONUS: u64 = 400;
    pub const SCORE_SCREAMER_BONUS: u64 = 200;
    pub const SCORE_NEW_WEAPON: u64 = 50;
    pub const SCORE_DUPLICATE_WEAPON: u64 = 25;
}
