//! World state and core simulation types
//!
//! Everything the simulation mutates lives here. The world is exclusively
//! owned by the tick loop; external layers read snapshots and drain events
//! but never write.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::weapons::WeaponKind;
use super::zombies::ZombieKind;
use crate::consts::*;
use crate::level::LevelData;

/// Packed RGB colors handed to renderers through entity snapshots
pub mod color {
    pub const PLAYER: u32 = 0x3b82f6;
    pub const WHITE: u32 = 0xffffff;
    pub const CYAN: u32 = 0x06b6d4;
    pub const RED: u32 = 0xef4444;
    pub const BLUE: u32 = 0x3b82f6;
    pub const AMBER: u32 = 0xfbbf24;
    pub const EMERALD: u32 = 0x10b981;
    pub const PINK: u32 = 0xec4899;
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Menu,
    Playing,
    Paused,
    GameOver,
    Victory,
}

/// Axis-aligned bounding box, the universal collision primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Solid floor; landing here updates the checkpoint
    Ground,
    /// Thin solid ledge; landing here updates the checkpoint
    Platform,
    /// Solid wall/crate; landing here does NOT update the checkpoint
    Obstacle,
    /// Level exit; player contact triggers victory
    Goal,
}

/// Static level geometry, immutable for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

/// Logical action states sampled once per tick.
///
/// Edge-triggered actions (jump, dash, reload, ...) are derived by comparing
/// against the previous tick's frame; hold actions (movement, fire) are read
/// directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub crouch: bool,
    pub jump: bool,
    pub fire: bool,
    pub switch_weapon: bool,
    pub reload: bool,
    pub medkit: bool,
    pub dash: bool,
    pub pause: bool,
}

/// Rising edges between two consecutive input frames
#[derive(Debug, Clone, Copy, Default)]
pub struct InputEdges {
    pub crouch: bool,
    pub jump: bool,
    pub switch_weapon: bool,
    pub reload: bool,
    pub medkit: bool,
    pub dash: bool,
    pub pause: bool,
}

impl InputFrame {
    pub fn edges_since(&self, prev: &InputFrame) -> InputEdges {
        InputEdges {
            crouch: self.crouch && !prev.crouch,
            jump: self.jump && !prev.jump,
            switch_weapon: self.switch_weapon && !prev.switch_weapon,
            reload: self.reload && !prev.reload,
            medkit: self.medkit && !prev.medkit,
            dash: self.dash && !prev.dash,
            pause: self.pause && !prev.pause,
        }
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub is_grounded: bool,
    pub facing_right: bool,
    pub health: i32,
    pub max_health: i32,
    pub is_dead: bool,

    pub attack_cooldown: u32,
    pub invincible_timer: u32,
    pub jumps_remaining: u32,

    // Movement state: sliding, wall-sliding and dashing are mutually
    // exclusive; wall-slide is derived from contact, never set by input.
    pub is_sliding: bool,
    pub slide_timer: u32,
    pub is_wall_sliding: bool,
    /// -1 pressed against a left wall, 1 right wall, 0 none (per tick)
    pub wall_dir: i8,
    pub is_dashing: bool,
    pub dash_timer: u32,
    pub dash_cooldown: u32,

    // Checkpoint used to respawn after a void fall
    pub last_safe_x: f32,
    pub last_safe_y: f32,

    // Inventory
    pub weapons: Vec<WeaponKind>,
    pub current_weapon_index: usize,
    pub ammo_clip: [u32; 3],
    pub ammo_reserve: [u32; 3],
    pub is_reloading: bool,
    pub reload_timer: u32,
    pub medkits: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        let mut ammo_clip = [0u32; 3];
        let mut ammo_reserve = [0u32; 3];
        for kind in WeaponKind::ALL {
            ammo_clip[kind.index()] = kind.spec().clip_size;
            ammo_reserve[kind.index()] = kind.spec().start_ammo;
        }
        Self {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vx: 0.0,
            vy: 0.0,
            is_grounded: false,
            facing_right: true,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            is_dead: false,
            attack_cooldown: 0,
            invincible_timer: 0,
            jumps_remaining: MAX_JUMPS,
            is_sliding: false,
            slide_timer: 0,
            is_wall_sliding: false,
            wall_dir: 0,
            is_dashing: false,
            dash_timer: 0,
            dash_cooldown: 0,
            last_safe_x: x,
            last_safe_y: y,
            weapons: vec![WeaponKind::Pistol],
            current_weapon_index: 0,
            ammo_clip,
            ammo_reserve,
            is_reloading: false,
            reload_timer: 0,
            medkits: 0,
        }
    }

    pub fn current_weapon(&self) -> WeaponKind {
        self.weapons[self.current_weapon_index]
    }

    pub fn clip(&self, kind: WeaponKind) -> u32 {
        self.ammo_clip[kind.index()]
    }

    pub fn reserve(&self, kind: WeaponKind) -> u32 {
        self.ammo_reserve[kind.index()]
    }
}

/// An AI-driven enemy
#[derive(Debug, Clone)]
pub struct Zombie {
    pub kind: ZombieKind,
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub is_grounded: bool,
    pub facing_right: bool,
    pub health: i32,
    pub max_health: i32,
    pub is_dead: bool,

    pub patrol_center: f32,
    pub patrol_range: f32,
    pub aggro: bool,
    /// Ticks to keep pursuing the last known position after losing sight
    pub search_timer: u32,
    pub last_known_x: f32,
    /// Screamer scream cooldown
    pub attack_timer: u32,
    /// Screamer reinforcement cadence
    pub summon_timer: u32,
}

impl Zombie {
    /// A zombie placed by level data: idle, patrolling around its spawn
    pub fn scripted(kind: ZombieKind, x: f32, y: f32, facing_right: bool) -> Self {
        let spec = kind.spec();
        Self {
            kind,
            rect: Rect::new(x, y, spec.w, spec.h),
            vx: 0.0,
            vy: 0.0,
            is_grounded: false,
            facing_right,
            health: spec.health,
            max_health: spec.health,
            is_dead: false,
            patrol_center: x,
            patrol_range: 150.0,
            aggro: false,
            search_timer: 0,
            last_known_x: x,
            attack_timer: 0,
            summon_timer: 0,
        }
    }

    /// A zombie airdropped by the horde director or a Screamer summon:
    /// arrives airborne and pre-aggroed toward `last_known_x`.
    pub fn spawned(kind: ZombieKind, x: f32, y: f32, facing_right: bool, last_known_x: f32) -> Self {
        let mut zombie = Self::scripted(kind, x, y, facing_right);
        zombie.patrol_range = 200.0;
        zombie.aggro = true;
        zombie.search_timer = SPAWNED_SEARCH_TICKS;
        zombie.last_known_x = last_known_x;
        zombie
    }
}

/// A short-lived bullet; destroyed on lifetime expiry, leaving world
/// X-bounds, or the first zombie hit.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
    pub vx: f32,
    pub damage: i32,
    pub life: u32,
    pub color: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Medkit,
    Weapon(WeaponKind),
    Ammo(WeaponKind),
}

/// A one-shot pickup; once collected it is permanently inert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub rect: Rect,
    pub kind: CollectibleKind,
    #[serde(default)]
    pub collected: bool,
}

/// Cosmetic point sprite; never gameplay-authoritative
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, decays by a fixed rate per tick
    pub life: f32,
    pub color: u32,
    pub size: f32,
}

/// The complete simulation state, owned by the tick loop
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Logic ticks elapsed while Playing
    pub time_ticks: u64,
    pub status: GameStatus,
    pub score: u64,

    pub player: Player,
    pub platforms: Vec<Platform>,
    pub zombies: Vec<Zombie>,
    pub projectiles: Vec<Projectile>,
    pub collectibles: Vec<Collectible>,
    pub particles: Vec<Particle>,

    pub camera_x: f32,

    // Horde director
    pub horde_timer: u32,
    pub horde_warning_timer: u32,

    pub(crate) prev_input: InputFrame,
    events: Vec<GameEvent>,
    /// Gameplay RNG: horde composition, spawn jitter, patrol direction
    pub(crate) rng: Pcg32,
    /// Cosmetic RNG: particle scatter only, so gameplay replay does not
    /// depend on particle fidelity
    pub(crate) fx_rng: Pcg32,
}

impl WorldState {
    /// Build a fresh world from immutable level data
    pub fn new(level: &LevelData, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let fx_rng = Pcg32::seed_from_u64(seed.rotate_left(17) ^ 0x9e37_79b9_7f4a_7c15);

        let zombies = level
            .zombie_spawns
            .iter()
            .map(|spawn| Zombie::scripted(spawn.kind, spawn.x, spawn.y, rng.random_bool(0.5)))
            .collect();

        log::info!(
            "world init: seed={} platforms={} zombies={} collectibles={}",
            seed,
            level.platforms.len(),
            level.zombie_spawns.len(),
            level.collectibles.len()
        );

        Self {
            seed,
            time_ticks: 0,
            status: GameStatus::Menu,
            score: 0,
            player: Player::new(level.player_start.0, level.player_start.1),
            platforms: level.platforms.clone(),
            zombies,
            projectiles: Vec::new(),
            collectibles: level.collectibles.clone(),
            particles: Vec::new(),
            camera_x: 0.0,
            horde_timer: HORDE_INTERVAL,
            horde_warning_timer: 0,
            prev_input: InputFrame::default(),
            events: Vec::new(),
            rng,
            fx_rng,
        }
    }

    /// Begin play. Restarting after GameOver/Victory means building a new
    /// world; resuming from Paused keeps state and goes through [`resume`].
    ///
    /// [`resume`]: WorldState::resume
    pub fn start(&mut self) {
        if self.status == GameStatus::Menu {
            self.set_status(GameStatus::Playing);
        }
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.set_status(GameStatus::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.set_status(GameStatus::Playing);
        }
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            log::info!("status {:?} -> {:?}", self.status, status);
            self.status = status;
            self.push_event(GameEvent::StatusChanged(status));
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the accumulated events to the host, clearing the queue
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Every score mutation goes through here so hosts always see a
    /// `ScoreChanged` the tick it happens.
    pub(crate) fn add_score(&mut self, points: u64) {
        self.score += points;
        self.push_event(GameEvent::ScoreChanged(self.score));
    }

    /// Scatter cosmetic particles around a point
    pub(crate) fn spawn_particles(&mut self, x: f32, y: f32, color: u32, count: u32) {
        for _ in 0..count {
            let vel = Vec2::new(
                (self.fx_rng.random::<f32>() - 0.5) * 10.0,
                (self.fx_rng.random::<f32>() - 0.5) * 10.0,
            );
            self.particles.push(Particle {
                pos: Vec2::new(x, y),
                vel,
                life: 1.0,
                color,
                size: self.fx_rng.random::<f32>() * 4.0 + 2.0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelData;

    #[test]
    fn test_player_starts_with_full_pistol_clip() {
        let player = Player::new(100.0, 500.0);
        assert_eq!(player.current_weapon(), WeaponKind::Pistol);
        assert_eq!(player.clip(WeaponKind::Smg), WeaponKind::Smg.spec().clip_size);
        assert_eq!(player.reserve(WeaponKind::Smg), WeaponKind::Smg.spec().start_ammo);
        assert_eq!(player.medkits, 0);
    }

    #[test]
    fn test_status_transitions() {
        let level = LevelData::campaign();
        let mut world = WorldState::new(&level, 1);
        assert_eq!(world.status, GameStatus::Menu);

        world.start();
        assert_eq!(world.status, GameStatus::Playing);

        world.pause();
        assert_eq!(world.status, GameStatus::Paused);
        // start() must not clobber a pause
        world.start();
        assert_eq!(world.status, GameStatus::Paused);

        world.resume();
        assert_eq!(world.status, GameStatus::Playing);
    }

    #[test]
    fn test_same_seed_same_world() {
        let level = LevelData::campaign();
        let a = WorldState::new(&level, 42);
        let b = WorldState::new(&level, 42);
        for (za, zb) in a.zombies.iter().zip(b.zombies.iter()) {
            assert_eq!(za.facing_right, zb.facing_right);
        }
    }

    #[test]
    fn test_edge_detection() {
        let prev = InputFrame { jump: true, ..Default::default() };
        let cur = InputFrame { jump: true, dash: true, ..Default::default() };
        let edges = cur.edges_since(&prev);
        assert!(!edges.jump, "held jump is not an edge");
        assert!(edges.dash);
    }
}
