//! Static weapon catalog
//!
//! Every ballistic and reload parameter lives in one table keyed by
//! [`WeaponKind`], so adding a weapon forces every match in the crate to be
//! revisited at compile time.

use serde::{Deserialize, Serialize};

/// Sentinel clip/reserve value for the infinite-ammo pistol
pub const INFINITE_AMMO: u32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Pistol,
    Smg,
    Shotgun,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Pistol, WeaponKind::Smg, WeaponKind::Shotgun];

    /// Slot in the per-weapon ammo arrays
    pub fn index(self) -> usize {
        match self {
            WeaponKind::Pistol => 0,
            WeaponKind::Smg => 1,
            WeaponKind::Shotgun => 2,
        }
    }

    /// The pistol never consumes ammo and never reloads
    pub fn is_infinite(self) -> bool {
        matches!(self, WeaponKind::Pistol)
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Pistol => "PISTOL",
            WeaponKind::Smg => "SMG",
            WeaponKind::Shotgun => "SHOTGUN",
        }
    }

    pub fn spec(self) -> &'static WeaponSpec {
        match self {
            WeaponKind::Pistol => &PISTOL,
            WeaponKind::Smg => &SMG,
            WeaponKind::Shotgun => &SHOTGUN,
        }
    }
}

/// Per-weapon ballistic and ammo-economy parameters
#[derive(Debug, Clone)]
pub struct WeaponSpec {
    pub damage: i32,
    /// Ticks between shots
    pub cooldown: u32,
    pub bullet_speed: f32,
    pub bullet_size: f32,
    /// Reserve capacity
    pub max_ammo: u32,
    /// Reserve granted at game start
    pub start_ammo: u32,
    /// Reserve granted per ammo/weapon pickup
    pub pickup_ammo: u32,
    pub clip_size: u32,
    /// Ticks a reload takes (0 for the pistol)
    pub reload_duration: u32,
    /// Packed RGB for renderers
    pub color: u32,
}

static PISTOL: WeaponSpec = WeaponSpec {
    damage: 10,
    cooldown: 20,
    bullet_speed: 14.0,
    bullet_size: 4.0,
    max_ammo: INFINITE_AMMO,
    start_ammo: INFINITE_AMMO,
    pickup_ammo: 0,
    clip_size: INFINITE_AMMO,
    reload_duration: 0,
    color: 0x9ca3af,
};

static SMG: WeaponSpec = WeaponSpec {
    damage: 8,
    cooldown: 6,
    bullet_speed: 16.0,
    bullet_size: 3.0,
    max_ammo: 240,
    start_ammo: 60,
    pickup_ammo: 60,
    clip_size: 30,
    reload_duration: 90,
    color: 0x60a5fa,
};

static SHOTGUN: WeaponSpec = WeaponSpec {
    damage: 30,
    cooldown: 45,
    bullet_speed: 12.0,
    bullet_size: 6.0,
    max_ammo: 50,
    start_ammo: 10,
    pickup_ammo: 10,
    clip_size: 5,
    reload_duration: 120,
    color: 0xef4444,
};
