//! Discrete events emitted by the simulation tick
//!
//! The core never touches audio or rendering; anything a presentation layer
//! would react to is pushed onto the world's event queue instead. Hosts
//! drain the queue after [`tick`](super::tick::tick) returns and map events
//! to sounds, screen flashes or HUD updates.

use super::state::GameStatus;
use super::weapons::WeaponKind;
use super::zombies::ZombieKind;

/// What a collectible turned out to be once picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    Medkit,
    /// A weapon the player did not own yet
    NewWeapon(WeaponKind),
    /// Reserve top-up from a duplicate weapon pickup
    WeaponAmmo(WeaponKind),
    Ammo(WeaponKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    StatusChanged(GameStatus),
    /// Emitted on every score mutation, same tick, with the new total
    ScoreChanged(u64),
    WeaponFired(WeaponKind),
    DryFire,
    ReloadStarted(WeaponKind),
    ReloadFinished(WeaponKind),
    WeaponSwitched(WeaponKind),
    MedkitUsed,
    Jumped,
    WallJumped,
    Dashed,
    SlideStarted,
    PlayerDamaged { remaining: i32 },
    /// A dash bounced off a Tank instead of connecting
    DashReflected,
    /// Player fell below the void threshold (lethal or not)
    VoidFall,
    PickupCollected(PickupKind),
    ZombieHit(ZombieKind),
    ZombieDied(ZombieKind),
    /// Screamer force-aggro pulse
    Scream,
    /// Screamer dropped a reinforcement
    Summoned(ZombieKind),
    /// Horde director fired; warning window opens
    HordeIncoming { count: u32 },
}
