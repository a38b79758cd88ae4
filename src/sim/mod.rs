//! Deterministic game simulation
//!
//! The simulation advances in fixed 60 Hz ticks driven by [`tick::tick`].
//! All gameplay state lives in a single [`WorldState`] owned by the caller;
//! randomness comes from two seeded PCG streams inside it (one for
//! gameplay, one for cosmetic particles), so the same seed and input
//! history reproduce the same run exactly. Nothing here performs I/O,
//! reads clocks, or blocks.

pub mod collision;
pub mod events;
mod player;
pub mod state;
pub mod tick;
pub mod weapons;
pub mod zombies;

pub use events::{GameEvent, PickupKind};
pub use state::{
    Collectible, CollectibleKind, GameStatus, InputEdges, InputFrame, Particle, Platform,
    PlatformKind, Player, Projectile, Rect, WorldState, Zombie,
};
pub use tick::{spawn_horde, tick};
pub use weapons::{WeaponKind, WeaponSpec};
pub use zombies::{ZombieKind, ZombieSpec};
