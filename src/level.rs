//! Static level data
//!
//! A level is pure data: geometry, zombie spawn points and collectible
//! placements. The built-in campaign ships as code; external levels load
//! from JSON with the same schema.

use serde::{Deserialize, Serialize};

use crate::consts::FLOOR_Y;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::state::{Collectible, CollectibleKind, Platform, PlatformKind, Rect};
use crate::sim::weapons::WeaponKind;
use crate::sim::zombies::ZombieKind;

/// Where a scripted zombie stands when the world is built
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZombieSpawn {
    pub x: f32,
    pub y: f32,
    pub kind: ZombieKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub player_start: (f32, f32),
    pub platforms: Vec<Platform>,
    pub zombie_spawns: Vec<ZombieSpawn>,
    pub collectibles: Vec<Collectible>,
}

impl LevelData {
    /// Parse a level from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The built-in 14000-unit campaign: four zones from the outskirts to
    /// the bunker goal, bounded by tall walls on both ends.
    pub fn campaign() -> Self {
        let plat = |x: f32, y: f32, w: f32, h: f32, kind: PlatformKind| Platform {
            rect: Rect::new(x, y, w, h),
            kind,
        };
        let spawn = |x: f32, y: f32, kind: ZombieKind| ZombieSpawn { x, y, kind };
        let item = |id: u32, x: f32, y: f32, size: f32, kind: CollectibleKind| Collectible {
            id,
            rect: Rect::new(x, y, size, size),
            kind,
            collected: false,
        };

        use PlatformKind::{Goal, Ground, Obstacle, Platform as Ledge};
        let platforms = vec![
            // Zone 1: the outskirts
            plat(0.0, FLOOR_Y, 3200.0, 200.0, Ground),
            plat(400.0, FLOOR_Y - 100.0, 200.0, 20.0, Ledge),
            plat(700.0, FLOOR_Y - 200.0, 200.0, 20.0, Ledge),
            plat(1000.0, FLOOR_Y - 100.0, 200.0, 20.0, Ledge),
            // Zombie tower
            plat(1400.0, FLOOR_Y - 150.0, 100.0, 20.0, Ledge),
            plat(1550.0, FLOOR_Y - 300.0, 300.0, 20.0, Ledge),
            plat(1400.0, FLOOR_Y - 450.0, 100.0, 20.0, Ledge),
            // Wall-jump gap
            plat(2100.0, FLOOR_Y - 200.0, 20.0, 300.0, Obstacle),
            plat(2300.0, FLOOR_Y - 350.0, 150.0, 20.0, Ledge),
            plat(2600.0, FLOOR_Y - 200.0, 20.0, 300.0, Obstacle),
            // Zone 2: the broken bridge, no floor below
            plat(3400.0, FLOOR_Y, 200.0, 20.0, Ledge),
            plat(3700.0, FLOOR_Y - 50.0, 200.0, 20.0, Ledge),
            plat(4000.0, FLOOR_Y - 100.0, 300.0, 20.0, Ledge),
            plat(4400.0, FLOOR_Y - 100.0, 100.0, 20.0, Ledge),
            plat(4600.0, FLOOR_Y + 50.0, 300.0, 20.0, Ledge),
            // Zone 3: the high rise
            plat(5000.0, FLOOR_Y, 3000.0, 200.0, Ground),
            plat(5200.0, FLOOR_Y - 150.0, 150.0, 20.0, Ledge),
            plat(5400.0, FLOOR_Y - 300.0, 150.0, 20.0, Ledge),
            plat(5600.0, FLOOR_Y - 450.0, 400.0, 20.0, Ledge),
            plat(6100.0, FLOOR_Y - 300.0, 150.0, 20.0, Ledge),
            plat(6300.0, FLOOR_Y - 150.0, 150.0, 20.0, Ledge),
            // Tank arena
            plat(6600.0, FLOOR_Y - 200.0, 600.0, 20.0, Ledge),
            // Zone 4: the industrial complex
            plat(8100.0, FLOOR_Y - 100.0, 500.0, 20.0, Ledge),
            plat(8700.0, FLOOR_Y, 2000.0, 200.0, Ground),
            // Factory roofs
            plat(9000.0, FLOOR_Y - 200.0, 400.0, 20.0, Ledge),
            plat(9500.0, FLOOR_Y - 300.0, 400.0, 20.0, Ledge),
            plat(10000.0, FLOOR_Y - 200.0, 400.0, 20.0, Ledge),
            // The final stretch, pitfalls between islands
            plat(11000.0, FLOOR_Y, 200.0, 200.0, Ground),
            plat(11400.0, FLOOR_Y - 50.0, 100.0, 20.0, Ledge),
            plat(11700.0, FLOOR_Y - 100.0, 100.0, 20.0, Ledge),
            plat(12000.0, FLOOR_Y, 1500.0, 200.0, Ground),
            // Bunker entrance
            plat(12500.0, FLOOR_Y - 200.0, 20.0, 200.0, Obstacle),
            plat(12500.0, FLOOR_Y - 300.0, 500.0, 20.0, Ledge),
            plat(13800.0, FLOOR_Y - 100.0, 100.0, 100.0, Goal),
            // World bounds
            plat(-50.0, 0.0, 50.0, WORLD_HEIGHT, Obstacle),
            plat(WORLD_WIDTH, 0.0, 50.0, WORLD_HEIGHT, Obstacle),
        ];

        use ZombieKind::{Jumper, Runner, Screamer, Tank, Walker};
        let zombie_spawns = vec![
            // Zone 1
            spawn(800.0, FLOOR_Y - 300.0, Walker),
            spawn(1200.0, FLOOR_Y - 50.0, Runner),
            spawn(1300.0, FLOOR_Y - 50.0, Screamer),
            spawn(1600.0, FLOOR_Y - 350.0, Walker),
            spawn(1700.0, FLOOR_Y - 350.0, Walker),
            spawn(2500.0, FLOOR_Y - 50.0, Runner),
            // Zone 2: jumpers on the bridge
            spawn(3750.0, FLOOR_Y - 100.0, Jumper),
            spawn(4100.0, FLOOR_Y - 150.0, Jumper),
            spawn(4700.0, FLOOR_Y, Jumper),
            // Zone 3
            spawn(5300.0, FLOOR_Y - 50.0, Tank),
            spawn(5400.0, FLOOR_Y - 50.0, Screamer),
            spawn(5650.0, FLOOR_Y - 500.0, Walker),
            spawn(5750.0, FLOOR_Y - 500.0, Walker),
            spawn(6200.0, FLOOR_Y - 50.0, Runner),
            spawn(6400.0, FLOOR_Y - 50.0, Runner),
            // Arena guard
            spawn(6800.0, FLOOR_Y - 250.0, Tank),
            spawn(7000.0, FLOOR_Y - 50.0, Tank),
            spawn(7100.0, FLOOR_Y - 50.0, Screamer),
            // Zone 4
            spawn(8200.0, FLOOR_Y - 150.0, Runner),
            spawn(8300.0, FLOOR_Y - 150.0, Runner),
            spawn(8400.0, FLOOR_Y - 150.0, Runner),
            spawn(9100.0, FLOOR_Y - 250.0, Screamer),
            spawn(9200.0, FLOOR_Y - 250.0, Walker),
            spawn(9700.0, FLOOR_Y - 350.0, Jumper),
            spawn(11100.0, FLOOR_Y - 50.0, Tank),
            spawn(12100.0, FLOOR_Y - 50.0, Tank),
            spawn(12200.0, FLOOR_Y - 50.0, Screamer),
            spawn(12300.0, FLOOR_Y - 50.0, Tank),
            // The final gauntlet
            spawn(13000.0, FLOOR_Y - 50.0, Runner),
            spawn(13100.0, FLOOR_Y - 50.0, Runner),
            spawn(13200.0, FLOOR_Y - 50.0, Runner),
            spawn(13300.0, FLOOR_Y - 50.0, Runner),
            spawn(13400.0, FLOOR_Y - 50.0, Jumper),
            spawn(13500.0, FLOOR_Y - 50.0, Jumper),
        ];

        use CollectibleKind::{Ammo, Medkit, Weapon};
        let collectibles = vec![
            item(1, 750.0, FLOOR_Y - 250.0, 30.0, Weapon(WeaponKind::Smg)),
            item(2, 1420.0, FLOOR_Y - 480.0, 30.0, Medkit),
            item(101, 1550.0, FLOOR_Y - 350.0, 25.0, Ammo(WeaponKind::Smg)),
            item(3, 2150.0, FLOOR_Y - 250.0, 30.0, Weapon(WeaponKind::Shotgun)),
            // Before the bridge
            item(4, 3100.0, FLOOR_Y - 50.0, 30.0, Medkit),
            item(102, 4420.0, FLOOR_Y - 150.0, 25.0, Ammo(WeaponKind::Shotgun)),
            // High-rise climbing rewards
            item(5, 5700.0, FLOOR_Y - 500.0, 30.0, Weapon(WeaponKind::Smg)),
            item(103, 6150.0, FLOOR_Y - 350.0, 25.0, Ammo(WeaponKind::Smg)),
            // Stock up before the tank arena
            item(6, 6500.0, FLOOR_Y - 50.0, 30.0, Medkit),
            item(7, 6550.0, FLOOR_Y - 50.0, 30.0, Weapon(WeaponKind::Shotgun)),
            item(104, 6600.0, FLOOR_Y - 50.0, 25.0, Ammo(WeaponKind::Shotgun)),
            // Zone 4 resources
            item(8, 8800.0, FLOOR_Y - 50.0, 30.0, Medkit),
            item(105, 9000.0, FLOOR_Y - 250.0, 25.0, Ammo(WeaponKind::Smg)),
            item(106, 10000.0, FLOOR_Y - 250.0, 25.0, Ammo(WeaponKind::Shotgun)),
            // Final prep
            item(9, 12500.0, FLOOR_Y - 350.0, 30.0, Medkit),
        ];

        Self {
            player_start: (100.0, FLOOR_Y - 100.0),
            platforms,
            zombie_spawns,
            collectibles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_shape() {
        let level = LevelData::campaign();
        assert_eq!(level.player_start, (100.0, FLOOR_Y - 100.0));
        assert_eq!(level.zombie_spawns.len(), 34);
        assert_eq!(level.collectibles.len(), 15);

        let goals: Vec<_> = level
            .platforms
            .iter()
            .filter(|p| p.kind == PlatformKind::Goal)
            .collect();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].rect.x, 13800.0);
    }

    #[test]
    fn test_campaign_ids_unique() {
        let level = LevelData::campaign();
        let mut ids: Vec<u32> = level.collectibles.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), level.collectibles.len());
    }

    #[test]
    fn test_json_round_trip() {
        let level = LevelData::campaign();
        let json = level.to_json().unwrap();
        let back = LevelData::from_json(&json).unwrap();
        assert_eq!(back.platforms.len(), level.platforms.len());
        assert_eq!(back.zombie_spawns.len(), level.zombie_spawns.len());
        assert_eq!(back.player_start, level.player_start);
        assert_eq!(back.collectibles[0].kind, level.collectibles[0].kind);
    }
}
