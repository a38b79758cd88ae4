//! Property tests: simulation invariants under arbitrary input streams.

use proptest::prelude::*;

use horda::consts::{MAX_WEAPONS, VIEW_WIDTH, WORLD_WIDTH};
use horda::consts::MAX_MEDKITS;
use horda::sim::{tick, GameStatus, InputFrame, WeaponKind, WorldState};
use horda::LevelData;

fn input_strategy() -> impl Strategy<Value = InputFrame> {
    any::<u16>().prop_map(|bits| InputFrame {
        left: bits & 0x001 != 0,
        right: bits & 0x002 != 0,
        crouch: bits & 0x004 != 0,
        jump: bits & 0x008 != 0,
        fire: bits & 0x010 != 0,
        switch_weapon: bits & 0x020 != 0,
        reload: bits & 0x040 != 0,
        medkit: bits & 0x080 != 0,
        dash: bits & 0x100 != 0,
        pause: false,
    })
}

proptest! {
    #[test]
    fn bounds_hold_for_any_inputs(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(input_strategy(), 1..400),
    ) {
        let level = LevelData::campaign();
        let mut world = WorldState::new(&level, seed);
        world.start();

        let mut last_score = 0;
        for input in &inputs {
            tick(&mut world, input);
            let p = &world.player;
            prop_assert!(p.health <= p.max_health);
            prop_assert!(p.medkits <= MAX_MEDKITS);
            prop_assert!(p.weapons.len() <= MAX_WEAPONS);
            for kind in WeaponKind::ALL {
                prop_assert!(p.clip(kind) <= kind.spec().clip_size);
                prop_assert!(p.reserve(kind) <= kind.spec().max_ammo);
            }
            prop_assert!(world.score >= last_score, "score never decreases");
            last_score = world.score;
            prop_assert!(world.camera_x >= 0.0);
            prop_assert!(world.camera_x <= WORLD_WIDTH - VIEW_WIDTH);
            if p.health <= 0 {
                prop_assert_eq!(world.status, GameStatus::GameOver);
            }
            if world.status != GameStatus::Playing {
                break;
            }
        }
    }

    #[test]
    fn same_inputs_replay_identically(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(input_strategy(), 1..200),
    ) {
        let level = LevelData::campaign();
        let mut a = WorldState::new(&level, seed);
        let mut b = WorldState::new(&level, seed);
        a.start();
        b.start();
        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
        }
        prop_assert_eq!(a.time_ticks, b.time_ticks);
        prop_assert_eq!(a.player.rect, b.player.rect);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.zombies.len(), b.zombies.len());
        prop_assert_eq!(a.status, b.status);
    }
}
