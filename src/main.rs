//! Headless campaign runner
//!
//! Drives the simulation with a scripted input stream and prints the event
//! log. Useful for smoke-testing determinism and profiling the tick loop
//! without a renderer: the same seed always prints the same transcript.

use horda::consts::TICK_MS;
use horda::sim::{GameEvent, GameStatus, InputFrame, WorldState};
use horda::{LevelData, SimClock};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xdead_beef);
    let run_secs: u64 = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(120);

    let level = LevelData::campaign();
    let mut world = WorldState::new(&level, seed);
    let mut clock = SimClock::new();
    world.start();

    log::info!("running campaign: seed={seed} duration={run_secs}s");

    let frames = run_secs * 60;
    for frame in 0..frames {
        let input = scripted_input(frame);
        clock.advance(&mut world, &input, TICK_MS);

        for event in world.drain_events() {
            match event {
                GameEvent::ScoreChanged(total) => log::info!("score {total}"),
                GameEvent::StatusChanged(status) => log::info!("status {status:?}"),
                GameEvent::HordeIncoming { count } => log::warn!("horde incoming: {count}"),
                other => log::debug!("{other:?}"),
            }
        }
        if world.status != GameStatus::Playing {
            break;
        }
    }

    println!(
        "seed={} ticks={} status={:?} score={} zombies={}",
        world.seed,
        world.time_ticks,
        world.status,
        world.score,
        world.zombies.len()
    );
}

/// A fixed patrol: run right firing in bursts, hop periodically, dash now
/// and then. Deterministic by construction.
fn scripted_input(frame: u64) -> InputFrame {
    InputFrame {
        right: frame % 240 < 200,
        jump: frame % 150 == 0,
        fire: frame % 40 < 10,
        dash: frame % 600 == 0 && frame > 0,
        ..Default::default()
    }
}
