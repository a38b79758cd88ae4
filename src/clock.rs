//! Fixed-timestep accumulator
//!
//! Hosts render at whatever rate they like and feed wall-clock frame deltas
//! in; the clock converts them into zero or more fixed logic ticks. Deltas
//! are clamped so a long stall (tab in the background, debugger pause)
//! cannot trigger a catch-up avalanche.

use crate::consts::{MAX_FRAME_DELTA_MS, TICK_MS};
use crate::sim::state::{GameStatus, InputFrame, WorldState};
use crate::sim::tick::tick;

#[derive(Debug, Clone, Default)]
pub struct SimClock {
    accumulator_ms: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one rendered frame's delta and run the ticks it pays for.
    /// Returns how many ticks ran. Time only accumulates while Playing;
    /// ticking stops mid-frame if the status changes so a victory tick is
    /// never followed by stale simulation in the same frame.
    pub fn advance(&mut self, world: &mut WorldState, input: &InputFrame, frame_delta_ms: f64) -> u32 {
        if world.status != GameStatus::Playing {
            self.accumulator_ms = 0.0;
            // Still record input so edges stay correct across a pause
            world.prev_input = *input;
            return 0;
        }

        self.accumulator_ms += frame_delta_ms.min(MAX_FRAME_DELTA_MS);
        let mut ticks = 0;
        while self.accumulator_ms >= TICK_MS {
            self.accumulator_ms -= TICK_MS;
            tick(world, input);
            ticks += 1;
            if world.status != GameStatus::Playing {
                self.accumulator_ms = 0.0;
                break;
            }
        }
        ticks
    }

    /// Drop any banked time, e.g. when a new world is installed
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}
