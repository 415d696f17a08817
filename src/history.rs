use piston_window::*;
use std::collections::TryReserveError;
use thiserror::Error;

use crate::tick::Tick;

/// Capacity the buffer starts with and returns to on reset.
pub const INITIAL_CAPACITY: usize = 256;

const PREY_COLOR: [f32; 4] = [0.0, 0.7, 0.1, 1.0];
const PREDATOR_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
const PLOT_MARGIN: f64 = 5.0;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("history buffer allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Append-only record of every simulated tick, one per step. Doubles its
/// capacity explicitly so growth stays geometric regardless of what `Vec`
/// would do on its own.
pub struct History {
    ticks: Vec<Tick>,
    capacity: usize,
}

impl History {
    pub fn new() -> Result<Self, HistoryError> {
        let mut ticks = Vec::new();
        ticks.try_reserve_exact(INITIAL_CAPACITY)?;
        Ok(History {
            ticks,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Appends one tick, doubling capacity first when the buffer is full.
    /// Earlier elements and their indices are never disturbed.
    pub fn push(&mut self, tick: Tick) -> Result<(), HistoryError> {
        if self.ticks.len() >= self.capacity {
            self.capacity *= 2;
            self.ticks
                .try_reserve_exact(self.capacity - self.ticks.len())?;
        }
        self.ticks.push(tick);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<Tick, HistoryError> {
        self.ticks
            .get(index)
            .copied()
            .ok_or(HistoryError::OutOfRange {
                index,
                len: self.ticks.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards all ticks and shrinks back to the initial capacity.
    pub fn reset(&mut self) -> Result<(), HistoryError> {
        let mut fresh = Vec::new();
        fresh.try_reserve_exact(INITIAL_CAPACITY)?;
        self.ticks = fresh;
        self.capacity = INITIAL_CAPACITY;
        Ok(())
    }

    /// Draws the prey and predator series as polylines, one pixel of x per
    /// tick. Values are scaled then clamped into the plot height before the
    /// y-flip, so runaway populations pin to the top instead of leaving the
    /// plot area.
    pub fn draw(&self, scale: f32, plot_height: f64, transform: math::Matrix2d, g: &mut G2d) {
        let clamp_y = |value: f32| -> f64 {
            plot_height - PLOT_MARGIN - (f64::from(value * scale)).clamp(0.0, plot_height)
        };

        for (i, pair) in self.ticks.windows(2).enumerate() {
            let x1 = PLOT_MARGIN + i as f64;
            let x2 = x1 + 1.0;
            line(
                PREY_COLOR,
                0.75,
                [x1, clamp_y(pair[0].prey), x2, clamp_y(pair[1].prey)],
                transform,
                g,
            );
            line(
                PREDATOR_COLOR,
                0.75,
                [x1, clamp_y(pair[0].predators), x2, clamp_y(pair[1].predators)],
                transform,
                g,
            );
        }
    }
}
