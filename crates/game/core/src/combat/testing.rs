//! Scripted random sources for rule tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::env::{RandomSource, RngOracle};

/// Replays a fixed list of samples, then repeats the last one.
pub(crate) struct Script {
    values: VecDeque<f64>,
    last: f64,
}

impl Script {
    pub(crate) fn new<const N: usize>(values: [f64; N]) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0.0,
        }
    }
}

impl RandomSource for Script {
    fn next_unit(&mut self) -> f64 {
        if let Some(value) = self.values.pop_front() {
            self.last = value;
        }
        self.last
    }
}

/// Oracle that ignores seeds and hands out scripted samples in call order,
/// falling back to `fallback` once the script runs dry.
pub(crate) struct ScriptedRng {
    values: Mutex<VecDeque<f64>>,
    fallback: f64,
}

impl ScriptedRng {
    pub(crate) fn new(values: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            fallback,
        }
    }

    /// Every roll returns the same sample.
    pub(crate) fn constant(value: f64) -> Self {
        Self::new([], value)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.values.lock().map(|values| values.len()).unwrap_or(0)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        (self.unit(seed) * (u32::MAX as f64 + 1.0)) as u32
    }

    fn unit(&self, _seed: u64) -> f64 {
        self.values
            .lock()
            .ok()
            .and_then(|mut values| values.pop_front())
            .unwrap_or(self.fallback)
    }
}
