// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label, range, and optional categorical ticks.

use crate::grid::{format_tick, nice_step, nice_ticks};

/// A labelled tick at a data position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Fixed ticks (e.g. category names). When `None`, round-number ticks are generated.
    pub ticks: Option<Vec<Tick>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: None }
    }

    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 10.0)
    }

    /// Ticks to draw: the fixed ones inside the range, or about `target` numeric ticks.
    pub fn tick_marks(&self, target: usize) -> Vec<Tick> {
        if let Some(ticks) = &self.ticks {
            return ticks
                .iter()
                .filter(|t| t.value >= self.min && t.value <= self.max)
                .cloned()
                .collect();
        }
        let step = nice_step(self.min, self.max, target);
        nice_ticks(self.min, self.max, target)
            .into_iter()
            .map(|value| Tick { value, label: format_tick(value, step) })
            .collect()
    }
}
