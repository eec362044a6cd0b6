//! Fixed-step simulation driver.
//!
//! [`Simulation`] is a lazy iterator: every call to `next` emits the current `(t, P)` state
//! and then advances it with one RK4 step. The run ends after `floor(t_max / dt) + 1`
//! samples, or earlier once the freshly integrated population reaches
//! `CAPACITY_THRESHOLD * K`. In the latter case the crossing state is reported through
//! [`Termination::CapacityReached`] and never emitted as a sample.

use crate::model::{LogisticLaw, ModelParameters};
use crate::solvers::RK4;
use crate::traits::Steppable;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use tracing::debug;

/// Fraction of the carrying capacity at which a run stops early.
pub const CAPACITY_THRESHOLD: f64 = 0.999;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSample {
    pub t: f64,
    pub population: f64,
    pub growth_rate: f64,
    pub percent_of_k: f64,
}

impl SimulationSample {
    fn observe(t: f64, population: f64, law: &LogisticLaw<f64>) -> Self {
        Self {
            t,
            population,
            growth_rate: law.rate(population),
            percent_of_k: (population / law.k) * 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    /// Every step was taken; `t` is the time of the last emitted sample.
    StepsExhausted { t: f64 },
    /// The state integrated at `t` crossed the capacity threshold.
    CapacityReached { t: f64, population: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub samples: usize,
    pub last: Option<SimulationSample>,
    pub termination: Termination,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    params: ModelParameters,
    law: LogisticLaw<f64>,
    solver: RK4,
    steps: usize,
    index: usize,
    t: f64,
    p: f64,
    termination: Option<Termination>,
}

impl Simulation {
    pub fn new(params: ModelParameters) -> Self {
        Self {
            law: LogisticLaw::from(&params),
            solver: RK4::new(),
            steps: params.steps(),
            index: 0,
            t: 0.0,
            p: params.p0(),
            termination: None,
            params,
        }
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Number of integration steps the run is allowed to take.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// How the run ended, or `None` while samples remain.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Drains the run without keeping the samples.
    pub fn summarize(mut self) -> SimulationSummary {
        let mut samples = 0usize;
        let mut last = None;
        for sample in self.by_ref() {
            samples += 1;
            last = Some(sample);
        }
        let termination = self
            .termination
            .unwrap_or(Termination::StepsExhausted { t: self.t });
        SimulationSummary {
            samples,
            last,
            termination,
        }
    }

    fn remaining(&self) -> Option<usize> {
        (self.steps - self.index).checked_add(1)
    }
}

impl Iterator for Simulation {
    type Item = SimulationSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termination.is_some() {
            return None;
        }

        let sample = SimulationSample::observe(self.t, self.p, &self.law);
        let dt = self.params.dt();
        let p_next = self.solver.step(&self.law, self.t, self.p, dt);
        let t_next = self.t + dt;

        if p_next >= CAPACITY_THRESHOLD * self.law.k {
            debug!(
                t = t_next,
                population = p_next,
                "population reached {:.1}% of carrying capacity",
                CAPACITY_THRESHOLD * 100.0
            );
            self.termination = Some(Termination::CapacityReached {
                t: t_next,
                population: p_next,
            });
        } else if self.index == self.steps {
            debug!(t = self.t, steps = self.steps, "step budget exhausted");
            self.termination = Some(Termination::StepsExhausted { t: self.t });
        } else {
            self.p = p_next;
            self.t = t_next;
            self.index += 1;
        }

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.termination.is_some() {
            (0, Some(0))
        } else {
            (1, self.remaining())
        }
    }
}

impl FusedIterator for Simulation {}
