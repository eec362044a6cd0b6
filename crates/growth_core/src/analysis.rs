//! Closed-form properties of the logistic model.
//!
//! Nothing here integrates: every quantity follows directly from `r`, `K` and `P0`.

use crate::model::{LogisticLaw, ModelParameters, Regime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    Stable,
    Unstable,
}

/// A fixed point of the flow together with its linearisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub population: f64,
    /// `f'(P*) = r (1 - 2 P* / K)`.
    pub eigenvalue: f64,
    pub stability: Stability,
}

impl Equilibrium {
    fn at(population: f64, params: &ModelParameters) -> Self {
        let eigenvalue = params.r() * (1.0 - 2.0 * population / params.k());
        let stability = if eigenvalue < 0.0 {
            Stability::Stable
        } else {
            Stability::Unstable
        };
        Self {
            population,
            eigenvalue,
            stability,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "t", rename_all = "snake_case")]
pub enum HalfCapacityTime {
    /// The population crosses `K/2` at this time.
    Reached(f64),
    /// `K/2 <= P0 < K`: the crossing lies at or before `t = 0`.
    AlreadyPast,
    /// `P0 >= K`: the population never crosses `K/2`.
    NotApplicable,
}

impl HalfCapacityTime {
    pub fn time(&self) -> Option<f64> {
        match self {
            HalfCapacityTime::Reached(t) => Some(*t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakGrowth {
    pub rate: f64,
    pub at_population: f64,
}

/// The two fixed points, extinction (`0`) and carrying capacity (`K`).
pub fn equilibria(params: &ModelParameters) -> [Equilibrium; 2] {
    [
        Equilibrium::at(0.0, params),
        Equilibrium::at(params.k(), params),
    ]
}

/// Time at which the population reaches `K/2`: `ln(K/P0 - 1) / r`.
pub fn half_capacity_time(params: &ModelParameters) -> HalfCapacityTime {
    if params.regime() == Regime::Degenerate {
        return HalfCapacityTime::NotApplicable;
    }
    let t = (params.k() / params.p0() - 1.0).ln() / params.r();
    if t > 0.0 {
        HalfCapacityTime::Reached(t)
    } else {
        HalfCapacityTime::AlreadyPast
    }
}

/// Maximum of the parabola `f(P)`, attained at `P = K/2`.
pub fn max_growth_rate(params: &ModelParameters) -> PeakGrowth {
    let at_population = params.k() / 2.0;
    PeakGrowth {
        rate: LogisticLaw::from(params).rate(at_population),
        at_population,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelAnalysis {
    pub regime: Regime,
    pub equilibria: [Equilibrium; 2],
    pub half_capacity_time: HalfCapacityTime,
    pub max_growth_rate: PeakGrowth,
}

impl ModelAnalysis {
    pub fn of(params: &ModelParameters) -> Self {
        Self {
            regime: params.regime(),
            equilibria: equilibria(params),
            half_capacity_time: half_capacity_time(params),
            max_growth_rate: max_growth_rate(params),
        }
    }
}
