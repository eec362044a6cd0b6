use crate::error::ModelError;
use crate::traits::{DynamicalSystem, Scalar};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    GrowthRate,
    CarryingCapacity,
    InitialPopulation,
    MaxTime,
    StepSize,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Parameter::GrowthRate => "growth rate (r)",
            Parameter::CarryingCapacity => "carrying capacity (K)",
            Parameter::InitialPopulation => "initial population (P0)",
            Parameter::MaxTime => "maximum time (t_max)",
            Parameter::StepSize => "step size (dt)",
        };
        f.write_str(label)
    }
}

/// Whether the initial population sits below the carrying capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// `P0 < K`: the population rises along the S-curve.
    Growth,
    /// `P0 >= K`: the population stalls or decays toward `K`.
    Degenerate,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameters {
    r: f64,
    k: f64,
    p0: f64,
    t_max: f64,
    dt: f64,
}

/// Largest step count a run may take. Fixed at `u32::MAX` so the count fits `usize` on
/// 32-bit targets such as wasm32.
pub const MAX_STEPS: u32 = u32::MAX;

/// Validated parameters of the logistic model.
///
/// Every field is strictly positive and finite; the only way to obtain a value is
/// through [`ModelParameters::new`] or deserialization, both of which validate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelParameters {
    r: f64,
    k: f64,
    p0: f64,
    t_max: f64,
    dt: f64,
}

impl ModelParameters {
    pub fn new(r: f64, k: f64, p0: f64, t_max: f64, dt: f64) -> Result<Self, ModelError> {
        let checks = [
            (Parameter::GrowthRate, r),
            (Parameter::CarryingCapacity, k),
            (Parameter::InitialPopulation, p0),
            (Parameter::MaxTime, t_max),
            (Parameter::StepSize, dt),
        ];
        for (parameter, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ModelError::InvalidParameter { parameter, value });
            }
        }
        let ratio = t_max / dt;
        if ratio.floor() > f64::from(MAX_STEPS) {
            return Err(ModelError::TooManySteps {
                ratio,
                limit: MAX_STEPS,
            });
        }
        Ok(Self {
            r,
            k,
            p0,
            t_max,
            dt,
        })
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn p0(&self) -> f64 {
        self.p0
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of whole steps that fit in `t_max`; a trailing partial step is dropped.
    pub fn steps(&self) -> usize {
        (self.t_max / self.dt).floor() as usize
    }

    pub fn regime(&self) -> Regime {
        if self.p0 < self.k {
            Regime::Growth
        } else {
            Regime::Degenerate
        }
    }
}

impl<'de> Deserialize<'de> for ModelParameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawParameters::deserialize(deserializer)?;
        Self::new(raw.r, raw.k, raw.p0, raw.t_max, raw.dt).map_err(serde::de::Error::custom)
    }
}

/// The logistic vector field `dP/dt = r P (1 - P/K)`.
///
/// Autonomous: the time argument of [`DynamicalSystem::apply`] is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticLaw<T: Scalar> {
    pub r: T,
    pub k: T,
}

impl<T: Scalar> LogisticLaw<T> {
    pub fn new(r: T, k: T) -> Self {
        Self { r, k }
    }

    pub fn rate(&self, p: T) -> T {
        self.r * p * (T::one() - p / self.k)
    }
}

impl From<&ModelParameters> for LogisticLaw<f64> {
    fn from(params: &ModelParameters) -> Self {
        Self::new(params.r, params.k)
    }
}

impl<T: Scalar> DynamicalSystem<T> for LogisticLaw<T> {
    fn apply(&self, _t: T, p: T) -> T {
        self.rate(p)
    }
}

/// Closed-form solution `P(t) = K / (1 + ((K - P0) / P0) e^(-r t))`.
pub fn exact_population(params: &ModelParameters, t: f64) -> f64 {
    let ModelParameters { r, k, p0, .. } = *params;
    k / (1.0 + ((k - p0) / p0) * (-r * t).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T, ModelError>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn new_rejects_non_positive_fields() {
        assert_err_contains(
            ModelParameters::new(0.0, 1000.0, 10.0, 50.0, 0.1),
            "growth rate (r)",
        );
        assert_err_contains(
            ModelParameters::new(0.5, -1.0, 10.0, 50.0, 0.1),
            "carrying capacity (K)",
        );
        assert_err_contains(
            ModelParameters::new(0.5, 1000.0, 0.0, 50.0, 0.1),
            "initial population (P0)",
        );
        assert_err_contains(
            ModelParameters::new(0.5, 1000.0, 10.0, -50.0, 0.1),
            "maximum time (t_max)",
        );
        assert_err_contains(
            ModelParameters::new(0.5, 1000.0, 10.0, 50.0, 0.0),
            "step size (dt)",
        );
    }

    #[test]
    fn new_rejects_nan_and_infinity() {
        let err = ModelParameters::new(f64::NAN, 1000.0, 10.0, 50.0, 0.1).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidParameter {
                parameter: Parameter::GrowthRate,
                ..
            }
        ));
        assert_err_contains(
            ModelParameters::new(0.5, 1000.0, 10.0, f64::INFINITY, 0.1),
            "t_max",
        );
    }

    #[test]
    fn reports_first_invalid_field() {
        let err = ModelParameters::new(0.5, 0.0, -3.0, 50.0, 0.1).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidParameter {
                parameter: Parameter::CarryingCapacity,
                value: 0.0
            }
        );
    }

    #[test]
    fn new_rejects_step_counts_beyond_limit() {
        let err = ModelParameters::new(0.5, 1000.0, 10.0, 1.0e10, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::TooManySteps {
                limit: MAX_STEPS,
                ..
            }
        ));
        assert_err_contains(
            ModelParameters::new(0.5, 1000.0, 10.0, 1.0, 1.0e-300),
            "integration steps",
        );

        let at_limit = ModelParameters::new(0.5, 1000.0, 10.0, f64::from(MAX_STEPS), 1.0)
            .expect("largest allowed budget");
        assert_eq!(at_limit.steps(), MAX_STEPS as usize);
    }

    #[test]
    fn steps_drop_trailing_partial_interval() {
        let params = ModelParameters::new(0.5, 1000.0, 10.0, 1.05, 0.25).expect("params");
        assert_eq!(params.steps(), 4);
        let params = ModelParameters::new(0.5, 1000.0, 10.0, 50.0, 0.5).expect("params");
        assert_eq!(params.steps(), 100);
    }

    #[test]
    fn regime_flags_initial_population_at_or_above_capacity() {
        let growth = ModelParameters::new(0.5, 1000.0, 10.0, 50.0, 0.1).expect("params");
        assert_eq!(growth.regime(), Regime::Growth);
        let at_capacity = ModelParameters::new(0.5, 1000.0, 1000.0, 50.0, 0.1).expect("params");
        assert_eq!(at_capacity.regime(), Regime::Degenerate);
        let above = ModelParameters::new(0.1, 500.0, 600.0, 10.0, 0.5).expect("params");
        assert_eq!(above.regime(), Regime::Degenerate);
    }

    #[test]
    fn deserialization_validates() {
        let params: ModelParameters =
            serde_json::from_str(r#"{"r":0.2,"k":500,"p0":20,"t_max":50,"dt":0.1}"#)
                .expect("valid parameters");
        assert_eq!(params.k(), 500.0);
        assert_eq!(params.p0(), 20.0);

        let err = serde_json::from_str::<ModelParameters>(
            r#"{"r":0.2,"k":500,"p0":20,"t_max":50,"dt":-0.1}"#,
        )
        .expect_err("negative dt");
        assert!(err.to_string().contains("step size (dt)"));
    }

    #[test]
    fn logistic_law_vanishes_at_equilibria_and_peaks_at_half_capacity() {
        let law = LogisticLaw::new(0.5, 1000.0);
        assert_eq!(law.rate(0.0), 0.0);
        assert_eq!(law.rate(1000.0), 0.0);
        assert_eq!(law.rate(500.0), 125.0);
        assert!(law.rate(499.0) < law.rate(500.0));
        assert!(law.rate(1200.0) < 0.0);
        assert_eq!(law.apply(3.0, 250.0), law.apply(-7.0, 250.0));
    }

    #[test]
    fn exact_population_hits_known_points() {
        let params = ModelParameters::new(0.5, 1000.0, 10.0, 50.0, 0.1).expect("params");
        assert!((exact_population(&params, 0.0) - 10.0).abs() < 1e-12);
        let t_half = (99.0_f64).ln() / 0.5;
        assert!((exact_population(&params, t_half) - 500.0).abs() < 1e-9);
        assert!(exact_population(&params, 1.0e3) <= 1000.0);

        let decaying = ModelParameters::new(0.1, 500.0, 600.0, 10.0, 0.5).expect("params");
        assert!(exact_population(&decaying, 5.0) > 500.0);
        assert!(exact_population(&decaying, 5.0) < 600.0);
    }
}
