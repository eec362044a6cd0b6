//! The `growth_core` crate provides the numerical engine for logistic population growth.
//! The integrator is generic over the scalar type, while the simulation driver and the
//! analyzer work in `f64`.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem` (1D flows), `Steppable` (Solvers).
//! - **Solvers**: the fixed-step classical Runge-Kutta integrator (`RK4`).
//! - **Model**: validated `ModelParameters` and the `LogisticLaw` vector field.
//! - **Simulation**: a lazy driver emitting one `SimulationSample` per integration step.
//! - **Analysis**: closed-form equilibria, half-capacity time and peak growth rate.

pub mod analysis;
pub mod error;
pub mod model;
pub mod scenario;
pub mod simulation;
pub mod solvers;
pub mod traits;

pub use analysis::{
    equilibria, half_capacity_time, max_growth_rate, Equilibrium, HalfCapacityTime,
    ModelAnalysis, PeakGrowth, Stability,
};
pub use error::ModelError;
pub use model::{exact_population, LogisticLaw, ModelParameters, Parameter, Regime};
pub use scenario::Scenario;
pub use simulation::{Simulation, SimulationSample, SimulationSummary, Termination};
pub use solvers::RK4;
