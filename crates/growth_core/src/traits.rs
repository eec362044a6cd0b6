use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in our dynamical systems.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A one-dimensional flow `dp/dt = f(t, p)`.
pub trait DynamicalSystem<T: Scalar> {
    /// Evaluates the vector field at time `t` and state `p`.
    fn apply(&self, t: T, p: T) -> T;
}

impl<T: Scalar, F> DynamicalSystem<T> for F
where
    F: Fn(T, T) -> T,
{
    fn apply(&self, t: T, p: T) -> T {
        self(t, p)
    }
}

/// A trait for solvers that can step a system forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt and returns the state at `t + dt`.
    /// t: current time
    /// p: current state
    /// dt: step size
    fn step(&self, system: &impl DynamicalSystem<T>, t: T, p: T, dt: T) -> T;
}
