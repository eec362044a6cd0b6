use crate::traits::{DynamicalSystem, Scalar, Steppable};

/// Classic Runge-Kutta 4th Order Solver
///
/// Fixed step, no error control. Overflow and NaN are propagated as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4;

impl RK4 {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Scalar> Steppable<T> for RK4 {
    fn step(&self, system: &impl DynamicalSystem<T>, t: T, p: T, dt: T) -> T {
        let two = T::one() + T::one();
        let six = two + two + two;
        let half_dt = dt / two;

        // k1 = dt * f(t, p)
        let k1 = dt * system.apply(t, p);

        // k2 = dt * f(t + dt/2, p + k1/2)
        let k2 = dt * system.apply(t + half_dt, p + k1 / two);

        // k3 = dt * f(t + dt/2, p + k2/2)
        let k3 = dt * system.apply(t + half_dt, p + k2 / two);

        // k4 = dt * f(t + dt, p + k3)
        let k4 = dt * system.apply(t + dt, p + k3);

        // p_next = p + (k1 + 2k2 + 2k3 + k4) / 6
        p + (k1 + two * k2 + two * k3 + k4) / six
    }
}
