//! Fixed-step time integrators for a single position/velocity pair
//!
//! Provides explicit Euler and classical Runge-Kutta order 4, both driven by a
//! caller-supplied acceleration function `a(x, v, t)`. Neither keeps any state,
//! so identical inputs always give identical outputs

use serde::Deserialize;

use super::states::NVec3;

/// Which integrator the world advances bodies with
/// `integrator: "euler"` or `integrator: "rk4"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorKind {
    #[serde(rename = "euler")] // Explicit Euler, first order, cheap fallback for small dt
    Euler,

    #[serde(rename = "rk4")] // Classical 4th-order Runge-Kutta, the production integrator
    #[default]
    Rk4,
}

impl IntegratorKind {
    /// Advance `(position, velocity)` by `dt` starting at time `t`
    pub fn integrate<F>(self, position: NVec3, velocity: NVec3, accel: F, t: f64, dt: f64) -> (NVec3, NVec3)
    where
        F: Fn(&NVec3, &NVec3, f64) -> NVec3,
    {
        match self {
            IntegratorKind::Euler => euler(position, velocity, accel, t, dt),
            IntegratorKind::Rk4 => rk4(position, velocity, accel, t, dt),
        }
    }
}

/// Advance one step with explicit Euler
/// The acceleration is sampled once, at the start of the step
pub fn euler<F>(position: NVec3, velocity: NVec3, accel: F, t: f64, dt: f64) -> (NVec3, NVec3)
where
    F: Fn(&NVec3, &NVec3, f64) -> NVec3,
{
    let a = accel(&position, &velocity, t);

    // x_n+1 = x_n + dt * v_n
    // v_n+1 = v_n + dt * a_n
    (position + velocity * dt, velocity + a * dt)
}

/// One RK4 stage: a velocity/acceleration derivative pair
#[derive(Debug, Clone, Copy)]
struct Derivative {
    dx: NVec3, // dx/dt, a velocity
    dv: NVec3, // dv/dt, an acceleration
}

/// Euler-project the initial state along `prev` by `h`, then sample the derivative there
fn evaluate<F>(position: &NVec3, velocity: &NVec3, prev: &Derivative, accel: &F, t: f64, h: f64) -> Derivative
where
    F: Fn(&NVec3, &NVec3, f64) -> NVec3,
{
    let x = position + prev.dx * h;
    let v = velocity + prev.dv * h;
    Derivative { dx: v, dv: accel(&x, &v, t + h) }
}

/// Advance one step with classical fourth-order Runge-Kutta
///
/// Stages are sampled at `t`, `t + dt/2` (twice) and `t + dt`, then combined
/// with weights (1, 2, 2, 1) / 6 for both the position and velocity deltas
pub fn rk4<F>(position: NVec3, velocity: NVec3, accel: F, t: f64, dt: f64) -> (NVec3, NVec3)
where
    F: Fn(&NVec3, &NVec3, f64) -> NVec3,
{
    let half_dt = 0.5 * dt;
    let sixth = 1.0 / 6.0;

    let start = Derivative { dx: NVec3::zeros(), dv: NVec3::zeros() };

    let k1 = evaluate(&position, &velocity, &start, &accel, t, 0.0);
    let k2 = evaluate(&position, &velocity, &k1, &accel, t, half_dt);
    let k3 = evaluate(&position, &velocity, &k2, &accel, t, half_dt);
    let k4 = evaluate(&position, &velocity, &k3, &accel, t, dt);

    // Weighted sum: 1/6 * (k1 + 2 * (k2 + k3) + k4)
    let dxdt = sixth * (k1.dx + 2.0 * (k2.dx + k3.dx) + k4.dx);
    let dvdt = sixth * (k1.dv + 2.0 * (k2.dv + k3.dv) + k4.dv);

    (position + dxdt * dt, velocity + dvdt * dt)
}
