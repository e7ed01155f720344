//! Time source driving the world
//!
//! The world never measures time itself. Once per tick it asks a [`Clock`] for
//! the current time and the interval since the previous tick.

pub trait Clock {
    /// Simulation time at the start of this tick, in seconds
    fn current_time(&self) -> f64;

    /// Seconds elapsed since the previous tick
    fn tick_interval(&self) -> f64;
}

/// Clock that advances by a constant step each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepClock {
    t: f64,  // current time
    dt: f64, // step size
}

impl FixedStepClock {
    pub fn new(dt: f64) -> Self {
        Self::starting_at(0.0, dt)
    }

    pub fn starting_at(t: f64, dt: f64) -> Self {
        Self { t, dt }
    }

    /// Move on to the next tick
    pub fn advance(&mut self) {
        self.t += self.dt;
    }
}

impl Clock for FixedStepClock {
    fn current_time(&self) -> f64 {
        self.t
    }

    fn tick_interval(&self) -> f64 {
        self.dt
    }
}
