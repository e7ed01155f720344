//! Force / acceleration contributors for the rigid-body world
//!
//! The integrator samples acceleration several times per step, so every term
//! is a pure function of the body, a trial position/velocity and a time. Gravity
//! is added by the world on top of whatever the set sums to

use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms (applied force, springs, etc)
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    /// Only the body's accumulated force
    fn default() -> Self {
        Self::new().with(AppliedForce)
    }
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet").field("terms", &self.terms.len()).finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Add an acceleration term in place
    pub fn push(&mut self, term: impl Acceleration + Send + Sync + 'static) {
        self.terms.push(Box::new(term));
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration of `body` at the trial state (`x`, `v`) and time `t`
    pub fn accumulate(&self, t: f64, body: &Body, x: &NVec3, v: &NVec3) -> NVec3 {
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| acc + term.acceleration(t, body, x, v))
    }
}

/// Trait for acceleration sources acting on a single [`Body`]
pub trait Acceleration {
    fn acceleration(&self, t: f64, body: &Body, x: &NVec3, v: &NVec3) -> NVec3;
}

/// The body's accumulated force divided by its mass
/// Mass is guaranteed positive by [`Body::set_mass`]
#[derive(Debug, Clone, Copy)]
pub struct AppliedForce;

impl Acceleration for AppliedForce {
    fn acceleration(&self, _t: f64, body: &Body, _x: &NVec3, _v: &NVec3) -> NVec3 {
        body.force / body.mass()
    }
}

/// Damped spring pulling every body towards the world origin
/// a = (-k * x - b * v) / m
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64, // k
    pub damping: f64,   // b
}

impl Acceleration for Spring {
    fn acceleration(&self, _t: f64, body: &Body, x: &NVec3, v: &NVec3) -> NVec3 {
        (-self.stiffness * *x - self.damping * *v) / body.mass()
    }
}
