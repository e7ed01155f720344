//! High-level runtime engine settings
//!
//! Selects the integrator, the ground clamp and any extra acceleration terms
//! used when building and running a `Scenario`

use crate::simulation::forces::Spring;
use crate::simulation::integrator::IntegratorKind;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorKind, // euler or rk4
    pub ground_clamp: bool,         // false = no floor special-case
    pub freeze_static: bool,        // true = static bodies skip integration
    pub spring: Option<Spring>,     // optional pull towards the origin
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorKind::Rk4,
            ground_clamp: true,
            freeze_static: false,
            spring: None,
        }
    }
}
