//! Numerical and physical parameters for a scenario run
//!
//! `Parameters` holds runtime settings:
//! - step size and end time,
//! - the gravity applied to every body

use super::states::NVec3;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64,     // time end
    pub h0: f64,        // step size
    pub gravity: NVec3, // acceleration applied to every body
}
