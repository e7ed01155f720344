//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator, ground clamp and optional spring term
//! - [`ParametersConfig`] – step size, end time and gravity
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A toy mine dropped onto a static floor:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "euler"
//!   ground_clamp: false
//!   freeze_static: true     # keep the static floor in place
//!
//! parameters:
//!   t_end: 2.0              # total simulation time
//!   h0: 0.01                # fixed step size
//!   gravity: [0.0, -9.81, 0.0]
//!
//! bodies:
//!   - shape: plane
//!     position: [0.0, 0.0, 0.0]
//!     rotation: [-90.0, 0.0, 0.0]   # local Z (the normal) turned to +Y
//!     static: true
//!   - shape: sphere
//!     radius: 0.25
//!     mass: 1.0
//!     position: [0.0, 3.0, 0.0]
//!     restitution: 0.6
//!     notify: true
//! ```
//!
//! Every field except `shape` and `position` (per body) and `t_end`/`h0` is
//! optional. The engine maps this into a runtime `Scenario`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::integrator::IntegratorKind;
use crate::simulation::states::ShapeKind;

/// Everything that can go wrong turning a scenario file into a runnable world
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("step size must be positive, got {0}")]
    InvalidTimeStep(f64),
    #[error("end time must be positive, got {0}")]
    InvalidEndTime(f64),
    #[error("body {index}: mass must be positive, got {mass}")]
    InvalidMass { index: usize, mass: f64 },
    #[error("body {index}: radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },
    #[error("body {index}: radius given for a {kind:?}")]
    RadiusOnNonSphere { index: usize, kind: ShapeKind },
}

/// Damped spring acceleration term
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct SpringConfig {
    pub stiffness: f64, // k, pulls towards the origin
    pub damping: f64,   // b, opposes velocity
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorKind, // Time integrator used for advancing bodies
    #[serde(default = "default_true")]
    pub ground_clamp: bool, // Keep spheres above y = 0 with the floor special-case
    #[serde(default)]
    pub freeze_static: bool, // Static bodies also skip integration (gravity, forces)
    #[serde(default)]
    pub spring: Option<SpringConfig>, // Extra acceleration term, off unless given
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorKind::default(),
            ground_clamp: true,
            freeze_static: false,
            spring: None,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64,    // time step size
    #[serde(default = "default_gravity")]
    pub gravity: [f64; 3], // acceleration applied to every body
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub shape: ShapeKind,        // sphere, box or plane
    #[serde(default)]
    pub radius: Option<f64>,     // spheres only, defaults to 1
    #[serde(default = "default_mass")]
    pub mass: f64,               // kilograms
    pub position: [f64; 3],      // initial world position
    #[serde(default)]
    pub velocity: [f64; 3],      // initial velocity
    #[serde(default)]
    pub rotation: [f64; 3],      // roll, pitch, yaw in degrees
    #[serde(default = "default_restitution")]
    pub restitution: f64,        // fraction of velocity kept on a bounce
    #[serde(default)]
    pub drag: f64,               // reserved, not applied
    #[serde(default, rename = "static")]
    pub is_static: bool,         // never moved by collisions or integration
    #[serde(default)]
    pub notify: bool,            // queue collision events for this body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Engine-level configuration
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // Bodies that define the initial state of the world
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

fn default_true() -> bool {
    true
}

fn default_gravity() -> [f64; 3] {
    [0.0, -9.81, 0.0]
}

fn default_mass() -> f64 {
    1.0
}

fn default_restitution() -> f64 {
    1.0
}
