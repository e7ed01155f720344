//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - a populated `PhysicsWorld` with every body attached at t = 0
//! - the fixed-step clock that drives it
//!
//! Unlike the world itself, building validates its input: a bad mass or radius
//! in a file is reported instead of silently ignored

use nalgebra::Rotation3;
use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig, ScenarioError};
use crate::simulation::clock::{Clock, FixedStepClock};
use crate::simulation::engine::Engine;
use crate::simulation::forces::Spring;
use crate::simulation::params::Parameters;
use crate::simulation::placement::Placement;
use crate::simulation::states::{Body, NVec3, ShapeKind};
use crate::simulation::world::{BodyHandle, PhysicsWorld, StepReport};

/// A world ready to run, together with the settings it was built from
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub world: PhysicsWorld,
    pub clock: FixedStepClock,
    /// Handles of the configured bodies, in file order
    pub handles: Vec<BodyHandle>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.h0 > 0.0) {
            return Err(ScenarioError::InvalidTimeStep(p_cfg.h0));
        }
        if !(p_cfg.t_end > 0.0) {
            return Err(ScenarioError::InvalidEndTime(p_cfg.t_end));
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            gravity: NVec3::from(p_cfg.gravity),
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            ground_clamp: e_cfg.ground_clamp,
            freeze_static: e_cfg.freeze_static,
            spring: e_cfg.spring.map(|s| Spring {
                stiffness: s.stiffness,
                damping: s.damping,
            }),
        };

        let mut world = PhysicsWorld::with_capacity(cfg.bodies.len());
        world.set_gravity(parameters.gravity);
        world.set_integrator(engine.integrator);
        world.set_ground_clamp(engine.ground_clamp);
        world.set_freeze_static(engine.freeze_static);
        if let Some(spring) = engine.spring {
            world.add_acceleration(spring);
        }

        // Bodies: map `BodyConfig` -> runtime `Body`
        let mut handles = Vec::with_capacity(cfg.bodies.len());
        for (index, bc) in cfg.bodies.iter().enumerate() {
            let body = build_body(index, bc)?;
            handles.push(world.insert(body));
        }

        info!(
            bodies = handles.len(),
            integrator = ?engine.integrator,
            h0 = parameters.h0,
            t_end = parameters.t_end,
            "scenario built"
        );

        Ok(Self {
            clock: FixedStepClock::new(parameters.h0),
            engine,
            parameters,
            world,
            handles,
        })
    }

    /// Run a single tick and move the clock on
    pub fn tick(&mut self) -> StepReport {
        let report = self.world.tick(&self.clock);
        self.clock.advance();
        report
    }

    /// True once the clock has reached `t_end`
    pub fn is_finished(&self) -> bool {
        // Half a step of slack so accumulated rounding can't add an extra tick
        self.clock.current_time() + 0.5 * self.parameters.h0 >= self.parameters.t_end
    }

    /// Tick until `t_end`, returning how many ticks ran
    pub fn run_to_end(&mut self) -> usize {
        let mut ticks = 0;
        while !self.is_finished() {
            self.tick();
            ticks += 1;
        }
        ticks
    }
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, ScenarioError> {
    if !(bc.mass > 0.0) {
        return Err(ScenarioError::InvalidMass { index, mass: bc.mass });
    }

    let mut body = Body::new(bc.shape);
    match (bc.shape, bc.radius) {
        (ShapeKind::Sphere, Some(radius)) if !(radius > 0.0) => {
            return Err(ScenarioError::InvalidRadius { index, radius });
        }
        (ShapeKind::Sphere, Some(radius)) => body.set_radius(radius),
        (ShapeKind::Sphere, None) => {}
        (kind, Some(_)) => return Err(ScenarioError::RadiusOnNonSphere { index, kind }),
        (_, None) => {}
    }

    body.set_mass(bc.mass);
    body.velocity = NVec3::from(bc.velocity);
    body.restitution = bc.restitution;
    body.drag = bc.drag;
    body.is_static = bc.is_static;
    body.notify_collisions = bc.notify;

    let [roll, pitch, yaw] = bc.rotation.map(f64::to_radians);
    body.placement = Some(Placement::from_position_rotation(
        NVec3::from(bc.position),
        Rotation3::from_euler_angles(roll, pitch, yaw),
    ));

    Ok(body)
}
