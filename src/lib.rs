pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, Shape, ShapeKind, NVec3, DEFAULT_SPHERE_RADIUS};
pub use simulation::placement::Placement;
pub use simulation::integrator::{euler, rk4, IntegratorKind};
pub use simulation::forces::{Acceleration, AccelSet, AppliedForce, Spring};
pub use simulation::collision::{detect_collision, sphere_plane, sphere_sphere};
pub use simulation::response::{resolve, respond, Collider, CollisionEvent, Contact, POSITION_CORRECTION_FACTOR};
pub use simulation::world::{earth_gravity, BodyHandle, PhysicsWorld, StepReport};
pub use simulation::clock::{Clock, FixedStepClock};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig, ScenarioError, SpringConfig};

pub use benchmark::benchmark::{bench_integrators, bench_scan};
