pub mod states;
pub mod placement;
pub mod params;
pub mod engine;
pub mod clock;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod response;
pub mod world;
pub mod scenario;
