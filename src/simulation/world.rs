//! The simulation registry
//!
//! Bodies live in a generational arena; [`BodyHandle`]s are the non-owning
//! references handed out to callers and kept in the registry's member list.
//! Destroying a body frees its slot at once, but the stale handle stays in the
//! member list until the compaction at the end of the next tick, so the set of
//! members is stable while a tick runs.
//!
//! One tick runs, in order:
//! 1. `pre_step`   - ground clamp for spheres below their own radius
//! 2. `detect_collisions` - every unordered pair of live, attached members
//! 3. `integrate`  - (force / mass) + gravity (+ configured terms), then force reset.
//!    Static bodies are integrated too unless `freeze_static` is set; otherwise
//!    `is_static` only exempts them from collision response
//! 4. `compact`    - drop members whose body no longer exists

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace};

use crate::simulation::clock::Clock;
use crate::simulation::collision::detect_collision;
use crate::simulation::forces::{AccelSet, Acceleration};
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::response::{Collider, CollisionEvent};
use crate::simulation::states::{Body, NVec3, ShapeKind};

new_key_type! {
    /// Generation-checked reference to a body in a [`PhysicsWorld`]
    pub struct BodyHandle;
}

/// Standard gravity, applied unless overridden
pub fn earth_gravity() -> NVec3 {
    NVec3::new(0.0, -9.81, 0.0)
}

/// How many body slots a new world reserves
pub const DEFAULT_CAPACITY: usize = 100;

/// Counters from one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub contacts: usize,  // contacts resolved during the scan
    pub compacted: usize, // stale members dropped afterwards
}

#[derive(Debug)]
pub struct PhysicsWorld {
    bodies: SlotMap<BodyHandle, Body>,
    members: Vec<BodyHandle>,
    gravity: NVec3,
    integrator: IntegratorKind,
    forces: AccelSet,
    ground_clamp: bool,
    freeze_static: bool,
    events: Vec<CollisionEvent>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty world with room for `reserve` bodies
    pub fn with_capacity(reserve: usize) -> Self {
        Self {
            bodies: SlotMap::with_capacity_and_key(reserve),
            members: Vec::with_capacity(reserve),
            gravity: earth_gravity(),
            integrator: IntegratorKind::default(),
            forces: AccelSet::default(),
            ground_clamp: true,
            freeze_static: false,
            events: Vec::new(),
        }
    }

    // =========================================================================================
    // Registry
    // =========================================================================================

    /// Create and register a default-initialized body of the given shape
    pub fn create_object(&mut self, kind: ShapeKind) -> BodyHandle {
        self.insert(Body::new(kind))
    }

    /// Create and register a sphere; a non-positive `radius` keeps the default
    pub fn create_sphere(&mut self, radius: f64) -> BodyHandle {
        let mut body = Body::new(ShapeKind::Sphere);
        body.set_radius(radius);
        self.insert(body)
    }

    /// Register an already configured body
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        let handle = self.bodies.insert(body);
        self.members.push(handle);
        handle
    }

    /// Owner-driven destruction. The registry forgets the handle at the next compaction
    pub fn destroy(&mut self, handle: BodyHandle) -> Option<Body> {
        self.bodies.remove(handle)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains_key(handle)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Registered references, including stale ones not yet compacted
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Bodies that still exist
    pub fn live_count(&self) -> usize {
        self.bodies.len()
    }

    /// Registered handles in registry order (not meaningful, changes on compaction)
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.members.iter().copied()
    }

    /// Live bodies with their handles
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.members.iter().filter_map(|&h| self.bodies.get(h).map(|b| (h, b)))
    }

    // =========================================================================================
    // Settings
    // =========================================================================================

    pub fn gravity(&self) -> NVec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: NVec3) {
        self.gravity = gravity;
    }

    pub fn integrator(&self) -> IntegratorKind {
        self.integrator
    }

    pub fn set_integrator(&mut self, integrator: IntegratorKind) {
        self.integrator = integrator;
    }

    pub fn ground_clamp(&self) -> bool {
        self.ground_clamp
    }

    pub fn set_ground_clamp(&mut self, enabled: bool) {
        self.ground_clamp = enabled;
    }

    pub fn freeze_static(&self) -> bool {
        self.freeze_static
    }

    /// Keep static bodies out of the integration pass as well
    pub fn set_freeze_static(&mut self, enabled: bool) {
        self.freeze_static = enabled;
    }

    /// Add an acceleration term on top of the applied force
    pub fn add_acceleration(&mut self, term: impl Acceleration + Send + Sync + 'static) {
        self.forces.push(term);
    }

    /// Replace every acceleration term, including the applied force
    pub fn set_accelerations(&mut self, forces: AccelSet) {
        self.forces = forces;
    }

    // =========================================================================================
    // Notifications
    // =========================================================================================

    /// Events queued since the last drain
    ///
    /// The queue is never cleared by the world; a host that opts bodies in must
    /// drain it, or it grows with every resolved contact.
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Take every queued event, leaving the queue empty
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CollisionEvent> {
        self.events.drain(..)
    }

    // =========================================================================================
    // Per-tick passes
    // =========================================================================================

    /// Run one tick with the time values supplied by `clock`
    pub fn tick(&mut self, clock: &impl Clock) -> StepReport {
        self.step(clock.current_time(), clock.tick_interval())
    }

    /// Run one tick starting at time `t` and lasting `dt` seconds
    pub fn step(&mut self, t: f64, dt: f64) -> StepReport {
        if self.ground_clamp {
            self.pre_step();
        }
        let contacts = self.detect_collisions();
        self.integrate(t, dt);
        let compacted = self.compact();

        debug!(t, dt, bodies = self.members.len(), contacts, compacted, "physics tick");

        StepReport { contacts, compacted }
    }

    /// Simplified floor at y = 0: a sphere whose centre sits below its radius is
    /// lifted to exactly its radius and loses its vertical velocity
    pub fn pre_step(&mut self) {
        for &handle in &self.members {
            let Some(body) = self.bodies.get_mut(handle) else {
                continue;
            };
            let Some(radius) = body.radius() else {
                continue;
            };
            let Some(placement) = body.placement.as_mut() else {
                continue;
            };

            if placement.position().y < radius {
                body.velocity.y = 0.0;
                placement.set_height(radius);
            }
        }
    }

    /// Test every unordered pair of live, attached members (i < j) and resolve contacts
    /// Returns the number of contacts resolved
    pub fn detect_collisions(&mut self) -> usize {
        let n = self.members.len();
        let mut contacts = 0;

        for i in 0..n {
            let hi = self.members[i];
            if !self.bodies.get(hi).is_some_and(Body::is_attached) {
                continue;
            }

            for j in (i + 1)..n {
                let hj = self.members[j];

                // None when either side is gone
                let Some([a, b]) = self.bodies.get_disjoint_mut([hi, hj]) else {
                    continue;
                };
                if !b.is_attached() {
                    continue;
                }

                let a = Collider { handle: hi, body: a };
                let b = Collider { handle: hj, body: b };
                if detect_collision(a, b, &mut self.events) {
                    contacts += 1;
                }
            }
        }

        contacts
    }

    /// Advance every live, attached member from `t` by `dt`, then zero its force
    /// Static members are skipped only while `freeze_static` is set
    ///
    /// Integration starts from a zero displacement so the resulting translation is
    /// exact; acceleration terms see the world position `origin + displacement`.
    pub fn integrate(&mut self, t: f64, dt: f64) {
        let gravity = self.gravity;
        let integrator = self.integrator;
        let forces = &self.forces;
        let freeze_static = self.freeze_static;

        for &handle in &self.members {
            let Some(body) = self.bodies.get_mut(handle) else {
                continue;
            };
            if !body.is_attached() {
                continue;
            }

            if !(freeze_static && body.is_static) {
                let origin = body.position();
                let state: &Body = body;

                let (delta, velocity) = integrator.integrate(
                    NVec3::zeros(),
                    state.velocity,
                    |x, v, time| forces.accumulate(time, state, &(origin + x), v) + gravity,
                    t,
                    dt,
                );

                body.velocity = velocity;
                body.translate(delta);
            }

            body.force = NVec3::zeros();
        }
    }

    /// Drop members whose body was destroyed; order is not preserved
    /// Returns how many were dropped. Calling it on a clean registry does nothing
    pub fn compact(&mut self) -> usize {
        let before = self.members.len();

        let mut i = 0;
        while i < self.members.len() {
            if self.bodies.contains_key(self.members[i]) {
                i += 1;
            } else {
                // Swap with last and re-check the same index
                self.members.swap_remove(i);
            }
        }

        let removed = before - self.members.len();
        if removed > 0 {
            trace!(removed, remaining = self.members.len(), "compacted registry");
        }
        removed
    }
}
