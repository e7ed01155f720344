//! Core state types for the rigid-body simulation.
//!
//! Defines the per-entity [`Body`] record and its closed set of shapes:
//! - [`Shape`] carries the shape-specific attributes (sphere radius)
//! - [`ShapeKind`] is the bare tag the collision dispatcher switches on
//!
//! Orientation is never stored here: box edge directions and plane normals are
//! derived from the body's [`Placement`].

use nalgebra::Vector3;
use serde::Deserialize;

use super::placement::Placement;

pub type NVec3 = Vector3<f64>;

/// Radius given to spheres that are created without one
pub const DEFAULT_SPHERE_RADIUS: f64 = 1.0;

/// Shape tag, fixed at creation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere,
    Box,
    Plane,
}

/// Collision shape with its shape-specific data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f64 },
    Box,
    Plane,
}

impl Shape {
    /// Default-initialized shape of the given kind
    pub fn of_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Sphere => Shape::Sphere { radius: DEFAULT_SPHERE_RADIUS },
            ShapeKind::Box => Shape::Box,
            ShapeKind::Plane => Shape::Plane,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Box => ShapeKind::Box,
            Shape::Plane => ShapeKind::Plane,
        }
    }
}

/// One simulated object
///
/// `force` is a per-tick accumulator: whatever is added between ticks is
/// consumed by the next integration pass and then zeroed.
#[derive(Debug, Clone)]
pub struct Body {
    shape: Shape,
    mass: f64,
    pub velocity: NVec3,
    pub force: NVec3,
    /// Reserved for damping; not consumed by the acceleration computation
    pub drag: f64,
    /// Fraction of velocity kept after a bounce
    pub restitution: f64,
    /// Static bodies are never moved or slowed by collision response
    /// (they still fall under gravity unless the world freezes them)
    pub is_static: bool,
    /// Queue a [`CollisionEvent`](super::response::CollisionEvent) whenever this body's collisions are resolved
    /// Queued events stay in the world until drained with `PhysicsWorld::drain_events`
    pub notify_collisions: bool,
    /// World transform, `None` while the body is not attached to the world
    pub placement: Option<Placement>,
}

impl Body {
    /// Body of the given kind with default attributes and no placement
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            shape: Shape::of_kind(kind),
            mass: 1.0,
            velocity: NVec3::zeros(),
            force: NVec3::zeros(),
            drag: 0.0,
            restitution: 1.0,
            is_static: false,
            notify_collisions: false,
            placement: None,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Sphere radius, `None` for other shapes
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Sphere { radius } => Some(radius),
            _ => None,
        }
    }

    /// Set the sphere radius
    /// Non-positive values and non-sphere bodies are ignored
    pub fn set_radius(&mut self, radius: f64) {
        if let Shape::Sphere { radius: r } = &mut self.shape {
            if radius > 0.0 {
                *r = radius;
            }
        }
    }

    /// Mass in kilograms, always strictly positive
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Set the mass
    /// Anything that is not strictly positive (zero, negative, NaN) is silently ignored
    pub fn set_mass(&mut self, mass: f64) {
        if mass > 0.0 {
            self.mass = mass;
        }
    }

    /// Add a force to be applied on the next integration pass
    pub fn apply_force(&mut self, force: NVec3) {
        self.force += force;
    }

    /// Start the body moving from rest: accumulate `force` and discard the current velocity
    pub fn launch(&mut self, force: NVec3) {
        self.force += force;
        self.velocity = NVec3::zeros();
    }

    /// Move the body to `position` (dropping any orientation) and set its mass
    pub fn reset(&mut self, position: NVec3, mass: f64) {
        self.placement = Some(Placement::from_position(position));
        self.set_mass(mass);
    }

    pub fn is_attached(&self) -> bool {
        self.placement.is_some()
    }

    /// World position, zero while unattached
    pub fn position(&self) -> NVec3 {
        self.placement.map(|p| p.position()).unwrap_or_else(NVec3::zeros)
    }

    /// Box edge direction along local X, zero while unattached
    pub fn u(&self) -> NVec3 {
        self.placement.map(|p| p.x_axis()).unwrap_or_else(NVec3::zeros)
    }

    /// Box edge direction along local Y, zero while unattached
    pub fn v(&self) -> NVec3 {
        self.placement.map(|p| p.y_axis()).unwrap_or_else(NVec3::zeros)
    }

    /// Box edge direction along local Z, zero while unattached
    pub fn w(&self) -> NVec3 {
        self.placement.map(|p| p.z_axis()).unwrap_or_else(NVec3::zeros)
    }

    /// Plane normal (local Z axis, not normalized), zero while unattached
    pub fn normal(&self) -> NVec3 {
        self.w()
    }

    /// Translate the placement in world space; no-op while unattached
    pub fn translate(&mut self, delta: NVec3) {
        if let Some(placement) = &mut self.placement {
            placement.translate(&delta);
        }
    }
}
