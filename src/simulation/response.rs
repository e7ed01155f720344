//! Collision response: velocity reflection plus positional correction
//!
//! Given a confirmed contact between `lhs` and `rhs`, both velocities are
//! reflected about the contact normal and scaled by each body's restitution,
//! and the overlap is removed by pushing the bodies apart along the normal.
//! Static bodies are never moved; the dynamic side absorbs the full correction

use crate::simulation::states::{Body, NVec3};
use crate::simulation::world::BodyHandle;

/// Share of the penetration depth each body is pushed by when both are dynamic.
///
/// Slightly above one half so the pair ends up separated even after
/// floating-point rounding, rather than exactly touching.
pub const POSITION_CORRECTION_FACTOR: f64 = 0.5001;

/// Result of a positive narrow-phase test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from `lhs` towards `rhs`
    pub normal: NVec3,
    /// Overlap depth along `normal`, always positive
    pub penetration: f64,
}

/// Queued replacement for a per-body collision callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    /// The opted-in body that collided
    pub body: BodyHandle,
    /// Its counterpart in the collision
    pub other: BodyHandle,
}

/// A live body together with the handle it is registered under
#[derive(Debug)]
pub struct Collider<'a> {
    pub handle: BodyHandle,
    pub body: &'a mut Body,
}

/// Reflect `v` about the unit direction `n`
pub fn reflect(v: &NVec3, n: &NVec3) -> NVec3 {
    v - *n * (2.0 * v.dot(n))
}

/// Update velocities and positions of both bodies for `contact`
pub fn resolve(lhs: &mut Body, rhs: &mut Body, contact: &Contact) {
    let n = contact.normal;
    let correction = n * (contact.penetration * POSITION_CORRECTION_FACTOR);

    match (lhs.is_static, rhs.is_static) {
        (false, false) => {
            lhs.velocity = reflect(&lhs.velocity, &-n) * lhs.restitution;
            rhs.velocity = reflect(&rhs.velocity, &n) * rhs.restitution;
            lhs.translate(-correction);
            rhs.translate(correction);
        }
        (false, true) => {
            lhs.velocity = reflect(&lhs.velocity, &-n) * lhs.restitution;
            lhs.translate(-2.0 * correction);
        }
        (true, false) => {
            rhs.velocity = reflect(&rhs.velocity, &n) * rhs.restitution;
            rhs.translate(2.0 * correction);
        }
        // Two static bodies touching is a scene error; neither can move
        (true, true) => {}
    }
}

/// Resolve `contact` and queue notifications, lhs first then rhs
pub fn respond(lhs: Collider<'_>, rhs: Collider<'_>, contact: &Contact, events: &mut Vec<CollisionEvent>) {
    resolve(lhs.body, rhs.body, contact);

    tracing::trace!(
        lhs = ?lhs.handle,
        rhs = ?rhs.handle,
        penetration = contact.penetration,
        "resolved contact"
    );

    if lhs.body.notify_collisions {
        events.push(CollisionEvent { body: lhs.handle, other: rhs.handle });
    }
    if rhs.body.notify_collisions {
        events.push(CollisionEvent { body: rhs.handle, other: lhs.handle });
    }
}
