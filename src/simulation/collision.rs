//! Shape-pair dispatch and narrow-phase tests
//!
//! [`detect_collision`] switches on the two shape tags and hands the pair to
//! exactly one test per unordered combination, swapping arguments so each test
//! always receives its shapes in the order it was written for. The 3x3 relation
//! is therefore symmetric with six implementation points instead of nine.
//!
//! Only sphere/sphere and sphere/plane produce contacts; the remaining pairs
//! are present so the table is complete and never report anything

use crate::simulation::response::{respond, Collider, CollisionEvent, Contact};
use crate::simulation::states::{NVec3, ShapeKind};

/// Test `a` against `b` and resolve any contact found
///
/// Both bodies must be attached; the world filters unattached bodies before
/// calling. Returns whether a contact was resolved.
pub fn detect_collision(a: Collider<'_>, b: Collider<'_>, events: &mut Vec<CollisionEvent>) -> bool {
    match (a.body.kind(), b.body.kind()) {
        (ShapeKind::Sphere, ShapeKind::Sphere) => sphere_sphere_collision(a, b, events),
        (ShapeKind::Sphere, ShapeKind::Box) => sphere_box_collision(a, b, events),
        (ShapeKind::Box, ShapeKind::Sphere) => sphere_box_collision(b, a, events),
        (ShapeKind::Sphere, ShapeKind::Plane) => sphere_plane_collision(a, b, events),
        (ShapeKind::Plane, ShapeKind::Sphere) => sphere_plane_collision(b, a, events),
        (ShapeKind::Box, ShapeKind::Box) => box_box_collision(a, b, events),
        (ShapeKind::Box, ShapeKind::Plane) => box_plane_collision(a, b, events),
        (ShapeKind::Plane, ShapeKind::Box) => box_plane_collision(b, a, events),
        (ShapeKind::Plane, ShapeKind::Plane) => plane_plane_collision(a, b, events),
    }
}

fn sphere_sphere_collision(a: Collider<'_>, b: Collider<'_>, events: &mut Vec<CollisionEvent>) -> bool {
    let (Some(ra), Some(rb)) = (a.body.radius(), b.body.radius()) else {
        return false;
    };

    match sphere_sphere(&a.body.position(), ra, &b.body.position(), rb) {
        Some(contact) => {
            // The normal points from b to a, so b is the lhs of the response
            respond(b, a, &contact, events);
            true
        }
        None => false,
    }
}

fn sphere_plane_collision(sphere: Collider<'_>, plane: Collider<'_>, events: &mut Vec<CollisionEvent>) -> bool {
    let Some(radius) = sphere.body.radius() else {
        return false;
    };

    match sphere_plane(&sphere.body.position(), radius, &plane.body.position(), &plane.body.normal()) {
        Some(contact) => {
            // The plane is always the lhs, whichever order the pair arrived in
            respond(plane, sphere, &contact, events);
            true
        }
        None => false,
    }
}

/// Not implemented: never reports a contact
fn sphere_box_collision(_sphere: Collider<'_>, _cube: Collider<'_>, _events: &mut Vec<CollisionEvent>) -> bool {
    false
}

/// Not implemented: never reports a contact
fn box_box_collision(_lhs: Collider<'_>, _rhs: Collider<'_>, _events: &mut Vec<CollisionEvent>) -> bool {
    false
}

/// Not implemented: never reports a contact
fn box_plane_collision(_cube: Collider<'_>, _plane: Collider<'_>, _events: &mut Vec<CollisionEvent>) -> bool {
    false
}

/// Not implemented: never reports a contact
fn plane_plane_collision(_lhs: Collider<'_>, _rhs: Collider<'_>, _events: &mut Vec<CollisionEvent>) -> bool {
    false
}

/// Sphere vs sphere overlap test
///
/// Contact iff `|a - b| < ra + rb` (touching exactly is not a contact). The
/// normal is `(a - b) / |a - b|`; coincident centres give no direction and
/// therefore no contact.
pub fn sphere_sphere(a: &NVec3, ra: f64, b: &NVec3, rb: f64) -> Option<Contact> {
    let d = a - b;
    let r = ra + rb;

    let dist2 = d.norm_squared();
    if dist2 >= r * r {
        return None;
    }

    let dist = dist2.sqrt();
    if dist == 0.0 {
        return None;
    }

    Some(Contact {
        normal: d / dist,
        penetration: r - dist,
    })
}

/// Sphere vs plane (half-space) test
///
/// The plane passes through `point` with normal `normal` (normalized here).
/// Contact iff the sphere centre's signed distance above the plane is less
/// than the radius. A zero-length normal never collides.
pub fn sphere_plane(center: &NVec3, radius: f64, point: &NVec3, normal: &NVec3) -> Option<Contact> {
    let n = normal.try_normalize(f64::EPSILON)?;

    let signed_distance = center.dot(&n) - point.dot(&n);
    if signed_distance >= radius {
        return None;
    }

    Some(Contact {
        normal: n,
        penetration: radius - signed_distance,
    })
}
