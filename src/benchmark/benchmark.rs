use std::time::Instant;

use crate::simulation::integrator::{euler, rk4};
use crate::simulation::placement::Placement;
use crate::simulation::states::NVec3;
use crate::simulation::world::PhysicsWorld;

/// Time Euler against RK4 on a constant-acceleration projectile and report
/// how far each lands from the closed-form answer
pub fn bench_integrators() {
    let g = NVec3::new(0.0, -9.81, 0.0);
    let v0 = NVec3::new(3.0, 10.0, 0.0);
    let accel = |_x: &NVec3, _v: &NVec3, _t: f64| g;

    let t_end = 2.0;
    let steps_list = [100, 1_000, 10_000, 100_000];

    for steps in steps_list {
        let dt = t_end / steps as f64;

        // analytic: x(t) = v0 t + 1/2 g t^2
        let exact = v0 * t_end + 0.5 * g * t_end * t_end;

        let t0 = Instant::now();
        let (mut x, mut v) = (NVec3::zeros(), v0);
        for i in 0..steps {
            (x, v) = euler(x, v, accel, i as f64 * dt, dt);
        }
        let dt_euler = t0.elapsed().as_secs_f64();
        let err_euler = (x - exact).norm();

        let t1 = Instant::now();
        let (mut x, mut v) = (NVec3::zeros(), v0);
        for i in 0..steps {
            (x, v) = rk4(x, v, accel, i as f64 * dt, dt);
        }
        let dt_rk4 = t1.elapsed().as_secs_f64();
        let err_rk4 = (x - exact).norm();

        println!(
            "steps = {steps:6}, euler = {dt_euler:8.6} s (err {err_euler:.3e}), rk4 = {dt_rk4:8.6} s (err {err_rk4:.3e})"
        );
    }
}

/// Time one full tick (all-pairs scan included) for growing numbers of spheres
pub fn bench_scan() {
    let ns = [50, 100, 200, 400, 800];
    let ticks = 10;

    for n in ns {
        let mut world = PhysicsWorld::with_capacity(n);

        for i in 0..n {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let position = NVec3::new(
                (i_f * 0.37).sin() * 20.0,
                5.0 + (i_f * 0.13).cos().abs() * 20.0,
                (i_f * 0.07).sin() * 20.0,
            );

            let handle = world.create_sphere(0.5);
            if let Some(body) = world.body_mut(handle) {
                body.placement = Some(Placement::from_position(position));
            }
        }

        let mut contacts = 0;
        let t0 = Instant::now();
        for tick in 0..ticks {
            contacts += world.step(tick as f64 / 60.0, 1.0 / 60.0).contacts;
        }
        let per_tick = t0.elapsed().as_secs_f64() / ticks as f64;

        println!("N = {n:5}, tick = {per_tick:8.6} s, contacts = {contacts}");
    }
}
