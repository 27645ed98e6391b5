//! Closed-form trajectories for the animated bodies.
//!
//! Every moving body is parameterized by elapsed wall-clock seconds, so its
//! apparent speed is independent of the rendered frame rate. Each curve is
//! exactly periodic: `position(t + period) == position(t)` up to float
//! rounding. Negative elapsed time (clock skew on the first frames) is
//! absorbed by `rem_euclid`, which never yields a negative phase.

use bevy::prelude::*;
use std::f32::consts::TAU;

/// Which way a body travels along its lateral axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TravelDirection {
    Left,
    Right,
}

impl TravelDirection {
    /// Sign applied to the lateral axis of a trajectory.
    pub fn lateral_sign(self) -> f32 {
        match self {
            TravelDirection::Left => -1.0,
            TravelDirection::Right => 1.0,
        }
    }
}

/// Fraction of the current cycle completed, in `[0, 1)`.
///
/// `start_delay` shifts when the cycle effectively begins so that
/// otherwise-identical bodies enter staggered.
pub fn cycle_progress(elapsed_secs: f32, period_secs: f32, start_delay_secs: f32) -> f32 {
    (elapsed_secs - start_delay_secs).rem_euclid(period_secs) / period_secs
}

/// Circular orbit around the scene origin, tilted out of the ground plane.
#[derive(Clone, Debug)]
pub struct OrbitParams {
    /// Orbit radius in scene units.
    pub distance: f32,
    /// Angular speed in radians per second.
    pub angular_speed: f32,
    /// Angle at `t = 0`, staggering bodies on the same orbit.
    pub phase: f32,
    /// Inclination of the orbital plane, radians.
    pub tilt: f32,
    pub direction: TravelDirection,
}

impl OrbitParams {
    /// Seconds for one full revolution.
    pub fn period_secs(&self) -> f32 {
        TAU / self.angular_speed
    }
}

/// Position on a tilted circular orbit at the given elapsed time.
pub fn orbit_position(params: &OrbitParams, elapsed_secs: f32) -> Vec3 {
    let theta = params.phase
        + params.direction.lateral_sign() * params.angular_speed * elapsed_secs.rem_euclid(params.period_secs());
    let flat_x = params.distance * theta.cos();
    let flat_z = params.distance * theta.sin();
    Vec3::new(
        flat_x,
        -flat_z * params.tilt.sin(),
        flat_z * params.tilt.cos(),
    )
}

/// Lissajous-like sweep through the scene volume, used by rockets and
/// asteroids. All harmonics are integer multiples of the base angle, so the
/// curve closes exactly once per period.
#[derive(Clone, Debug)]
pub struct SweepParams {
    pub period_secs: f32,
    pub start_delay_secs: f32,
    /// Half-width of the sweep along the lateral axis.
    pub lateral_extent: f32,
    /// Half-depth of the sweep along the view axis.
    pub depth_extent: f32,
    /// Vertical amplitude of the weave.
    pub rise: f32,
    pub direction: TravelDirection,
}

/// Position along a sweep at the given elapsed time.
pub fn sweep_position(params: &SweepParams, elapsed_secs: f32) -> Vec3 {
    let angle = TAU * cycle_progress(elapsed_secs, params.period_secs, params.start_delay_secs);
    Vec3::new(
        params.direction.lateral_sign() * params.lateral_extent * angle.sin(),
        params.rise * (2.0 * angle).sin(),
        params.depth_extent * angle.cos(),
    )
}

/// Point slightly ahead on the sweep, used to orient a body nose-first.
pub fn sweep_look_target(params: &SweepParams, elapsed_secs: f32) -> Vec3 {
    // One-tenth of a second of lead is enough to keep the heading stable.
    sweep_position(params, elapsed_secs + 0.1)
}

/// Straight dash that is only visible for a sub-window of each cycle.
#[derive(Clone, Debug)]
pub struct FlightParams {
    /// Full cycle length, flight plus rest.
    pub cycle_secs: f32,
    /// Visible portion of the cycle; strictly less than `cycle_secs`.
    pub flight_secs: f32,
    pub start_delay_secs: f32,
    pub start: Vec3,
    pub end: Vec3,
}

/// Sample a dash trajectory. `None` outside the flight window, where the
/// body is hidden and its trail rests.
pub fn flight_sample(params: &FlightParams, elapsed_secs: f32) -> Option<Vec3> {
    let cycle_time =
        (elapsed_secs - params.start_delay_secs).rem_euclid(params.cycle_secs);
    if cycle_time < params.flight_secs {
        let s = cycle_time / params.flight_secs;
        Some(params.start.lerp(params.end, s))
    } else {
        None
    }
}

/// Self-rotation about the local Y axis at the given elapsed time.
pub fn spin_rotation(spin_speed: f32, elapsed_secs: f32) -> Quat {
    let period = TAU / spin_speed.abs().max(f32::EPSILON);
    Quat::from_rotation_y(spin_speed * elapsed_secs.rem_euclid(period))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn sample_orbit() -> OrbitParams {
        OrbitParams {
            distance: 18.0,
            angular_speed: 0.12,
            phase: 1.3,
            tilt: 0.1,
            direction: TravelDirection::Right,
        }
    }

    fn sample_sweep() -> SweepParams {
        SweepParams {
            period_secs: 45.0,
            start_delay_secs: 7.0,
            lateral_extent: 40.0,
            depth_extent: 22.0,
            rise: 6.0,
            direction: TravelDirection::Left,
        }
    }

    #[test]
    fn cycle_progress_stays_in_unit_interval() {
        for t in [-100.0, -0.1, 0.0, 3.7, 59.99, 1e6] {
            let p = cycle_progress(t, 60.0, 5.0);
            assert!((0.0..1.0).contains(&p), "progress {p} out of range at t={t}");
        }
    }

    #[test]
    fn cycle_progress_handles_negative_elapsed() {
        // Clock skew must not produce a negative phase.
        let p = cycle_progress(-2.0, 10.0, 0.0);
        assert!((p - 0.8).abs() < EPSILON);
    }

    #[test]
    fn orbit_is_periodic() {
        let params = sample_orbit();
        let period = params.period_secs();
        for t in [0.0, 2.5, 17.0, 333.3] {
            let a = orbit_position(&params, t);
            let b = orbit_position(&params, t + period);
            assert!(a.distance(b) < EPSILON, "orbit drifted at t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn sweep_is_periodic() {
        let params = sample_sweep();
        for t in [0.0, 11.0, 44.9, 1000.0] {
            let a = sweep_position(&params, t);
            let b = sweep_position(&params, t + params.period_secs);
            assert!(a.distance(b) < EPSILON, "sweep drifted at t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn flight_is_periodic() {
        let params = FlightParams {
            cycle_secs: 12.0,
            flight_secs: 2.5,
            start_delay_secs: 4.0,
            start: Vec3::new(-50.0, 30.0, -20.0),
            end: Vec3::new(45.0, -5.0, 10.0),
        };
        for t in [0.0, 4.1, 6.0, 6.5, 99.0] {
            let a = flight_sample(&params, t);
            let b = flight_sample(&params, t + params.cycle_secs);
            match (a, b) {
                (Some(a), Some(b)) => assert!(a.distance(b) < EPSILON),
                (None, None) => {}
                _ => panic!("visibility gate not periodic at t={t}"),
            }
        }
    }

    #[test]
    fn flight_only_visible_inside_window() {
        let params = FlightParams {
            cycle_secs: 10.0,
            flight_secs: 2.0,
            start_delay_secs: 0.0,
            start: Vec3::ZERO,
            end: Vec3::X,
        };
        assert!(flight_sample(&params, 0.0).is_some());
        assert!(flight_sample(&params, 1.99).is_some());
        assert!(flight_sample(&params, 2.01).is_none());
        assert!(flight_sample(&params, 9.9).is_none());
        assert!(flight_sample(&params, 10.5).is_some());
    }

    #[test]
    fn flight_runs_start_to_end() {
        let params = FlightParams {
            cycle_secs: 10.0,
            flight_secs: 2.0,
            start_delay_secs: 0.0,
            start: Vec3::new(-50.0, 30.0, 0.0),
            end: Vec3::new(50.0, -10.0, 0.0),
        };
        let begin = flight_sample(&params, 0.0).unwrap();
        let mid = flight_sample(&params, 1.0).unwrap();
        assert!(begin.distance(params.start) < EPSILON);
        assert!(mid.distance(params.start.midpoint(params.end)) < EPSILON);
    }

    #[test]
    fn orbit_direction_mirrors_lateral_axis() {
        let mut params = sample_orbit();
        params.phase = 0.0;
        params.tilt = 0.0;
        let right = orbit_position(&params, 3.0);
        params.direction = TravelDirection::Left;
        let left = orbit_position(&params, 3.0);
        assert!((right.x - left.x).abs() < EPSILON);
        assert!((right.z + left.z).abs() < EPSILON);
    }

    #[test]
    fn revolution_time_depends_only_on_elapsed_time() {
        // One full revolution takes 2π/ω seconds no matter how many frames
        // were rendered in between.
        let params = OrbitParams {
            distance: 6.0,
            angular_speed: 0.3,
            phase: 0.0,
            tilt: 0.0,
            direction: TravelDirection::Right,
        };
        let period = params.period_secs();
        assert!((period - TAU / 0.3).abs() < EPSILON);

        let start = orbit_position(&params, 0.0);
        // Sample the same revolution with wildly different "frame" counts.
        for steps in [7usize, 1257] {
            let mut last = start;
            for i in 1..=steps {
                last = orbit_position(&params, period * i as f32 / steps as f32);
            }
            assert!(last.distance(start) < EPSILON, "after {steps} steps");
        }
    }

    #[test]
    fn spin_is_periodic() {
        let speed = 0.8;
        let period = TAU / speed;
        let a = spin_rotation(speed, 3.0);
        let b = spin_rotation(speed, 3.0 + period);
        assert!(a.angle_between(b) < EPSILON);
    }
}
