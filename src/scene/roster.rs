//! Static declarative roster of scene bodies per quality tier.
//!
//! The roster is fixed at mount: no body is created or destroyed while the
//! scene lives. Distances, speeds, and colors are art-directed constants,
//! not orbital mechanics.

use anyhow::{Context, Result, bail, ensure};
use bevy::prelude::*;

use crate::quality::QualityTier;
use crate::texture::SurfaceKind;
use crate::trajectory::{FlightParams, OrbitParams, SweepParams, TravelDirection};

/// One translucent shell of the star, innermost last.
#[derive(Clone, Debug)]
pub struct StarShellConfig {
    pub name: &'static str,
    pub radius: f32,
    pub color: Srgba,
}

#[derive(Clone, Debug)]
pub struct PlanetConfig {
    pub name: &'static str,
    pub size: f32,
    pub surface: SurfaceKind,
    pub color: Srgba,
    pub orbit: OrbitParams,
    /// Self-rotation, radians per second.
    pub spin_speed: f32,
}

#[derive(Clone, Debug)]
pub struct RocketConfig {
    pub name: &'static str,
    pub size: f32,
    pub color: Srgba,
    pub sweep: SweepParams,
    pub trail_len: usize,
}

#[derive(Clone, Debug)]
pub struct AsteroidConfig {
    pub name: &'static str,
    pub size: f32,
    pub trail_color: Srgba,
    pub sweep: SweepParams,
    pub trail_len: usize,
}

#[derive(Clone, Debug)]
pub struct ShootingStarConfig {
    pub name: &'static str,
    pub color: Srgba,
    pub flight: FlightParams,
    pub trail_len: usize,
}

/// Everything the spawn systems need to build the scene for one tier.
#[derive(Clone, Debug)]
pub struct Roster {
    pub star_shells: Vec<StarShellConfig>,
    pub planets: Vec<PlanetConfig>,
    pub rockets: Vec<RocketConfig>,
    pub asteroids: Vec<AsteroidConfig>,
    pub shooting_stars: Vec<ShootingStarConfig>,
}

const STAR_CORE: StarShellConfig = StarShellConfig {
    name: "star core",
    radius: 5.0,
    color: Srgba::new(1.0, 0.85, 0.4, 1.0),
};
const STAR_MID_GLOW: StarShellConfig = StarShellConfig {
    name: "star mid glow",
    radius: 6.5,
    color: Srgba::new(1.0, 0.6, 0.2, 0.35),
};
const STAR_CORONA: StarShellConfig = StarShellConfig {
    name: "star corona",
    radius: 8.5,
    color: Srgba::new(1.0, 0.45, 0.1, 0.18),
};
const STAR_OUTER_GLOW: StarShellConfig = StarShellConfig {
    name: "star outer glow",
    radius: 11.5,
    color: Srgba::new(1.0, 0.3, 0.05, 0.08),
};

fn planet(
    name: &'static str,
    distance: f32,
    size: f32,
    angular_speed: f32,
    phase: f32,
    tilt: f32,
    direction: TravelDirection,
    surface: SurfaceKind,
    color: Srgba,
) -> PlanetConfig {
    PlanetConfig {
        name,
        size,
        surface,
        color,
        orbit: OrbitParams {
            distance,
            angular_speed,
            phase,
            tilt,
            direction,
        },
        spin_speed: 0.6,
    }
}

fn all_planets() -> Vec<PlanetConfig> {
    use SurfaceKind::*;
    use TravelDirection::*;
    vec![
        planet("ember", 10.0, 0.8, 0.30, 0.0, 0.05, Right, Rocky, Srgba::new(0.75, 0.45, 0.30, 1.0)),
        planet("dune", 13.5, 1.1, 0.24, 1.7, 0.08, Right, Rocky, Srgba::new(0.80, 0.65, 0.40, 1.0)),
        planet("verdant", 17.0, 1.3, 0.19, 3.4, 0.04, Right, Ice, Srgba::new(0.45, 0.70, 0.75, 1.0)),
        planet("rust", 20.5, 1.0, 0.16, 5.0, 0.10, Right, Rocky, Srgba::new(0.72, 0.35, 0.25, 1.0)),
        planet("titanus", 24.0, 2.4, 0.13, 0.9, 0.06, Right, Gas, Srgba::new(0.80, 0.70, 0.50, 1.0)),
        planet("aurel", 27.5, 2.1, 0.11, 2.6, 0.12, Right, Gas, Srgba::new(0.85, 0.75, 0.55, 1.0)),
        planet("glacier", 31.0, 1.6, 0.09, 4.2, 0.09, Left, Ice, Srgba::new(0.55, 0.75, 0.85, 1.0)),
        planet("abyss", 34.5, 1.5, 0.08, 5.8, 0.07, Right, Ice, Srgba::new(0.30, 0.45, 0.80, 1.0)),
        planet("umbra", 38.0, 0.9, 0.06, 1.2, 0.14, Right, Rocky, Srgba::new(0.50, 0.45, 0.55, 1.0)),
    ]
}

fn all_rockets() -> Vec<RocketConfig> {
    vec![RocketConfig {
        name: "courier",
        size: 0.6,
        color: Srgba::new(0.85, 0.9, 1.0, 1.0),
        sweep: SweepParams {
            period_secs: 90.0,
            start_delay_secs: 0.0,
            lateral_extent: 34.0,
            depth_extent: 20.0,
            rise: 9.0,
            direction: TravelDirection::Right,
        },
        trail_len: 120,
    }]
}

fn all_asteroids() -> Vec<AsteroidConfig> {
    let sweep = |period, delay, lateral, depth, direction| SweepParams {
        period_secs: period,
        start_delay_secs: delay,
        lateral_extent: lateral,
        depth_extent: depth,
        rise: 4.0,
        direction,
    };
    vec![
        AsteroidConfig {
            name: "drifter-a",
            size: 0.7,
            trail_color: Srgba::new(0.8, 0.75, 0.65, 1.0),
            sweep: sweep(55.0, 0.0, 44.0, 26.0, TravelDirection::Right),
            trail_len: 80,
        },
        AsteroidConfig {
            name: "drifter-b",
            size: 0.5,
            trail_color: Srgba::new(0.75, 0.7, 0.6, 1.0),
            sweep: sweep(68.0, 18.0, 48.0, 30.0, TravelDirection::Left),
            trail_len: 80,
        },
        AsteroidConfig {
            name: "drifter-c",
            size: 0.9,
            trail_color: Srgba::new(0.7, 0.65, 0.6, 1.0),
            sweep: sweep(47.0, 33.0, 40.0, 22.0, TravelDirection::Right),
            trail_len: 80,
        },
    ]
}

fn all_shooting_stars() -> Vec<ShootingStarConfig> {
    let flight = |cycle, flight_secs, delay, start: Vec3, end: Vec3| FlightParams {
        cycle_secs: cycle,
        flight_secs,
        start_delay_secs: delay,
        start,
        end,
    };
    vec![
        ShootingStarConfig {
            name: "streak-a",
            color: Srgba::new(1.0, 1.0, 0.9, 1.0),
            flight: flight(
                12.0,
                2.4,
                2.0,
                Vec3::new(-55.0, 32.0, -25.0),
                Vec3::new(50.0, 8.0, -40.0),
            ),
            trail_len: 40,
        },
        ShootingStarConfig {
            name: "streak-b",
            color: Srgba::new(0.9, 0.95, 1.0, 1.0),
            flight: flight(
                15.0,
                2.8,
                7.5,
                Vec3::new(48.0, 38.0, -30.0),
                Vec3::new(-52.0, 12.0, -18.0),
            ),
            trail_len: 40,
        },
        ShootingStarConfig {
            name: "streak-c",
            color: Srgba::new(1.0, 0.9, 0.85, 1.0),
            flight: flight(
                10.0,
                2.2,
                11.0,
                Vec3::new(-40.0, 42.0, -35.0),
                Vec3::new(35.0, 18.0, -50.0),
            ),
            trail_len: 40,
        },
    ]
}

/// Build the declarative body roster for a quality tier.
pub fn build_roster(tier: QualityTier) -> Roster {
    match tier {
        QualityTier::Desktop => Roster {
            star_shells: vec![STAR_OUTER_GLOW, STAR_CORONA, STAR_MID_GLOW, STAR_CORE],
            planets: all_planets(),
            rockets: all_rockets(),
            asteroids: all_asteroids(),
            shooting_stars: all_shooting_stars(),
        },
        QualityTier::Mobile => Roster {
            star_shells: vec![STAR_MID_GLOW, STAR_CORE],
            planets: all_planets().into_iter().take(4).collect(),
            rockets: Vec::new(),
            asteroids: all_asteroids().into_iter().take(1).collect(),
            shooting_stars: all_shooting_stars().into_iter().take(1).collect(),
        },
    }
}

impl Roster {
    /// Reject malformed configurations before anything spawns.
    pub fn validate(&self) -> Result<()> {
        if self.star_shells.is_empty() {
            bail!("roster has no star shells");
        }
        for p in &self.planets {
            ensure!(p.orbit.distance > 0.0, "planet {} has no orbit radius", p.name);
            ensure!(p.orbit.angular_speed > 0.0, "planet {} would never move", p.name);
            ensure!(p.size > 0.0, "planet {} has no size", p.name);
        }
        for r in &self.rockets {
            validate_sweep(&r.sweep, r.trail_len).with_context(|| format!("rocket {}", r.name))?;
        }
        for a in &self.asteroids {
            validate_sweep(&a.sweep, a.trail_len)
                .with_context(|| format!("asteroid {}", a.name))?;
        }
        for s in &self.shooting_stars {
            ensure!(s.flight.cycle_secs > 0.0, "shooting star {} has no cycle", s.name);
            ensure!(
                s.flight.flight_secs < s.flight.cycle_secs,
                "shooting star {} has no rest window",
                s.name
            );
            ensure!(s.trail_len >= 2, "shooting star {} trail too short", s.name);
        }
        Ok(())
    }
}

fn validate_sweep(sweep: &SweepParams, trail_len: usize) -> Result<()> {
    ensure!(sweep.period_secs > 0.0, "sweep has no period");
    ensure!(sweep.lateral_extent > 0.0, "sweep has no lateral extent");
    ensure!(trail_len >= 2, "trail too short to draw");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_roster_shape() {
        let roster = build_roster(QualityTier::Desktop);
        assert_eq!(roster.star_shells.len(), 4);
        assert_eq!(roster.planets.len(), 9);
        assert_eq!(roster.rockets.len(), 1);
        assert_eq!(roster.asteroids.len(), 3);
        assert_eq!(roster.shooting_stars.len(), 3);
    }

    #[test]
    fn mobile_roster_shape() {
        let roster = build_roster(QualityTier::Mobile);
        assert_eq!(roster.star_shells.len(), 2);
        assert_eq!(roster.planets.len(), 4);
        assert!(roster.rockets.is_empty());
        assert_eq!(roster.asteroids.len(), 1);
        assert_eq!(roster.shooting_stars.len(), 1);
    }

    #[test]
    fn both_tiers_validate() {
        build_roster(QualityTier::Desktop).validate().unwrap();
        build_roster(QualityTier::Mobile).validate().unwrap();
    }

    #[test]
    fn planet_distances_increase() {
        let roster = build_roster(QualityTier::Desktop);
        for pair in roster.planets.windows(2) {
            assert!(pair[0].orbit.distance < pair[1].orbit.distance);
        }
    }

    #[test]
    fn trail_capacities_are_in_range() {
        let roster = build_roster(QualityTier::Desktop);
        for len in roster
            .rockets
            .iter()
            .map(|r| r.trail_len)
            .chain(roster.asteroids.iter().map(|a| a.trail_len))
            .chain(roster.shooting_stars.iter().map(|s| s.trail_len))
        {
            assert!((40..=120).contains(&len));
        }
    }

    #[test]
    fn validation_rejects_inverted_flight_window() {
        let mut roster = build_roster(QualityTier::Desktop);
        roster.shooting_stars[0].flight.flight_secs = roster.shooting_stars[0].flight.cycle_secs;
        assert!(roster.validate().is_err());
    }
}
