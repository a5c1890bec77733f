use std::f64::consts::TAU;

use crate::constants::{BASE_ALPHA, FLICKER_SPEED, SIZE_BASE, SPEED_FACTOR};
use crate::rng::RandomSource;
use crate::viewport::Bounds;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub speed: f64,
    pub size: f64,
    pub base_alpha: f64,
    pub flicker_speed: f64,
    /// Twinkle phase for static stars, drift phase for dynamic ones.
    pub flicker_phase: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarRole {
    /// Drifts downward and wraps; size scales with depth.
    Dynamic,
    /// Fixed position, twinkles.
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepthSource {
    /// Uniform in `[min, max)`.
    Band { min: f64, max: f64 },
    Fixed(f64),
}

impl DepthSource {
    fn draw(self, rng: &mut dyn RandomSource) -> f64 {
        match self {
            DepthSource::Band { min, max } => rng.range(min, max),
            DepthSource::Fixed(depth) => depth,
        }
    }
}

/// Draw order: depth, x, y, speed, size, alpha, flicker speed, phase.
pub fn create_star(bounds: Bounds, depth: DepthSource, role: StarRole, rng: &mut dyn RandomSource) -> Star {
    let depth = depth.draw(rng);
    let x = rng.range(0.0, bounds.width);
    let y = rng.range(0.0, bounds.height);
    let speed = depth * rng.range(SPEED_FACTOR.0, SPEED_FACTOR.1);
    let size = rng.range(SIZE_BASE.0, SIZE_BASE.1)
        * match role {
            StarRole::Dynamic => depth,
            StarRole::Static => 1.0,
        };
    Star {
        x,
        y,
        depth,
        speed,
        size,
        base_alpha: rng.range(BASE_ALPHA.0, BASE_ALPHA.1),
        flicker_speed: rng.range(FLICKER_SPEED.0, FLICKER_SPEED.1),
        flicker_phase: rng.range(0.0, TAU),
    }
}

pub fn populate(
    count: usize,
    bounds: Bounds,
    depth: DepthSource,
    role: StarRole,
    rng: &mut dyn RandomSource,
) -> Vec<Star> {
    (0..count).map(|_| create_star(bounds, depth, role, rng)).collect()
}
