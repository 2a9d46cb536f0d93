use crate::config::{Tone, VisualConfig};
use crate::constants::{GOLDEN_ANGLE, MAX_POINT_COUNT, POINT_RADIUS_JITTER};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Point {
    /// Resting position on the unit sphere.
    pub target: Vec3,
    /// Where the point flies in from during the entrance animation.
    pub start: Vec3,
    pub tone: Tone,
    pub radius: f32,
}

/// Indices of two connected points, always `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

/// Points and edges of one formation. Built once per mount.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    points: Vec<Point>,
    edges: Vec<Edge>,
}

/// Lay out `n` points evenly over the unit sphere with the Fibonacci lattice.
///
/// Index 0 is the north pole `(0, 1, 0)`; the last index is the south pole.
pub fn fibonacci_sphere(n: usize) -> Vec<Vec3> {
    match n {
        0 => Vec::new(),
        1 => vec![Vec3::Y],
        _ => (0..n)
            .map(|i| {
                let y = 1.0 - 2.0 * i as f32 / (n - 1) as f32;
                let r = (1.0 - y * y).max(0.0).sqrt();
                let theta = i as f32 * GOLDEN_ANGLE;
                Vec3::new(theta.cos() * r, y, theta.sin() * r)
            })
            .collect(),
    }
}

/// Every pair closer than `threshold`, in lexicographic order.
pub fn connect(points: &[Vec3], threshold: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (a, pa) in points.iter().enumerate() {
        for (offset, pb) in points[a + 1..].iter().enumerate() {
            if pa.distance(*pb) < threshold {
                edges.push(Edge {
                    a,
                    b: a + 1 + offset,
                });
            }
        }
    }
    edges
}

impl Geometry {
    /// Build a formation. Targets and edges depend only on the config; the
    /// entrance starts, tones and radius jitter come from `rng`.
    ///
    /// The point count is capped at [`MAX_POINT_COUNT`].
    pub fn generate<R: Rng + ?Sized>(config: &VisualConfig, rng: &mut R) -> Self {
        let count = config.point_count.min(MAX_POINT_COUNT);
        if count < config.point_count {
            log::warn!(
                "[geometry] point count {} capped to {}",
                config.point_count,
                MAX_POINT_COUNT
            );
        }
        let targets = fibonacci_sphere(count);
        let edges = connect(&targets, config.connect_distance);
        let spread = config.entrance_spread.abs().max(f32::EPSILON);
        let accent_ratio = config.accent_ratio.clamp(0.0, 1.0) as f64;

        let points = targets
            .into_iter()
            .map(|target| {
                let start = Vec3::new(
                    rng.gen_range(-spread..=spread),
                    rng.gen_range(-spread..=spread),
                    rng.gen_range(-spread..=spread),
                );
                let tone = if rng.gen_bool(accent_ratio) {
                    Tone::Accent
                } else {
                    Tone::Ink
                };
                let jitter = rng.gen_range(-POINT_RADIUS_JITTER..=POINT_RADIUS_JITTER);
                Point {
                    target,
                    start,
                    tone,
                    radius: config.point_radius * (1.0 + jitter),
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "[geometry] points={} edges={} threshold={:.2}",
            points.len(),
            edges.len(),
            config.connect_distance
        );
        Self { points, edges }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
