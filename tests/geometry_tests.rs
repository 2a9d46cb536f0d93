// Host-side tests for the sphere lattice and edge builder.
// These exercise constellation-core directly; no browser needed.

use constellation_core::geometry::{connect, fibonacci_sphere};
use constellation_core::{Geometry, Preset, Tone, VisualConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn lattice_points_lie_on_unit_sphere() {
    for p in fibonacci_sphere(60) {
        assert!((p.length() - 1.0).abs() < 1e-4, "off-sphere point {:?}", p);
    }
}

#[test]
fn lattice_starts_at_north_pole_and_ends_at_south_pole() {
    let pts = fibonacci_sphere(60);
    assert!((pts[0] - glam::Vec3::Y).length() < 1e-5);
    assert!((pts[59] + glam::Vec3::Y).length() < 1e-5);
}

#[test]
fn lattice_heights_decrease_monotonically() {
    let pts = fibonacci_sphere(40);
    for w in pts.windows(2) {
        assert!(w[0].y > w[1].y);
    }
}

#[test]
fn lattice_degenerate_counts() {
    assert!(fibonacci_sphere(0).is_empty());
    assert_eq!(fibonacci_sphere(1), vec![glam::Vec3::Y]);
    assert_eq!(fibonacci_sphere(2).len(), 2);
}

#[test]
fn edges_are_ordered_unique_and_within_threshold() {
    let pts = fibonacci_sphere(60);
    let threshold = 0.55;
    let edges = connect(&pts, threshold);
    assert!(!edges.is_empty());

    let mut seen = HashSet::new();
    for e in &edges {
        assert!(e.a < e.b, "edge not ordered: {:?}", e);
        assert!(pts[e.a].distance(pts[e.b]) < threshold);
        assert!(seen.insert(*e), "duplicate edge {:?}", e);
    }
    for w in edges.windows(2) {
        assert!((w[0].a, w[0].b) < (w[1].a, w[1].b));
    }
}

#[test]
fn edges_cover_every_close_pair() {
    let pts = fibonacci_sphere(30);
    let threshold = 0.7;
    let edges: HashSet<_> = connect(&pts, threshold)
        .into_iter()
        .map(|e| (e.a, e.b))
        .collect();
    for i in 0..pts.len() {
        for j in i + 1..pts.len() {
            let close = pts[i].distance(pts[j]) < threshold;
            assert_eq!(close, edges.contains(&(i, j)), "pair ({}, {})", i, j);
        }
    }
}

#[test]
fn zero_threshold_connects_nothing() {
    assert!(connect(&fibonacci_sphere(20), 0.0).is_empty());
}

#[test]
fn same_seed_same_formation() {
    let cfg = VisualConfig::default();
    let a = Geometry::generate(&cfg, &mut seeded(7));
    let b = Geometry::generate(&cfg, &mut seeded(7));
    assert_eq!(a.len(), b.len());
    assert_eq!(a.edges(), b.edges());
    for (pa, pb) in a.points().iter().zip(b.points()) {
        assert_eq!(pa.start, pb.start);
        assert_eq!(pa.tone, pb.tone);
        assert_eq!(pa.radius, pb.radius);
    }
}

#[test]
fn targets_and_edges_do_not_depend_on_seed() {
    let cfg = VisualConfig::default();
    let a = Geometry::generate(&cfg, &mut seeded(1));
    let b = Geometry::generate(&cfg, &mut seeded(2));
    assert_eq!(a.edges(), b.edges());
    for (pa, pb) in a.points().iter().zip(b.points()) {
        assert_eq!(pa.target, pb.target);
    }
}

#[test]
fn starts_stay_inside_entrance_cube() {
    let cfg = VisualConfig::default();
    let g = Geometry::generate(&cfg, &mut seeded(3));
    let s = cfg.entrance_spread;
    for p in g.points() {
        assert!(p.start.abs().max_element() <= s + 1e-5);
    }
}

#[test]
fn accent_ratio_extremes() {
    let mut cfg = VisualConfig {
        accent_ratio: 0.0,
        ..VisualConfig::default()
    };
    let g = Geometry::generate(&cfg, &mut seeded(4));
    assert!(g.points().iter().all(|p| p.tone == Tone::Ink));

    cfg.accent_ratio = 1.0;
    let g = Geometry::generate(&cfg, &mut seeded(4));
    assert!(g.points().iter().all(|p| p.tone == Tone::Accent));
}

#[test]
fn preset_point_counts_are_honored() {
    for preset in [Preset::Hero, Preset::Architect, Preset::Brutalist] {
        let cfg = preset.config();
        let g = Geometry::generate(&cfg, &mut seeded(11));
        assert_eq!(g.len(), cfg.point_count);
    }
}

#[test]
fn empty_formation() {
    let cfg = VisualConfig {
        point_count: 0,
        ..VisualConfig::default()
    };
    let g = Geometry::generate(&cfg, &mut seeded(5));
    assert!(g.is_empty());
    assert!(g.edges().is_empty());
}

#[test]
fn oversized_point_count_is_capped() {
    let cfg = VisualConfig::default()
        .with_overrides(r#"{"pointCount": 100000}"#)
        .unwrap();
    let g = Geometry::generate(&cfg, &mut seeded(6));
    assert_eq!(g.len(), constellation_core::constants::MAX_POINT_COUNT);
    assert!(g.edges().iter().all(|e| e.b < g.len()));
}
