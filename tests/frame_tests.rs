// Host-side tests for projection and draw-list building.
// These exercise constellation-core directly; no browser needed.

use constellation_core::frame::{ease_out_cubic, entrance_progress, project, rotate};
use constellation_core::{CameraState, DrawCmd, FrameRenderer, Geometry, Preset, VisualConfig, Viewport};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn formation(cfg: &VisualConfig) -> Geometry {
    Geometry::generate(cfg, &mut StdRng::seed_from_u64(42))
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-3.0), 0.0);
    assert_eq!(ease_out_cubic(7.0), 1.0);
    // front-loaded: more than half done at the halfway mark
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
}

#[test]
fn entrance_progress_handles_zero_duration() {
    assert_eq!(entrance_progress(0.0, 0.0), 1.0);
    assert_eq!(entrance_progress(5.0, 2.0), 1.0);
    assert!(entrance_progress(1.0, 2.0) < 1.0);
}

#[test]
fn origin_projects_to_viewport_center() {
    let p = project(Vec3::ZERO, viewport(), 200.0, 600.0);
    assert_eq!((p.x, p.y), (400.0, 300.0));
    assert!((p.scale - 1.0).abs() < 1e-6);
}

#[test]
fn nearer_points_are_larger_and_y_is_up() {
    let near = project(Vec3::new(0.0, 0.5, -0.5), viewport(), 200.0, 600.0);
    let far = project(Vec3::new(0.0, 0.5, 0.5), viewport(), 200.0, 600.0);
    assert!(near.scale > far.scale);
    assert!(near.y < 300.0, "positive y should be above center");
}

#[test]
fn projection_survives_points_behind_camera() {
    let p = project(Vec3::new(1.0, 1.0, -50.0), viewport(), 200.0, 600.0);
    assert!(p.x.is_finite() && p.y.is_finite() && p.scale.is_finite());
    assert!(p.scale > 0.0);
}

#[test]
fn rotation_preserves_length() {
    let v = Vec3::new(0.3, -0.4, 0.866);
    let r = rotate(v, 1.1, -0.4);
    assert!((r.length() - v.length()).abs() < 1e-5);
}

#[test]
fn undrawable_viewport_yields_nothing() {
    let cfg = VisualConfig::default();
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    assert!(r.build(&g, (0.0, 0.0), 1.0, Viewport::new(0.0, 600.0), &cfg).is_empty());
}

#[test]
fn shadow_waits_for_entrance_to_begin() {
    let cfg = VisualConfig::default();
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    let cmds = r.build(&g, (0.0, 0.0), 0.0, viewport(), &cfg);
    assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Shadow { .. })));

    let cmds = r.build(&g, (0.0, 0.0), 1.0, viewport(), &cfg);
    assert!(matches!(cmds.first(), Some(DrawCmd::Shadow { .. })));
}

#[test]
fn brutalist_has_no_shadow() {
    let cfg = Preset::Brutalist.config();
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    let cmds = r.build(&g, (0.0, 0.0), 1.0, viewport(), &cfg);
    assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Shadow { .. })));
}

#[test]
fn paint_order_is_shadow_edges_nodes() {
    let cfg = VisualConfig::default();
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    let cmds = r.build(&g, (0.3, 0.1), 1.0, viewport(), &cfg);

    let rank = |c: &DrawCmd| match c {
        DrawCmd::Shadow { .. } => 0,
        DrawCmd::Line { .. } => 1,
        DrawCmd::Glow { .. } | DrawCmd::Circle { .. } => 2,
    };
    for w in cmds.windows(2) {
        assert!(rank(&w[0]) <= rank(&w[1]));
    }
    let lines = cmds.iter().filter(|c| matches!(c, DrawCmd::Line { .. })).count();
    assert!(lines > 0 && lines <= g.edges().len());
}

#[test]
fn nodes_are_drawn_back_to_front() {
    let cfg = VisualConfig::default();
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    let circles: Vec<(f32, f32)> = r
        .build(&g, (0.7, -0.2), 1.0, viewport(), &cfg)
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Circle { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    let projected = r.projected();
    let depths: Vec<f32> = circles
        .iter()
        .map(|&(x, y)| {
            projected
                .iter()
                .find(|p| p.x == x && p.y == y)
                .map(|p| p.z)
                .unwrap()
        })
        .collect();
    assert_eq!(depths.len(), g.len());
    for w in depths.windows(2) {
        assert!(w[0] >= w[1], "depth order broken: {:?}", w);
    }
}

#[test]
fn glow_only_wraps_near_accent_nodes() {
    let cfg = VisualConfig {
        accent_ratio: 1.0,
        ..VisualConfig::default()
    };
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    let cmds = r.build(&g, (0.0, 0.0), 1.0, viewport(), &cfg).to_vec();
    let glows = cmds
        .iter()
        .filter(|c| matches!(c, DrawCmd::Glow { .. }))
        .count();
    let near = r.projected().iter().filter(|p| p.z < 0.0).count();
    assert_eq!(glows, near);
    for (i, c) in cmds.iter().enumerate() {
        if let DrawCmd::Glow { x, y, .. } = c {
            match cmds.get(i + 1) {
                Some(DrawCmd::Circle { x: cx, y: cy, .. }) => assert_eq!((x, y), (cx, cy)),
                other => panic!("glow not followed by its node: {:?}", other),
            }
        }
    }
}

#[test]
fn ink_only_formation_has_no_glow() {
    let cfg = VisualConfig {
        accent_ratio: 0.0,
        ..VisualConfig::default()
    };
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    let cmds = r.build(&g, (0.0, 0.0), 1.0, viewport(), &cfg);
    assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Glow { .. })));
}

#[test]
fn tiny_nodes_are_skipped() {
    let cfg = VisualConfig {
        point_radius: 0.1,
        ..VisualConfig::default()
    };
    let g = formation(&cfg);
    let mut r = FrameRenderer::new();
    let cmds = r.build(&g, (0.0, 0.0), 1.0, viewport(), &cfg);
    assert!(!cmds
        .iter()
        .any(|c| matches!(c, DrawCmd::Circle { .. } | DrawCmd::Glow { .. })));
}

#[test]
fn renderer_buffers_are_reused_between_frames() {
    let cfg = VisualConfig::default();
    let g = formation(&cfg);
    let mut r = FrameRenderer::with_capacity(g.len(), g.edges().len());
    let first = r.build(&g, (0.2, 0.0), 1.0, viewport(), &cfg).to_vec();
    let second = r.build(&g, (0.2, 0.0), 1.0, viewport(), &cfg).to_vec();
    assert_eq!(first, second);
    assert_eq!(r.projected().len(), g.len());
}

#[test]
fn camera_eases_toward_clamped_pointer() {
    let cfg = VisualConfig::default();
    let mut cam = CameraState::new(&cfg);
    cam.set_pointer(5.0, -5.0);
    assert_eq!(cam.target(), (cfg.max_tilt, -cfg.max_tilt));

    cam.step();
    assert!(cam.yaw > 0.0 && cam.yaw < cfg.max_tilt);
    for _ in 0..2000 {
        cam.step();
    }
    assert!((cam.yaw - cfg.max_tilt).abs() < 1e-3);
    assert!((cam.pitch + cfg.max_tilt).abs() < 1e-3);
}

#[test]
fn camera_auto_rotates_with_time() {
    let cfg = VisualConfig::default();
    let cam = CameraState::new(&cfg);
    let (yaw0, _) = cam.angles(0.0);
    let (yaw1, pitch1) = cam.angles(10.0);
    assert!((yaw1 - yaw0 - 10.0 * cfg.auto_rotate).abs() < 1e-5);
    assert_eq!(pitch1, 0.0);
}
