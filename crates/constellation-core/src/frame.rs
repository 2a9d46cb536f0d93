//! Per-frame projection of a [`Geometry`] into a flat draw list.
//!
//! The renderer never touches a canvas. It produces [`DrawCmd`]s in paint
//! order (shadow, edges, then nodes back-to-front) and the browser layer
//! replays them on a 2D context. All buffers are owned by [`FrameRenderer`]
//! and reused between frames.

use crate::config::{Rgb, Tone, VisualConfig};
use crate::constants::*;
use crate::geometry::Geometry;
use glam::{Mat3, Vec2, Vec3};

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn is_drawable(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }
}

/// A point after rotation and perspective divide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Rotated depth in sphere units; larger is farther from the viewer.
    pub z: f32,
    pub scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Soft elliptical contact shadow, painted with a radial gradient.
    Shadow {
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
        alpha: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgb,
        alpha: f32,
    },
    Glow {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Eased entrance progress for a given elapsed time.
pub fn entrance_progress(elapsed_secs: f32, duration_secs: f32) -> f32 {
    if duration_secs <= 0.0 {
        return 1.0;
    }
    ease_out_cubic(elapsed_secs / duration_secs)
}

/// Camera rotation: yaw about Y, then pitch about X.
#[inline]
pub fn rotation(yaw: f32, pitch: f32) -> Mat3 {
    Mat3::from_rotation_x(pitch) * Mat3::from_rotation_y(yaw)
}

#[inline]
pub fn rotate(p: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    rotation(yaw, pitch) * p
}

/// Perspective divide around the viewport center. `sphere_px` converts sphere
/// units into pixels; `focal` is in pixels.
#[inline]
pub fn project(p: Vec3, viewport: Viewport, sphere_px: f32, focal: f32) -> Projected {
    let c = viewport.center();
    // keep points that fly in from behind the camera on screen
    let denom = (focal + p.z * sphere_px).max(focal * 0.1);
    let scale = focal / denom;
    Projected {
        x: c.x + p.x * sphere_px * scale,
        y: c.y - p.y * sphere_px * scale,
        z: p.z,
        scale,
    }
}

#[derive(Default)]
pub struct FrameRenderer {
    projected: Vec<Projected>,
    order: Vec<usize>,
    commands: Vec<DrawCmd>,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(points: usize, edges: usize) -> Self {
        Self {
            projected: Vec::with_capacity(points),
            order: Vec::with_capacity(points),
            commands: Vec::with_capacity(1 + edges + points * 2),
        }
    }

    /// Projections from the last [`build`](Self::build), indexed like the geometry.
    pub fn projected(&self) -> &[Projected] {
        &self.projected
    }

    pub fn build(
        &mut self,
        geometry: &Geometry,
        (yaw, pitch): (f32, f32),
        progress: f32,
        viewport: Viewport,
        config: &VisualConfig,
    ) -> &[DrawCmd] {
        self.projected.clear();
        self.order.clear();
        self.commands.clear();
        if !viewport.is_drawable() || geometry.is_empty() {
            return &self.commands;
        }

        let progress = progress.clamp(0.0, 1.0);
        let rot = rotation(yaw, pitch);
        let sphere_px = viewport.min_side() * config.sphere_fraction;
        for p in geometry.points() {
            let pos = rot * p.start.lerp(p.target, progress);
            self.projected
                .push(project(pos, viewport, sphere_px, config.focal_length));
        }

        if config.shadow && progress > SHADOW_MIN_PROGRESS {
            let c = viewport.center();
            let rx = sphere_px * SHADOW_WIDTH;
            self.commands.push(DrawCmd::Shadow {
                x: c.x,
                y: c.y + sphere_px * SHADOW_OFFSET,
                rx,
                ry: rx * SHADOW_FLATTEN,
                alpha: SHADOW_ALPHA * progress,
            });
        }

        for e in geometry.edges() {
            let (pa, pb) = (self.projected[e.a], self.projected[e.b]);
            let mid_z = (pa.z + pb.z) * 0.5;
            if mid_z > EDGE_DEPTH_CUTOFF {
                continue;
            }
            let fade = ((EDGE_DEPTH_CUTOFF - mid_z) / (EDGE_DEPTH_CUTOFF + 1.0)).clamp(0.0, 1.0);
            let alpha = EDGE_ALPHA * progress * fade;
            if alpha <= 0.0 {
                continue;
            }
            self.commands.push(DrawCmd::Line {
                from: Vec2::new(pa.x, pa.y),
                to: Vec2::new(pb.x, pb.y),
                width: EDGE_WIDTH * (pa.scale + pb.scale) * 0.5,
                color: config.edge,
                alpha,
            });
        }

        let projected = &self.projected;
        self.order.extend(0..projected.len());
        self.order
            .sort_by(|&i, &j| projected[j].z.total_cmp(&projected[i].z));

        let grow = NODE_MIN_GROW + (1.0 - NODE_MIN_GROW) * progress;
        let fade_in = 0.2 + 0.8 * progress;
        for &i in &self.order {
            let pr = projected[i];
            let point = &geometry.points()[i];
            let radius = point.radius * pr.scale * grow;
            if radius < MIN_DRAW_RADIUS {
                continue;
            }
            let color = config.color(point.tone);
            let depth_alpha = 0.35 + 0.65 * ((1.0 - pr.z) * 0.5).clamp(0.0, 1.0);
            if point.tone == Tone::Accent && pr.z < 0.0 {
                self.commands.push(DrawCmd::Glow {
                    x: pr.x,
                    y: pr.y,
                    radius: radius * GLOW_RADIUS_MULTIPLIER,
                    color,
                    alpha: GLOW_ALPHA * progress,
                });
            }
            self.commands.push(DrawCmd::Circle {
                x: pr.x,
                y: pr.y,
                radius,
                color,
                alpha: depth_alpha * fade_in,
            });
        }

        &self.commands
    }
}
