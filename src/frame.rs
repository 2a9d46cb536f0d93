use crate::visual::VisualInner;
use constellation_core::frame::entrance_progress;
use constellation_core::{CameraState, DrawCmd, FrameRenderer, Geometry, Viewport, VisualConfig};
use rand::Rng;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Geometry, camera and draw buffers of one visualization.
pub struct Scene {
    config: VisualConfig,
    geometry: Geometry,
    camera: CameraState,
    renderer: FrameRenderer,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(config: VisualConfig, rng: &mut R) -> Self {
        let geometry = Geometry::generate(&config, rng);
        let renderer = FrameRenderer::with_capacity(geometry.len(), geometry.edges().len());
        let camera = CameraState::new(&config);
        Self {
            config,
            geometry,
            camera,
            renderer,
        }
    }

    pub fn set_pointer(&mut self, ndc: [f32; 2]) {
        self.camera.set_pointer(ndc[0], ndc[1]);
    }

    pub fn draw(
        &mut self,
        elapsed_secs: f32,
        ctx: &web::CanvasRenderingContext2d,
        viewport: Viewport,
    ) -> Result<(), JsValue> {
        self.camera.step();
        let angles = self.camera.angles(elapsed_secs);
        let progress = entrance_progress(elapsed_secs, self.config.entrance_secs);
        let cmds = self
            .renderer
            .build(&self.geometry, angles, progress, viewport, &self.config);
        paint(ctx, viewport, cmds)
    }
}

/// One animation frame: advance the lifecycle and draw if it says so.
pub fn tick(inner: &mut VisualInner) {
    let VisualInner {
        host,
        lifecycle,
        scene,
    } = inner;
    let Some(elapsed) = lifecycle.on_frame(host) else {
        return;
    };
    if let Err(e) = scene.draw(elapsed, host.context(), host.viewport()) {
        log::error!("draw error: {:?}", e);
    }
}

fn paint(
    ctx: &web::CanvasRenderingContext2d,
    viewport: Viewport,
    cmds: &[DrawCmd],
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    for cmd in cmds {
        match cmd {
            DrawCmd::Shadow { x, y, rx, ry, alpha } => {
                if *rx <= 0.0 {
                    continue;
                }
                ctx.save();
                ctx.translate(*x as f64, *y as f64)?;
                ctx.scale(1.0, (*ry / *rx) as f64)?;
                let g = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, *rx as f64)?;
                g.add_color_stop(0.0, &format!("rgba(0, 0, 0, {:.3})", alpha))?;
                g.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
                ctx.set_fill_style_canvas_gradient(&g);
                ctx.begin_path();
                ctx.arc(0.0, 0.0, *rx as f64, 0.0, TAU)?;
                ctx.fill();
                ctx.restore();
            }
            DrawCmd::Line {
                from,
                to,
                width,
                color,
                alpha,
            } => {
                ctx.set_stroke_style_str(&color.css(*alpha));
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            DrawCmd::Glow {
                x,
                y,
                radius,
                color,
                alpha,
            } => {
                let (x, y, r) = (*x as f64, *y as f64, *radius as f64);
                let g = ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
                g.add_color_stop(0.0, &color.css(*alpha))?;
                g.add_color_stop(1.0, &color.css(0.0))?;
                ctx.set_fill_style_canvas_gradient(&g);
                ctx.begin_path();
                ctx.arc(x, y, r, 0.0, TAU)?;
                ctx.fill();
            }
            DrawCmd::Circle {
                x,
                y,
                radius,
                color,
                alpha,
            } => {
                ctx.set_fill_style_str(&color.css(*alpha));
                ctx.begin_path();
                ctx.arc(*x as f64, *y as f64, *radius as f64, 0.0, TAU)?;
                ctx.fill();
            }
        }
    }
    Ok(())
}
