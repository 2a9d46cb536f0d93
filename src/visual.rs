use crate::constants::CANVAS_SELECTOR;
use crate::events;
use crate::frame::Scene;
use crate::host::WebHost;
use anyhow::{anyhow, Context};
use constellation_core::{Lifecycle, Phase, Preset, VisualConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct VisualInner {
    pub host: WebHost,
    pub lifecycle: Lifecycle,
    pub scene: Scene,
}

/// A mounted particle formation. Dropping it (or calling `unmount`) cancels
/// the frame loop and removes every listener it registered.
#[wasm_bindgen]
pub struct Visualization {
    inner: Rc<RefCell<VisualInner>>,
}

#[wasm_bindgen]
impl Visualization {
    /// Mount on the `<canvas>` inside the element with id `container_id`.
    /// `preset` is `hero`, `architect` or `brutalist`; `overrides` is an
    /// optional JSON object of config fields.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        preset: Option<String>,
        overrides: Option<String>,
    ) -> Result<Visualization, JsValue> {
        mount(container_id, preset.as_deref(), overrides.as_deref()).map_err(|e| {
            log::error!("[visual] mount failed: {:?}", e);
            JsValue::from_str(&format!("{:#}", e))
        })
    }

    pub fn unmount(&self) {
        let Ok(mut guard) = self.inner.try_borrow_mut() else {
            log::warn!("[visual] unmount while busy");
            return;
        };
        let VisualInner {
            host, lifecycle, ..
        } = &mut *guard;
        lifecycle.unmount(host);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|g| g.lifecycle.phase() == Phase::Running)
            .unwrap_or(false)
    }
}

impl Drop for Visualization {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn resolve_config(preset: Option<&str>, overrides: Option<&str>) -> anyhow::Result<VisualConfig> {
    let preset: Preset = preset.unwrap_or("hero").parse()?;
    let base = preset.config();
    match overrides.filter(|o| !o.trim().is_empty()) {
        Some(json) => Ok(base.with_overrides(json)?),
        None => Ok(base),
    }
}

fn mount(
    container_id: &str,
    preset: Option<&str>,
    overrides: Option<&str>,
) -> anyhow::Result<Visualization> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow!("missing #{}", container_id))?;
    let canvas: web::HtmlCanvasElement = container
        .query_selector(CANVAS_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("#{} has no <canvas>", container_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let config = resolve_config(preset, overrides).context("visual config")?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = Scene::new(config, &mut rng);

    let inner = Rc::new(RefCell::new(VisualInner {
        host: WebHost::new(window, container, canvas, ctx),
        lifecycle: Lifecycle::new(),
        scene,
    }));
    {
        let mut guard = inner.borrow_mut();
        let VisualInner {
            host, lifecycle, ..
        } = &mut *guard;
        host.install(events::build_callbacks(Rc::downgrade(&inner)))?;
        lifecycle.mount(host);
    }
    log::info!("[visual] mounted #{}", container_id);
    Ok(Visualization { inner })
}
