use crate::dom;
use constellation_core::{FrameHandle, FrameHost, Listener, Viewport};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser callbacks owned by one visualization. They only hold weak
/// references back to it, so dropping the host frees everything.
pub struct Callbacks {
    pub tick: Closure<dyn FnMut(f64)>,
    pub resize: Closure<dyn FnMut()>,
    pub mousemove: Closure<dyn FnMut(web::MouseEvent)>,
    pub intersect: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

/// [`FrameHost`] backed by `requestAnimationFrame`, an `IntersectionObserver`
/// on the container and window listeners.
pub struct WebHost {
    window: web::Window,
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
    clock: Instant,
    callbacks: Option<Callbacks>,
    observer: Option<web::IntersectionObserver>,
}

impl WebHost {
    pub fn new(
        window: web::Window,
        container: web::Element,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
    ) -> Self {
        Self {
            window,
            container,
            canvas,
            ctx,
            viewport: Viewport::new(0.0, 0.0),
            clock: Instant::now(),
            callbacks: None,
            observer: None,
        }
    }

    pub fn install(&mut self, callbacks: Callbacks) -> anyhow::Result<()> {
        let observer = web::IntersectionObserver::new(callbacks.intersect.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        self.observer = Some(observer);
        self.callbacks = Some(callbacks);
        Ok(())
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn listener_fn(&self, listener: Listener) -> Option<(&'static str, &js_sys::Function)> {
        let cb = self.callbacks.as_ref()?;
        Some(match listener {
            Listener::Resize => ("resize", cb.resize.as_ref().unchecked_ref()),
            Listener::MouseMove => ("mousemove", cb.mousemove.as_ref().unchecked_ref()),
        })
    }
}

impl FrameHost for WebHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let cb = self.callbacks.as_ref()?;
        match self
            .window
            .request_animation_frame(cb.tick.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn observe(&mut self) {
        if let Some(observer) = &self.observer {
            observer.observe(&self.container);
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }

    fn add_listener(&mut self, listener: Listener) {
        if let Some((event, f)) = self.listener_fn(listener) {
            _ = self.window.add_event_listener_with_callback(event, f);
        }
    }

    fn remove_listener(&mut self, listener: Listener) {
        if let Some((event, f)) = self.listener_fn(listener) {
            _ = self.window.remove_event_listener_with_callback(event, f);
        }
    }

    fn resize(&mut self) {
        self.viewport = dom::sync_canvas_backing_size(&self.canvas, &self.ctx);
    }

    fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }
}
