use crate::frame;
use crate::host::Callbacks;
use crate::input;
use crate::visual::VisualInner;
use constellation_core::FrameHost;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Shared = Weak<RefCell<VisualInner>>;

/// Run `f` against the visualization if it is still alive and not borrowed.
fn with_inner(weak: &Shared, label: &str, f: impl FnOnce(&mut VisualInner)) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    match inner.try_borrow_mut() {
        Ok(mut guard) => f(&mut *guard),
        Err(_) => log::warn!("[events] {} skipped, visualization busy", label),
    };
}

pub fn build_callbacks(weak: Shared) -> Callbacks {
    Callbacks {
        tick: wire_tick(weak.clone()),
        resize: wire_resize(weak.clone()),
        mousemove: wire_mousemove(weak.clone()),
        intersect: wire_intersection(weak),
    }
}

fn wire_tick(weak: Shared) -> Closure<dyn FnMut(f64)> {
    Closure::wrap(Box::new(move |_timestamp: f64| {
        with_inner(&weak, "frame", frame::tick);
    }) as Box<dyn FnMut(f64)>)
}

fn wire_resize(weak: Shared) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        with_inner(&weak, "resize", |inner| inner.host.resize());
    }) as Box<dyn FnMut()>)
}

fn wire_mousemove(weak: Shared) -> Closure<dyn FnMut(web::MouseEvent)> {
    Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let ndc = input::mouse_ndc(&ev, &window);
        with_inner(&weak, "mousemove", |inner| inner.scene.set_pointer(ndc));
    }) as Box<dyn FnMut(web::MouseEvent)>)
}

fn wire_intersection(
    weak: Shared,
) -> Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)> {
    Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            // only the most recent entry reflects the current state
            let visible = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .last()
                .map(|e| e.is_intersecting());
            let Some(visible) = visible else {
                return;
            };
            with_inner(&weak, "visibility", |inner| {
                let VisualInner {
                    host, lifecycle, ..
                } = inner;
                lifecycle.on_visibility(visible, host);
            });
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>)
}
