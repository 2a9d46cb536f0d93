use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::input;
use constellation_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler for the lifetime of the page.
#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element under `root` matching `selector`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Match the canvas backing store to its CSS size times the capped device
/// pixel ratio, and scale the context so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Viewport {
    let raw_dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let size = input::backing_size(rect.width(), rect.height(), raw_dpr, MAX_DEVICE_PIXEL_RATIO);
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    // resizing the backing store resets the transform, so scale again
    _ = ctx.scale(size.dpr, size.dpr);
    Viewport::new(rect.width() as f32, rect.height() as f32)
}
