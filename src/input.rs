use web_sys as web;

/// Canvas backing-store size for a CSS box at a given device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
    pub dpr: f64,
}

#[inline]
pub fn capped_dpr(raw: f64, max: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.clamp(1.0, max.max(1.0))
    } else {
        1.0
    }
}

#[inline]
pub fn backing_size(css_width: f64, css_height: f64, raw_dpr: f64, max_dpr: f64) -> BackingSize {
    let dpr = capped_dpr(raw_dpr, max_dpr);
    let w_px = (css_width.max(0.0) * dpr).round() as u32;
    let h_px = (css_height.max(0.0) * dpr).round() as u32;
    BackingSize {
        width: w_px.max(1),
        height: h_px.max(1),
        dpr,
    }
}

/// Client coordinates mapped to `[-1, 1]` with the origin at the center of
/// the `width` x `height` box. Degenerate boxes map to the center.
#[inline]
pub fn normalized_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> [f32; 2] {
    if width > 0.0 && height > 0.0 {
        [
            ((client_x / width) * 2.0 - 1.0).clamp(-1.0, 1.0),
            ((client_y / height) * 2.0 - 1.0).clamp(-1.0, 1.0),
        ]
    } else {
        [0.0, 0.0]
    }
}

// ---------------- Browser event helpers ----------------
#[inline]
pub fn mouse_ndc(ev: &web::MouseEvent, window: &web::Window) -> [f32; 2] {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    normalized_pointer(ev.client_x() as f32, ev.client_y() as f32, w as f32, h as f32)
}
