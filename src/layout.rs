use constellation_core::grid::{span_class_for, PillarId};
use constellation_core::{route, View};
use wasm_bindgen::prelude::*;

/// Utility classes for one pillar card given the current selection.
#[wasm_bindgen(js_name = pillarSpanClass)]
pub fn pillar_span_class(item: &str, selected: Option<String>) -> Result<String, JsValue> {
    span_class_for(item, selected.as_deref())
        .map(|span| span.class_names())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classes for all seven cards, in pillar order.
#[wasm_bindgen(js_name = pillarSpanClasses)]
pub fn pillar_span_classes(selected: Option<String>) -> js_sys::Array {
    PillarId::ALL
        .iter()
        .filter_map(|p| span_class_for(p.as_str(), selected.as_deref()).ok())
        .map(|span| JsValue::from_str(&span.class_names()))
        .collect()
}

/// Client path for `onNavigate(view, sectionId?)`.
#[wasm_bindgen(js_name = routeFor)]
pub fn route_for(view: &str, section: Option<String>) -> Result<String, JsValue> {
    let view: View = view
        .parse()
        .map_err(|e: constellation_core::Error| JsValue::from_str(&e.to_string()))?;
    Ok(route(view, section.as_deref()))
}
