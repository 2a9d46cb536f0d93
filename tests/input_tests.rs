// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn dpr_is_capped_and_sanitized() {
    assert_eq!(capped_dpr(3.0, 2.0), 2.0);
    assert_eq!(capped_dpr(1.5, 2.0), 1.5);
    assert_eq!(capped_dpr(0.5, 2.0), 1.0);
    assert_eq!(capped_dpr(f64::NAN, 2.0), 1.0);
    assert_eq!(capped_dpr(-1.0, 2.0), 1.0);
    assert_eq!(capped_dpr(f64::INFINITY, 2.0), 1.0);
}

#[test]
fn backing_size_scales_css_box() {
    let b = backing_size(400.0, 300.0, 2.0, 2.0);
    assert_eq!((b.width, b.height, b.dpr), (800, 600, 2.0));

    let b = backing_size(401.3, 299.6, 1.0, 2.0);
    assert_eq!((b.width, b.height), (401, 300));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    let b = backing_size(0.0, -5.0, 2.0, 2.0);
    assert_eq!((b.width, b.height), (1, 1));
}

#[test]
fn pointer_maps_to_unit_square() {
    assert_eq!(normalized_pointer(0.0, 0.0, 800.0, 600.0), [-1.0, -1.0]);
    assert_eq!(normalized_pointer(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
    assert_eq!(normalized_pointer(800.0, 600.0, 800.0, 600.0), [1.0, 1.0]);
}

#[test]
fn pointer_outside_window_is_clamped() {
    assert_eq!(normalized_pointer(-200.0, 900.0, 800.0, 600.0), [-1.0, 1.0]);
}

#[test]
fn degenerate_window_maps_to_center() {
    assert_eq!(normalized_pointer(10.0, 10.0, 0.0, 600.0), [0.0, 0.0]);
}
