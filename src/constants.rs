// Browser-side tuning constants.

// Backing-store resolution is capped to keep fill-rate sane on dense screens
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// DOM hooks written by the content renderer
pub const CANVAS_SELECTOR: &str = "canvas";
// set on elements that already have their click handler
pub const HYDRATED_ATTR: &str = "data-hydrated";
pub const COPY_BUTTON_SELECTOR: &str = "[data-copy-target]:not([data-hydrated])";
pub const COPY_TARGET_ATTR: &str = "data-copy-target";
pub const VIDEO_FACADE_SELECTOR: &str = "[data-video-id]:not([data-hydrated])";
pub const VIDEO_ID_ATTR: &str = "data-video-id";
pub const VIDEO_TITLE_ATTR: &str = "data-video-title";

// Copy button feedback
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied";
pub const COPY_FEEDBACK_MS: i32 = 1600;
