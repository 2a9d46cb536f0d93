// Shared tuning constants for the particle engine.

// Golden angle used by the Fibonacci lattice, π(3 - √5)
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

// Geometry defaults
pub const DEFAULT_POINT_COUNT: usize = 60;
pub const MAX_POINT_COUNT: usize = 400; // edge building is O(N²)
pub const DEFAULT_CONNECT_DISTANCE: f32 = 0.55; // unit-sphere units
pub const DEFAULT_ACCENT_RATIO: f32 = 0.25;
pub const DEFAULT_ENTRANCE_SPREAD: f32 = 3.0; // half-width of the random start cube
pub const POINT_RADIUS_JITTER: f32 = 0.35; // +/- fraction of the base radius

// Projection
pub const DEFAULT_FOCAL_LENGTH: f32 = 600.0; // px
pub const SPHERE_VIEWPORT_FRACTION: f32 = 0.32; // sphere radius / min(width, height)

// Entrance animation
pub const DEFAULT_ENTRANCE_SECS: f32 = 2.4;

// Camera
pub const DEFAULT_POINTER_SMOOTHING: f32 = 0.05; // per-frame EMA factor
pub const DEFAULT_MAX_TILT: f32 = 0.5; // radians at the viewport edge
pub const DEFAULT_AUTO_ROTATE: f32 = 0.12; // radians per second

// Frame drawing
pub const SHADOW_MIN_PROGRESS: f32 = 0.05;
pub const SHADOW_OFFSET: f32 = 1.3; // below center, in sphere radii
pub const SHADOW_WIDTH: f32 = 0.85; // in sphere radii
pub const SHADOW_FLATTEN: f32 = 0.18; // ry / rx
pub const SHADOW_ALPHA: f32 = 0.22;

pub const EDGE_DEPTH_CUTOFF: f32 = 0.6; // midpoint z beyond this is not drawn
pub const EDGE_ALPHA: f32 = 0.35;
pub const EDGE_WIDTH: f32 = 0.8;

pub const MIN_DRAW_RADIUS: f32 = 0.5; // px
pub const NODE_MIN_GROW: f32 = 0.3; // radius fraction at progress 0
pub const GLOW_RADIUS_MULTIPLIER: f32 = 3.2;
pub const GLOW_ALPHA: f32 = 0.28;
