pub mod camera;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod lifecycle;
pub mod nav;

pub use camera::CameraState;
pub use config::{Preset, Rgb, Tone, VisualConfig};
pub use error::{Error, Result};
pub use frame::{DrawCmd, FrameRenderer, Projected, Viewport};
pub use geometry::{Edge, Geometry, Point};
pub use grid::{span_class, GridSpan, PillarId};
pub use lifecycle::{FrameHandle, FrameHost, Lifecycle, Listener, Phase};
pub use nav::{route, View};
