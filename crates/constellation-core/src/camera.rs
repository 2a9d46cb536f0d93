use crate::config::VisualConfig;

/// Pointer-following camera with exponential smoothing and a slow spin.
#[derive(Clone, Debug)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    target_yaw: f32,
    target_pitch: f32,
    smoothing: f32,
    max_tilt: f32,
    auto_rotate: f32,
}

impl CameraState {
    pub fn new(config: &VisualConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            smoothing: config.pointer_smoothing.clamp(0.0, 1.0),
            max_tilt: config.max_tilt,
            auto_rotate: config.auto_rotate,
        }
    }

    /// Pointer in normalized device units, `[-1, 1]` on both axes.
    pub fn set_pointer(&mut self, nx: f32, ny: f32) {
        self.target_yaw = nx.clamp(-1.0, 1.0) * self.max_tilt;
        self.target_pitch = ny.clamp(-1.0, 1.0) * self.max_tilt;
    }

    pub fn target(&self) -> (f32, f32) {
        (self.target_yaw, self.target_pitch)
    }

    /// One smoothing step; call once per frame.
    pub fn step(&mut self) {
        self.yaw += (self.target_yaw - self.yaw) * self.smoothing;
        self.pitch += (self.target_pitch - self.pitch) * self.smoothing;
    }

    /// Final `(yaw, pitch)` for a frame, auto-rotation included.
    pub fn angles(&self, elapsed_secs: f32) -> (f32, f32) {
        (self.yaw + elapsed_secs * self.auto_rotate, self.pitch)
    }
}
