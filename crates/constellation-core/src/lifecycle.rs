//! Mount/visibility state machine for an animated visualization.
//!
//! The controller owns no browser objects. Everything it schedules or
//! registers goes through a [`FrameHost`], which the browser layer backs with
//! `requestAnimationFrame`, an `IntersectionObserver` and window listeners.

pub type FrameHandle = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    Resize,
    MouseMove,
}

pub trait FrameHost {
    /// Schedule one frame callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    fn observe(&mut self);
    fn disconnect(&mut self);
    fn add_listener(&mut self, listener: Listener);
    fn remove_listener(&mut self, listener: Listener);
    /// Rebind the drawing surface to the current layout size.
    fn resize(&mut self);
    /// Monotonic clock in seconds.
    fn now(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    /// Mounted, no frame scheduled yet.
    Hidden,
    Running,
    Paused,
}

#[derive(Debug)]
pub struct Lifecycle {
    phase: Phase,
    pending: Option<FrameHandle>,
    start_time: f64,
    paused_elapsed: f64,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Unmounted,
            pending: None,
            start_time: 0.0,
            paused_elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Register observers and listeners and start the frame loop.
    pub fn mount<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if self.phase != Phase::Unmounted {
            log::warn!("[lifecycle] mount ignored in phase {:?}", self.phase);
            return;
        }
        host.observe();
        host.add_listener(Listener::Resize);
        host.add_listener(Listener::MouseMove);
        host.resize();
        self.start_time = host.now();
        self.paused_elapsed = 0.0;
        self.phase = Phase::Hidden;
        self.schedule(host);
        log::debug!("[lifecycle] mounted, phase={:?}", self.phase);
    }

    /// Intersection observer callback.
    pub fn on_visibility<H: FrameHost + ?Sized>(&mut self, visible: bool, host: &mut H) {
        if self.phase == Phase::Unmounted {
            return;
        }
        if visible {
            if self.pending.is_none() {
                // resume where the entrance left off instead of jumping ahead
                self.start_time = host.now() - self.paused_elapsed;
                self.schedule(host);
                log::debug!("[lifecycle] resumed at {:.2}s", self.paused_elapsed);
            }
        } else {
            if let Some(handle) = self.pending.take() {
                host.cancel_frame(handle);
            }
            if self.phase == Phase::Running {
                self.paused_elapsed = host.now() - self.start_time;
                self.phase = Phase::Paused;
                log::debug!("[lifecycle] paused at {:.2}s", self.paused_elapsed);
            }
        }
    }

    /// Frame callback. Returns the elapsed seconds to draw with and keeps the
    /// loop going; `None` means the frame should not be drawn.
    pub fn on_frame<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> Option<f32> {
        // the handle that fired is no longer outstanding
        self.pending = None;
        if self.phase != Phase::Running {
            return None;
        }
        let elapsed = host.now() - self.start_time;
        self.schedule(host);
        Some(elapsed.max(0.0) as f32)
    }

    /// Tear down everything `mount` registered. Safe to call more than once.
    pub fn unmount<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if self.phase == Phase::Unmounted {
            return;
        }
        host.disconnect();
        host.remove_listener(Listener::Resize);
        host.remove_listener(Listener::MouseMove);
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        self.phase = Phase::Unmounted;
        log::debug!("[lifecycle] unmounted");
    }

    fn schedule<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if self.pending.is_some() {
            return;
        }
        match host.request_frame() {
            Some(handle) => {
                self.pending = Some(handle);
                self.phase = Phase::Running;
            }
            None => {
                // the loop is dead until the next visibility change resumes it
                if self.phase == Phase::Running {
                    self.paused_elapsed = host.now() - self.start_time;
                    self.phase = Phase::Paused;
                }
                log::warn!(
                    "[lifecycle] host refused a frame request, phase={:?}",
                    self.phase
                );
            }
        }
    }
}
