use std::time::Instant;

/// Explicit frame pacing with start/stop control.
///
/// Owned by the rendering collaborator; the layout engine never schedules
/// frames. `begin_frame` returns the delta time since the previous frame,
/// clamped so a long stall does not produce a huge step, or `None` while the
/// scheduler is stopped.
#[derive(Debug)]
pub struct FrameScheduler {
    running: bool,
    last_frame: Option<Instant>,
    max_dt: f32,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            running: false,
            last_frame: None,
            max_dt: 0.1,
        }
    }

    /// Begin producing frames. The first `begin_frame` after a start reports
    /// a zero delta.
    pub fn start(&mut self) {
        self.running = true;
        self.last_frame = None;
        tracing::debug!("frame scheduler started");
    }

    /// Stop producing frames until the next `start`.
    pub fn stop(&mut self) {
        self.running = false;
        tracing::debug!("frame scheduler stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mark the start of a frame. Returns the clamped delta time in seconds,
    /// or `None` if the scheduler is stopped.
    pub fn begin_frame(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| (now - last).as_secs_f32().min(self.max_dt))
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        Some(dt)
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
