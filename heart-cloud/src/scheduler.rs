//! Explicit frame loop control.
//!
//! The host (bevy's `Update` schedule in the render engine, a plain loop in tests)
//! calls [`FrameScheduler::tick`] once per display refresh. The scheduler decides
//! whether the frame counts: while stopped, no callback runs and elapsed time does
//! not advance.

use bevy::log::debug;

pub type FrameCallback = Box<dyn FnMut(&FrameTick) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// 1-based index of the frame among frames that ran.
    pub frame: u64,
    pub delta_secs: f32,
    /// Monotonic time accumulated over running frames only.
    pub elapsed_secs: f32,
}

#[derive(Default)]
pub struct FrameScheduler {
    running: bool,
    frame: u64,
    elapsed_secs: f32,
    callbacks: Vec<FrameCallback>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        if !self.running {
            debug!("Frame loop started at {:.3}s", self.elapsed_secs);
        }
        self.running = true;
    }

    /// No callback runs after this returns, until the next `start`.
    pub fn stop(&mut self) {
        if self.running {
            debug!("Frame loop stopped at {:.3}s", self.elapsed_secs);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn on_frame<F>(&mut self, callback: F)
    where
        F: FnMut(&FrameTick) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Advance one display refresh. Returns the tick if the loop is running.
    ///
    /// Negative and non-finite deltas are treated as zero.
    pub fn tick(&mut self, delta_secs: f32) -> Option<FrameTick> {
        if !self.running {
            return None;
        }

        let delta_secs = if delta_secs.is_finite() {
            delta_secs.max(0.0)
        } else {
            0.0
        };
        self.frame += 1;
        self.elapsed_secs += delta_secs;

        let tick = FrameTick {
            frame: self.frame,
            delta_secs,
            elapsed_secs: self.elapsed_secs,
        };
        for callback in &mut self.callbacks {
            callback(&tick);
        }
        Some(tick)
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("running", &self.running)
            .field("frame", &self.frame)
            .field("elapsed_secs", &self.elapsed_secs)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
