use bevy::prelude::*;
use heart_cloud::{FrameScheduler, FrameTick};

use crate::rpc::web_rpc::WebRpcInterface;

/// Frames between periodic frame loop log lines.
const LOG_INTERVAL_FRAMES: u64 = 600;

/// Bevy-side owner of the animation clock.
///
/// `Update` runs every display refresh regardless; the scheduler decides whether
/// the refresh counts as an animation frame.
#[derive(Resource, Default, Debug)]
pub struct HeartFrameLoop {
    scheduler: FrameScheduler,
    last_tick: Option<FrameTick>,
    logging: bool,
    /// Set by an explicit pause; the initial start leaves a held loop stopped.
    held: bool,
}

impl HeartFrameLoop {
    pub fn start(&mut self) {
        if !self.logging {
            self.scheduler.on_frame(|tick| {
                if tick.frame % LOG_INTERVAL_FRAMES == 0 {
                    debug!(
                        "Animation frame {} at {:.2}s",
                        tick.frame, tick.elapsed_secs
                    );
                }
            });
            self.logging = true;
        }
        self.held = false;
        self.scheduler.start();
    }

    /// First start once the heart exists. Returns false if a pause arrived earlier.
    pub fn begin(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.start();
        true
    }

    pub fn pause(&mut self) {
        self.scheduler.stop();
        self.last_tick = None;
        self.held = true;
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.scheduler.elapsed_secs()
    }

    pub fn frame_count(&self) -> u64 {
        self.scheduler.frame_count()
    }

    /// Tick of the current display refresh, `None` while paused.
    pub fn last_tick(&self) -> Option<FrameTick> {
        self.last_tick
    }

    pub fn advance(&mut self, delta_secs: f32) -> Option<FrameTick> {
        self.last_tick = self.scheduler.tick(delta_secs);
        self.last_tick
    }
}

pub fn start_frame_loop(
    mut frame_loop: ResMut<HeartFrameLoop>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if frame_loop.begin() {
        println!("Animation frame loop started");
    } else {
        info!("Animation frame loop held paused until resumed");
    }
    rpc_interface.send_notification(
        "animation_state",
        serde_json::json!({ "running": frame_loop.is_running() }),
    );
}

pub fn advance_frame_loop(time: Res<Time>, mut frame_loop: ResMut<HeartFrameLoop>) {
    frame_loop.advance(time.delta_secs());
}

/// Space pauses and resumes the animation.
pub fn handle_pause_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut frame_loop: ResMut<HeartFrameLoop>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    if frame_loop.is_running() {
        frame_loop.pause();
    } else {
        frame_loop.start();
    }
    info!(
        "Animation {}",
        if frame_loop.is_running() { "resumed" } else { "paused" }
    );
    rpc_interface.send_notification(
        "animation_state",
        serde_json::json!({ "running": frame_loop.is_running() }),
    );
}
