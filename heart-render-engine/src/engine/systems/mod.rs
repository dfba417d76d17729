//! Runtime systems driving the animation and host integration.
//!
//! Provides the frame loop, per-frame heart animation, viewport tracking,
//! overlay timing, and FPS diagnostics.

/// Per-frame display transform applied to the sprite mesh and heart transform.
pub mod animation;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the host page via RPC.
pub mod fps_tracking;

/// Explicit frame scheduler resource, ticked from bevy's clock.
///
/// Pausing stops the animation clock; resuming continues from the same time.
pub mod frame_loop;

/// Timed overlay state machines whose cues are forwarded to the host page.
pub mod overlays;

/// Viewport size, aspect ratio and pixel ratio tracking on window resize.
pub mod viewport;
