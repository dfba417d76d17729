//! JSON-RPC 2.0 communication layer for the host page.
//!
//! Implements bidirectional messaging between the Bevy engine and the page
//! embedding it via iframe postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//!
//! ## Methods
//!
//! ### Overlays
//! - `open_overlay`: Start opening `envelope`, `gift` or `message`
//! - `close_overlay`: Start closing an opening or open overlay
//!
//! ### Animation
//! - `pause_animation`: Stop the frame loop; elapsed time freezes
//! - `resume_animation`: Continue from the frozen time
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//! - `get_viewport`: Current size, aspect ratio and clamped pixel ratio
//!
//! ## Notifications
//!
//! - `heart_ready`: Particle set generated and spawned
//! - `overlay_cue`: Presentation step for the page to apply (`{overlay, cue}`)
//! - `fps_update`: Smoothed frame rate every half second
//! - `animation_state`: Frame loop started, paused or resumed
//! - `debug_message`: Raw traffic and parse failures

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
