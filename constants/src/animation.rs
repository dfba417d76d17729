/// Animation time units per second for the sparkling heart (0.012 per frame at 60 Hz).
pub const SPARKLE_TIME_SCALE: f32 = 0.72;

/// Animation time units per second for the pulsing solid heart.
pub const PULSE_TIME_SCALE: f32 = 1.5;

/// Radial heartbeat: 1 + AMPLITUDE * sin(FREQUENCY * t + RADIAL_FREQUENCY * r)
pub const HEARTBEAT_AMPLITUDE: f32 = 0.05;
pub const HEARTBEAT_FREQUENCY: f32 = 2.1;
pub const HEARTBEAT_RADIAL_FREQUENCY: f32 = 3.0;

/// Per-particle sparkle: (sin(FREQUENCY * t + INDEX_PHASE * i) + 1) * AMPLITUDE
pub const SPARKLE_AMPLITUDE: f32 = 0.06;
pub const SPARKLE_FREQUENCY: f32 = 8.0;
pub const SPARKLE_INDEX_PHASE: f32 = 0.37;

/// Depth axis receives a stronger sparkle than the image plane.
pub const SPARKLE_DEPTH_GAIN: f32 = 1.6;

/// Whole-group sway about Y (yaw) and X (pitch).
pub const SWAY_YAW_AMPLITUDE: f32 = 0.32;
pub const SWAY_YAW_FREQUENCY: f32 = 0.5;
pub const SWAY_PITCH_AMPLITUDE: f32 = 0.18;
pub const SWAY_PITCH_FREQUENCY: f32 = 0.7;

/// Whole-group pulse: 1 + PRIMARY * sin(F t)^16 + SECONDARY * sin(F t + PHASE)^6
pub const PULSE_FREQUENCY: f32 = 3.0;
pub const PULSE_PRIMARY_AMPLITUDE: f32 = 0.15;
pub const PULSE_PRIMARY_POWER: i32 = 16;
pub const PULSE_SECONDARY_AMPLITUDE: f32 = 0.05;
pub const PULSE_SECONDARY_POWER: i32 = 6;
pub const PULSE_SECONDARY_PHASE: f32 = 0.3;
