/// Particle count of the sparkling (parametric outline) heart.
pub const SPARKLE_PARTICLE_COUNT: usize = 2600;

/// Particle count of the solid (implicit surface) heart.
pub const SOLID_PARTICLE_COUNT: usize = 14000;

/// Inner and outer colours of the sparkling heart.
pub const SPARKLE_COLOUR_INSIDE: &str = "#ff4b8b";
pub const SPARKLE_COLOUR_OUTSIDE: &str = "#ffe6f5";

/// Deep and light colours of the solid heart.
pub const SOLID_COLOUR_DEEP: &str = "#ff0055";
pub const SOLID_COLOUR_LIGHT: &str = "#ff99bb";

/// Uniform scale applied to the raw heart curve (which spans roughly ±17 units).
pub const CURVE_SCALE: f32 = 0.1;

/// Full width of the random depth band given to curve samples.
pub const CURVE_DEPTH_RANGE: f32 = 1.6;

/// Full width of the per-axis jitter on curve samples.
pub const CURVE_JITTER: f32 = 0.3;

/// Full width of the per-axis fuzz on accepted surface samples.
pub const SURFACE_FUZZ: f32 = 0.05;

/// Half extent of the cube that surface candidates are drawn from.
pub const SURFACE_HALF_EXTENT: f32 = 1.5;

/// Accepted field values lie in the half-open band (MIN, MAX].
pub const FIELD_BAND_MIN: f32 = -0.5;
pub const FIELD_BAND_MAX: f32 = 0.0;

/// Rejection sampling gives up after this many attempts per requested particle.
pub const ATTEMPT_BUDGET_FACTOR: usize = 200;

/// Largest particle count a configuration may request.
pub const MAX_PARTICLE_COUNT: usize = 2_000_000;
