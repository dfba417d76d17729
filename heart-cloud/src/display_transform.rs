//! Per-frame display transform.
//!
//! Every function here is a pure function of the base particle data and the
//! animation time. Display positions are recomputed from the untouched base set
//! each frame, so effects never compound and replaying a time sequence replays
//! the same motion.

use bevy::math::{EulerRot, Quat, Vec3};
use constants::animation::*;
use serde::{Deserialize, Serialize};

use crate::particle_set::ParticleSet;

/// Radial heartbeat and per-particle sparkle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartbeatParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub radial_frequency: f32,
    pub sparkle_amplitude: f32,
    pub sparkle_frequency: f32,
    pub sparkle_index_phase: f32,
    pub depth_sparkle_gain: f32,
}

impl HeartbeatParams {
    pub const SPARKLING: Self = Self {
        amplitude: HEARTBEAT_AMPLITUDE,
        frequency: HEARTBEAT_FREQUENCY,
        radial_frequency: HEARTBEAT_RADIAL_FREQUENCY,
        sparkle_amplitude: SPARKLE_AMPLITUDE,
        sparkle_frequency: SPARKLE_FREQUENCY,
        sparkle_index_phase: SPARKLE_INDEX_PHASE,
        depth_sparkle_gain: SPARKLE_DEPTH_GAIN,
    };

    /// `1 + amplitude * sin(frequency * t + radial_frequency * r)`
    pub fn heartbeat_scale(&self, radial_distance: f32, time: f32) -> f32 {
        1.0 + self.amplitude * (self.frequency * time + self.radial_frequency * radial_distance).sin()
    }

    /// Sparkle term in `[0, 2 * sparkle_amplitude]`; the applied factor is `1 + sparkle`.
    pub fn sparkle(&self, index: usize, time: f32) -> f32 {
        ((self.sparkle_frequency * time + self.sparkle_index_phase * index as f32).sin() + 1.0)
            * self.sparkle_amplitude
    }

    /// Display position of particle `index`. The image plane (x, y) gets the
    /// heartbeat and sparkle; depth gets a stronger sparkle only.
    pub fn display_position(&self, base: Vec3, index: usize, time: f32) -> Vec3 {
        let heartbeat = self.heartbeat_scale(base.truncate().length(), time);
        let sparkle = self.sparkle(index, time);
        let planar = heartbeat * (1.0 + sparkle);

        Vec3::new(
            base.x * planar,
            base.y * planar,
            base.z * (1.0 + sparkle * self.depth_sparkle_gain),
        )
    }
}

/// Slow whole-group rocking about X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwayParams {
    pub pitch_amplitude: f32,
    pub pitch_frequency: f32,
    pub yaw_amplitude: f32,
    pub yaw_frequency: f32,
}

impl SwayParams {
    pub const GENTLE: Self = Self {
        pitch_amplitude: SWAY_PITCH_AMPLITUDE,
        pitch_frequency: SWAY_PITCH_FREQUENCY,
        yaw_amplitude: SWAY_YAW_AMPLITUDE,
        yaw_frequency: SWAY_YAW_FREQUENCY,
    };

    pub fn rotation(&self, time: f32) -> Quat {
        let pitch = self.pitch_amplitude * (self.pitch_frequency * time).sin();
        let yaw = self.yaw_amplitude * (self.yaw_frequency * time).sin();
        Quat::from_euler(EulerRot::XYZ, pitch, yaw, 0.0)
    }
}

/// Sharp double-thump scale applied to the whole group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseParams {
    pub frequency: f32,
    pub primary_amplitude: f32,
    pub primary_power: i32,
    pub secondary_amplitude: f32,
    pub secondary_power: i32,
    pub secondary_phase: f32,
}

impl PulseParams {
    pub const BEAT: Self = Self {
        frequency: PULSE_FREQUENCY,
        primary_amplitude: PULSE_PRIMARY_AMPLITUDE,
        primary_power: PULSE_PRIMARY_POWER,
        secondary_amplitude: PULSE_SECONDARY_AMPLITUDE,
        secondary_power: PULSE_SECONDARY_POWER,
        secondary_phase: PULSE_SECONDARY_PHASE,
    };

    pub fn scale(&self, time: f32) -> f32 {
        let phase = self.frequency * time;
        let beat = phase.sin().powi(self.primary_power) * self.primary_amplitude
            + (phase + self.secondary_phase).sin().powi(self.secondary_power)
                * self.secondary_amplitude;
        1.0 + beat
    }
}

/// Rotation and uniform scale applied to the whole heart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupPose {
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for GroupPose {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Combined animation of a heart: optional per-particle heartbeat, optional
/// group sway and optional group pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartAnimation {
    /// Animation time units per elapsed second.
    pub time_scale: f32,
    #[serde(default)]
    pub heartbeat: Option<HeartbeatParams>,
    #[serde(default)]
    pub sway: Option<SwayParams>,
    #[serde(default)]
    pub pulse: Option<PulseParams>,
}

impl HeartAnimation {
    pub fn sparkling() -> Self {
        Self {
            time_scale: SPARKLE_TIME_SCALE,
            heartbeat: Some(HeartbeatParams::SPARKLING),
            sway: Some(SwayParams::GENTLE),
            pulse: None,
        }
    }

    pub fn pulsing() -> Self {
        Self {
            time_scale: PULSE_TIME_SCALE,
            heartbeat: None,
            sway: None,
            pulse: Some(PulseParams::BEAT),
        }
    }

    pub fn animation_time(&self, elapsed_secs: f32) -> f32 {
        elapsed_secs * self.time_scale
    }

    /// Whether display positions differ from base positions over time.
    pub fn moves_particles(&self) -> bool {
        self.heartbeat.is_some()
    }

    pub fn group_pose(&self, time: f32) -> GroupPose {
        GroupPose {
            rotation: self
                .sway
                .map_or(Quat::IDENTITY, |sway| sway.rotation(time)),
            scale: self.pulse.map_or(1.0, |pulse| pulse.scale(time)),
        }
    }

    /// Replace `out` with the display positions of `particles` at `time`.
    pub fn write_display_positions(&self, particles: &ParticleSet, time: f32, out: &mut Vec<Vec3>) {
        out.clear();
        out.reserve(particles.len());
        match &self.heartbeat {
            Some(heartbeat) => out.extend(
                particles
                    .base_positions()
                    .enumerate()
                    .map(|(index, base)| heartbeat.display_position(base, index, time)),
            ),
            None => out.extend(particles.base_positions()),
        }
    }
}

impl Default for HeartAnimation {
    fn default() -> Self {
        Self::sparkling()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::generate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn still() -> HeartbeatParams {
        HeartbeatParams {
            amplitude: 0.0,
            sparkle_amplitude: 0.0,
            ..HeartbeatParams::SPARKLING
        }
    }

    #[test]
    fn zero_coefficients_at_time_zero_are_identity() {
        let base = Vec3::new(0.7, -1.2, 0.4);
        for index in [0, 1, 2599] {
            assert_eq!(still().display_position(base, index, 0.0), base);
        }
    }

    #[test]
    fn depth_axis_sparkles_harder() {
        let params = HeartbeatParams {
            amplitude: 0.0,
            ..HeartbeatParams::SPARKLING
        };
        // sin(0 + 0) = 0, so sparkle = amplitude exactly.
        let p = params.display_position(Vec3::ONE, 0, 0.0);
        let sparkle = params.sparkle_amplitude;
        assert!((p.x - (1.0 + sparkle)).abs() < 1e-6);
        assert!((p.y - (1.0 + sparkle)).abs() < 1e-6);
        assert!((p.z - (1.0 + sparkle * params.depth_sparkle_gain)).abs() < 1e-6);
    }

    #[test]
    fn heartbeat_stays_within_amplitude() {
        let params = HeartbeatParams::SPARKLING;
        for step in 0..200 {
            let t = step as f32 * 0.05;
            let s = params.heartbeat_scale(1.3, t);
            assert!(s >= 1.0 - params.amplitude - 1e-6 && s <= 1.0 + params.amplitude + 1e-6);
            let sparkle = params.sparkle(step, t);
            assert!((0.0..=2.0 * params.sparkle_amplitude + 1e-6).contains(&sparkle));
        }
    }

    #[test]
    fn recomputing_does_not_compound() {
        let set = generate(
            &GeneratorConfig::sparkling().with_particle_count(64),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();
        let animation = HeartAnimation::sparkling();
        let mut first = Vec::new();
        let mut again = Vec::new();

        animation.write_display_positions(&set, 1.25, &mut first);
        for step in 0..10 {
            animation.write_display_positions(&set, step as f32 * 0.3, &mut again);
        }
        animation.write_display_positions(&set, 1.25, &mut again);

        assert_eq!(first, again);
        assert_eq!(first.len(), set.len());
    }

    #[test]
    fn pulse_peaks_near_quarter_period() {
        let pulse = PulseParams::BEAT;
        assert!((pulse.scale(0.0) - (1.0 + 0.05 * 0.3_f32.sin().powi(6))).abs() < 1e-6);

        let peak_time = std::f32::consts::FRAC_PI_2 / pulse.frequency;
        let peak = pulse.scale(peak_time);
        assert!(peak > 1.15 && peak < 1.2 + 1e-6);

        for step in 0..500 {
            let s = pulse.scale(step as f32 * 0.01);
            assert!((1.0..=1.2 + 1e-6).contains(&s));
        }
    }

    #[test]
    fn sway_is_identity_at_rest() {
        let sway = SwayParams::GENTLE;
        assert!(sway.rotation(0.0).abs_diff_eq(Quat::IDENTITY, 1e-6));

        let pose = HeartAnimation::pulsing().group_pose(0.0);
        assert_eq!(pose.rotation, Quat::IDENTITY);
    }

    #[test]
    fn static_animation_copies_base_positions() {
        let set = generate(
            &GeneratorConfig::solid().with_particle_count(32),
            &mut StdRng::seed_from_u64(4),
        )
        .unwrap();
        let mut out = vec![Vec3::NAN; 3];
        HeartAnimation::pulsing().write_display_positions(&set, 3.0, &mut out);
        assert!(out.iter().copied().eq(set.base_positions()));
    }
}
