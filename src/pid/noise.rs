// src/pid/noise.rs

//! # Gyro Vibration Noise Estimator
//!
//! This module provides a display-only measure of airframe vibration. The
//! three raw gyro channels are summed and high-passed to strip commanded
//! motion, and the rectified residual is smoothed into a slow-moving level
//! a tuning screen can show. The level never feeds the control outputs.

use crate::config::{NUM_AXES, PITCH, ROLL, YAW};
use num_traits::float::FloatCore;

// Discrete RLC high-pass constants for a 20 Hz cutoff at the 500 Hz
// sample rate, unity Q.
const SAMPLE_RATE: f32 = 500.0;
const HPF_FC: f32 = 20.0;
const HPF_Q: f32 = 1.0;
const HPF_O: f32 = 2.0 * core::f32::consts::PI * HPF_FC / SAMPLE_RATE;
const HPF_C: f32 = HPF_Q / HPF_O;
const HPF_L: f32 = 1.0 / HPF_Q / HPF_O;

/// Ceiling on the published noise level.
const NOISE_CEILING: f32 = 999.0;

/// Vibration noise estimator state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoiseEstimator {
    hpf_v: f32,
    hpf_i: f32,
    level: f32,
}

impl NoiseEstimator {
    /// Creates an estimator with cleared state.
    pub fn new() -> Self {
        Self {
            hpf_v: 0.0,
            hpf_i: 0.0,
            level: 0.0,
        }
    }

    /// Folds one tick of raw gyro data into the noise level.
    ///
    /// When `enabled` is false the state is frozen rather than reset, so
    /// re-enabling the display resumes from the last reading.
    pub fn update(&mut self, gyro_raw: &[i16; NUM_AXES], enabled: bool) {
        if !enabled {
            return;
        }

        let sum =
            (gyro_raw[ROLL] as i32 + gyro_raw[PITCH] as i32 + gyro_raw[YAW] as i32) as f32;

        let hpf_t = sum * HPF_O - self.hpf_v;
        self.hpf_v += (self.hpf_i + hpf_t) / HPF_C;
        self.hpf_i += hpf_t / HPF_L;
        let residual = sum - self.hpf_v / HPF_O;

        // Smooth the rectified residual so the reading is persistent
        // enough to display.
        self.level = (self.level * 99.0 + residual.abs()) / 100.0;
        if self.level > NOISE_CEILING {
            self.level = NOISE_CEILING;
        }
    }

    /// Current smoothed noise level, 0.0 through 999.0.
    pub fn level(&self) -> f32 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    /// Test that silence reads as zero noise.
    #[test]
    fn test_noise_zero_input() {
        let mut estimator = NoiseEstimator::new();
        for _ in 0..100 {
            estimator.update(&[0, 0, 0], true);
        }
        assert!(
            value_close(0.0, estimator.level()),
            "Zero input should produce a zero noise level."
        );
    }

    /// Test that vibration raises the level and steady motion does not.
    #[test]
    fn test_noise_passes_vibration_blocks_steady_motion() {
        let mut vibrating = NoiseEstimator::new();
        for tick in 0..500 {
            let sample = if tick % 2 == 0 { 500 } else { -500 };
            vibrating.update(&[sample, sample, sample], true);
        }
        assert!(
            vibrating.level() > 100.0,
            "Alternating input should register as vibration: {}",
            vibrating.level()
        );

        let mut steady = NoiseEstimator::new();
        for _ in 0..2000 {
            steady.update(&[1000, 1000, 1000], true);
        }
        assert!(
            steady.level() < 1.0,
            "A constant rate should be rejected by the high-pass: {}",
            steady.level()
        );
    }

    /// Test the ceiling on the published level.
    #[test]
    fn test_noise_level_capped() {
        let mut estimator = NoiseEstimator::new();
        for tick in 0..500 {
            let sample = if tick % 2 == 0 { 30000 } else { -30000 };
            estimator.update(&[sample, sample, sample], true);
        }
        assert!(
            value_close(NOISE_CEILING, estimator.level()),
            "Extreme vibration should saturate the level at the ceiling."
        );
    }

    /// Test that disabling the display freezes the state instead of
    /// resetting it.
    #[test]
    fn test_noise_disabled_freezes_state() {
        let mut estimator = NoiseEstimator::new();
        for tick in 0..100 {
            let sample = if tick % 2 == 0 { 500 } else { -500 };
            estimator.update(&[sample, sample, sample], true);
        }
        let frozen = estimator;

        for tick in 0..100 {
            let sample = if tick % 2 == 0 { 700 } else { -700 };
            estimator.update(&[sample, sample, sample], false);
        }
        assert!(
            frozen == estimator,
            "A disabled estimator should hold its state unchanged."
        );
        assert!(
            value_not_close(0.0, estimator.level()),
            "The frozen level should still be readable."
        );
    }
}
