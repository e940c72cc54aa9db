// src/pid/filter.rs

//! # Gyro Low-Pass Filter
//!
//! This module provides the one-pole low-pass filter that smooths each gyro
//! axis ahead of integration and averaging. Two coefficient tables cover
//! the two supported servo loop rates; the coefficient is the one-pole
//! period count `n = fs / (2 * pi * fc)` for the selected cutoff.

use crate::config::{GyroLpf, NUM_AXES};

/// Filter coefficients for the normal loop rate (500 Hz), indexed by
/// [`GyroLpf`].
const LPF_LOOKUP: [f32; 7] = [15.92, 7.96, 3.79, 2.49, 1.81, 1.08, 1.0];

/// Filter coefficients for the high-speed loop rate (1 kHz), indexed by
/// [`GyroLpf`].
const LPF_LOOKUP_HS: [f32; 7] = [31.83, 15.92, 7.58, 4.97, 3.62, 2.15, 1.0];

/// Per-axis one-pole gyro filter memory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroLowPass {
    smooth: [f32; NUM_AXES],
}

impl GyroLowPass {
    /// Creates a filter with cleared memory.
    pub fn new() -> Self {
        Self {
            smooth: [0.0; NUM_AXES],
        }
    }

    /// Smooths one gyro sample in place.
    ///
    /// `NoFilter` bypasses the smoothing but still seeds the filter memory
    /// from the raw sample, so enabling the filter later starts from the
    /// live signal rather than stale state.
    pub fn apply(&mut self, axis: usize, sample: &mut i16, lpf: GyroLpf, fast_loop: bool) {
        let table = if fast_loop { &LPF_LOOKUP_HS } else { &LPF_LOOKUP };
        let n = table[lpf as usize];
        let raw = *sample as f32;

        if lpf != GyroLpf::NoFilter {
            self.smooth[axis] = (self.smooth[axis] * (n - 1.0) + raw) / n;
        } else {
            self.smooth[axis] = raw;
        }

        // Demote back to the shared gyro array.
        *sample = self.smooth[axis] as i16;
    }
}
