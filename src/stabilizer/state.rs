// src/stabilizer/state.rs

//! # Control State
//!
//! This module provides the aggregate owning all persistent stabilization
//! state, along with the input structures for the two entry points. The
//! host scheduler owns one [`ControlState`] and passes it by mutable
//! reference, so the tick-then-combine ordering is enforced by borrows
//! rather than locks.

use crate::config::{FLIGHT_MODES, NUM_AXES};
use crate::pid::{GyroLowPass, NoiseEstimator};

/// Sensor and stick inputs consumed by one sampler tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInput {
    /// Unfiltered gyro samples, read only by the noise estimator.
    pub gyro_raw: [i16; NUM_AXES],
    /// Gravity-compensated vertical acceleration.
    pub acc_vert: f32,
    /// Aileron stick position.
    pub aileron: i16,
    /// Elevator stick position.
    pub elevator: i16,
    /// Rudder stick position.
    pub rudder: i16,
}

/// Attitude inputs consumed by one output combination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleInput {
    /// Estimated roll and pitch angles.
    pub angle: [i16; 2],
    /// Gravity-compensated vertical acceleration.
    pub acc_vert: f32,
}

/// Persistent stabilization state for both flight mode profiles.
///
/// Both profiles are computed in full every cycle so the host mixer can
/// blend them continuously during the transition; nothing here switches on
/// the active profile.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// Rate integrators per profile and axis.
    pub(crate) integral_gyro: [[i32; NUM_AXES]; FLIGHT_MODES],
    /// Vertical acceleration integrators per profile.
    pub(crate) integral_acc_vert: [f32; FLIGHT_MODES],
    /// Gyro low-pass filter memory.
    pub(crate) gyro_filter: GyroLowPass,
    /// Vibration noise estimator.
    pub(crate) noise: NoiseEstimator,
    /// Smoothed gyro samples accumulated since the last combination.
    pub(crate) avg_gyro: [i32; NUM_AXES],
    /// Sampler ticks accumulated since the last combination.
    pub(crate) avg_count: u32,
    /// Published rate corrections per profile and axis.
    pub(crate) pid_gyros: [[i16; NUM_AXES]; FLIGHT_MODES],
    /// Published leveling corrections per profile; the yaw slot holds the
    /// vertical hold term.
    pub(crate) pid_accs: [[i16; NUM_AXES]; FLIGHT_MODES],
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlState {
    /// Creates a control state with everything zeroed.
    pub fn new() -> Self {
        Self {
            integral_gyro: [[0; NUM_AXES]; FLIGHT_MODES],
            integral_acc_vert: [0.0; FLIGHT_MODES],
            gyro_filter: GyroLowPass::new(),
            noise: NoiseEstimator::new(),
            avg_gyro: [0; NUM_AXES],
            avg_count: 0,
            pid_gyros: [[0; NUM_AXES]; FLIGHT_MODES],
            pid_accs: [[0; NUM_AXES]; FLIGHT_MODES],
        }
    }

    /// Rate corrections per profile and axis from the last combination.
    pub fn pid_gyros(&self) -> &[[i16; NUM_AXES]; FLIGHT_MODES] {
        &self.pid_gyros
    }

    /// Leveling corrections per profile from the last combination.
    ///
    /// Roll and pitch slots hold attitude corrections; the yaw slot holds
    /// the vertical hold term.
    pub fn pid_accs(&self) -> &[[i16; NUM_AXES]; FLIGHT_MODES] {
        &self.pid_accs
    }

    /// Smoothed vibration noise reading, 0.0 through 999.0.
    pub fn gyro_noise(&self) -> f32 {
        self.noise.level()
    }
}
