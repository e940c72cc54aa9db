// src/config.rs

//! # Flight Control Configuration
//!
//! This module provides the axis and profile index constants, the gyro
//! filter selector, and the configuration structures read by the sampler
//! and the output combiner. The configuration is owned and edited by the
//! host firmware; this crate only ever reads it.

/// Number of flight mode profiles computed each cycle.
pub const FLIGHT_MODES: usize = 2;

/// Index of the first flight mode profile, nominally hover.
pub const P1: usize = 0;

/// Index of the second flight mode profile, nominally forward flight.
pub const P2: usize = 1;

/// Number of stabilized rotational axes.
pub const NUM_AXES: usize = 3;

/// Roll axis index.
pub const ROLL: usize = 0;

/// Pitch axis index.
pub const PITCH: usize = 1;

/// Yaw axis index.
pub const YAW: usize = 2;

/// Vertical channel index in the four-wide gain and limit tables.
pub const VERT: usize = 3;

/// Gyro low-pass filter strength, named by cutoff frequency.
///
/// `NoFilter` passes raw samples through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroLpf {
    /// 5 Hz cutoff, the heaviest smoothing.
    Hz5,
    /// 10 Hz cutoff.
    Hz10,
    /// 21 Hz cutoff.
    Hz21,
    /// 32 Hz cutoff.
    Hz32,
    /// 44 Hz cutoff.
    Hz44,
    /// 74 Hz cutoff, the lightest smoothing.
    Hz74,
    /// Filtering disabled.
    NoFilter,
}

/// Tuning for one flight mode profile.
///
/// Per-axis tables are indexed by [`ROLL`], [`PITCH`] and [`YAW`]. The
/// four-wide tables carry the vertical channel in the [`VERT`] slot, and
/// the vertical hold gain rides in the [`YAW`] slot of `level_gain`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlightModeConfig {
    /// Stick response rate per axis, 0 (softest) through 7 (double rate).
    pub stick_rate: [u8; NUM_AXES],
    /// Proportional gain per axis, 0 through 127.
    pub p_gain: [i8; NUM_AXES],
    /// Integral gain per axis plus the vertical channel, 0 through 127.
    pub i_gain: [i8; NUM_AXES + 1],
    /// Autolevel gain for roll and pitch, vertical hold gain in the yaw slot.
    pub level_gain: [i8; NUM_AXES],
    /// Autolevel trim for roll and pitch, in angle units.
    pub level_trim: [i16; 2],
    /// Heading bias added ahead of the yaw proportional term.
    pub yaw_trim: i8,
    /// Symmetric anti-windup clamp on each axis rate integrator.
    pub i_constrain: [i32; NUM_AXES],
    /// Symmetric limit on each integral output term, vertical included.
    ///
    /// The vertical entry also bounds the vertical integrator itself.
    pub i_limit: [i32; NUM_AXES + 1],
}

impl Default for FlightModeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightModeConfig {
    /// Creates a profile with inert default values.
    ///
    /// All gains and limits default to zero, so the profile produces no
    /// output until it is tuned for the airframe. The stick rate defaults
    /// to the mid-range divide-by-16 curve.
    pub fn new() -> Self {
        Self {
            stick_rate: [2; NUM_AXES],
            p_gain: [0; NUM_AXES],
            i_gain: [0; NUM_AXES + 1],
            level_gain: [0; NUM_AXES],
            level_trim: [0; 2],
            yaw_trim: 0,
            i_constrain: [0; NUM_AXES],
            i_limit: [0; NUM_AXES + 1],
        }
    }
}

/// Configuration shared by the sampler and the output combiner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlightControlConfig {
    /// Per-profile tuning, indexed by [`P1`] and [`P2`].
    pub flight_mode: [FlightModeConfig; FLIGHT_MODES],
    /// Gyro low-pass filter strength.
    pub gyro_lpf: GyroLpf,
    /// True when the control loop runs at the high servo rate.
    pub fast_loop: bool,
    /// Enables the vibration noise estimate.
    pub vibration_display: bool,
    /// Vertical integrator decay per tick, in hundredths of a percent.
    pub acc_vert_filter: u8,
}

impl Default for FlightControlConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightControlConfig {
    /// Creates a configuration with inert default values.
    /// These should be replaced with values tuned for the hardware.
    ///
    /// Example Usage
    /// ```
    /// use vtol_flight_stabilization::config::{FlightControlConfig, GyroLpf, P1, P2};
    /// use vtol_flight_stabilization::{ControlState, CycleInput, TickInput};
    ///
    /// let mut config = FlightControlConfig::new();
    ///
    /// // Set the gyro PID gains for the hover profile.
    /// config.flight_mode[P1].p_gain = [40, 50, 60];
    /// config.flight_mode[P1].i_gain = [20, 20, 40, 10];
    ///
    /// // Bound the integrators and their output authority.
    /// config.flight_mode[P1].i_constrain = [125_000, 125_000, 125_000];
    /// config.flight_mode[P1].i_limit = [10_000, 10_000, 10_000, 4_000];
    ///
    /// // Set the autolevel gains, vertical hold in the yaw slot.
    /// config.flight_mode[P1].level_gain = [30, 30, 15];
    ///
    /// // Forward flight runs rate-only with softer sticks.
    /// config.flight_mode[P2].p_gain = [30, 30, 50];
    /// config.flight_mode[P2].stick_rate = [4, 4, 3];
    ///
    /// // Select the gyro filter and loop rate.
    /// config.gyro_lpf = GyroLpf::Hz21;
    /// config.fast_loop = false;
    ///
    /// // The configuration is ready to use.
    /// let mut state = ControlState::new();
    /// let mut gyro = [12, -3, 5];
    /// let tick = TickInput {
    ///     gyro_raw: gyro,
    ///     acc_vert: 0.1,
    ///     aileron: 0,
    ///     elevator: 0,
    ///     rudder: 0,
    /// };
    /// state.sample(&config, &tick, &mut gyro, 3571);
    ///
    /// let cycle = CycleInput {
    ///     angle: [0, 0],
    ///     acc_vert: 0.1,
    /// };
    /// state.combine(&config, &cycle, &mut gyro);
    /// ```
    pub fn new() -> Self {
        Self {
            flight_mode: [FlightModeConfig::new(); FLIGHT_MODES],
            gyro_lpf: GyroLpf::NoFilter,
            fast_loop: false,
            vibration_display: false,
            acc_vert_filter: 0,
        }
    }
}
