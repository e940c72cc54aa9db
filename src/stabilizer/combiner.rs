// src/stabilizer/combiner.rs

//! # Output Combiner
//!
//! This module provides the low-rate half of the stabilizer. Once per
//! supervisory cycle, just ahead of actuator mixing, the combiner averages
//! the gyro samples accumulated since the last call, blends the
//! proportional and integral terms for both flight mode profiles, and
//! publishes the final corrections. Everything here is integer arithmetic;
//! the multiply, shift and clamp order is part of the control tuning and
//! must not be reordered.

use crate::config::{FlightControlConfig, NUM_AXES, VERT, YAW};
use crate::stabilizer::{ControlState, CycleInput};

// Empirical output shift that maps the summed terms onto the most useful
// actuator range.
const PID_SCALE: u32 = 6;

impl ControlState {
    /// Combines the accumulated tick data into the published corrections.
    ///
    /// The smoothed gyro samples collected by the sampler are averaged over
    /// the elapsed tick count and written back into `gyro`, so downstream
    /// consumers of the shared array see the cycle average. The averaging
    /// accumulator and its tick counter reset together; rate and vertical
    /// integrators carry across calls untouched.
    ///
    /// Results land in [`pid_gyros`](ControlState::pid_gyros) for the rate
    /// corrections and [`pid_accs`](ControlState::pid_accs) for the
    /// roll/pitch leveling and vertical hold corrections, and stay valid
    /// until the next call.
    ///
    /// # Panics
    ///
    /// Panics if no tick has been sampled since the last combination. The
    /// scheduler must run the sampler at least once per supervisory cycle.
    pub fn combine(
        &mut self,
        config: &FlightControlConfig,
        input: &CycleInput,
        gyro: &mut [i16; NUM_AXES],
    ) {
        assert!(
            self.avg_count > 0,
            "no ticks sampled since the last combination"
        );

        for axis in 0..NUM_AXES {
            // Average the accumulated samples over the window and hand the
            // averaged reading back to the shared gyro array.
            let average = (self.avg_gyro[axis] / self.avg_count as i32) as i16;
            gyro[axis] = average;
            self.avg_gyro[axis] = 0;

            for (profile, mode) in config.flight_mode.iter().enumerate() {
                // Yaw starts from the heading trim so the bias rides the
                // gain stages; other axes start clean so nothing
                // accumulates cross-axis.
                let mut p_term: i32 = if axis == YAW {
                    (mode.yaw_trim as i32) << 6
                } else {
                    0
                };
                p_term += average as i32 * mode.p_gain[axis] as i32;
                p_term *= 3;

                let mut i_term = self.integral_gyro[profile][axis] * mode.i_gain[axis] as i32;
                i_term >>= 5;

                // The integral contribution to the output is bounded
                // separately from the integrator itself.
                if i_term > mode.i_limit[axis] {
                    i_term = mode.i_limit[axis];
                }
                if i_term < -mode.i_limit[axis] {
                    i_term = -mode.i_limit[axis];
                }

                self.pid_gyros[profile][axis] = ((p_term + i_term) >> PID_SCALE) as i16;

                // Roll and pitch get a proportional-only leveling term from
                // the trimmed angle estimate.
                if axis < YAW {
                    let mut level = input.angle[axis] as i32 - mode.level_trim[axis] as i32;
                    level *= mode.level_gain[axis] as i32;
                    self.pid_accs[profile][axis] = (level >> 8) as i16;
                }
            }
        }

        // The averaging window closes together with its tick count.
        self.avg_count = 0;

        for (profile, mode) in config.flight_mode.iter().enumerate() {
            // The accelerometer reads positive under gravity, so both the
            // sample and its integral are negated to oppose it.
            let mut p_term = (-input.acc_vert) as i32;
            p_term *= mode.level_gain[YAW] as i32;
            p_term *= 3;

            let mut i_term = (-self.integral_acc_vert[profile]) as i32;
            i_term *= mode.i_gain[VERT] as i32;
            i_term >>= 2;

            if i_term > mode.i_limit[VERT] {
                i_term = mode.i_limit[VERT];
            }
            if i_term < -mode.i_limit[VERT] {
                i_term = -mode.i_limit[VERT];
            }

            // The vertical hold term shares the yaw slot of the leveling
            // outputs.
            self.pid_accs[profile][YAW] = ((p_term + i_term) >> PID_SCALE) as i16;
        }
    }
}
