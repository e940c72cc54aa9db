// src/stabilizer/sampler.rs

//! # Per-Tick Sampler
//!
//! This module provides the high-rate half of the stabilizer. The sampler
//! runs once per control loop tick, keeps the filters and integrators
//! current, and accumulates the smoothed gyro samples the output combiner
//! later averages. The computation is straight-line arithmetic with no
//! waiting of any kind, so a call fits inside a hard per-tick deadline.

use crate::config::{FlightControlConfig, NUM_AXES, VERT};
use crate::pid::{axis_inputs, integrate_rate, integrate_vertical, map_rate, scale_increment};
use crate::stabilizer::{ControlState, TickInput};

impl ControlState {
    /// Advances all per-tick state by one control loop iteration.
    ///
    /// `gyro` carries the calibrated gyro samples and is smoothed in place,
    /// so downstream consumers of the shared array see the filtered values.
    /// The raw samples in `input` feed only the vibration estimate.
    /// `period_counts` is the time since the previous tick in 2.5 MHz timer
    /// counts; increments are scaled by it so that integral growth per unit
    /// of wall-clock time stays constant while the loop rate varies.
    ///
    /// Every rate integrator is clamped to its profile and axis constraint
    /// immediately after the update, and every vertical integrator to its
    /// output limit, so no caller can observe an excursion past a
    /// configured bound.
    pub fn sample(
        &mut self,
        config: &FlightControlConfig,
        input: &TickInput,
        gyro: &mut [i16; NUM_AXES],
        period_counts: u32,
    ) {
        self.noise.update(&input.gyro_raw, config.vibration_display);

        let sticks = axis_inputs(input.aileron, input.elevator, input.rudder);

        for axis in 0..NUM_AXES {
            self.gyro_filter
                .apply(axis, &mut gyro[axis], config.gyro_lpf, config.fast_loop);

            for (profile, mode) in config.flight_mode.iter().enumerate() {
                let stick = map_rate(sticks[axis], mode.stick_rate[axis]);

                // Gyro and stick share one increment, so stick deflection
                // holds the heading-hold integrator off rather than
                // fighting it.
                let increment =
                    scale_increment(gyro[axis] as i32 + stick as i32, period_counts);
                integrate_rate(
                    &mut self.integral_gyro[profile][axis],
                    increment,
                    mode.i_constrain[axis],
                );
            }

            // Sum the smoothed readings for the combiner to average.
            self.avg_gyro[axis] += gyro[axis] as i32;
        }

        for (profile, mode) in config.flight_mode.iter().enumerate() {
            integrate_vertical(
                &mut self.integral_acc_vert[profile],
                input.acc_vert,
                config.acc_vert_filter,
                mode.i_limit[VERT],
            );
        }

        self.avg_count += 1;
    }
}
