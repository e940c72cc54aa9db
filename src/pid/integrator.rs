// src/pid/integrator.rs

//! # Rate and Vertical Integrators
//!
//! This module provides the integrator primitives behind the heading-hold
//! and altitude-hold terms. Rate integrators accumulate in i32 with the
//! increment scaled by the elapsed tick period, so integral growth per unit
//! time stays constant as the loop rate varies. The vertical integrator
//! accumulates in f32 with a small multiplicative decay to temper residual
//! DC offsets in the accelerometer signal.

/// T1 timer counts in one 700 Hz control cycle (2,500,000 / 700).
const STANDARD_LOOP: f32 = 3571.0;

/// Scales an integrator increment by the elapsed tick period.
///
/// `period_counts` is the time since the previous tick in 2.5 MHz timer
/// counts. The factor is applied in f32 and the result truncated toward
/// zero.
pub fn scale_increment(increment: i32, period_counts: u32) -> i32 {
    let factor = period_counts as f32 / STANDARD_LOOP;
    (increment as f32 * factor) as i32
}

/// Advances a rate integrator and clamps it to the anti-windup bound.
pub fn integrate_rate(integral: &mut i32, increment: i32, constrain: i32) {
    *integral += increment;

    if *integral > constrain {
        *integral = constrain;
    }
    if *integral < -constrain {
        *integral = -constrain;
    }
}

/// Advances a vertical acceleration integrator.
///
/// Adds the sample, shrinks the total by `decay` hundredths of a percent,
/// and clamps the result to the vertical output limit.
pub fn integrate_vertical(integral: &mut f32, sample: f32, decay: u8, limit: i32) {
    *integral += sample;

    let keep = 1.0 - decay as f32 / 10000.0;
    *integral *= keep;

    let bound = limit as f32;
    if *integral > bound {
        *integral = bound;
    }
    if *integral < -bound {
        *integral = -bound;
    }
}
