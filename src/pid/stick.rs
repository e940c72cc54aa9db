// src/pid/stick.rs

//! # Stick Rate Mapper
//!
//! This module maps receiver stick positions onto the gyro axes and applies
//! the per-axis stick rate curve. The mapped stick value is summed with the
//! gyro signal before integration, so stick deflection holds off the
//! heading-hold integrator instead of fighting it.

use crate::config::NUM_AXES;

/// Highest stick rate setting.
pub const STICK_RATE_MAX: u8 = 7;

/// Maps receiver channel order onto axis order.
///
/// Stick polarity has to oppose gyro polarity when the two are summed.
/// Pitch and yaw already oppose their gyros; roll must be reversed.
pub fn axis_inputs(aileron: i16, elevator: i16, rudder: i16) -> [i16; NUM_AXES] {
    [-aileron, elevator, rudder]
}

/// Applies the stick rate curve for one axis.
///
/// Settings 0 through 6 divide the input by 64, 32, 16, 8, 4, 2 and 1.
/// Setting 7 doubles it. The shifts are arithmetic, so negative inputs
/// round toward negative infinity.
pub fn map_rate(input: i16, rate: u8) -> i16 {
    debug_assert!(rate <= STICK_RATE_MAX, "stick rate setting out of range");
    if rate <= 6 {
        input >> (4 - (rate as i32 - 2))
    } else {
        input << (rate as i32 - 6)
    }
}
