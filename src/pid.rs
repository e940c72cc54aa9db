// src/pid.rs

//! # Signal Processing Module
//!
//! This module provides the compute functions and state structures behind
//! the stabilizer: the gyro low-pass filter, the rate and vertical
//! integrators, the vibration noise estimator, and the stick rate mapper.

pub mod filter;
pub use filter::*;
pub mod integrator;
pub use integrator::*;
pub mod noise;
pub use noise::*;
pub mod stick;
pub use stick::*;
