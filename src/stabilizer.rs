// src/stabilizer.rs

//! # Flight Stabilizer Module
//!
//! This module provides the scheduler-facing surface of the crate: the
//! [`ControlState`] aggregate that owns all persistent stabilization state,
//! the input structures for the two entry points, and the entry points
//! themselves. [`ControlState::sample`] runs every control loop tick;
//! [`ControlState::combine`] runs once per supervisory cycle, just before
//! the published corrections are mixed to the actuators.

pub mod combiner;
pub mod sampler;
pub mod state;
pub use state::*;
