// src/lib.rs

//! # Dual-Profile VTOL Flight Stabilization Core
//!
//! This crate provides a `no_std`, no-alloc Rust rework of the stabilization
//! and attitude-hold control laws from OpenAeroVTOL EVO, an AVR-based flight
//! controller for VTOL transition aircraft. Two independently tuned flight
//! mode profiles are computed side by side every cycle, so the host mixer
//! can blend hover and forward-flight corrections continuously through the
//! transition instead of switching between them.
//!
//! The crate exposes two entry points on [`ControlState`], both driven by
//! the host scheduler. [`ControlState::sample`] runs once per control loop
//! tick: it updates the vibration estimate, smooths the gyro samples in
//! place, advances the rate and vertical integrators, and accumulates gyro
//! samples for averaging. [`ControlState::combine`] runs once per
//! supervisory cycle, just ahead of actuator mixing: it averages the
//! accumulated samples, blends the proportional and integral terms for both
//! profiles, and publishes the final per-axis corrections.
//!
//! Receiver decoding, sensor calibration, actuator mixing, and the timer
//! plumbing that schedules the two entry points all belong to the host
//! firmware; this crate is the numeric kernel between them.

#![no_std]
#![deny(missing_docs)]

pub mod config;
pub mod pid;
pub mod stabilizer;

#[doc(inline)]
pub use stabilizer::*;

#[cfg(test)]
mod test_utils;
