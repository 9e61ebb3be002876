#![no_std]

//! Driver for the Melexis MLX90393 triaxial magnetometer, used here as a
//! hall-effect force sensor: a magnet on a sprung carriage moves over the
//! sensor, the Z-axis field tracks the load, and an offline linear fit
//! maps smoothed field readings to force.
//!
//! The crate owns the sensor's command protocol (exit/reset/start/read
//! and status-byte interpretation), the decode from raw counts to mT, the
//! exponential smoothing and the calibration mapping. Bus bring-up, GPIO
//! and loop scheduling stay with the caller, which provides `embedded-hal`
//! (or `embedded-hal-async`) I2C and delay implementations.

#[cfg(test)]
extern crate std;

pub mod address;
pub mod commands;
pub mod config;
pub mod error;
pub mod error_async;
pub mod filter;
pub mod force;
pub mod gain;
pub mod measurement;
pub mod pipeline;
pub mod resolution;
pub mod scale;
pub mod sensor;
pub mod sensor_async;
pub mod status;
