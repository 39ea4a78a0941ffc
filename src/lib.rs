//! Maps device orientation to an audio playback rate, for playing back
//! recordings faster or slower by tilting the device.
//!
//! * [common::Vector3] - a minimal 3D vector with length and dot ratio.
//! * [motion] - [MotionRateMapper](motion::MotionRateMapper), turning gravity
//!   samples into a bounded playback rate and a speed band for display.
//! * [playback] - the slow, fast, chipmunk, darth vader and motion effect
//!   presets, and a session driving a host supplied audio engine.
//!
//! All per-sample computation is total and allocation free: degenerate or
//! non-finite samples yield an in-range rate instead of an error.
//!
//! The crate logs through the [log](https://docs.rs/log) facade and never
//! installs a logger itself.

pub mod common;
pub mod motion;
pub mod playback;
