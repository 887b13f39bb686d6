//! Accelerometer access and angle tracking.
//!
//! The hardware is abstracted behind [`Accelerometer`] so the tracker can be
//! driven by the real MPU-6050 in production and by scripted fakes in tests.

pub mod mpu6050;
pub mod sampler;
pub mod tracker;
pub mod vec3;

use crate::sensor::vec3::Vec3;

/// A 3-axis accelerometer.
///
/// `read` returns one acceleration sample in g. Reads may fail transiently
/// (bus glitches, device still waking up); callers are expected to retry.
pub trait Accelerometer {
    fn read(&mut self) -> anyhow::Result<Vec3>;
}
