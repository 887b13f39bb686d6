//! Relative tilt tracking against a calibrated gravity reference.

use std::time::Duration;

use crate::sensor::Accelerometer;
use crate::sensor::vec3::{Vec3, signed_angle};

/// Which axis the tracked angle rotates about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    /// Rotation about +Y
    Pitch,
    /// Rotation about +X
    Roll,
}

impl AngleMode {
    pub fn axis(self) -> Vec3 {
        match self {
            AngleMode::Pitch => Vec3::Y,
            AngleMode::Roll => Vec3::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AngleMode::Pitch => "PITCH",
            AngleMode::Roll => "ROLL",
        }
    }
}

/// Tracks the signed rotation of the gravity vector about a fixed axis,
/// relative to the reference captured at the last calibration.
///
/// Until the first successful calibration the reference is straight-down
/// gravity for a device lying flat (`Vec3::Z`).
pub struct AngleTracker<A> {
    accel: A,
    mode: AngleMode,
    axis: Vec3,
    reference: Vec3,
    last_delta: f32,
    settle_delay: Duration,
    read_retries: u32,
    retry_delay: Duration,
}

impl<A: Accelerometer> AngleTracker<A> {
    pub fn new(
        accel: A,
        mode: AngleMode,
        settle_delay: Duration,
        read_retries: u32,
        retry_delay: Duration,
    ) -> Self {
        Self {
            accel,
            mode,
            axis: mode.axis(),
            reference: Vec3::Z,
            last_delta: 0.0,
            settle_delay,
            read_retries,
            retry_delay,
        }
    }

    /// Captures the current gravity vector as the new reference.
    ///
    /// Waits out the settle delay first so the device has stopped moving.
    /// On read exhaustion the previous reference and cached delta are left
    /// untouched.
    pub async fn recalibrate(&mut self) -> anyhow::Result<()> {
        tokio::time::sleep(self.settle_delay).await;
        let sample = self.read_with_retry().await?;
        self.reference = sample.normalized();
        self.last_delta = 0.0;
        Ok(())
    }

    /// Reads the sensor and returns the fresh signed angle in degrees.
    ///
    /// The cached delta is updated only on success; a failed read leaves it
    /// at the last good value.
    pub async fn delta(&mut self) -> anyhow::Result<f32> {
        let sample = self.read_with_retry().await?;
        let delta = signed_angle(self.reference, sample, self.axis);
        self.last_delta = delta;
        Ok(delta)
    }

    /// Last successfully computed delta, without touching the bus.
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    pub fn mode(&self) -> AngleMode {
        self.mode
    }

    /// Switches the rotation axis.
    ///
    /// The reference is deliberately kept: the delta stays mathematically
    /// valid but is stale for the new axis until the caller recalibrates.
    pub fn set_mode(&mut self, mode: AngleMode) {
        self.mode = mode;
        self.axis = mode.axis();
    }

    async fn read_with_retry(&mut self) -> anyhow::Result<Vec3> {
        let mut last_err = None;

        for attempt in 1..=self.read_retries {
            match self.accel.read() {
                Ok(sample) => return Ok(sample),
                Err(e) => {
                    tracing::debug!(attempt, "sensor read failed: {e}");
                    last_err = Some(e);
                    if attempt < self.read_retries {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("sensor read never attempted")))
    }
}
