//! MPU-6050 accelerometer driver.
//!
//! Generic over any [`embedded_hal::i2c::I2c`] bus; production wires it to
//! `linux_embedded_hal::I2cdev`. Only the acceleration path of the chip is
//! used: two initialization writes, then 6-byte burst reads.

use embedded_hal::i2c::I2c;
use std::thread;
use std::time::Duration;

use crate::sensor::Accelerometer;
use crate::sensor::vec3::Vec3;

/// Power management register; writing 0 wakes the device from sleep.
const PWR_MGMT_1: u8 = 0x6B;
/// Accelerometer range register; writing 0 selects +/-2g full scale.
const ACCEL_CONFIG: u8 = 0x1C;
/// First of six acceleration output registers (XH XL YH YL ZH ZL).
const ACCEL_XOUT_H: u8 = 0x3B;
/// LSB per g at +/-2g full scale.
const ACCEL_SCALE: f32 = 16384.0;

pub struct Mpu6050<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C: I2c> Mpu6050<I2C> {
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Wakes the chip and selects the +/-2g range.
    ///
    /// Runs once at startup, before the runtime is busy; the settle sleeps
    /// block only the startup path.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(self.addr, &[PWR_MGMT_1, 0x00])?;
        thread::sleep(Duration::from_millis(100));
        self.i2c.write(self.addr, &[ACCEL_CONFIG, 0x00])?;
        thread::sleep(Duration::from_millis(10));
        Ok(())
    }

    /// Reads one acceleration sample in g.
    pub fn read_accel(&mut self) -> Result<Vec3, I2C::Error> {
        let mut raw = [0u8; 6];
        self.i2c.write_read(self.addr, &[ACCEL_XOUT_H], &mut raw)?;

        let ax = i16::from_be_bytes([raw[0], raw[1]]) as f32 / ACCEL_SCALE;
        let ay = i16::from_be_bytes([raw[2], raw[3]]) as f32 / ACCEL_SCALE;
        let az = i16::from_be_bytes([raw[4], raw[5]]) as f32 / ACCEL_SCALE;

        Ok(Vec3::new(ax, ay, az))
    }
}

impl<I2C: I2c> Accelerometer for Mpu6050<I2C> {
    fn read(&mut self) -> anyhow::Result<Vec3> {
        self.read_accel()
            .map_err(|e| anyhow::anyhow!("accelerometer read failed: {e:?}"))
    }
}
