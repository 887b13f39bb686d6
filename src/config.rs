use std::net::Ipv4Addr;
use std::time::Duration;

use crate::sensor::tracker::AngleMode;

/// Fixed appliance configuration.
///
/// Built once in `main` and passed by reference into each component.
/// There is no runtime configuration surface: no environment variables,
/// no command line, no config file.
#[derive(Debug, Clone)]
pub struct Config {
    /// Access point SSID (rendered into the portal page)
    pub ssid: String,
    /// Access point WPA2 passphrase
    pub password: String,
    /// Static AP address; also the answer to every DNS query
    pub ap_ip: Ipv4Addr,
    /// AP netmask
    pub netmask: Ipv4Addr,
    /// AP gateway (same box)
    pub gateway: Ipv4Addr,
    /// HTTP listen address
    pub http_addr: String,
    /// DNS listen address
    pub dns_addr: String,
    /// Which axis the tracked angle rotates about
    pub angle_mode: AngleMode,
    /// I2C bus device path
    pub i2c_bus: String,
    /// 7-bit accelerometer I2C address
    pub accel_addr: u8,
    /// Background sensor refresh cadence
    pub sample_period: Duration,
    /// Settle time before a calibration read
    pub settle_delay: Duration,
    /// Sensor read attempts before giving up
    pub read_retries: u32,
    /// Delay between failed sensor read attempts
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ssid: "TiltPortal".to_string(),
            password: "angle1234".to_string(),
            ap_ip: Ipv4Addr::new(192, 168, 4, 1),
            netmask: Ipv4Addr::new(255, 255, 255, 0),
            gateway: Ipv4Addr::new(192, 168, 4, 1),
            http_addr: "0.0.0.0:80".to_string(),
            dns_addr: "0.0.0.0:53".to_string(),
            angle_mode: AngleMode::Pitch,
            i2c_bus: "/dev/i2c-1".to_string(),
            accel_addr: 0x68,
            sample_period: Duration::from_millis(100),
            settle_delay: Duration::from_millis(1500),
            read_retries: 3,
            retry_delay: Duration::from_millis(5),
        }
    }
}
