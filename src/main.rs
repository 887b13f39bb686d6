use std::sync::Arc;

use anyhow::Context;
use linux_embedded_hal::I2cdev;
use tokio::sync::Mutex;
use tracing::{info, warn};

use tiltportal::config::Config;
use tiltportal::dns::DnsResponder;
use tiltportal::sensor::mpu6050::Mpu6050;
use tiltportal::sensor::sampler;
use tiltportal::sensor::tracker::AngleTracker;
use tiltportal::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::default();

    let i2c = I2cdev::new(&cfg.i2c_bus)
        .with_context(|| format!("opening i2c bus {}", cfg.i2c_bus))?;
    let mut accel = Mpu6050::new(i2c, cfg.accel_addr);
    if let Err(e) = accel.init() {
        warn!("accelerometer init failed: {e:?}");
    }

    let mut tracker = AngleTracker::new(
        accel,
        cfg.angle_mode,
        cfg.settle_delay,
        cfg.read_retries,
        cfg.retry_delay,
    );

    info!("Calibrating, keep the device still");
    match tracker.recalibrate().await {
        Ok(()) => info!("Calibrated"),
        Err(e) => warn!("calibration failed, using default reference: {e}"),
    }

    let tracker = Arc::new(Mutex::new(tracker));
    let state = Arc::new(AppState::new(tracker.clone(), cfg.clone()));

    let dns = DnsResponder::bind(&cfg.dns_addr, cfg.ap_ip).await?;
    tokio::spawn(sampler::run(tracker, cfg.sample_period));

    tokio::select! {
        res = server::listener::run(&cfg.http_addr, state) => {
            res?;
        }

        res = dns.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}
