//! MLX90393 Asynchronous Driver Implementation
//!
//! This implementation mirrors the blocking version (sensor.rs) but
//! awaits the bus and the fixed protocol delays instead of blocking,
//! making it suitable for embedded systems running async executors. The
//! state graph and accepted status codes are identical.

use crate::{
    address::Address,
    commands::{AxisMask, Command},
    config::SensorConfig,
    error_async::Error,
    measurement::RawMeasurement,
    sensor::{
        DriverState, CONVERSION_DELAY_MS, POST_RESET_DELAY_MS, RESET_SETTLE_MS,
        TRANSCEIVE_DELAY_MS,
    },
    status::Status,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// Melexis MLX90393 driver.
pub struct Mlx90393<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    config: SensorConfig,
    state: DriverState,
}

impl<I> Mlx90393<I>
where
    I: I2c,
{
    /// Construct a new i2c driver for the MLX90393.
    ///
    /// Performs no bus traffic; call [`Mlx90393::initialize`] before
    /// measuring.
    pub fn new(i2c: I, address: Address, config: SensorConfig) -> Self {
        Self {
            i2c,
            address: address.into(),
            config,
            state: DriverState::Unknown,
        }
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    /// The settings the decode path uses.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Replace the decode settings. Must match the sensor's actual
    /// register configuration; only call between measurement cycles.
    pub fn set_config(&mut self, config: SensorConfig) {
        self.config = config;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// One write-then-read exchange. `rx` receives the status byte at
    /// index 0 followed by any data bytes; it must be sized for the
    /// command's full response.
    async fn transceive(
        &mut self,
        delay: &mut impl DelayNs,
        command: Command,
        rx: &mut [u8],
    ) -> Result<Status, Error<I>> {
        self.i2c
            .write(self.address, &[command.encode()])
            .await
            .map_err(Error::Write)?;
        delay.delay_ms(TRANSCEIVE_DELAY_MS).await;
        self.i2c.read(self.address, rx).await.map_err(Error::Read)?;
        Ok(Status(rx[0]))
    }

    /// Exchange returning only the status byte, checked against the
    /// command's accepted codes.
    async fn command(
        &mut self,
        delay: &mut impl DelayNs,
        command: Command,
    ) -> Result<Status, Error<I>> {
        let mut rx = [0u8; 1];
        let status = self.transceive(delay, command, &mut rx).await?;
        if status.accepted_for(command) {
            Ok(status)
        } else {
            Err(Error::Rejected(command, status))
        }
    }

    /// Establish a known sensor state: exit whatever mode the sensor is
    /// in, reset it, and wait out the settle time.
    ///
    /// On any failure the driver stays uninitialized and reports the
    /// failed step; the caller decides whether to try again.
    pub async fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.state = DriverState::Unknown;
        self.command(delay, Command::ExitMode).await?;
        self.command(delay, Command::Reset).await?;
        delay.delay_ms(RESET_SETTLE_MS).await;
        delay.delay_ms(POST_RESET_DELAY_MS).await;
        self.state = DriverState::Idle;
        Ok(())
    }

    /// Run one measurement cycle and return the raw counts for all three
    /// axes.
    ///
    /// Fails fast with [`Error::NotInitialized`] (no bus traffic) until
    /// `initialize` has succeeded. Any failed step means no reading this
    /// cycle; the driver is idle again and the next cycle starts fresh.
    pub async fn read_raw(&mut self, delay: &mut impl DelayNs) -> Result<RawMeasurement, Error<I>> {
        if self.state != DriverState::Idle {
            return Err(Error::NotInitialized);
        }

        self.command(delay, Command::StartMeasurement(AxisMask::ALL))
            .await?;
        delay.delay_ms(CONVERSION_DELAY_MS).await;

        let command = Command::ReadMeasurement(AxisMask::ALL);
        // status byte plus two data bytes per axis
        let mut rx = [0u8; AxisMask::ALL.data_len() + 1];
        let status = self.transceive(delay, command, &mut rx).await?;
        if !status.accepted_for(command) {
            return Err(Error::Rejected(command, status));
        }

        Ok(RawMeasurement::from_bytes([
            rx[1], rx[2], rx[3], rx[4], rx[5], rx[6],
        ]))
    }

    /// Run one measurement cycle and decode the Z axis to mT using the
    /// current settings.
    pub async fn read_z_millitesla(&mut self, delay: &mut impl DelayNs) -> Result<f32, Error<I>> {
        let raw = self.read_raw(delay).await?;
        Ok(raw.z_millitesla(&self.config))
    }
}
