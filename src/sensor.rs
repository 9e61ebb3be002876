//! MLX90393 Blocking Driver Implementation
//!
//! Sequences the sensor's command protocol over a blocking I2C bus:
//!
//! - `initialize`: EXIT_MODE, then RESET, then a settle delay. Leaves the
//!   driver idle and ready to measure. Not retried on failure.
//! - `read_raw` / `read_z_millitesla`: START_MEASUREMENT, a fixed
//!   conversion wait, READ_MEASUREMENT. A failed step surfaces as an
//!   error for that cycle and the driver returns to idle; the next cycle
//!   starts fresh.
//!
//! The sensor converts asynchronously after START_MEASUREMENT, so start
//! and read are decoupled by a worst-case conversion delay. All waits are
//! fixed durations against the caller-provided [`DelayNs`]; there is no
//! deadline tracking, and commands are never pipelined because each one
//! depends on the mode the previous command left the sensor in.

use crate::{
    address::Address,
    commands::{AxisMask, Command},
    config::SensorConfig,
    error::Error,
    measurement::RawMeasurement,
    status::Status,
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

/// Wait between the write and read phase of every exchange, ms.
pub const TRANSCEIVE_DELAY_MS: u32 = 10;
/// Settle wait after a RESET command, ms.
pub const RESET_SETTLE_MS: u32 = 5;
/// Wait after a completed reset sequence before the sensor accepts
/// further commands, ms.
pub const POST_RESET_DELAY_MS: u32 = 10;
/// Worst-case internal conversion time between start and read, ms.
pub const CONVERSION_DELAY_MS: u32 = 10;

/// Protocol position of the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DriverState {
    /// Sensor mode not established; only `initialize` is valid.
    Unknown,
    /// Initialized and between measurements.
    Idle,
}

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
    fn transceive(
        &mut self,
        delay: &mut impl DelayNs,
        command: Command,
        rx: &mut [u8],
    ) -> Result<Status, Error<I>> {
        self.i2c
            .write(self.address, &[command.encode()])
            .map_err(Error::Write)?;
        delay.delay_ms(TRANSCEIVE_DELAY_MS);
        self.i2c.read(self.address, rx).map_err(Error::Read)?;
        Ok(Status(rx[0]))
    }

    /// Exchange returning only the status byte, checked against the
    /// command's accepted codes.
    fn command(&mut self, delay: &mut impl DelayNs, command: Command) -> Result<Status, Error<I>> {
        let mut rx = [0u8; 1];
        let status = self.transceive(delay, command, &mut rx)?;
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
    pub fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.state = DriverState::Unknown;
        self.command(delay, Command::ExitMode)?;
        self.command(delay, Command::Reset)?;
        delay.delay_ms(RESET_SETTLE_MS);
        delay.delay_ms(POST_RESET_DELAY_MS);
        self.state = DriverState::Idle;
        Ok(())
    }

    /// Run one measurement cycle and return the raw counts for all three
    /// axes.
    ///
    /// Fails fast with [`Error::NotInitialized`] (no bus traffic) until
    /// `initialize` has succeeded. Any failed step means no reading this
    /// cycle; the driver is idle again and the next cycle starts fresh.
    pub fn read_raw(&mut self, delay: &mut impl DelayNs) -> Result<RawMeasurement, Error<I>> {
        if self.state != DriverState::Idle {
            return Err(Error::NotInitialized);
        }

        self.command(delay, Command::StartMeasurement(AxisMask::ALL))?;
        delay.delay_ms(CONVERSION_DELAY_MS);

        let command = Command::ReadMeasurement(AxisMask::ALL);
        // status byte plus two data bytes per axis
        let mut rx = [0u8; AxisMask::ALL.data_len() + 1];
        let status = self.transceive(delay, command, &mut rx)?;
        if !status.accepted_for(command) {
            return Err(Error::Rejected(command, status));
        }

        Ok(RawMeasurement::from_bytes([
            rx[1], rx[2], rx[3], rx[4], rx[5], rx[6],
        ]))
    }

    /// Run one measurement cycle and decode the Z axis to mT using the
    /// current settings.
    pub fn read_z_millitesla(&mut self, delay: &mut impl DelayNs) -> Result<f32, Error<I>> {
        let raw = self.read_raw(delay)?;
        Ok(raw.z_millitesla(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::{DriverState, Mlx90393};
    use crate::{
        address::Address,
        commands::{AxisMask, Command},
        config::SensorConfig,
        error::Error,
    };
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
    use std::vec;

    const ADDR: u8 = 0x0C;

    fn driver(transactions: &[Transaction]) -> Mlx90393<Mock> {
        Mlx90393::new(
            Mock::new(transactions),
            Address::default(),
            SensorConfig::default(),
        )
    }

    #[test]
    fn initialize_sequences_exit_then_reset() {
        let mut sensor = driver(&[
            Transaction::write(ADDR, vec![0x80]),
            Transaction::read(ADDR, vec![0x00]),
            Transaction::write(ADDR, vec![0xF0]),
            Transaction::read(ADDR, vec![0x01 << 2]),
        ]);
        let mut delay = NoopDelay::new();

        sensor.initialize(&mut delay).unwrap();
        assert_eq!(sensor.state(), DriverState::Idle);
        sensor.release().done();
    }

    #[test]
    fn measurement_cycle_decodes_z() {
        let mut sensor = driver(&[
            Transaction::write(ADDR, vec![0x80]),
            Transaction::read(ADDR, vec![0x00]),
            Transaction::write(ADDR, vec![0xF0]),
            Transaction::read(ADDR, vec![0x01 << 2]),
            // start, all axes
            Transaction::write(ADDR, vec![0x3E]),
            Transaction::read(ADDR, vec![0x00]),
            // read: status + x + y + z, z = 100 counts
            Transaction::write(ADDR, vec![0x4E]),
            Transaction::read(ADDR, vec![0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x64]),
        ]);
        let mut delay = NoopDelay::new();

        sensor.initialize(&mut delay).unwrap();
        let mt = sensor.read_z_millitesla(&mut delay).unwrap();
        // 100 counts at gain 1x / 16-bit / hallconf 0xC, plus 20 mT offset.
        assert_eq!(mt, 100.0 * 0.242 / 1000.0 + 20.0);
        sensor.release().done();
    }

    #[test]
    fn start_tolerates_already_measuring() {
        let mut sensor = driver(&[
            Transaction::write(ADDR, vec![0x80]),
            Transaction::read(ADDR, vec![0x00]),
            Transaction::write(ADDR, vec![0xF0]),
            Transaction::read(ADDR, vec![0x01 << 2]),
            Transaction::write(ADDR, vec![0x3E]),
            Transaction::read(ADDR, vec![0x08 << 2]),
            Transaction::write(ADDR, vec![0x4E]),
            Transaction::read(ADDR, vec![0x00, 0, 0, 0, 0, 0, 0]),
        ]);
        let mut delay = NoopDelay::new();

        sensor.initialize(&mut delay).unwrap();
        assert!(sensor.read_raw(&mut delay).is_ok());
        sensor.release().done();
    }

    #[test]
    fn failed_exit_aborts_initialization_and_reads_fail_fast() {
        // EXIT_MODE write NACKs; nothing further touches the bus.
        let mut sensor = driver(&[
            Transaction::write(ADDR, vec![0x80]).with_error(ErrorKind::Other)
        ]);
        let mut delay = NoopDelay::new();

        assert!(matches!(
            sensor.initialize(&mut delay),
            Err(Error::Write(_))
        ));
        assert_eq!(sensor.state(), DriverState::Unknown);
        assert!(matches!(
            sensor.read_raw(&mut delay),
            Err(Error::NotInitialized)
        ));
        sensor.release().done();
    }

    #[test]
    fn reset_without_ack_is_rejected() {
        let mut sensor = driver(&[
            Transaction::write(ADDR, vec![0x80]),
            Transaction::read(ADDR, vec![0x00]),
            Transaction::write(ADDR, vec![0xF0]),
            Transaction::read(ADDR, vec![0x00]),
        ]);
        let mut delay = NoopDelay::new();

        assert!(matches!(
            sensor.initialize(&mut delay),
            Err(Error::Rejected(Command::Reset, _))
        ));
        assert_eq!(sensor.state(), DriverState::Unknown);
        sensor.release().done();
    }

    #[test]
    fn read_with_error_status_discards_data() {
        let mut sensor = driver(&[
            Transaction::write(ADDR, vec![0x80]),
            Transaction::read(ADDR, vec![0x00]),
            Transaction::write(ADDR, vec![0xF0]),
            Transaction::read(ADDR, vec![0x01 << 2]),
            Transaction::write(ADDR, vec![0x3E]),
            Transaction::read(ADDR, vec![0x00]),
            // plausible data bytes under an error status must not leak out
            Transaction::write(ADDR, vec![0x4E]),
            Transaction::read(ADDR, vec![0x04 << 2, 0, 1, 0, 2, 0, 3]),
        ]);
        let mut delay = NoopDelay::new();

        sensor.initialize(&mut delay).unwrap();
        let result = sensor.read_raw(&mut delay);
        match result {
            Err(Error::Rejected(Command::ReadMeasurement(mask), status)) => {
                assert_eq!(mask, AxisMask::ALL);
                assert_eq!(status.code(), 0x04);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        // Still idle: the next cycle may try again.
        assert_eq!(sensor.state(), DriverState::Idle);
        sensor.release().done();
    }
}
