//! MLX90393 Status Byte Interpretation
//!
//! The first byte of every response is a status byte. Its upper six bits
//! form a status code (burst, wake-on-change, single-measurement, error,
//! single-error-detect and reset flags); the low two bits count pending
//! data bytes and carry no outcome information.
//!
//! Which codes mean success depends on the command that was issued — the
//! driver enforces that per command. `classify` only names the codes this
//! crate knows about.

use crate::commands::Command;

/// A raw status byte as returned by the sensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Status(pub u8);

/// Decoded meaning of a status code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DriverStatus {
    /// Code 0x00: command accepted, no flags set.
    Ok,
    /// Error flag (0x04) set: the sensor rejected the command.
    Error,
    /// Code 0x08: single-measurement mode already active.
    /// Tolerated as success for START_MEASUREMENT only.
    SingleMeasurementActive,
    /// Code 0x01: the reset flag, reported after a soft reset.
    ResetAcknowledged,
    /// Any other code. Always treated as failure.
    Other,
}

impl Status {
    /// The 6-bit status code (low two bits discarded).
    pub const fn code(self) -> u8 {
        self.0 >> 2
    }

    /// Whether this status counts as success for the given command.
    ///
    /// Exactly the codes below are accepted; everything else is a
    /// protocol rejection:
    /// - EXIT_MODE: 0x00
    /// - RESET: 0x01 (the reset flag must be reported)
    /// - START_MEASUREMENT: 0x00, or 0x08 (already measuring)
    /// - READ_MEASUREMENT: 0x00, anything else invalidates the data
    pub const fn accepted_for(self, command: Command) -> bool {
        match command {
            Command::ExitMode => self.code() == 0x00,
            Command::Reset => self.code() == 0x01,
            Command::StartMeasurement(_) => matches!(self.code(), 0x00 | 0x08),
            Command::ReadMeasurement(_) => self.code() == 0x00,
        }
    }

    /// Maps the status code to its decoded meaning.
    pub const fn classify(self) -> DriverStatus {
        match self.code() {
            0x00 => DriverStatus::Ok,
            code if code & 0x04 != 0 => DriverStatus::Error,
            0x08 => DriverStatus::SingleMeasurementActive,
            0x01 => DriverStatus::ResetAcknowledged,
            _ => DriverStatus::Other,
        }
    }
}
