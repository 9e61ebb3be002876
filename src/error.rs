//! Error types for blocking MLX90393 operations.
//!
//! Transport failures (the bus exchange itself) and protocol rejections
//! (the sensor answered with an unexpected status code) stay
//! distinguishable so callers can tell a wiring problem from a sequencing
//! one.

use crate::{commands::Command, status::Status};
use core::fmt::{Debug, Formatter};
use embedded_hal::i2c::I2c;

/// Error for sensor operations.
pub enum Error<I>
where
    I: I2c,
{
    /// The command write phase of an exchange failed on the bus.
    Write(I::Error),
    /// The status/data read phase of an exchange failed on the bus.
    Read(I::Error),
    /// The exchange completed but the status code was not one the issued
    /// command accepts. Any data bytes were discarded.
    Rejected(Command, Status),
    /// A measurement was requested before `initialize` succeeded. No bus
    /// transaction was attempted.
    NotInitialized,
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::Write(e) => f.debug_tuple("Write").field(e).finish(),
            Self::Read(e) => f.debug_tuple("Read").field(e).finish(),
            Self::Rejected(command, status) => f
                .debug_tuple("Rejected")
                .field(command)
                .field(status)
                .field(&status.classify())
                .finish(),
            Self::NotInitialized => f.write_str("NotInitialized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::{
        commands::{AxisMask, Command},
        status::Status,
    };
    use embedded_hal_mock::eh1::i2c::Mock;
    use std::format;

    #[test]
    fn rejection_debug_names_the_status_class() {
        let err: Error<Mock> =
            Error::Rejected(Command::ReadMeasurement(AxisMask::ALL), Status(0x08 << 2));
        let rendered = format!("{:?}", err);
        assert!(rendered.contains("ReadMeasurement"));
        assert!(rendered.contains("SingleMeasurementActive"));
    }
}
