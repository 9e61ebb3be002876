//! Error types for asynchronous MLX90393 operations.
//!
//! Mirrors the blocking [`crate::error`] module over the async I2C trait.

use crate::{commands::Command, status::Status};
use core::fmt::{Debug, Formatter};
use embedded_hal_async::i2c::I2c;

/// Error for async sensor operations.
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
