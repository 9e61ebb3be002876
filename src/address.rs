//! MLX90393 I2C Address Configuration
//!
//! The MLX90393 exposes a 7-bit I2C address in the range 0x0C..=0x0F,
//! selected by the A0/A1 address pins. This allows up to four sensors
//! on the same bus.

/// Represents an MLX90393 I2C address.
///
/// The address is determined by the A0 and A1 pins:
/// - A1=0, A0=0: 0x0C (default)
/// - A1=0, A0=1: 0x0D
/// - A1=1, A0=0: 0x0E
/// - A1=1, A0=1: 0x0F
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Default for Address {
    /// Returns the default I2C address (0x0C), used when both address
    /// pins are tied to GND.
    fn default() -> Self {
        Self(0x0C)
    }
}

impl From<Address> for u8 {
    /// Converts the address wrapper to raw u8 value.
    /// Used internally for I2C communication.
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    /// Creates an address from raw u8 value.
    /// Typically one of 0x0C..=0x0F.
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
