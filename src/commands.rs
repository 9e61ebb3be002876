//! MLX90393 Command Set
//!
//! Unlike register-mapped sensors, the MLX90393 is command driven: every
//! bus exchange writes a single command byte and reads back a status byte
//! (plus any data the command produces). The measurement commands carry an
//! axis-selection mask in their low nibble.

/// Axis/temperature selection mask carried by the measurement commands.
///
/// Bit layout (zyxt): Z=0x08, Y=0x04, X=0x02, T=0x01.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AxisMask(pub u8);

impl AxisMask {
    pub const T: AxisMask = AxisMask(0x01);
    pub const X: AxisMask = AxisMask(0x02);
    pub const Y: AxisMask = AxisMask(0x04);
    pub const Z: AxisMask = AxisMask(0x08);
    /// All three magnetic axes, temperature excluded.
    pub const ALL: AxisMask = AxisMask(0x0E);

    /// Number of data bytes a measurement read returns for this mask
    /// (2 bytes per selected channel, status byte not included).
    pub const fn data_len(self) -> usize {
        (self.0.count_ones() * 2) as usize
    }
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Commands understood by the MLX90393.
///
/// Only the four command families the driver sequences are encoded here;
/// the sensor's burst/wake-on-change modes are never entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Command {
    /// Exit whatever mode the sensor is in (0x80).
    /// Issued first during initialization so the command state is known.
    ExitMode,
    /// Soft reset (0xF0). The sensor needs a settle delay afterwards
    /// before it accepts further commands.
    Reset,
    /// Start a single measurement (0x30 | axis mask).
    /// Conversion runs asynchronously inside the sensor.
    StartMeasurement(AxisMask),
    /// Read back the completed measurement (0x40 | axis mask).
    ReadMeasurement(AxisMask),
}

impl Command {
    /// Encodes the command as its single wire byte.
    pub const fn encode(self) -> u8 {
        match self {
            Command::ExitMode => 0x80,
            Command::Reset => 0xF0,
            Command::StartMeasurement(mask) => 0x30 | mask.0,
            Command::ReadMeasurement(mask) => 0x40 | mask.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisMask, Command};

    #[test]
    fn command_bytes_match_datasheet() {
        assert_eq!(Command::ExitMode.encode(), 0x80);
        assert_eq!(Command::Reset.encode(), 0xF0);
        assert_eq!(Command::StartMeasurement(AxisMask::ALL).encode(), 0x3E);
        assert_eq!(Command::ReadMeasurement(AxisMask::ALL).encode(), 0x4E);
    }

    #[test]
    fn axis_mask_data_len() {
        assert_eq!(AxisMask::ALL.data_len(), 6);
        assert_eq!(AxisMask::Z.data_len(), 2);
    }
}
