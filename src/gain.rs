//! MLX90393 Analog Gain Setting
//!
//! The gain is applied before digitization; higher gain means smaller
//! field strength per raw count. The discriminant doubles as the row
//! index into the LSB lookup table.

/// Analog gain levels, highest amplification first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Gain {
    X5 = 0,
    X4 = 1,
    X3 = 2,
    X2_5 = 3,
    X2 = 4,
    X1_67 = 5,
    X1_33 = 6,
    X1 = 7,
}

impl Gain {
    /// Row index into the LSB lookup table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Default for Gain {
    fn default() -> Self {
        Self::X1
    }
}
