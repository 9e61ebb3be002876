//! MLX90393 Per-Axis Resolution Setting
//!
//! Resolution selects the effective bit-width of the digitized sample.
//! The sensor always reports samples in a fixed 16-bit field, so the two
//! highest settings arrive with a constant offset that the decoder must
//! subtract before the value is a signed count.

/// Effective ADC resolution per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Resolution {
    Bit16 = 0,
    Bit17 = 1,
    Bit18 = 2,
    Bit19 = 3,
}

impl Resolution {
    /// Column index into the LSB lookup table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Offset baked into the reported 16-bit field at this resolution.
    ///
    /// The 18/19-bit settings report an unsigned value biased by this
    /// constant; the decoder removes it with a wrapping 16-bit
    /// subtraction so samples above mid-scale stay in range. 16/17-bit
    /// samples need no correction.
    pub const fn count_offset(self) -> u16 {
        match self {
            Resolution::Bit16 | Resolution::Bit17 => 0,
            Resolution::Bit18 => 0x8000,
            Resolution::Bit19 => 0x4000,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::Bit16
    }
}
