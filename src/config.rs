//! Driver Configuration
//!
//! The decode path depends on the gain, resolution and hallconf the
//! sensor is running with, plus the additive Z offset that keeps field
//! readings non-negative over the working range. These are grouped here
//! so one struct travels with the driver and the decoder always agrees
//! with the hardware settings.

use crate::{gain::Gain, resolution::Resolution, scale::HallConf};

/// Sensor settings the decode path depends on.
///
/// Immutable while a measurement is in flight; reconfigure only between
/// cycles.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SensorConfig {
    /// Analog gain; selects the scale-table row used by every decode.
    pub gain: Gain,
    /// Z-axis resolution; selects the scale-table column and the offset
    /// correction applied during decode.
    pub resolution: Resolution,
    /// Hall-plate configuration; selects the active table half.
    pub hallconf: HallConf,
    /// Additive bias in mT keeping Z readings non-negative.
    pub z_offset_mt: f32,
}

impl Default for SensorConfig {
    /// Gain 1x, 16-bit resolution, HALLCONF 0xC, +20 mT Z offset.
    fn default() -> Self {
        Self {
            gain: Gain::X1,
            resolution: Resolution::Bit16,
            hallconf: HallConf::C,
            z_offset_mt: 20.0,
        }
    }
}
