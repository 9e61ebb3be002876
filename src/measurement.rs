//! Measurement Data Processing
//!
//! The MLX90393 measures the magnetic field at a point in space along
//! three axes. A measurement read returns two bytes per requested axis in
//! X, Y, Z order, big-endian, after the status byte.
//!
//! Only the Z axis carries the force signal in this application, so the
//! physical-unit conversion is provided for Z; the X/Y raw counts are
//! still exposed for diagnostics.

use crate::{
    config::SensorConfig,
    gain::Gain,
    resolution::Resolution,
    scale::{lsb, Axis, HallConf},
};

/// Raw measurement counts for the three magnetic axes, before offset
/// correction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub struct RawMeasurement {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl RawMeasurement {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Converts the data bytes of a READ_MEASUREMENT response (all three
    /// axes requested, status byte stripped) into raw counts.
    ///
    /// - 2 bytes per axis in big-endian byte order
    /// - Signed integers, X then Y then Z
    pub const fn from_bytes(data: [u8; 6]) -> Self {
        let x = [data[0], data[1]];
        let y = [data[2], data[3]];
        let z = [data[4], data[5]];
        Self {
            x: i16::from_be_bytes(x),
            y: i16::from_be_bytes(y),
            z: i16::from_be_bytes(z),
        }
    }

    pub const fn to_bytes(&self) -> [u8; 6] {
        let x = self.x.to_be_bytes();
        let y = self.y.to_be_bytes();
        let z = self.z.to_be_bytes();
        [x[0], x[1], y[0], y[1], z[0], z[1]]
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    /// Z-axis field in µT.
    ///
    /// The 18/19-bit settings report through the fixed 16-bit field as an
    /// unsigned value biased by a constant; removing that bias with a
    /// wrapping 16-bit subtraction recovers the signed count for the
    /// whole range, including samples above mid-scale. The result is then
    /// scaled by the LSB sensitivity for the current settings.
    pub fn z_microtesla(&self, hallconf: HallConf, gain: Gain, resolution: Resolution) -> f32 {
        let zi = (self.z as u16).wrapping_sub(resolution.count_offset()) as i16;
        zi as f32 * lsb(hallconf, gain, resolution, Axis::Z)
    }

    /// Z-axis field in mT with the configured positive offset applied,
    /// floored at zero.
    pub fn z_millitesla(&self, config: &SensorConfig) -> f32 {
        let z_ut = self.z_microtesla(config.hallconf, config.gain, config.resolution);
        (z_ut / 1000.0 + config.z_offset_mt).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::RawMeasurement;
    use crate::{
        config::SensorConfig,
        gain::Gain,
        resolution::Resolution,
        scale::HallConf,
    };

    #[test]
    fn from_bytes_is_big_endian_xyz() {
        let m = RawMeasurement::from_bytes([0x01, 0x02, 0xFF, 0xFE, 0x00, 0x64]);
        assert_eq!(m, RawMeasurement::new(0x0102, -2, 100));
    }

    #[test]
    fn z_decode_at_16_bit() {
        // 100 counts at gain 1x / 16-bit / hallconf 0xC: 0.242 µT per count.
        let m = RawMeasurement::from_bytes([0, 0, 0, 0, 0x00, 0x64]);
        let config = SensorConfig::default();
        let ut = m.z_microtesla(config.hallconf, config.gain, config.resolution);
        assert_eq!(ut, 100.0 * 0.242);
        assert_eq!(m.z_millitesla(&config), 100.0 * 0.242 / 1000.0 + 20.0);
    }

    #[test]
    fn z_decode_applies_18_bit_offset() {
        let m = RawMeasurement::from_bytes([0, 0, 0, 0, 0x00, 0x64]);
        let at_16 = m.z_microtesla(HallConf::C, Gain::X1, Resolution::Bit16);
        let at_18 = m.z_microtesla(HallConf::C, Gain::X1, Resolution::Bit18);
        // Same raw bytes, shifted by exactly 0x8000 counts at the 18-bit scale.
        assert_eq!(at_18, (100 - 0x8000) as f32 * 0.968);
        assert_eq!(at_16, 100.0 * 0.242);
    }

    #[test]
    fn z_decode_above_mid_scale_at_18_bit_stays_positive() {
        // 0x8064 is 100 counts above the 18-bit bias; it must decode to
        // +100 counts, not wrap past the signed range into the clamp.
        let m = RawMeasurement::from_bytes([0, 0, 0, 0, 0x80, 0x64]);
        assert_eq!(
            m.z_microtesla(HallConf::C, Gain::X1, Resolution::Bit18),
            100.0 * 0.968
        );
    }

    #[test]
    fn z_decode_above_mid_scale_at_19_bit_stays_positive() {
        // 0x8064 under the 19-bit bias of 0x4000 is 0x4064 = 16484 counts.
        let m = RawMeasurement::from_bytes([0, 0, 0, 0, 0x80, 0x64]);
        assert_eq!(
            m.z_microtesla(HallConf::C, Gain::X1, Resolution::Bit19),
            16484.0 * 1.936
        );
    }

    #[test]
    fn z_millitesla_is_floored_at_zero() {
        // Zero counts at 19-bit resolution sit 0x4000 below mid-scale,
        // far past what the +20 mT offset can absorb.
        let m = RawMeasurement::new(0, 0, 0);
        let config = SensorConfig {
            resolution: Resolution::Bit19,
            ..SensorConfig::default()
        };
        assert_eq!(m.z_millitesla(&config), 0.0);
    }
}
