//! Field-to-Force Calibration
//!
//! The magnet/sensor assembly is characterized offline by loading it with
//! known weights and fitting a line through (field, force) pairs. This
//! module only applies the resulting constants; it performs no fitting.

/// Linear calibration constants from an offline fit.
///
/// # Example
/// ```
/// use mlx90393_force::force::ForceCalibration;
///
/// // Constants from one reference fixture's calibration run.
/// let cal = ForceCalibration::new(51.940294, -692.99255);
/// let force_n = cal.force(13.5);
/// assert!(force_n >= 0.0);
/// ```
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ForceCalibration {
    pub slope: f32,
    pub intercept: f32,
}

impl ForceCalibration {
    pub const fn new(slope: f32, intercept: f32) -> Self {
        Self { slope, intercept }
    }

    /// Maps a field reading in mT to force, floored at zero.
    pub fn force(&self, field_mt: f32) -> f32 {
        (self.slope * field_mt + self.intercept).max(0.0)
    }
}
