//! Per-Cycle Conversion Pipeline
//!
//! Glue between the driver and the control loop: each polling cycle that
//! produced a field reading is smoothed and mapped to force; a cycle that
//! failed feeds nothing, so the filter state carries over unchanged and
//! the consumer sees an explicit "no reading".

use crate::{filter::ExpSmoother, force::ForceCalibration};

/// One smoothed reading with its force interpretation.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ForceReading {
    /// Smoothed Z-axis field in mT.
    pub field_mt: f32,
    /// Calibrated force, floored at zero.
    pub force: f32,
}

/// Smoothing filter plus calibration, owned by one polling loop.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ForcePipeline {
    smoother: ExpSmoother,
    calibration: ForceCalibration,
    /// Filter coefficient in [0, 1); see [`ExpSmoother::update`].
    coefficient: f32,
}

impl ForcePipeline {
    pub const fn new(calibration: ForceCalibration, coefficient: f32) -> Self {
        Self {
            smoother: ExpSmoother::new(),
            calibration,
            coefficient,
        }
    }

    /// Feeds one cycle's field reading through the pipeline.
    ///
    /// Call only for cycles that produced a reading; on a failed cycle
    /// simply skip the call and the filter state is preserved.
    pub fn accept(&mut self, field_mt: f32) -> ForceReading {
        let field_mt = self.smoother.update(field_mt, self.coefficient);
        ForceReading {
            field_mt,
            force: self.calibration.force(field_mt),
        }
    }

    pub fn smoother(&self) -> &ExpSmoother {
        &self.smoother
    }
}
