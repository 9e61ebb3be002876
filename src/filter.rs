//! Exponential Smoothing Filter
//!
//! Field readings are noisy at the millitesla level; the control loop
//! consumes an exponential moving average instead of raw samples. The
//! filter state belongs to the caller's pipeline instance and is only
//! advanced for cycles that produced a reading, so a failed cycle leaves
//! the average untouched.

/// Exponential-moving-average state over a sequence of field readings.
///
/// The first accepted reading seeds the average directly; afterwards each
/// reading is blended with the running value.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ExpSmoother {
    smoothed: f32,
    initialized: bool,
}

impl ExpSmoother {
    pub const fn new() -> Self {
        Self {
            smoothed: 0.0,
            initialized: false,
        }
    }

    /// Feeds one reading through the filter and returns the new average.
    ///
    /// `coefficient` is the weight of the running average, expected in
    /// [0, 1): 0 disables smoothing, values near 1 respond slowly. Values
    /// outside that range are a caller error and produce diverging or
    /// inverted behavior; they are not checked here.
    pub fn update(&mut self, raw: f32, coefficient: f32) -> f32 {
        if self.initialized {
            self.smoothed = raw * (1.0 - coefficient) + self.smoothed * coefficient;
        } else {
            self.smoothed = raw;
            self.initialized = true;
        }
        self.smoothed
    }

    /// The current average. Only meaningful after the first `update`.
    pub fn value(&self) -> f32 {
        self.smoothed
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
