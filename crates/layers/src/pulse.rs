use foundation::time::Time;

/// Continuously repeating breathe animation for a marker circle.
///
/// One cycle takes `period_s`; the waveform is a raised-cosine window, so
/// each cycle eases in and out and the loop point has zero velocity. Scale
/// runs `1 → scale_peak → 1` and the opacity factor `1 → 1 − fade → 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pulse {
    pub period_s: f64,
    pub scale_peak: f64,
    pub fade: f64,
}

/// Glow circle animation: scale to 1.3×, fade to half opacity.
pub const GLOW_PULSE: Pulse = Pulse {
    period_s: 1.0,
    scale_peak: 1.3,
    fade: 0.5,
};

/// Core circle animation: scale to 1.2×, fade to 0.6 opacity.
pub const CORE_PULSE: Pulse = Pulse {
    period_s: 1.0,
    scale_peak: 1.2,
    fade: 0.4,
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PulseSample {
    pub scale: f64,
    /// Multiplier applied to the circle's base opacity.
    pub opacity_factor: f64,
}

impl Pulse {
    pub fn sample(&self, time: Time) -> PulseSample {
        let w = self.window(time);
        PulseSample {
            scale: 1.0 + (self.scale_peak - 1.0) * w,
            opacity_factor: 1.0 - self.fade * w,
        }
    }

    /// Raised-cosine window over the cycle: 0 at the loop point, 1 mid-cycle.
    fn window(&self, time: Time) -> f64 {
        if self.period_s <= 0.0 {
            return 0.0;
        }
        let u = (time.0 / self.period_s).rem_euclid(1.0);
        0.5 - 0.5 * (std::f64::consts::TAU * u).cos()
    }
}
