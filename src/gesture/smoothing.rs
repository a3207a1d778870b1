//! Exponential moving average filter for pointer smoothing.
//!
//! Single-pole low-pass: damps landmark jitter while staying responsive
//! (half-life of roughly one frame at alpha = 0.5). State resets whenever
//! the hand is lost so the cursor never drifts back from a stale position.

/// Fixed smoothing factor. Higher = faster, lower = smoother.
pub const DEFAULT_ALPHA: f32 = 0.5;

/// EMA filter for a single axis.
pub struct EmaFilter {
    alpha: f32,
    prev: Option<f32>,
}

impl EmaFilter {
    pub fn new(alpha: f32) -> Self {
        Self { alpha, prev: None }
    }

    /// Filter a raw value. The first sample after a reset passes through.
    pub fn filter(&mut self, raw: f32) -> f32 {
        let smoothed = match self.prev {
            Some(prev) => prev * (1.0 - self.alpha) + raw * self.alpha,
            None => raw,
        };
        self.prev = Some(smoothed);
        smoothed
    }

    /// Clear filter state.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

impl Default for EmaFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

/// Pair of EMA filters for a 2D position.
pub struct EmaFilter2D {
    pub x: EmaFilter,
    pub y: EmaFilter,
}

impl EmaFilter2D {
    pub fn new(alpha: f32) -> Self {
        Self {
            x: EmaFilter::new(alpha),
            y: EmaFilter::new(alpha),
        }
    }

    pub fn filter(&mut self, pos: (f32, f32)) -> (f32, f32) {
        (self.x.filter(pos.0), self.y.filter(pos.1))
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

impl Default for EmaFilter2D {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_passes_through() {
        let mut f = EmaFilter::new(0.5);
        assert!((f.filter(0.8) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_ema_formula() {
        let mut f = EmaFilter::new(0.5);
        f.filter(0.0);
        // prev*(1-a) + raw*a = 0.0*0.5 + 1.0*0.5
        assert!((f.filter(1.0) - 0.5).abs() < 1e-6);
        // 0.5*0.5 + 1.0*0.5
        assert!((f.filter(1.0) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_converges_to_constant_input() {
        let mut f = EmaFilter::new(0.5);
        f.filter(0.0);
        let mut out = 0.0;
        for _ in 0..30 {
            out = f.filter(1.0);
        }
        assert!((out - 1.0).abs() < 1e-6, "EMA fixed point not reached: {}", out);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut f = EmaFilter::new(0.5);
        f.filter(0.0);
        f.filter(0.0);
        f.reset();
        // After reset the next sample passes through unchanged
        assert!((f.filter(0.9) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_2d_pair() {
        let mut f = EmaFilter2D::new(0.5);
        let (x, y) = f.filter((0.2, 0.4));
        assert!((x - 0.2).abs() < 1e-6);
        assert!((y - 0.4).abs() < 1e-6);
        let (x, y) = f.filter((0.4, 0.8));
        assert!((x - 0.3).abs() < 1e-6);
        assert!((y - 0.6).abs() < 1e-6);
    }
}
