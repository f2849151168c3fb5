//! Shared Numeric Utilities
//!
//! Small pure functions used by both the simulator and the engine. None of
//! them can fail: degenerate input (empty series, zero-width spans) maps to a
//! sensible default instead of NaN.
//!
//! ## Trend Estimation
//!
//! The humidity trend is an ordinary least-squares slope:
//!
//! ```text
//!        Σ (x - x̄)(y - ȳ)
//! m  =  ──────────────────
//!          Σ (x - x̄)²
//! ```
//!
//! Accumulated in `f64` so a 15 minute window of second-resolution samples
//! does not lose precision.

/// Clamp into [0, 1]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f32, decimals: u32) -> f32 {
    let factor = libm::powf(10.0, decimals as f32);
    libm::roundf(value * factor) / factor
}

/// Position of `distance` across `span`, clamped to [0, 1]
///
/// A zero or negative span means the buffer has no width; any distance past
/// it counts as fully across.
pub fn fraction_across(distance: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return if distance > 0.0 { 1.0 } else { 0.0 };
    }
    clamp01(distance / span)
}

/// Least-squares slope of `y` over `x`
///
/// Returns 0 with fewer than two points or when every `x` is identical.
pub fn linear_slope<I>(points: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
    I::IntoIter: Clone,
{
    let iter = points.into_iter();

    let (mut n, mut sum_x, mut sum_y) = (0usize, 0.0f64, 0.0f64);
    for (x, y) in iter.clone() {
        n += 1;
        sum_x += x;
        sum_y += y;
    }
    if n < 2 {
        return 0.0;
    }

    let mean_x = sum_x / n as f64;
    let mean_y = sum_y / n as f64;

    let (mut num, mut den) = (0.0f64, 0.0f64);
    for (x, y) in iter {
        let dx = x - mean_x;
        num += dx * (y - mean_y);
        den += dx * dx;
    }

    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
