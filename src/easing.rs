//! Interpolation curves used to place blobs while an animation record plays.

use num_traits::{Float, FloatConst};

/// Cubic Hermite interpolation from `start` to `end` over `t` in `[0, 1]`.
///
/// `start_slope` and `end_slope` are the normalised speeds at both ends; `1, 1` is linear.
/// Values of `t` outside the unit interval clamp to `start` or `end`.
pub fn hermite<T: Float>(start: T, end: T, t: T, start_slope: T, end_slope: T) -> T {
    if t <= T::zero() {
        return start;
    }
    if t >= T::one() {
        return end;
    }

    let two = T::one() + T::one();
    let three = two + T::one();
    let (a, b) = (start_slope, end_slope);

    let weight = (a + b - two) * t * t * t + (three - two * a - b) * t * t + a * t;

    start + (end - start) * weight
}

/// Damped oscillation settling from `start` onto `end`.
///
/// `elapsed` and `period` share a time unit (milliseconds in practice). After each
/// `period` the amplitude is multiplied by `decay`, which must lie in `(0, 1)`.
/// The phase is chosen so the curve leaves `start` with zero offset:
/// `p = atan(π / ln(decay))`.
pub fn elastic<T: Float + FloatConst>(start: T, end: T, elapsed: T, period: T, decay: T) -> T {
    if elapsed <= T::zero() {
        return start;
    }

    let phase = (T::PI() / decay.ln()).atan();
    let weight = (phase - T::PI() / period * elapsed).sin() / phase.sin() * decay.powf(elapsed / period);

    end + (start - end) * weight
}

pub const ELASTIC_PERIOD_MS: f64 = 125.0;
pub const ELASTIC_DECAY: f64 = 0.15;

pub fn elastic_default(start: f64, end: f64, elapsed_ms: f64) -> f64 {
    elastic(start, end, elapsed_ms, ELASTIC_PERIOD_MS, ELASTIC_DECAY)
}
