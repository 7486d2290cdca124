//! Math helpers matching vanilla Minecraft's `Mth.java` semantics.

/// Quintic Hermite smoothstep: `6x^5 - 15x^4 + 10x^3`.
///
/// The interpolation curve used by improved Perlin noise.
#[inline]
#[must_use]
pub fn smoothstep(x: f64) -> f64 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Floor to `i32` with Java `Mth.floor` semantics (toward negative infinity).
#[inline]
#[must_use]
pub fn floor(v: f64) -> i32 {
    let i = v as i32;
    if v < f64::from(i) { i - 1 } else { i }
}

/// Linear interpolation: `a + alpha * (b - a)`.
#[inline]
#[must_use]
pub fn lerp(alpha: f64, a: f64, b: f64) -> f64 {
    a + alpha * (b - a)
}

/// Trilinear interpolation between 8 corner values.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    a1: f64,
    a2: f64,
    a3: f64,
    x000: f64,
    x100: f64,
    x010: f64,
    x110: f64,
    x001: f64,
    x101: f64,
    x011: f64,
    x111: f64,
) -> f64 {
    lerp(
        a3,
        lerp(a2, lerp(a1, x000, x100), lerp(a1, x010, x110)),
        lerp(a2, lerp(a1, x001, x101), lerp(a1, x011, x111)),
    )
}

/// Clamp `value` into `[min, max]`.
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation with the factor clamped to `[0, 1]` first.
#[inline]
#[must_use]
pub fn clamped_lerp(min: f64, max: f64, factor: f64) -> f64 {
    if factor < 0.0 {
        min
    } else if factor > 1.0 {
        max
    } else {
        lerp(factor, min, max)
    }
}

/// Remap `value` from `[from_min, from_max]` to `[to_min, to_max]`, clamping
/// the input to its domain first. Java reference: `Mth.clampedMap`.
#[inline]
#[must_use]
pub fn clamped_map(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    clamped_lerp(to_min, to_max, (value - from_min) / (from_max - from_min))
}
