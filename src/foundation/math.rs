/// Linearly interpolate from `a` to `b`; `t` is clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    a + ((b - a) * t)
}

/// Scale a pixel length by `factor`, rounding to the nearest pixel and never collapsing to zero.
#[inline]
pub fn scaled_dim(len: u32, factor: f64) -> u32 {
    let v = (f64::from(len) * factor).round();
    if !v.is_finite() || v < 1.0 {
        1
    } else if v > f64::from(u32::MAX) {
        u32::MAX
    } else {
        v as u32
    }
}

/// Offset that centers a span of `inner` pixels inside `outer` pixels (negative when it overflows).
#[inline]
pub fn center_offset(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)) / 2
}

#[inline]
pub(crate) fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}
