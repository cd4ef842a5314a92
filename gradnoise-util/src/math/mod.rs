use num_traits::Float;

/// `(1 - delta) * start + delta * end`.
///
/// Exact at both ends, which the lattice evaluators rely on: a sample sitting on
/// a lattice corner returns that corner's value bit for bit.
#[inline]
pub fn lerp<T>(delta: T, start: T, end: T) -> T
where
    T: Float,
{
    (T::one() - delta) * start + delta * end
}

/// Bilinear interpolation, collapsing x first.
#[inline]
pub fn lerp2(delta_x: f64, delta_y: f64, x0y0: f64, x1y0: f64, x0y1: f64, x1y1: f64) -> f64 {
    lerp(
        delta_y,
        lerp(delta_x, x0y0, x1y0),
        lerp(delta_x, x0y1, x1y1),
    )
}

/// Trilinear interpolation. Collapses x first, then z, then y; the order is
/// part of the output contract since it decides the float rounding.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn lerp3(
    delta_x: f64,
    delta_y: f64,
    delta_z: f64,
    x0y0z0: f64,
    x1y0z0: f64,
    x0y1z0: f64,
    x1y1z0: f64,
    x0y0z1: f64,
    x1y0z1: f64,
    x0y1z1: f64,
    x1y1z1: f64,
) -> f64 {
    lerp(
        delta_y,
        lerp(
            delta_z,
            lerp(delta_x, x0y0z0, x1y0z0),
            lerp(delta_x, x0y0z1, x1y0z1),
        ),
        lerp(
            delta_z,
            lerp(delta_x, x0y1z0, x1y1z0),
            lerp(delta_x, x0y1z1, x1y1z1),
        ),
    )
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1, so interpolating with it
/// keeps the field C2 across cell borders.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Wraps an already floored coordinate into `[0, period)`.
///
/// `period` must be a power of two. Matches two's-complement masking of the
/// integer coordinate; non-finite input lands on cell 0.
#[inline]
pub fn wrap_floored(floored: f64, period: usize) -> usize {
    floored.rem_euclid(period as f64) as usize
}
