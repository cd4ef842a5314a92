//! Simplex noise in two and three dimensions.

use gradnoise_util::noise::Gradient;

use crate::field::NoiseField;

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
/// Skewing factor for 2D: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

/// Squared radius of a corner's influence.
const RADIUS_SQ_2D: f64 = 0.5;
const RADIUS_SQ_3D: f64 = 0.6;

/// Brings the largest possible corner sum to roughly unit magnitude.
const SCALE_2D: f64 = 70.0;
const SCALE_3D: f64 = 32.0;

#[inline]
fn corner_2d(gradient: &Gradient, x: f64, y: f64) -> f64 {
    let t = RADIUS_SQ_2D - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * gradient.dot2(x, y)
    }
}

#[inline]
fn corner_3d(gradient: &Gradient, x: f64, y: f64, z: f64) -> f64 {
    let t = RADIUS_SQ_3D - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * gradient.dot3(x, y, z)
    }
}

/// Integer offsets of the second and third corners of the tetrahedron the
/// unskewed offset `(x, y, z)` falls into.
#[inline]
fn tetrahedron(x: f64, y: f64, z: f64) -> ([usize; 3], [usize; 3]) {
    if x >= y {
        if y >= z {
            ([1, 0, 0], [1, 1, 0])
        } else if x >= z {
            ([1, 0, 0], [1, 0, 1])
        } else {
            ([0, 0, 1], [1, 0, 1])
        }
    } else if y < z {
        ([0, 0, 1], [0, 1, 1])
    } else if x < z {
        ([0, 1, 0], [0, 1, 1])
    } else {
        ([0, 1, 0], [1, 1, 0])
    }
}

impl NoiseField {
    /// 2D simplex noise, typically within `[-1, 1]`.
    #[allow(clippy::many_single_char_names)]
    pub fn simplex2d(&self, x: f64, y: f64) -> f64 {
        let table = &self.table;
        let lattice = table.lattice();

        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - i + t;
        let y0 = y - j + t;

        // Lower triangle walks x first, upper triangle y first
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = lattice.wrap(i);
        let jj = lattice.wrap(j);
        let gi0 = table.gradient(ii + table.perm(jj));
        let gi1 = table.gradient(ii + i1 + table.perm(jj + j1));
        let gi2 = table.gradient(ii + 1 + table.perm(jj + 1));

        let n0 = corner_2d(gi0, x0, y0);
        let n1 = corner_2d(gi1, x1, y1);
        let n2 = corner_2d(gi2, x2, y2);

        SCALE_2D * (n0 + n1 + n2)
    }

    /// 3D simplex noise, typically within `[-1, 1]`.
    #[allow(clippy::many_single_char_names)]
    pub fn simplex3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let table = &self.table;
        let lattice = table.lattice();

        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();
        let t = (i + j + k) * G3;
        let x0 = x - i + t;
        let y0 = y - j + t;
        let z0 = z - k + t;

        let ([i1, j1, k1], [i2, j2, k2]) = tetrahedron(x0, y0, z0);

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = lattice.wrap(i);
        let jj = lattice.wrap(j);
        let kk = lattice.wrap(k);
        let corner = |di: usize, dj: usize, dk: usize| {
            table.gradient(ii + di + table.perm(jj + dj + table.perm(kk + dk)))
        };

        let n0 = corner_3d(corner(0, 0, 0), x0, y0, z0);
        let n1 = corner_3d(corner(i1, j1, k1), x1, y1, z1);
        let n2 = corner_3d(corner(i2, j2, k2), x2, y2, z2);
        let n3 = corner_3d(corner(1, 1, 1), x3, y3, z3);

        SCALE_3D * (n0 + n1 + n2 + n3)
    }
}
