//! Classic lattice (Perlin) noise.
//!
//! The field repeats every `N` cells along each axis, where `N` is the lattice
//! size. Samples on integer coordinates are exactly zero.

use gradnoise_util::math::{fade, lerp, lerp2, lerp3};

use crate::field::NoiseField;

impl NoiseField {
    pub fn noise1d(&self, x: f64) -> f64 {
        let table = &self.table;
        let lattice = table.lattice();

        let cell_x = x.floor();
        let x = x - cell_x;
        let i = lattice.wrap(cell_x);

        let n0 = table.gradient(i).dot1(x);
        let n1 = table.gradient(i + 1).dot1(x - 1.0);

        lerp(fade(x), n0, n1)
    }

    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        let table = &self.table;
        let lattice = table.lattice();

        let cell_x = x.floor();
        let cell_y = y.floor();
        let x = x - cell_x;
        let y = y - cell_y;
        let i = lattice.wrap(cell_x);
        let j = lattice.wrap(cell_y);

        let corner = |dx: usize, dy: usize| table.gradient(i + dx + table.perm(j + dy));

        let n00 = corner(0, 0).dot2(x, y);
        let n01 = corner(0, 1).dot2(x, y - 1.0);
        let n10 = corner(1, 0).dot2(x - 1.0, y);
        let n11 = corner(1, 1).dot2(x - 1.0, y - 1.0);

        lerp2(fade(x), fade(y), n00, n10, n01, n11)
    }

    pub fn noise3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let table = &self.table;
        let lattice = table.lattice();

        let cell_x = x.floor();
        let cell_y = y.floor();
        let cell_z = z.floor();
        let x = x - cell_x;
        let y = y - cell_y;
        let z = z - cell_z;
        let i = lattice.wrap(cell_x);
        let j = lattice.wrap(cell_y);
        let k = lattice.wrap(cell_z);

        let corner = |dx: usize, dy: usize, dz: usize| {
            table.gradient(i + dx + table.perm(j + dy + table.perm(k + dz)))
        };

        let n000 = corner(0, 0, 0).dot3(x, y, z);
        let n001 = corner(0, 0, 1).dot3(x, y, z - 1.0);
        let n010 = corner(0, 1, 0).dot3(x, y - 1.0, z);
        let n011 = corner(0, 1, 1).dot3(x, y - 1.0, z - 1.0);
        let n100 = corner(1, 0, 0).dot3(x - 1.0, y, z);
        let n101 = corner(1, 0, 1).dot3(x - 1.0, y, z - 1.0);
        let n110 = corner(1, 1, 0).dot3(x - 1.0, y - 1.0, z);
        let n111 = corner(1, 1, 1).dot3(x - 1.0, y - 1.0, z - 1.0);

        lerp3(
            fade(x),
            fade(y),
            fade(z),
            n000,
            n100,
            n010,
            n110,
            n001,
            n101,
            n011,
            n111,
        )
    }
}
