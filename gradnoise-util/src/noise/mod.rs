/// One of the twelve cube-edge directions used as lattice gradients.
///
/// Every component is -1, 0 or 1 with exactly one zero. 1D noise reads only
/// `x`, 2D noise `x` and `y`.
#[derive(Debug, PartialEq)]
pub struct Gradient {
    x: f64,
    y: f64,
    z: f64,
}

impl Gradient {
    const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Palette entry for a hashed table value.
    #[inline]
    pub fn for_hash(hash: usize) -> &'static Gradient {
        &GRADIENTS[hash % GRADIENTS.len()]
    }

    #[inline]
    pub fn dot1(&self, x: f64) -> f64 {
        self.x * x
    }

    #[inline]
    pub fn dot2(&self, x: f64, y: f64) -> f64 {
        self.x * x + self.y * y
    }

    #[inline]
    pub fn dot3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x * x + self.y * y + self.z * z
    }

    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

pub static GRADIENTS: [Gradient; 12] = [
    Gradient::new(1f64, 1f64, 0f64),
    Gradient::new(-1f64, 1f64, 0f64),
    Gradient::new(1f64, -1f64, 0f64),
    Gradient::new(-1f64, -1f64, 0f64),
    Gradient::new(1f64, 0f64, 1f64),
    Gradient::new(-1f64, 0f64, 1f64),
    Gradient::new(1f64, 0f64, -1f64),
    Gradient::new(-1f64, 0f64, -1f64),
    Gradient::new(0f64, 1f64, 1f64),
    Gradient::new(0f64, -1f64, 1f64),
    Gradient::new(0f64, 1f64, -1f64),
    Gradient::new(0f64, -1f64, -1f64),
];
