#![no_main]

use gradnoise::{LatticeSize, NoiseField, NoiseMode};
use libfuzzer_sys::fuzz_target;

// Every evaluator must be total over any seed and coordinate. Moderate
// coordinates must give finite samples.
fuzz_target!(|input: (bool, f64, [f64; 3], u8)| {
    let (small, seed, [x, y, z], iterations) = input;
    let lattice = if small {
        LatticeSize::Small
    } else {
        LatticeSize::Large
    };
    let field = NoiseField::with_seed(lattice, seed);
    let moderate = [x, y, z].iter().all(|c| c.abs() < 1e12);

    for mode in NoiseMode::ALL {
        let value = field.sample(mode, x, y, z);
        if moderate {
            assert!(value.is_finite(), "{mode} at ({x}, {y}, {z})");
        }
        let _ = field.octave(mode, u32::from(iterations % 16), x, y, z);
    }
});
