use rand::{Rng, SeedableRng, rngs::StdRng};

/// `count` points sampled uniformly from `[1, 98) x [1, 98)`, strictly inside the default frame
pub fn random(seed: u64, count: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(1.0..98.0), rng.gen_range(1.0..98.0)))
        .collect()
}

pub fn triple() -> Vec<(f64, f64)> {
    vec![(20., 30.), (70., 45.), (40., 80.)]
}

/// Twenty integer points which form 42 triangles together with the default frame
pub fn twenty() -> Vec<(f64, f64)> {
    let xs = [24., 11., 39., 16., 7., 40., 90., 79., 75., 22., 53., 28., 17., 11., 22., 91., 82., 80., 79., 19.];
    let ys = [31., 62., 72., 84., 87., 9., 60., 66., 50., 18., 47., 9., 92., 85., 54., 30., 90., 57., 87., 84.];
    xs.iter().copied().zip(ys.iter().copied()).collect()
}
