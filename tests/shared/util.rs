use dmx::Matrix;
use rand::Rng;

/// Install a logger for the test binary, honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call does anything.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

pub fn matrix(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

/// Matrix with entries uniform in `[-1, 1)`.
pub fn random_matrix<R: Rng>(rng: &mut R, dims: (usize, usize)) -> Matrix {
    let data = (0..dims.0 * dims.1).map(|_| 1.0 - 2.0 * rng.gen::<f64>()).collect();
    Matrix::from_row_major_data(dims, data).unwrap()
}

/// Random shape with both dimensions in `1..max`.
pub fn random_dims<R: Rng>(rng: &mut R, max: usize) -> (usize, usize) {
    (rng.gen_range(1, max), rng.gen_range(1, max))
}
