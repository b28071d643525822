use rand::rngs::StdRng;
use rand::SeedableRng;
use torchlet_core::Value;

// Shared by several test crates; each one uses only part of it.
#[allow(dead_code)]
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[allow(dead_code)]
pub(crate) fn scalars(xs: &[f64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::scalar(x)).collect()
}

/// Scalar gradient of `v`, or NaN when none is stored.
#[allow(dead_code)]
pub(crate) fn grad_of(v: &Value) -> f64 {
    v.grad().and_then(|g| g.item()).unwrap_or(f64::NAN)
}
