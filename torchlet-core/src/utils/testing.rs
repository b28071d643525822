use crate::value::{Payload, Value};

/// Checks that a payload has the expected elements within `tolerance`.
/// Panics on length or value mismatch.
pub fn check_payload_near(actual: &Payload, expected: &[f64], tolerance: f64) {
    let actual = actual.as_slice();
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Checks a value's gradient elementwise. Panics if no gradient is stored.
pub fn check_grad_near(value: &Value, expected: &[f64], tolerance: f64) {
    let grad = value
        .grad()
        .expect("Value has no gradient in check_grad_near");
    check_payload_near(&grad, expected, tolerance);
}

/// Returns the scalar gradient of a value. Panics if absent or not scalar.
pub fn scalar_grad(value: &Value) -> f64 {
    value
        .grad()
        .and_then(|g| g.item())
        .expect("Value has no scalar gradient")
}
