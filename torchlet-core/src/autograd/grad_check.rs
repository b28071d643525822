use crate::error::TorchletError;
use crate::value::{Payload, Value};
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(TorchletError),
    #[error("Input {input_index} has no gradient after the backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },
    #[error("Gradient check input must be a leaf value. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

impl From<TorchletError> for GradCheckError {
    fn from(err: TorchletError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` maps leaf inputs to an output value; the checked loss is the sum of
/// the output's elements, which is what `backward` differentiates (its seed is
/// all ones). Each element of each input is perturbed by `±epsilon` on fresh
/// leaf copies, so the caller's inputs are never mutated. A pair of gradients
/// matches when they are within `tolerance` absolutely or relatively.
///
/// Gradients already stored on `inputs` are cleared first.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, TorchletError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs)?;
    output.backward();

    let original_data: Vec<Payload> = inputs.iter().map(Value::data).collect();

    for (i, input) in inputs.iter().enumerate() {
        let analytical = input
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?;

        for elem_idx in 0..original_data[i].numel() {
            let loss_plus = perturbed_loss(&func, &original_data, i, elem_idx, epsilon)?;
            let loss_minus = perturbed_loss(&func, &original_data, i, elem_idx, -epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            let analytical_grad = analytical.as_slice()[elem_idx];

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    value: analytical_grad,
                });
            }

            let matches = approx::relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            );
            if !matches {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    debug!("check_grad: {} inputs passed", inputs.len());
    Ok(())
}

/// Evaluates `func` on fresh leaves where element `elem_idx` of input
/// `input_index` is shifted by `delta`, returning the summed output.
fn perturbed_loss<F>(
    func: &F,
    original_data: &[Payload],
    input_index: usize,
    elem_idx: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, TorchletError>,
{
    let perturbed: Vec<Value> = original_data
        .iter()
        .enumerate()
        .map(|(i, data)| {
            let mut data = data.clone();
            if i == input_index {
                match &mut data {
                    Payload::Scalar(x) => *x += delta,
                    Payload::Array(xs) => xs[elem_idx] += delta,
                }
            }
            Value::new(data)
        })
        .collect();
    let output = func(&perturbed)?;
    let loss = output.data().as_slice().iter().sum();
    Ok(loss)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
