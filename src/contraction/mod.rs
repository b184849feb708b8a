//! Tensor contractions.
//!
//! [`einsum`] forwards to the general Einstein-summation routine of `ndarray_einsum_beta`.
//! [`contract`] contracts the operands pairwise from left to right, summing over every subscript
//! shared by the running result and the next operand.

use anyhow::{self, ensure, format_err};
use log;
use ndarray::{ArrayD, ArrayViewD, Axis, LinalgScalar};
use ndarray_einsum_beta::{tensordot, ArrayLike};


/// Evaluates an Einstein summation.
///
/// # Arguments
///
/// * `pattern` - The contraction pattern, *e.g.* `"ij,jk->ik"`.
/// * `operands` - The input arrays, one for each comma-separated subscript.
///
/// # Returns
///
/// The contracted array.
pub fn einsum<T: LinalgScalar>(
    pattern: &str,
    operands: &[&dyn ArrayLike<T>],
) -> Result<ArrayD<T>, anyhow::Error> {
    ndarray_einsum_beta::einsum(pattern, operands).map_err(|err| format_err!(err))
}

/// Splits a contraction pattern into its input subscripts and optional output subscript.
fn parse_contraction_pattern(
    pattern: &str,
) -> Result<(Vec<Vec<char>>, Option<Vec<char>>), anyhow::Error> {
    let (inputs, output) = match pattern.split_once("->") {
        Some((inputs, output)) => (inputs, Some(output.trim().chars().collect::<Vec<_>>())),
        None => (pattern, None),
    };
    let subscripts = inputs
        .split(',')
        .map(|subscript| subscript.trim().chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();
    for subscript in subscripts.iter().chain(output.iter()) {
        let mut sorted = subscript.clone();
        sorted.sort_unstable();
        sorted.dedup();
        ensure!(
            sorted.len() == subscript.len(),
            "Repeated index within the subscript `{}` of `{pattern}` is not supported.",
            subscript.iter().collect::<String>()
        );
    }
    Ok((subscripts, output))
}

/// Contracts a sequence of arrays pairwise from left to right.
///
/// At each step, every index shared by the accumulated result and the next operand is summed
/// over with a tensor dot product; the free indices of the accumulated result are followed by
/// those of the operand. The final result is transposed to the output subscript if one is
/// given after `->`, and otherwise left in accumulated order.
///
/// # Arguments
///
/// * `pattern` - The contraction pattern, *e.g.* `"ij,jk,kl->il"`.
/// * `operands` - The input arrays, one for each comma-separated subscript.
///
/// # Errors
///
/// Errors if the number of subscripts does not match the number of operands, if a subscript
/// does not match the rank of its operand, if contracted axes have different extents, or if
/// the output subscript is not a rearrangement of the free indices.
pub fn contract<T: LinalgScalar>(
    pattern: &str,
    operands: &[ArrayViewD<T>],
) -> Result<ArrayD<T>, anyhow::Error> {
    let (subscripts, output) = parse_contraction_pattern(pattern)?;
    ensure!(
        subscripts.len() == operands.len(),
        "`{pattern}` has {} subscript(s) but {} operand(s) were given.",
        subscripts.len(),
        operands.len()
    );
    for (subscript, operand) in subscripts.iter().zip(operands.iter()) {
        ensure!(
            subscript.len() == operand.ndim(),
            "Subscript `{}` does not match an operand of rank {}.",
            subscript.iter().collect::<String>(),
            operand.ndim()
        );
    }

    let (first, rest) = operands
        .split_first()
        .ok_or_else(|| format_err!("At least one operand is required."))?;
    let mut result = first.to_owned();
    let mut result_subscript = subscripts[0].clone();
    for (operand, subscript) in rest.iter().zip(subscripts[1..].iter()) {
        let shared = result_subscript
            .iter()
            .filter(|index| subscript.contains(index))
            .cloned()
            .collect::<Vec<_>>();
        let position = |sub: &[char], index: &char| {
            sub.iter()
                .position(|i| i == index)
                .ok_or_else(|| format_err!("Index `{index}` not found."))
        };
        let lhs_axes = shared
            .iter()
            .map(|index| position(&result_subscript, index).map(Axis))
            .collect::<Result<Vec<_>, _>>()?;
        let rhs_axes = shared
            .iter()
            .map(|index| position(subscript, index).map(Axis))
            .collect::<Result<Vec<_>, _>>()?;
        for (lhs_axis, rhs_axis) in lhs_axes.iter().zip(rhs_axes.iter()) {
            ensure!(
                result.len_of(*lhs_axis) == operand.len_of(*rhs_axis),
                "Contracted index `{}` has inconsistent extents.",
                result_subscript[lhs_axis.index()]
            );
        }
        log::debug!(
            "Contracting `{}` with `{}` over `{}`.",
            result_subscript.iter().collect::<String>(),
            subscript.iter().collect::<String>(),
            shared.iter().collect::<String>()
        );
        let next = tensordot(&result, operand, &lhs_axes, &rhs_axes);
        result = next;
        result_subscript = result_subscript
            .iter()
            .chain(subscript.iter())
            .filter(|index| !shared.contains(index))
            .cloned()
            .collect();
    }

    match output {
        None => Ok(result),
        Some(output) => {
            ensure!(
                output.len() == result_subscript.len(),
                "Output subscript `{}` does not match the free indices `{}`.",
                output.iter().collect::<String>(),
                result_subscript.iter().collect::<String>()
            );
            let order = output
                .iter()
                .map(|index| {
                    result_subscript
                        .iter()
                        .position(|i| i == index)
                        .ok_or_else(|| format_err!("Output index `{index}` is not a free index."))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(result.permuted_axes(order))
        }
    }
}
