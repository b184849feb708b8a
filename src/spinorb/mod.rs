//! Expansion of spatial-orbital integral arrays in the spin-orbital basis.

use std::error::Error;
use std::fmt;

use log;
use ndarray::{Array, ArrayBase, ArrayD, ArrayViewD, Data, Dimension, IxDyn, Slice};
use num_traits::{Inv, Zero};

use crate::permutation::Permutation;


// =================
// Error definitions
// =================

/// Errors arising from the spin-orbital expansion of integral arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinOrbitalError {
    /// The integral array does not have a positive even rank.
    InvalidRank(usize),

    /// The expanded array could not be converted back to the dimensionality of the input.
    Dimensionality(String),
}

impl fmt::Display for SpinOrbitalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidRank(ndim) => write!(
                f,
                "Spin-orbital error: integral arrays must have a positive even rank, but rank \
                {ndim} was given."
            ),
            Self::Dimensionality(msg) => write!(f, "Spin-orbital error: {msg}"),
        }
    }
}

impl Error for SpinOrbitalError {}

// =========
// Functions
// =========

/// Returns the axis permutation taking an integral array of rank $`2k`$ from physicist's
/// ordering $`(p_1, \ldots, p_k, q_1, \ldots, q_k)`$ to chemist's ordering
/// $`(p_1, q_1, \ldots, p_k, q_k)`$. Its inverse goes back.
pub fn phys_to_chem_permutation(ndim: usize) -> Result<Permutation, SpinOrbitalError> {
    if ndim == 0 || ndim % 2 != 0 {
        return Err(SpinOrbitalError::InvalidRank(ndim));
    }
    let k = ndim / 2;
    let image = (0..k).flat_map(|i| [i, k + i]).collect::<Vec<_>>();
    Permutation::from_image(&image)
        .map_err(|err| SpinOrbitalError::Dimensionality(err.to_string()))
}

/// Takes the Kronecker product of the $`2 \times 2`$ identity with the last two axes of an array.
///
/// The last two axes are doubled in length. For spin $`s \in \{0, 1\}`$ the block spanning
/// indices $`s n_1 \ldots (s+1) n_1 - 1`$ and $`s n_2 \ldots (s+1) n_2 - 1`$ of these axes is a
/// copy of the input; the two off-diagonal spin blocks are zero.
fn kron_identity_trailing<T>(tensor: &ArrayViewD<T>) -> ArrayD<T>
where
    T: Clone + Zero,
{
    let ndim = tensor.ndim();
    let nrow = tensor.shape()[ndim - 2];
    let ncol = tensor.shape()[ndim - 1];
    let mut shape = tensor.shape().to_vec();
    shape[ndim - 2] *= 2;
    shape[ndim - 1] *= 2;
    let mut expanded = ArrayD::<T>::zeros(IxDyn(&shape));
    for spin in 0..2 {
        expanded
            .slice_each_axis_mut(|ax| {
                let i = ax.axis.index();
                if i == ndim - 2 {
                    Slice::from(spin * nrow..(spin + 1) * nrow)
                } else if i == ndim - 1 {
                    Slice::from(spin * ncol..(spin + 1) * ncol)
                } else {
                    Slice::from(..)
                }
            })
            .assign(tensor);
    }
    expanded
}

/// Expands a spatial electronic integral array in the spin-orbital basis.
///
/// The input is an array of rank $`2k`$ holding
///
/// ```math
///     \braket{p_1(1) p_2(2) \cdots p_k(k) | \hat{O} | q_1(1) q_2(2) \cdots q_k(k)}
/// ```
///
/// in physicist's ordering $`(p_1, \ldots, p_k, q_1, \ldots, q_k)`$. Every axis of the result is
/// twice as long: index $`s n + p`$ labels spatial orbital $`p`$ with spin $`s`$. An element of
/// the result is the corresponding spatial integral if $`p_i`$ and $`q_i`$ carry the same spin
/// for every coordinate $`i`$, and zero otherwise.
///
/// # Arguments
///
/// * `integrals` - Integral array in the spatial-orbital basis.
///
/// # Returns
///
/// The integral array in the spin-orbital basis, in physicist's ordering and standard layout.
///
/// # Errors
///
/// Errors if `integrals` does not have a positive even rank.
pub fn construct_spinorb_integrals<T, S, D>(
    integrals: &ArrayBase<S, D>,
) -> Result<Array<T, D>, SpinOrbitalError>
where
    T: Clone + Zero,
    S: Data<Elem = T>,
    D: Dimension,
{
    let ndim = integrals.ndim();
    let phys_to_chem = phys_to_chem_permutation(ndim).map_err(|err| {
        log::error!("{err}");
        err
    })?;
    log::debug!(
        "Expanding {} integrals of shape {:?} in the spin-orbital basis.",
        ndim / 2,
        integrals.shape()
    );

    // chem_integrals[p_1, q_1, p_2, q_2, ...] = integrals[p_1, p_2, ..., q_1, q_2, ...]
    let mut chem_integrals = integrals
        .view()
        .into_dyn()
        .permuted_axes(phys_to_chem.image().as_slice())
        .to_owned();

    // Axis `i` of the working array holds axis `axis_order.image()[i]` of the input.
    let mut axis_order = phys_to_chem;

    // Expand the trailing coordinate pair, then rotate it to the front to expose the next pair.
    let rotation = Permutation::from_image(
        &(ndim - 2..ndim).chain(0..ndim - 2).collect::<Vec<_>>(),
    )
    .map_err(|err| SpinOrbitalError::Dimensionality(err.to_string()))?;
    for _ in 0..ndim / 2 {
        let expanded = kron_identity_trailing(&chem_integrals.view());
        chem_integrals = expanded.permuted_axes(rotation.image().as_slice());
        axis_order = axis_order * &rotation;
    }

    let restore = axis_order.inv();
    log::debug!("Restoring the input axis order with {restore}.");
    chem_integrals
        .permuted_axes(restore.image().as_slice())
        .as_standard_layout()
        .into_owned()
        .into_dimensionality::<D>()
        .map_err(|err| SpinOrbitalError::Dimensionality(err.to_string()))
}
