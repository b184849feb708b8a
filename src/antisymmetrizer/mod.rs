//! Antisymmetrisation operators acting on the axes of dense arrays.
//!
//! An [`Antisymmetrizer`] acting on axes $`(a_1, \ldots, a_m)`$ of a tensor $`T`$ produces
//!
//! ```math
//!     w \sum_{\sigma} \mathrm{sgn}(\sigma) \, T^{\sigma},
//! ```
//!
//! where $`T^{\sigma}`$ denotes $`T`$ with the selected axes transposed by $`\sigma`$ and the sum
//! runs over all riffle shuffles of the packets defined by the operator's composition (see
//! [`crate::shuffle`]). Operators are immutable values: scaling and composition produce new
//! operators, and nothing is computed until an operator meets a tensor.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::ops::{Mul, Neg};

use derive_builder::{Builder, UninitializedFieldError};
use log;
use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension, LinalgScalar};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::permutation::Permutation;
use crate::shuffle::{n_shuffles, riffle_shuffles, validate_composition, ShuffleError};


// =================
// Trait definitions
// =================

/// Element types of tensors on which antisymmetrisers can act.
///
/// Operator weights are real, so the element type must be constructible from `f64`. This covers
/// `f64` and `Complex<f64>`.
pub trait TensorElement: LinalgScalar + From<f64> + Send + Sync {}

// Blanket implementation
impl<T> TensorElement for T where T: LinalgScalar + From<f64> + Send + Sync {}

// =================
// Error definitions
// =================

/// Errors arising from the construction or application of antisymmetrisers.
#[derive(Debug, Clone, PartialEq)]
pub enum AntisymmetrizerError {
    /// The packet sizes contain a zero or do not sum to the number of axes.
    InvalidComposition {
        composition: Vec<usize>,
        naxes: usize,
    },

    /// A chained operator is missing or invalid.
    InvalidChain(String),

    /// An axis appears more than once in an operator.
    DuplicateAxes(Vec<usize>),

    /// The operator weight is not a finite number.
    NonFiniteWeight(f64),

    /// The operator acts on axes that the tensor does not have.
    AxisMismatch {
        axes: Vec<usize>,
        ndim: usize,
    },

    /// The axes being permuted amongst one another do not all have the same extent.
    InconsistentExtents {
        axes: Vec<usize>,
        shape: Vec<usize>,
    },

    /// A required field has not been set on the builder.
    UninitialisedField(String),
}

impl fmt::Display for AntisymmetrizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidComposition { composition, naxes } => write!(
                f,
                "Antisymmetrizer error: composition `{composition:?}` is not a partition of \
                {naxes} axes into non-empty packets."
            ),
            Self::InvalidChain(msg) => write!(f, "Antisymmetrizer error: invalid chain: {msg}"),
            Self::DuplicateAxes(axes) => {
                write!(f, "Antisymmetrizer error: axes `{axes:?}` are not distinct.")
            }
            Self::NonFiniteWeight(weight) => {
                write!(f, "Antisymmetrizer error: weight `{weight}` is not finite.")
            }
            Self::AxisMismatch { axes, ndim } => write!(
                f,
                "Antisymmetrizer error: axes `{axes:?}` are out of range for a tensor of rank \
                {ndim}."
            ),
            Self::InconsistentExtents { axes, shape } => write!(
                f,
                "Antisymmetrizer error: axes `{axes:?}` of a tensor with shape `{shape:?}` do not \
                have equal extents."
            ),
            Self::UninitialisedField(field) => {
                write!(f, "Antisymmetrizer error: field `{field}` has not been set.")
            }
        }
    }
}

impl Error for AntisymmetrizerError {}

impl From<ShuffleError> for AntisymmetrizerError {
    fn from(err: ShuffleError) -> Self {
        match err {
            ShuffleError::InvalidComposition { composition, naxes } => {
                Self::InvalidComposition { composition, naxes }
            }
        }
    }
}

impl From<UninitializedFieldError> for AntisymmetrizerError {
    fn from(err: UninitializedFieldError) -> Self {
        Self::UninitialisedField(err.field_name().to_string())
    }
}

// ==================
// Struct definitions
// ==================

/// An immutable, composable antisymmetrisation operator.
///
/// Antisymmetrisation is achieved by summing over signed permutations of a list of axes. If
/// certain contiguous subsets ("packets") of the axes are already antisymmetric, a reduced
/// antisymmetrisation sums only over the signed riffle shuffles of the packets, skipping
/// transpositions within a packet.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate", error = "AntisymmetrizerError"))]
#[serde(try_from = "AntisymmetrizerRepr")]
pub struct Antisymmetrizer {
    /// The tensor axes to be permuted. The order of the axes defines the packets and the
    /// identity arrangement against which shuffle signs are measured.
    #[builder(setter(custom))]
    axes: Vec<usize>,

    /// The packet sizes, an integer composition of the number of axes. All ones (the default)
    /// gives full antisymmetrisation.
    #[builder(setter(custom), default = "self.default_composition()?")]
    composition: Vec<usize>,

    /// The scalar applied to the antisymmetrised result.
    #[builder(default = "1.0")]
    weight: f64,

    /// An operator to be applied after this one.
    #[builder(setter(custom), default = "None")]
    left_op: Option<Box<Antisymmetrizer>>,
}

impl AntisymmetrizerBuilder {
    pub fn axes(&mut self, axes: &[usize]) -> &mut Self {
        self.axes = Some(axes.to_vec());
        self
    }

    pub fn composition(&mut self, composition: &[usize]) -> &mut Self {
        self.composition = Some(composition.to_vec());
        self
    }

    /// Sets the operator to be applied after the one being built.
    pub fn left_op(&mut self, left_op: Antisymmetrizer) -> &mut Self {
        self.left_op = Some(Some(Box::new(left_op)));
        self
    }

    fn default_composition(&self) -> Result<Vec<usize>, AntisymmetrizerError> {
        let axes = self
            .axes
            .as_ref()
            .ok_or_else(|| AntisymmetrizerError::UninitialisedField("axes".to_string()))?;
        Ok(vec![1; axes.len()])
    }

    fn validate(&self) -> Result<(), AntisymmetrizerError> {
        let axes = self
            .axes
            .as_ref()
            .ok_or_else(|| AntisymmetrizerError::UninitialisedField("axes".to_string()))?;
        if let Some(composition) = self.composition.as_ref() {
            validate_composition(composition, axes.len())?;
        }
        if axes.iter().collect::<HashSet<_>>().len() != axes.len() {
            return Err(AntisymmetrizerError::DuplicateAxes(axes.clone()));
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() {
                return Err(AntisymmetrizerError::NonFiniteWeight(weight));
            }
        }
        if let Some(Some(left_op)) = self.left_op.as_ref() {
            left_op
                .check_invariants()
                .map_err(|err| AntisymmetrizerError::InvalidChain(err.to_string()))?;
        }
        Ok(())
    }
}

/// Serialised form of an [`Antisymmetrizer`], validated through the builder on deserialisation.
///
/// The field layout mirrors [`Antisymmetrizer`] so that non-self-describing formats round-trip.
/// An omitted or empty composition of a non-empty axis list means full antisymmetrisation.
#[derive(Deserialize)]
struct AntisymmetrizerRepr {
    axes: Vec<usize>,

    #[serde(default)]
    composition: Vec<usize>,

    #[serde(default = "default_weight")]
    weight: f64,

    #[serde(default)]
    left_op: Option<Box<Antisymmetrizer>>,
}

fn default_weight() -> f64 {
    1.0
}

impl TryFrom<AntisymmetrizerRepr> for Antisymmetrizer {
    type Error = AntisymmetrizerError;

    fn try_from(repr: AntisymmetrizerRepr) -> Result<Self, Self::Error> {
        let mut builder = Self::builder();
        builder.axes(&repr.axes).weight(repr.weight);
        if !repr.composition.is_empty() || repr.axes.is_empty() {
            builder.composition(&repr.composition);
        }
        if let Some(left_op) = repr.left_op {
            builder.left_op(*left_op);
        }
        builder.build()
    }
}

impl Antisymmetrizer {
    /// Returns a builder to construct a new antisymmetriser.
    #[must_use]
    pub fn builder() -> AntisymmetrizerBuilder {
        AntisymmetrizerBuilder::default()
    }

    /// Constructs a unit-weight operator fully antisymmetrising `axes`.
    ///
    /// # Errors
    ///
    /// Errors if `axes` contains duplicates.
    pub fn new(axes: &[usize]) -> Result<Self, AntisymmetrizerError> {
        Self::builder().axes(axes).build()
    }

    /// Constructs a unit-weight operator performing a reduced antisymmetrisation of `axes` with
    /// respect to the packets defined by `composition`.
    ///
    /// # Errors
    ///
    /// Errors if `composition` does not partition `axes` or if `axes` contains duplicates.
    pub fn with_composition(
        axes: &[usize],
        composition: &[usize],
    ) -> Result<Self, AntisymmetrizerError> {
        Self::builder().axes(axes).composition(composition).build()
    }

    /// Constructs the product of a sequence of operators, `ops[0] * ops[1] * ...`, so that the
    /// last operator acts first.
    ///
    /// # Errors
    ///
    /// Errors if `ops` is empty.
    pub fn product<I>(ops: I) -> Result<Self, AntisymmetrizerError>
    where
        I: IntoIterator<Item = Antisymmetrizer>,
    {
        ops.into_iter().reduce(|acc, op| acc * op).ok_or_else(|| {
            AntisymmetrizerError::InvalidChain(
                "a product requires at least one operator".to_string(),
            )
        })
    }

    /// The tensor axes permuted by this operator.
    pub fn axes(&self) -> &[usize] {
        &self.axes
    }

    /// The packet sizes of this operator.
    pub fn composition(&self) -> &[usize] {
        &self.composition
    }

    /// The scalar applied after antisymmetrisation by this operator alone.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The operator applied after this one, if any.
    pub fn left_op(&self) -> Option<&Antisymmetrizer> {
        self.left_op.as_deref()
    }

    /// Iterates over the operators in the chain in order of application, starting with `self`.
    pub fn chain(&self) -> impl Iterator<Item = &Antisymmetrizer> {
        std::iter::successors(Some(self), |op| op.left_op())
    }

    /// The product of the weights of all operators in the chain.
    pub fn total_weight(&self) -> f64 {
        self.chain().map(|op| op.weight).product()
    }

    /// The number of signed terms summed when this operator alone is applied.
    pub fn n_terms(&self) -> usize {
        n_shuffles(&self.composition)
    }

    /// Returns the packets of this operator as slices of [`Self::axes`].
    pub fn packets(&self) -> Vec<&[usize]> {
        let mut start = 0;
        self.composition
            .iter()
            .map(|&size| {
                let packet = &self.axes[start..start + size];
                start += size;
                packet
            })
            .collect()
    }

    fn check_invariants(&self) -> Result<(), AntisymmetrizerError> {
        for op in self.chain() {
            validate_composition(&op.composition, op.axes.len())?;
            if op.axes.iter().collect::<HashSet<_>>().len() != op.axes.len() {
                return Err(AntisymmetrizerError::DuplicateAxes(op.axes.clone()));
            }
            if !op.weight.is_finite() {
                return Err(AntisymmetrizerError::NonFiniteWeight(op.weight));
            }
        }
        Ok(())
    }

    // -------
    // Algebra
    // -------

    /// Returns a copy of this operator with its weight multiplied by `scalar`. The chained
    /// operator is left untouched.
    ///
    /// # Errors
    ///
    /// Errors if the resulting weight is not finite.
    pub fn scale(&self, scalar: f64) -> Result<Self, AntisymmetrizerError> {
        let weight = self.weight * scalar;
        if !weight.is_finite() {
            log::error!("Scaling {self} by {scalar} gives a non-finite weight.");
            return Err(AntisymmetrizerError::NonFiniteWeight(weight));
        }
        Ok(Self {
            weight,
            ..self.clone()
        })
    }

    /// Returns a copy of this operator whose chain is followed by `outer`, *i.e.* the operator
    /// $`\mathrm{outer} \cdot \mathrm{self}`$.
    ///
    /// If this operator already has a chained operator, `outer` is attached to the end of the
    /// chain so that composition is associative.
    pub fn followed_by(&self, outer: Antisymmetrizer) -> Self {
        let left_op = match self.left_op.as_deref() {
            None => outer,
            Some(left_op) => left_op.followed_by(outer),
        };
        Self {
            left_op: Some(Box::new(left_op)),
            ..self.clone()
        }
    }

    // -----------
    // Application
    // -----------

    /// Checks that every operator in the chain can act on a tensor of the given shape.
    fn check_shape(&self, shape: &[usize]) -> Result<(), AntisymmetrizerError> {
        for op in self.chain() {
            if op.axes.iter().any(|&axis| axis >= shape.len()) {
                log::error!(
                    "Axes {:?} are out of range for a tensor of shape {shape:?}.",
                    op.axes
                );
                return Err(AntisymmetrizerError::AxisMismatch {
                    axes: op.axes.clone(),
                    ndim: shape.len(),
                });
            }
            if let Some(&first) = op.axes.first() {
                if op.axes.iter().any(|&axis| shape[axis] != shape[first]) {
                    log::error!(
                        "Axes {:?} of a tensor of shape {shape:?} cannot be permuted.",
                        op.axes
                    );
                    return Err(AntisymmetrizerError::InconsistentExtents {
                        axes: op.axes.clone(),
                        shape: shape.to_vec(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the full-rank axis permutations and signs for all terms of this operator alone.
    fn signed_axis_permutations<D: Dimension>(
        &self,
        ndim: usize,
    ) -> Result<Vec<(D, i8)>, AntisymmetrizerError> {
        riffle_shuffles(&self.axes, &self.composition)?
            .map(|shuffle| {
                let embedded: Permutation = shuffle
                    .permutation()
                    .embed(&self.axes, ndim)
                    .map_err(|_| AntisymmetrizerError::AxisMismatch {
                        axes: self.axes.clone(),
                        ndim,
                    })?;
                let mut dim = D::zeros(ndim);
                dim.slice_mut().copy_from_slice(embedded.image());
                Ok((dim, shuffle.sign()))
            })
            .collect()
    }

    /// Applies this operator alone, ignoring the chain.
    fn apply_single<T, D>(
        &self,
        tensor: &ArrayView<T, D>,
    ) -> Result<Array<T, D>, AntisymmetrizerError>
    where
        T: TensorElement,
        D: Dimension,
    {
        let terms = self.signed_axis_permutations::<D>(tensor.ndim())?;
        log::debug!(
            "Antisymmetrising axes {:?} with composition {:?}: {} term(s).",
            self.axes,
            self.composition,
            terms.len()
        );
        let mut result = Array::<T, D>::zeros(tensor.raw_dim());
        for (perm, sign) in terms {
            let coeff = T::from(self.weight * f64::from(sign));
            result.scaled_add(coeff, &tensor.view().permuted_axes(perm));
        }
        Ok(result)
    }

    /// Applies this operator alone, ignoring the chain, with the terms evaluated in parallel.
    fn par_apply_single<T, D>(
        &self,
        tensor: &ArrayView<T, D>,
    ) -> Result<Array<T, D>, AntisymmetrizerError>
    where
        T: TensorElement,
        D: Dimension,
    {
        let terms = self.signed_axis_permutations::<D>(tensor.ndim())?;
        log::debug!(
            "Antisymmetrising axes {:?} with composition {:?} in parallel: {} term(s).",
            self.axes,
            self.composition,
            terms.len()
        );
        let result = terms
            .into_par_iter()
            .fold(
                || Array::<T, D>::zeros(tensor.raw_dim()),
                |mut acc, (perm, sign)| {
                    let coeff = T::from(self.weight * f64::from(sign));
                    acc.scaled_add(coeff, &tensor.view().permuted_axes(perm));
                    acc
                },
            )
            .reduce(
                || Array::<T, D>::zeros(tensor.raw_dim()),
                |mut acc, partial| {
                    acc.scaled_add(T::one(), &partial);
                    acc
                },
            );
        Ok(result)
    }

    /// Applies this operator, followed by its chained operators, to a tensor.
    ///
    /// The signed transposed copies are accumulated in place, so no transposed copy of the
    /// tensor is materialised per term.
    ///
    /// # Arguments
    ///
    /// * `tensor` - The tensor to be antisymmetrised. It is not modified.
    ///
    /// # Returns
    ///
    /// A new antisymmetrised tensor of the same shape.
    ///
    /// # Errors
    ///
    /// Errors if any operator in the chain acts on axes that the tensor does not have, or on axes
    /// with unequal extents. The check is performed for the whole chain before any term is
    /// evaluated.
    pub fn apply<T, S, D>(
        &self,
        tensor: &ArrayBase<S, D>,
    ) -> Result<Array<T, D>, AntisymmetrizerError>
    where
        T: TensorElement,
        S: Data<Elem = T>,
        D: Dimension,
    {
        self.check_shape(tensor.shape())?;
        let mut result = self.apply_single(&tensor.view())?;
        for op in self.chain().skip(1) {
            let next = op.apply_single(&result.view())?;
            result = next;
        }
        Ok(result)
    }

    /// Same as [`Self::apply`], but the terms of every operator in the chain are distributed
    /// over the `rayon` thread pool and the partial sums combined afterwards. Results agree
    /// with [`Self::apply`] up to floating-point summation order.
    pub fn par_apply<T, S, D>(
        &self,
        tensor: &ArrayBase<S, D>,
    ) -> Result<Array<T, D>, AntisymmetrizerError>
    where
        T: TensorElement,
        S: Data<Elem = T>,
        D: Dimension,
    {
        self.check_shape(tensor.shape())?;
        let mut result = self.par_apply_single(&tensor.view())?;
        for op in self.chain().skip(1) {
            let next = op.par_apply_single(&result.view())?;
            result = next;
        }
        Ok(result)
    }

    /// Acts on a right-hand operand, dispatching on its kind.
    ///
    /// * A scalar scales the operator.
    /// * A tensor is antisymmetrised.
    /// * Another operator is composed, acting before this one.
    pub fn act<T, D>(
        &self,
        operand: Operand<'_, T, D>,
    ) -> Result<Product<T, D>, AntisymmetrizerError>
    where
        T: TensorElement,
        D: Dimension,
    {
        match operand {
            Operand::Scalar(scalar) => self.scale(scalar).map(Product::Operator),
            Operand::Tensor(tensor) => self.apply(&tensor).map(Product::Tensor),
            Operand::Operator(inner) => Ok(Product::Operator(inner.followed_by(self.clone()))),
        }
    }
}

// ================
// Enum definitions
// ================

/// The right-hand operand of an antisymmetriser.
#[derive(Clone, Debug)]
pub enum Operand<'a, T, D: Dimension> {
    /// A real scalar.
    Scalar(f64),

    /// A tensor view.
    Tensor(ArrayView<'a, T, D>),

    /// Another antisymmetriser.
    Operator(Antisymmetrizer),
}

impl<'a, T, D: Dimension> From<f64> for Operand<'a, T, D> {
    fn from(scalar: f64) -> Self {
        Self::Scalar(scalar)
    }
}

impl<'a, T, D: Dimension> From<ArrayView<'a, T, D>> for Operand<'a, T, D> {
    fn from(tensor: ArrayView<'a, T, D>) -> Self {
        Self::Tensor(tensor)
    }
}

impl<'a, T, D: Dimension> From<Antisymmetrizer> for Operand<'a, T, D> {
    fn from(op: Antisymmetrizer) -> Self {
        Self::Operator(op)
    }
}

/// The result of an antisymmetriser acting on an [`Operand`].
#[derive(Clone, Debug)]
pub enum Product<T, D: Dimension> {
    /// A scaled or composed operator.
    Operator(Antisymmetrizer),

    /// An antisymmetrised tensor.
    Tensor(Array<T, D>),
}

impl<T, D: Dimension> Product<T, D> {
    /// Returns the operator, if the product is one.
    pub fn into_operator(self) -> Option<Antisymmetrizer> {
        match self {
            Self::Operator(op) => Some(op),
            Self::Tensor(_) => None,
        }
    }

    /// Returns the tensor, if the product is one.
    pub fn into_tensor(self) -> Option<Array<T, D>> {
        match self {
            Self::Operator(_) => None,
            Self::Tensor(tensor) => Some(tensor),
        }
    }
}

// -------
// Display
// -------
impl Antisymmetrizer {
    /// The packets of this operator alone in Bartlett notation, *e.g.* `0,1/2`.
    pub fn packet_notation(&self) -> String {
        self.packets()
            .iter()
            .map(|packet| {
                packet
                    .iter()
                    .map(|axis| axis.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The whole chain in Bartlett product notation, *e.g.* `0/1|2/3`, written with the
    /// operator acting last on the left. Weights are not included.
    pub fn notation(&self) -> String {
        let mut links = self.chain().map(|op| op.packet_notation()).collect::<Vec<_>>();
        links.reverse();
        links.join("|")
    }
}

impl fmt::Display for Antisymmetrizer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let weight = self.total_weight();
        if weight == 1.0 {
            write!(f, "A[{}]", self.notation())
        } else {
            write!(f, "{weight} A[{}]", self.notation())
        }
    }
}

// ---
// Mul
// ---
impl Mul<f64> for &Antisymmetrizer {
    type Output = Antisymmetrizer;

    /// Scales the operator by `rhs`. This is [`Antisymmetrizer::scale`] for callers that have
    /// already ruled out overflow.
    ///
    /// # Panics
    ///
    /// Panics if the scaled weight is not finite, *e.g.* when `rhs` is infinite or NaN. Use
    /// [`Antisymmetrizer::scale`] to handle this as an error instead.
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs).unwrap_or_else(|err| {
            log::error!("{err}");
            panic!("Unable to scale `{self}` by `{rhs}`.")
        })
    }
}

impl Mul<f64> for Antisymmetrizer {
    type Output = Antisymmetrizer;

    /// # Panics
    ///
    /// Panics if the scaled weight is not finite.
    fn mul(self, rhs: f64) -> Self::Output {
        &self * rhs
    }
}

impl Mul<&'_ Antisymmetrizer> for f64 {
    type Output = Antisymmetrizer;

    /// # Panics
    ///
    /// Panics if the scaled weight is not finite.
    fn mul(self, rhs: &Antisymmetrizer) -> Self::Output {
        rhs * self
    }
}

impl Mul<Antisymmetrizer> for f64 {
    type Output = Antisymmetrizer;

    /// # Panics
    ///
    /// Panics if the scaled weight is not finite.
    fn mul(self, rhs: Antisymmetrizer) -> Self::Output {
        &rhs * self
    }
}

impl Mul<&'_ Antisymmetrizer> for &Antisymmetrizer {
    type Output = Antisymmetrizer;

    /// Composes two operators: `lhs * rhs` applies `rhs` first and `lhs` afterwards.
    fn mul(self, rhs: &Antisymmetrizer) -> Self::Output {
        rhs.followed_by(self.clone())
    }
}

impl Mul<Antisymmetrizer> for &Antisymmetrizer {
    type Output = Antisymmetrizer;

    fn mul(self, rhs: Antisymmetrizer) -> Self::Output {
        self * &rhs
    }
}

impl Mul<&'_ Antisymmetrizer> for Antisymmetrizer {
    type Output = Antisymmetrizer;

    fn mul(self, rhs: &Antisymmetrizer) -> Self::Output {
        rhs.followed_by(self)
    }
}

impl Mul<Antisymmetrizer> for Antisymmetrizer {
    type Output = Antisymmetrizer;

    fn mul(self, rhs: Antisymmetrizer) -> Self::Output {
        rhs.followed_by(self)
    }
}

impl<'a, T, S, D> Mul<&'a ArrayBase<S, D>> for &Antisymmetrizer
where
    T: TensorElement,
    S: Data<Elem = T>,
    D: Dimension,
{
    type Output = Result<Array<T, D>, AntisymmetrizerError>;

    fn mul(self, rhs: &'a ArrayBase<S, D>) -> Self::Output {
        self.apply(rhs)
    }
}

impl<'a, T, S, D> Mul<&'a ArrayBase<S, D>> for Antisymmetrizer
where
    T: TensorElement,
    S: Data<Elem = T>,
    D: Dimension,
{
    type Output = Result<Array<T, D>, AntisymmetrizerError>;

    fn mul(self, rhs: &'a ArrayBase<S, D>) -> Self::Output {
        self.apply(rhs)
    }
}

// ---
// Neg
// ---
impl Neg for &Antisymmetrizer {
    type Output = Antisymmetrizer;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl Neg for Antisymmetrizer {
    type Output = Antisymmetrizer;

    fn neg(self) -> Self::Output {
        &self * -1.0
    }
}
