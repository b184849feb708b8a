//! Permutations of finite ordered sets of axis positions.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::ops::Mul;

use derive_builder::Builder;
use indexmap::IndexSet;
use log;
use num_traits::Inv;


// =================
// Error definitions
// =================

/// Error raised when an image does not describe a valid permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// The supplied image is not a rearrangement of $`0, 1, \ldots, n-1`$.
    InvalidImage(Vec<usize>),

    /// The positions onto which a permutation is embedded are inconsistent with its rank or with
    /// the target rank.
    InvalidEmbedding {
        positions: Vec<usize>,
        rank: usize,
    },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidImage(image) => {
                write!(f, "Permutation error: `{image:?}` is not a valid permutation image.")
            }
            Self::InvalidEmbedding { positions, rank } => write!(
                f,
                "Permutation error: positions `{positions:?}` cannot be embedded in rank {rank}."
            ),
        }
    }
}

impl Error for PermutationError {}

// ==================
// Struct definitions
// ==================

/// A structure to manage permutation actions of a finite set.
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Permutation {
    /// If the permutation is to act on an ordered sequence of $`n`$ integers,
    /// $`0, 1, \ldots, n-1`$, then this gives the result of the action.
    image: Vec<usize>,

    /// The disjoint cycles of the permutation, sorted by decreasing length and then
    /// lexicographically.
    #[builder(setter(skip), default = "self.calc_cycles()")]
    cycles: Vec<Vec<usize>>,
}

impl PermutationBuilder {
    fn validate(&self) -> Result<(), String> {
        let image = self
            .image
            .as_ref()
            .ok_or("Permutation image has not been set.".to_string())?;
        let distinct = image.iter().cloned().collect::<HashSet<usize>>();
        if distinct.len() == image.len() && image.iter().all(|&i| i < image.len()) {
            Ok(())
        } else {
            Err(format!("`{image:?}` is not a valid permutation image."))
        }
    }

    fn calc_cycles(&self) -> Vec<Vec<usize>> {
        let image = match self.image.as_ref() {
            Some(image) => image,
            None => return vec![],
        };
        let rank = image.len();
        let mut remaining_indices = (0..rank).rev().collect::<IndexSet<usize>>();
        let mut cycles: Vec<Vec<usize>> = Vec::with_capacity(rank);
        while let Some(start) = remaining_indices.pop() {
            let mut cycle: Vec<usize> = Vec::with_capacity(remaining_indices.len() + 1);
            cycle.push(start);
            let mut idx = start;
            while image[idx] != start {
                idx = image[idx];
                remaining_indices.shift_remove(&idx);
                cycle.push(idx);
            }
            cycles.push(cycle);
        }
        cycles.sort_by_key(|cycle| (!cycle.len(), cycle.clone()));
        cycles
    }
}

impl Permutation {
    /// Returns a builder to construct a new permutation.
    #[must_use]
    pub fn builder() -> PermutationBuilder {
        PermutationBuilder::default()
    }

    /// Constructs a permutation from its image.
    ///
    /// # Arguments
    ///
    /// * `image` - The result of the permutation acting on $`0, 1, \ldots, n-1`$.
    ///
    /// # Errors
    ///
    /// Errors if `image` is not a rearrangement of $`0, 1, \ldots, n-1`$.
    pub fn from_image(image: &[usize]) -> Result<Self, PermutationError> {
        Self::builder()
            .image(image.to_vec())
            .build()
            .map_err(|err| {
                log::error!("{err}");
                PermutationError::InvalidImage(image.to_vec())
            })
    }

    /// Constructs the identity permutation of a given rank.
    pub fn identity(rank: usize) -> Self {
        let image = (0..rank).collect::<Vec<_>>();
        Self {
            cycles: image.iter().map(|&i| vec![i]).collect(),
            image,
        }
    }

    /// The number of elements in the finite set on which the permutation acts.
    pub fn rank(&self) -> usize {
        self.image.len()
    }

    pub fn image(&self) -> &Vec<usize> {
        &self.image
    }

    /// Obtains the cycle representation of the permutation.
    pub fn cycles(&self) -> &Vec<Vec<usize>> {
        &self.cycles
    }

    /// Obtains the pattern of the cycle representation of the permutation.
    pub fn cycle_pattern(&self) -> Vec<usize> {
        self.cycles
            .iter()
            .map(|cycle| cycle.len())
            .collect::<Vec<usize>>()
    }

    /// Returns `true` if this permutation is the identity permutation for this rank.
    pub fn is_identity(&self) -> bool {
        self.image.iter().enumerate().all(|(i, &img)| i == img)
    }

    /// Returns the parity of the permutation: $`+1`$ if it is even and $`-1`$ if it is odd.
    ///
    /// A cycle of length $`l`$ is a product of $`l - 1`$ transpositions, so the parity is
    /// $`(-1)^{n - c}`$ where $`c`$ is the number of disjoint cycles.
    pub fn parity(&self) -> i8 {
        if (self.rank() - self.cycles.len()) % 2 == 0 {
            1
        } else {
            -1
        }
    }

    /// Applies this permutation to an ordered sequence of labels, returning
    /// `[labels[image[0]], labels[image[1]], ...]`.
    ///
    /// # Panics
    ///
    /// Panics if `labels` does not have exactly [`Self::rank`] elements.
    pub fn permute<T: Clone>(&self, labels: &[T]) -> Vec<T> {
        assert_eq!(
            labels.len(),
            self.rank(),
            "The number of labels does not match the rank of the permutation."
        );
        self.image.iter().map(|&i| labels[i].clone()).collect()
    }

    /// Embeds this permutation into a larger set of positions.
    ///
    /// The resulting permutation of rank `rank` maps `positions[i]` to `positions[image[i]]` and
    /// fixes every position not listed in `positions`. This is the full-rank axis permutation
    /// that shuffles only the selected axes of a tensor.
    ///
    /// # Arguments
    ///
    /// * `positions` - Distinct positions in $`0, 1, \ldots, \mathrm{rank}-1`$, one for each
    /// element acted on by this permutation.
    /// * `rank` - The rank of the embedding permutation.
    ///
    /// # Errors
    ///
    /// Errors if `positions` has the wrong length, repeats a position, or contains a position
    /// not smaller than `rank`.
    pub fn embed(&self, positions: &[usize], rank: usize) -> Result<Self, PermutationError> {
        let invalid = || PermutationError::InvalidEmbedding {
            positions: positions.to_vec(),
            rank,
        };
        if positions.len() != self.rank()
            || positions.iter().any(|&pos| pos >= rank)
            || positions.iter().collect::<HashSet<_>>().len() != positions.len()
        {
            return Err(invalid());
        }
        let mut image = (0..rank).collect::<Vec<_>>();
        for (&pos, &img) in positions.iter().zip(self.image.iter()) {
            image[pos] = positions[img];
        }
        Self::from_image(&image).map_err(|_| invalid())
    }
}

// ---
// Mul
// ---
impl Mul<&'_ Permutation> for &Permutation {
    type Output = Permutation;

    /// Composes two permutations such that
    /// `(self * rhs).image()[i] == self.image()[rhs.image()[i]]`.
    ///
    /// Permuting the axes of an array by `self` and then by `rhs` is the same as permuting them
    /// once by `self * rhs`.
    fn mul(self, rhs: &Permutation) -> Self::Output {
        assert_eq!(
            self.rank(),
            rhs.rank(),
            "The ranks of two multiplying permutations do not match."
        );
        Permutation::builder()
            .image(
                rhs.image
                    .iter()
                    .map(|&ri| self.image[ri])
                    .collect::<Vec<usize>>(),
            )
            .build()
            .expect("Unable to construct a product `Permutation`.")
    }
}

impl Mul<&'_ Permutation> for Permutation {
    type Output = Permutation;

    fn mul(self, rhs: &Permutation) -> Self::Output {
        &self * rhs
    }
}

// ---
// Inv
// ---
impl Inv for &Permutation {
    type Output = Permutation;

    fn inv(self) -> Self::Output {
        let mut image_inv = (0..self.rank()).collect::<Vec<_>>();
        image_inv.sort_by_key(|&i| self.image[i]);
        Permutation::builder()
            .image(image_inv)
            .build()
            .expect("Unable to construct an inverse `Permutation`.")
    }
}

impl Inv for Permutation {
    type Output = Permutation;

    fn inv(self) -> Self::Output {
        (&self).inv()
    }
}

// -------
// Display
// -------
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cycles = self
            .cycles
            .iter()
            .filter(|cycle| cycle.len() > 1)
            .map(|cycle| {
                format!(
                    "({})",
                    cycle
                        .iter()
                        .map(|i| i.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                )
            })
            .collect::<String>();
        if cycles.is_empty() {
            write!(f, "()")
        } else {
            write!(f, "{cycles}")
        }
    }
}
