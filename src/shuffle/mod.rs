//! Signed riffle shuffles of packets of axes.
//!
//! Given an ordered list of $`m`$ axes cut into contiguous packets of sizes
//! $`(c_1, \ldots, c_p)`$, a $`(c_1, \ldots, c_p)`$-shuffle is an interleaving of the packets
//! which preserves the relative order of the axes inside every packet. There are
//!
//! ```math
//!     \frac{m!}{c_1! \, c_2! \cdots c_p!}
//! ```
//!
//! such shuffles. Each one is enumerated together with its sign, *i.e.* the parity of the number
//! of inversions between axes belonging to different packets.

use std::error::Error;
use std::fmt;

use log;
use num::integer::multinomial;

use crate::permutation::Permutation;

#[cfg(test)]
#[path = "shuffle_tests.rs"]
mod shuffle_tests;

// =================
// Error definitions
// =================

/// Error raised when a composition does not partition an axis list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    /// The packet sizes contain a zero or do not sum to the number of axes.
    InvalidComposition {
        composition: Vec<usize>,
        naxes: usize,
    },
}

impl fmt::Display for ShuffleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidComposition { composition, naxes } => write!(
                f,
                "Shuffle error: composition `{composition:?}` is not a partition of {naxes} axes \
                into non-empty packets."
            ),
        }
    }
}

impl Error for ShuffleError {}

/// Checks that `composition` partitions `naxes` axes into non-empty packets.
pub fn validate_composition(composition: &[usize], naxes: usize) -> Result<(), ShuffleError> {
    if composition.iter().any(|&c| c == 0) || composition.iter().sum::<usize>() != naxes {
        Err(ShuffleError::InvalidComposition {
            composition: composition.to_vec(),
            naxes,
        })
    } else {
        Ok(())
    }
}

/// Returns the number of riffle shuffles of packets with sizes given by `composition`, *i.e.* the
/// multinomial coefficient of `composition`.
pub fn n_shuffles(composition: &[usize]) -> usize {
    multinomial(composition)
}

// ==================
// Struct definitions
// ==================

/// A signed riffle shuffle of an axis list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shuffle {
    /// The shuffle as a permutation of the positions in the axis list.
    permutation: Permutation,

    /// The shuffled axis labels.
    axes: Vec<usize>,

    /// The sign of the shuffle, $`\pm 1`$.
    sign: i8,
}

impl Shuffle {
    /// The shuffle as a permutation of the positions in the original axis list.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// The axis labels in shuffled order.
    pub fn axes(&self) -> &[usize] {
        &self.axes
    }

    /// The sign of the shuffle relative to the identity arrangement of the packets.
    pub fn sign(&self) -> i8 {
        self.sign
    }
}

/// A lazy iterator over all signed riffle shuffles of an axis list with respect to a
/// composition.
///
/// Shuffles are enumerated in lexicographic order of their packet-label sequences, so the first
/// shuffle is always the identity.
#[derive(Clone, Debug)]
pub struct RiffleShuffleIterator {
    /// The axis labels being shuffled.
    axes: Vec<usize>,

    /// The position in [`Self::axes`] at which each packet starts.
    offsets: Vec<usize>,

    /// The packet label of every slot in the next shuffle to be yielded, or `None` once all
    /// shuffles have been yielded.
    labels: Option<Vec<usize>>,

    /// The number of shuffles not yet yielded.
    remaining: usize,
}

impl RiffleShuffleIterator {
    /// Constructs the signed shuffle described by a sequence of packet labels: slot `j` receives
    /// the next unused axis of packet `labels[j]`.
    fn shuffle_from_labels(&self, labels: &[usize]) -> Shuffle {
        let mut next_in_packet = self.offsets.clone();
        let image = labels
            .iter()
            .map(|&label| {
                let pos = next_in_packet[label];
                next_in_packet[label] += 1;
                pos
            })
            .collect::<Vec<_>>();
        let permutation = Permutation::from_image(&image)
            .expect("Packet labels should always describe a valid permutation.");
        let sign = permutation.parity();
        Shuffle {
            axes: permutation.permute(&self.axes),
            permutation,
            sign,
        }
    }
}

impl Iterator for RiffleShuffleIterator {
    type Item = Shuffle;

    fn next(&mut self) -> Option<Self::Item> {
        let mut labels = self.labels.take()?;
        let shuffle = self.shuffle_from_labels(&labels);
        self.remaining = self.remaining.saturating_sub(1);
        if next_label_sequence(&mut labels) {
            self.labels = Some(labels);
        }
        Some(shuffle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RiffleShuffleIterator {}

/// Advances a multiset sequence to its lexicographic successor in place.
///
/// Returns `false` (leaving the sequence untouched) if it is already the last arrangement.
fn next_label_sequence(labels: &mut [usize]) -> bool {
    if labels.len() < 2 {
        return false;
    }
    let mut i = labels.len() - 1;
    while i > 0 && labels[i - 1] >= labels[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = labels.len() - 1;
    while labels[j] <= labels[i - 1] {
        j -= 1;
    }
    labels.swap(i - 1, j);
    labels[i..].reverse();
    true
}

/// Generates all signed $`(c_1, \ldots, c_p)`$-shuffles of an axis list.
///
/// # Arguments
///
/// * `axes` - The ordered axis labels. Consecutive slices of sizes given by `composition` form
/// the packets.
/// * `composition` - The packet sizes.
///
/// # Returns
///
/// A lazy iterator over the signed shuffles.
///
/// # Errors
///
/// Errors if `composition` contains a zero or does not sum to the number of axes.
pub fn riffle_shuffles(
    axes: &[usize],
    composition: &[usize],
) -> Result<RiffleShuffleIterator, ShuffleError> {
    validate_composition(composition, axes.len())?;
    let offsets = composition
        .iter()
        .scan(0, |start, &size| {
            let offset = *start;
            *start += size;
            Some(offset)
        })
        .collect::<Vec<_>>();
    let labels = composition
        .iter()
        .enumerate()
        .flat_map(|(label, &size)| std::iter::repeat(label).take(size))
        .collect::<Vec<_>>();
    let remaining = n_shuffles(composition);
    log::debug!(
        "Generating {remaining} riffle shuffle(s) of axes {axes:?} with composition \
        {composition:?}."
    );
    Ok(RiffleShuffleIterator {
        axes: axes.to_vec(),
        offsets,
        labels: Some(labels),
        remaining,
    })
}
