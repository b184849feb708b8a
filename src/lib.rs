//! # tensorutils: antisymmetrisation and contraction of dense tensors
//!
//! `tensorutils` provides a small set of tensor utilities for many-body quantum chemistry built on
//! top of [`ndarray`]:
//! - immutable, composable antisymmetrisation operators acting on selected tensor axes,
//!   including reduced antisymmetrisation over riffle shuffles of already antisymmetric packets,
//! - parsing of these operators from Bartlett notation, *e.g.* `"0/1|2/3"`,
//! - expansion of spatial-orbital integral arrays in the spin-orbital basis,
//! - pairwise tensor contraction with explicit index bookkeeping, and
//! - reading and writing antisymmetriser definitions as YAML files.
//!
//! ## Examples and usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions. As a short example, the antisymmetrised two-electron integrals
//! $`\braket{pq||rs}`$ can be obtained from $`\braket{pq|rs}`$ by
//!
//! ```
//! use ndarray::Array4;
//! use tensorutils::antisymmetrizer::Antisymmetrizer;
//!
//! let g = Array4::<f64>::from_shape_fn((3, 3, 3, 3), |(p, q, r, s)| {
//!     (p + 2 * q + 3 * r + 4 * s) as f64
//! });
//! let a = "2/3".parse::<Antisymmetrizer>().unwrap();
//! let g_as = (a * &g).unwrap();
//! assert_eq!(g_as[(0, 1, 2, 0)], g[(0, 1, 2, 0)] - g[(0, 1, 0, 2)]);
//! ```

pub mod antisymmetrizer;
pub mod contraction;
pub mod io;
pub mod notation;
pub mod permutation;
pub mod shuffle;
pub mod spinorb;
