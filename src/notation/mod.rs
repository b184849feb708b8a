//! Parsing of antisymmetrisers from Bartlett notation.
//!
//! A string of the form `"a0/a1/.../aN"` denotes full antisymmetrisation with respect to the
//! axes `a0, a1, ..., aN`. Comma-separated lists between slashes, as in `".../aK,aK+1,.../..."`,
//! denote packets of axes that are already antisymmetric, so that only the interleavings
//! ("shuffles") of the packets are summed over. Several such arguments delimited by bars, as in
//! `"arg1|arg2|..."`, denote a product of antisymmetrisers.
//!
//! See I. Shavitt and R. J. Bartlett, *Many-Body Methods in Chemistry and Physics* (Cambridge
//! University Press, Cambridge, UK, 2009).

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use log;

use crate::antisymmetrizer::{Antisymmetrizer, AntisymmetrizerError};


// =================
// Error definitions
// =================

/// Errors arising from parsing Bartlett notation.
#[derive(Debug, Clone, PartialEq)]
pub enum NotationError {
    /// The string is not well-formed.
    Syntax {
        notation: String,
        reason: String,
    },

    /// The string is well-formed but does not describe a valid operator.
    Antisymmetrizer(AntisymmetrizerError),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Syntax { notation, reason } => {
                write!(f, "Notation error: cannot parse `{notation}`: {reason}.")
            }
            Self::Antisymmetrizer(err) => write!(f, "Notation error: {err}"),
        }
    }
}

impl Error for NotationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Syntax { .. } => None,
            Self::Antisymmetrizer(err) => Some(err),
        }
    }
}

impl From<AntisymmetrizerError> for NotationError {
    fn from(err: AntisymmetrizerError) -> Self {
        Self::Antisymmetrizer(err)
    }
}

// =========
// Functions
// =========

/// Parses a single packet, *i.e.* a comma-separated list of axis indices.
fn parse_packet(notation: &str, packet: &str) -> Result<Vec<usize>, NotationError> {
    packet
        .split(',')
        .map(|token| {
            let token = token.trim();
            if token.is_empty() {
                Err(NotationError::Syntax {
                    notation: notation.to_string(),
                    reason: "empty axis index".to_string(),
                })
            } else {
                token.parse::<usize>().map_err(|err| NotationError::Syntax {
                    notation: notation.to_string(),
                    reason: format!("`{token}` is not an axis index ({err})"),
                })
            }
        })
        .collect()
}

/// Parses the axes and composition of an individual antisymmetriser written in Bartlett
/// notation, *e.g.* `"0/1,2"` gives axes `[0, 1, 2]` and composition `[1, 2]`.
///
/// # Errors
///
/// Errors if `notation` contains an empty packet or axis, or a token that is not a non-negative
/// integer.
pub fn parse_packets(notation: &str) -> Result<(Vec<usize>, Vec<usize>), NotationError> {
    let packets = notation
        .split('/')
        .map(|packet| parse_packet(notation, packet))
        .collect::<Result<Vec<_>, _>>()?;
    let composition = packets.iter().map(Vec::len).collect::<Vec<_>>();
    let axes = packets.into_iter().flatten().collect::<Vec<_>>();
    Ok((axes, composition))
}

/// Gets an individual antisymmetriser from a Bartlett-notation string.
///
/// # Arguments
///
/// * `notation` - A series of integers separated by commas and slashes.
///
/// # Returns
///
/// The antisymmetriser, with unit weight.
///
/// # Errors
///
/// Errors if the string is malformed or describes an invalid operator (*e.g.* with repeated
/// axes).
pub fn parse_antisymmetrizer(notation: &str) -> Result<Antisymmetrizer, NotationError> {
    let (axes, composition) = parse_packets(notation)?;
    let op = Antisymmetrizer::with_composition(&axes, &composition)?;
    log::debug!("Parsed `{notation}` as {op}.");
    Ok(op)
}

/// Gets an antisymmetriser product from a Bartlett-notation string.
///
/// The factors are separated by bars and multiplied from left to right, so the rightmost factor
/// acts first on a tensor.
///
/// # Arguments
///
/// * `notation` - A series of integers separated by commas, slashes and bars.
///
/// # Returns
///
/// The antisymmetriser product.
///
/// # Errors
///
/// Errors if any factor is malformed or describes an invalid operator.
pub fn parse_antisymmetrizer_product(notation: &str) -> Result<Antisymmetrizer, NotationError> {
    let factors = notation
        .split('|')
        .map(parse_antisymmetrizer)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Antisymmetrizer::product(factors)?)
}

impl FromStr for Antisymmetrizer {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_antisymmetrizer_product(s)
    }
}
