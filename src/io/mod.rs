//! Reading and writing antisymmetriser definitions as YAML files.
//!
//! A definition lists the factors of a product of antisymmetrisers in Bartlett notation, leftmost
//! factor acting last, together with an overall weight:
//!
//! ```yaml
//! factors:
//!   - 0,1/2,3
//!   - 0/1|2/3
//! weight: 0.25
//! ```
//!
//! Definition files always carry the `.yml` extension, which is set on the given name both when
//! reading and when writing.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{self, ensure, format_err};
use log;
use serde::{Deserialize, Serialize};
use serde_yaml;

use crate::antisymmetrizer::Antisymmetrizer;
use crate::notation::parse_antisymmetrizer_product;


/// The extension of antisymmetriser definition files.
pub const DEFINITION_EXT: &str = "yml";

/// A serialisable definition of a product of antisymmetrisers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AntisymmetrizerDefinition {
    /// The factors of the product in Bartlett notation. Each factor may itself be a bar-delimited
    /// product. The last factor acts first.
    pub factors: Vec<String>,

    /// The overall weight of the product.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl AntisymmetrizerDefinition {
    /// Parses and validates the factors and combines them into a single operator.
    ///
    /// # Errors
    ///
    /// Errors if there are no factors, if any factor cannot be parsed, or if the weight is not
    /// finite.
    pub fn to_antisymmetrizer(&self) -> Result<Antisymmetrizer, anyhow::Error> {
        ensure!(
            !self.factors.is_empty(),
            "An antisymmetriser definition requires at least one factor."
        );
        let ops = self
            .factors
            .iter()
            .map(|factor| parse_antisymmetrizer_product(factor).map_err(|err| format_err!(err)))
            .collect::<Result<Vec<_>, _>>()?;
        Antisymmetrizer::product(ops)
            .and_then(|op| op.scale(self.weight))
            .map_err(|err| format_err!(err))
    }
}

impl From<&Antisymmetrizer> for AntisymmetrizerDefinition {
    /// One factor per operator in the chain. Weights of the individual operators are collected
    /// into the overall weight.
    fn from(op: &Antisymmetrizer) -> Self {
        let mut factors = op
            .chain()
            .map(|link| link.packet_notation())
            .collect::<Vec<_>>();
        factors.reverse();
        Self {
            factors,
            weight: op.total_weight(),
        }
    }
}

fn definition_path<P: AsRef<Path>>(name: P) -> PathBuf {
    let mut path = name.as_ref().to_path_buf();
    path.set_extension(DEFINITION_EXT);
    path
}

/// Reads an antisymmetriser definition file.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in. Any extension is replaced by `.yml`.
///
/// # Returns
///
/// A `Result` containing the validated product of the factors listed in the file, scaled by its
/// weight.
pub fn read_antisymmetrizer_yaml<P: AsRef<Path>>(
    name: P,
) -> Result<Antisymmetrizer, anyhow::Error> {
    let path = definition_path(name);
    log::debug!("Reading antisymmetriser definition from {}.", path.display());
    let reader = BufReader::new(File::open(&path).map_err(|err| format_err!(err))?);
    let definition: AntisymmetrizerDefinition =
        serde_yaml::from_reader(reader).map_err(|err| format_err!(err))?;
    definition.to_antisymmetrizer().map_err(|err| {
        log::error!("Invalid antisymmetriser definition in {}: {err}", path.display());
        err
    })
}

/// Writes an antisymmetriser definition file.
///
/// # Arguments
///
/// * `name` - The name of the file to be written. Any extension is replaced by `.yml`.
/// * `op` - The operator to be written.
///
/// # Returns
///
/// A `Result` indicating if the serialisation and writing processes have been successful.
pub fn write_antisymmetrizer_yaml<P: AsRef<Path>>(
    name: P,
    op: &Antisymmetrizer,
) -> Result<(), anyhow::Error> {
    let path = definition_path(name);
    log::debug!("Writing {op} to {}.", path.display());
    let writer = BufWriter::new(File::create(&path).map_err(|err| format_err!(err))?);
    serde_yaml::to_writer(writer, &AntisymmetrizerDefinition::from(op))
        .map_err(|err| format_err!(err))
}
