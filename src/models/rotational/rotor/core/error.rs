use thiserror::Error;
use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

use super::{AllowedParity, NuclearDegeneracy};

/// Errors that can occur while building or querying a [`DiatomicRotor`](super::DiatomicRotor).
///
/// Construction errors leave nothing behind, and query errors never touch the
/// precomputed level tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RotorError {
    /// A construction argument is out of range.
    ///
    /// For example, `j_max` is zero or too small to admit any allowed level.
    #[error("invalid argument: {context}")]
    InvalidArgument { context: String },

    /// The species tag names no known molecule.
    #[error("unknown species: {tag:?}")]
    InvalidSpecies { tag: String },

    /// Both nuclear degeneracy slots are zero, so no level can be populated.
    #[error("invalid nuclear degeneracies [{g_even}, {g_odd}]: at least one must be nonzero")]
    InvalidDegeneracy { g_even: u32, g_odd: u32 },

    /// The rotational constant is not a strictly positive, finite energy.
    #[error("invalid rotational constant: {b:?}")]
    InvalidRotationalConstant { b: TemperatureInterval },

    /// The temperature is not strictly positive and finite.
    #[error("invalid temperature: {temperature:?}")]
    InvalidTemperature { temperature: ThermodynamicTemperature },

    /// The level is not in the allowed set of the model.
    #[error("level J={j} is not allowed ({parity} levels below J_max={j_max}, g_nuc={g_nuc})")]
    InvalidLevel {
        j: u32,
        parity: AllowedParity,
        j_max: u32,
        g_nuc: NuclearDegeneracy,
    },

    /// Every Boltzmann factor underflowed and the partition sum is exactly zero.
    #[error("partition sum underflowed to zero at {temperature:?}")]
    NumericalUnderflow { temperature: ThermodynamicTemperature },
}
