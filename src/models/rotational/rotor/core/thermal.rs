//! Boltzmann statistics over precomputed level tables.
//!
//! Every function here takes the total degeneracies and Kelvin-equivalent
//! energies as parallel slices, in increasing energy order.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::StrictlyPositive;

use super::RotorError;

/// Thermal equilibrium of a rotor at one temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    /// Temperature of the evaluation.
    pub temperature: ThermodynamicTemperature,

    /// Partition sum `Z(T)`.
    pub partition_sum: f64,

    /// Fractional populations, in the order of the allowed levels.
    pub populations: Vec<f64>,

    /// Boltzmann-weighted mean rotational energy.
    pub mean_energy: TemperatureInterval,
}

/// Validates a query temperature and returns it in Kelvin.
pub(super) fn temperature_kelvin(temperature: ThermodynamicTemperature) -> Result<f64, RotorError> {
    let t = temperature.get::<kelvin>();
    if StrictlyPositive::new(t).is_err() || !t.is_finite() {
        return Err(RotorError::InvalidTemperature { temperature });
    }
    Ok(t)
}

/// Returns `g·exp(-E/T)` for each level.
fn boltzmann_weights<'a>(
    degeneracies: &'a [f64],
    energies: &'a [f64],
    t: f64,
) -> impl DoubleEndedIterator<Item = f64> + 'a {
    degeneracies
        .iter()
        .zip(energies)
        .map(move |(g, e)| g * (-e / t).exp())
}

/// Computes the partition sum, failing if it underflows to zero.
pub(super) fn partition_sum(
    degeneracies: &[f64],
    energies: &[f64],
    temperature: ThermodynamicTemperature,
) -> Result<f64, RotorError> {
    let t = temperature_kelvin(temperature)?;

    // Levels are in increasing energy, so summing from the top adds the small
    // terms first.
    let z: f64 = boltzmann_weights(degeneracies, energies, t).rev().sum();

    if z == 0.0 {
        return Err(RotorError::NumericalUnderflow { temperature });
    }
    Ok(z)
}

/// Computes the population of the level at `index`.
pub(super) fn population(
    degeneracies: &[f64],
    energies: &[f64],
    temperature: ThermodynamicTemperature,
    index: usize,
) -> Result<f64, RotorError> {
    let z = partition_sum(degeneracies, energies, temperature)?;
    let t = temperature.get::<kelvin>();
    Ok(degeneracies[index] * (-energies[index] / t).exp() / z)
}

/// Computes the populations of all levels against a single partition sum.
pub(super) fn populations(
    degeneracies: &[f64],
    energies: &[f64],
    temperature: ThermodynamicTemperature,
) -> Result<Vec<f64>, RotorError> {
    let z = partition_sum(degeneracies, energies, temperature)?;
    let t = temperature.get::<kelvin>();
    Ok(boltzmann_weights(degeneracies, energies, t)
        .map(|w| w / z)
        .collect())
}

/// Computes the partition sum, populations, and mean energy in one pass.
pub(super) fn equilibrium(
    degeneracies: &[f64],
    energies: &[f64],
    temperature: ThermodynamicTemperature,
) -> Result<Equilibrium, RotorError> {
    let z = partition_sum(degeneracies, energies, temperature)?;
    let t = temperature.get::<kelvin>();

    let populations: Vec<f64> = boltzmann_weights(degeneracies, energies, t)
        .map(|w| w / z)
        .collect();

    let mean_energy: f64 = populations
        .iter()
        .zip(energies)
        .rev()
        .map(|(p, e)| p * e)
        .sum();

    Ok(Equilibrium {
        temperature,
        partition_sum: z,
        populations,
        mean_energy: TemperatureInterval::new::<delta_kelvin>(mean_energy),
    })
}
