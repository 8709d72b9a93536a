//! Rigid diatomic rotor.
//!
//! A [`DiatomicRotor`] resolves its species constants, enumerates the allowed
//! levels, and tabulates their degeneracies and energies once at construction.
//! Thermal queries re-evaluate Boltzmann sums against those tables and never
//! mutate the model, so a rotor can be shared freely across threads.

mod config;
mod degeneracy;
mod error;
mod levels;
mod species;
mod thermal;

pub use config::RotorConfig;
pub use error::RotorError;
pub use levels::{AllowedParity, Level};
pub use species::{NuclearDegeneracy, Species, SpeciesConstants};
pub use thermal::Equilibrium;

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
};

use levels::allowed_levels;

/// A rigid diatomic rotor with nuclear spin statistics.
///
/// # Example
///
/// ```
/// use rotor_models::models::rotational::rotor::{DiatomicRotor, RotorConfig, RotorError, Species};
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
///
/// let para = DiatomicRotor::new(Species::ParaH2, RotorConfig::default().with_j_max(10)).unwrap();
/// assert_eq!(para.allowed_j(), &[0, 2, 4, 6, 8]);
///
/// let t = ThermodynamicTemperature::new::<kelvin>(77.0);
/// assert!(matches!(para.population(t, 1), Err(RotorError::InvalidLevel { j: 1, .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiatomicRotor {
    species: Species,
    constants: SpeciesConstants,
    j_max: u32,
    parity: AllowedParity,
    allowed_j: Box<[u32]>,
    nuclear: Box<[f64]>,
    rotational: Box<[f64]>,
    total: Box<[f64]>,
    energies: Box<[f64]>,
}

impl DiatomicRotor {
    /// Builds a rotor for `species`, enumerating levels below `config.j_max`.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::InvalidArgument`] if `j_max` is zero or admits no
    /// allowed level (an odd-only species with `j_max = 1`).
    pub fn new(species: Species, config: RotorConfig) -> Result<Self, RotorError> {
        let constants = species.constants();
        let b = constants.rotational_constant().get::<delta_kelvin>();
        let g_nuc = constants.nuclear_degeneracy();

        if config.diagnostics {
            tracing::debug!(
                %species,
                b_kelvin = b,
                g_even = g_nuc.even(),
                g_odd = g_nuc.odd(),
                "resolved species constants"
            );
        }

        let parity = g_nuc.allowed_parity();
        let allowed_j = allowed_levels(parity, config.j_max)?;

        let nuclear = allowed_j
            .iter()
            .map(|&j| degeneracy::nuclear(g_nuc, j))
            .collect();
        let rotational = allowed_j.iter().map(|&j| degeneracy::rotational(j)).collect();
        let total = allowed_j
            .iter()
            .map(|&j| degeneracy::total(g_nuc, j))
            .collect();
        let energies = allowed_j
            .iter()
            .map(|&j| degeneracy::energy(b, j))
            .collect();

        if config.diagnostics {
            tracing::debug!(
                %species,
                %parity,
                j_max = config.j_max,
                levels = allowed_j.len(),
                "enumerated rotational levels"
            );
        }

        Ok(Self {
            species,
            constants,
            j_max: config.j_max,
            parity,
            allowed_j: allowed_j.into_boxed_slice(),
            nuclear,
            rotational,
            total,
            energies,
        })
    }

    /// Parses a species tag and builds a rotor for it.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::InvalidSpecies`] for an unknown tag, or any error
    /// from [`DiatomicRotor::new`].
    pub fn from_tag(tag: &str, config: RotorConfig) -> Result<Self, RotorError> {
        Self::new(tag.parse()?, config)
    }

    /// Returns the species of this rotor.
    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    /// Returns the resolved species constants.
    #[must_use]
    pub fn constants(&self) -> SpeciesConstants {
        self.constants
    }

    /// Returns the exclusive upper bound on enumerated `J`.
    #[must_use]
    pub fn j_max(&self) -> u32 {
        self.j_max
    }

    /// Returns which parities of `J` are populated.
    #[must_use]
    pub fn allowed_parity(&self) -> AllowedParity {
        self.parity
    }

    /// Returns the allowed `J` values, strictly increasing.
    #[must_use]
    pub fn allowed_j(&self) -> &[u32] {
        &self.allowed_j
    }

    /// Returns the nuclear degeneracies of the allowed levels.
    #[must_use]
    pub fn nuclear_degeneracies(&self) -> &[f64] {
        &self.nuclear
    }

    /// Returns the rotational degeneracies of the allowed levels.
    #[must_use]
    pub fn rotational_degeneracies(&self) -> &[f64] {
        &self.rotational
    }

    /// Returns the total degeneracies of the allowed levels.
    #[must_use]
    pub fn degeneracies(&self) -> &[f64] {
        &self.total
    }

    /// Returns the allowed levels in increasing `J`.
    pub fn levels(&self) -> impl ExactSizeIterator<Item = Level> + '_ {
        (0..self.allowed_j.len()).map(|i| Level {
            j: self.allowed_j[i],
            energy: TemperatureInterval::new::<delta_kelvin>(self.energies[i]),
            degeneracy: self.total[i],
            nuclear_degeneracy: self.nuclear[i],
            rotational_degeneracy: self.rotational[i],
        })
    }

    /// Rotational degeneracy `2J + 1`.
    #[must_use]
    pub fn rotational_degeneracy(&self, j: u32) -> f64 {
        degeneracy::rotational(j)
    }

    /// Nuclear spin degeneracy `g_nuc[J mod 2]`.
    #[must_use]
    pub fn nuclear_degeneracy(&self, j: u32) -> f64 {
        degeneracy::nuclear(self.constants.nuclear_degeneracy(), j)
    }

    /// Total degeneracy of level `j`, rotational times nuclear.
    ///
    /// Defined for any `j`. Forbidden levels have zero degeneracy.
    #[must_use]
    pub fn degeneracy(&self, j: u32) -> f64 {
        degeneracy::total(self.constants.nuclear_degeneracy(), j)
    }

    /// Energy `B·J(J+1)` of level `j`.
    #[must_use]
    pub fn energy(&self, j: u32) -> TemperatureInterval {
        let b = self.constants.rotational_constant().get::<delta_kelvin>();
        TemperatureInterval::new::<delta_kelvin>(degeneracy::energy(b, j))
    }

    /// Computes the partition sum `Z(T)` over the allowed levels.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::InvalidTemperature`] unless `temperature` is
    /// strictly positive and finite, or [`RotorError::NumericalUnderflow`]
    /// if every Boltzmann factor underflows to zero.
    pub fn partition_sum(&self, temperature: ThermodynamicTemperature) -> Result<f64, RotorError> {
        thermal::partition_sum(&self.total, &self.energies, temperature)
    }

    /// Computes the fractional population of level `j`.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::InvalidLevel`] if `j` is not an allowed level,
    /// or any error from [`DiatomicRotor::partition_sum`].
    pub fn population(
        &self,
        temperature: ThermodynamicTemperature,
        j: u32,
    ) -> Result<f64, RotorError> {
        let index = self.level_index(j)?;
        thermal::population(&self.total, &self.energies, temperature, index)
    }

    /// Computes the populations of all allowed levels, in the order of
    /// [`DiatomicRotor::allowed_j`].
    ///
    /// # Errors
    ///
    /// Returns any error from [`DiatomicRotor::partition_sum`].
    pub fn populations(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Vec<f64>, RotorError> {
        thermal::populations(&self.total, &self.energies, temperature)
    }

    /// Computes the Boltzmann-weighted mean rotational energy.
    ///
    /// # Errors
    ///
    /// Returns any error from [`DiatomicRotor::partition_sum`].
    pub fn mean_energy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<TemperatureInterval, RotorError> {
        Ok(self.equilibrium(temperature)?.mean_energy)
    }

    /// Computes the partition sum, populations, and mean energy together.
    ///
    /// # Errors
    ///
    /// Returns any error from [`DiatomicRotor::partition_sum`].
    pub fn equilibrium(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Equilibrium, RotorError> {
        thermal::equilibrium(&self.total, &self.energies, temperature)
    }

    fn level_index(&self, j: u32) -> Result<usize, RotorError> {
        self.allowed_j
            .binary_search(&j)
            .map_err(|_| RotorError::InvalidLevel {
                j,
                parity: self.parity,
                j_max: self.j_max,
                g_nuc: self.constants.nuclear_degeneracy(),
            })
    }
}
