//! Extensions to [`uom`] for Kelvin-equivalent energies.
//!
//! Rotational spectroscopy commonly quotes energies divided by the Boltzmann
//! constant, so that a level energy reads directly in Kelvin and compares
//! against temperature without conversion. This crate represents such
//! energies as [`TemperatureInterval`] values.
//!
//! The [`KelvinEnergy`] trait converts between those and absolute [`Energy`]:
//!
//! ```
//! use rotor_models::support::units::KelvinEnergy;
//! use uom::si::{
//!     energy::joule,
//!     f64::TemperatureInterval,
//!     temperature_interval::kelvin,
//! };
//!
//! let e = TemperatureInterval::new::<kelvin>(1.0);
//! assert_eq!(e.to_energy().get::<joule>(), 1.380649e-23);
//! ```

use uom::si::{
    energy::joule,
    f64::{Energy, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

/// Boltzmann constant in J/K (exact in the 2019 SI).
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23;

/// Conversion between Kelvin-equivalent energies and absolute energies.
pub trait KelvinEnergy {
    /// Returns the absolute energy `k_B · self`.
    fn to_energy(self) -> Energy;

    /// Returns the Kelvin-equivalent energy `energy / k_B`.
    fn from_energy(energy: Energy) -> Self;
}

impl KelvinEnergy for TemperatureInterval {
    fn to_energy(self) -> Energy {
        Energy::new::<joule>(BOLTZMANN_CONSTANT * self.get::<delta_kelvin>())
    }

    fn from_energy(energy: Energy) -> Self {
        TemperatureInterval::new::<delta_kelvin>(energy.get::<joule>() / BOLTZMANN_CONSTANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::energy::{electronvolt, joule};

    #[test]
    fn kelvin_to_joule() {
        let e = TemperatureInterval::new::<delta_kelvin>(87.567467);
        assert_relative_eq!(e.to_energy().get::<joule>(), 87.567467 * 1.380649e-23);
    }

    #[test]
    fn electronvolt_to_kelvin() {
        // 1 eV corresponds to about 11604.518 K.
        let e = Energy::new::<electronvolt>(1.0);
        assert_relative_eq!(
            TemperatureInterval::from_energy(e).get::<delta_kelvin>(),
            11_604.518,
            max_relative = 1e-7
        );
    }
}
