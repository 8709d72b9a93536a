//! Rigid diatomic rotor model.
//!
//! This module exposes [`DiatomicRotor`] and its [`twine_core::Model`]
//! implementation. The computational core is in the internal `core` module.
//!
//! # Level diagrams
//!
//! The rotor has no rendering dependency. A diagram renderer consumes
//! [`DiatomicRotor::levels`] and draws one line per [`Level`]:
//!
//! ```
//! use rotor_models::models::rotational::rotor::{DiatomicRotor, RotorConfig, Species};
//! use uom::si::temperature_interval::kelvin;
//!
//! let hd = DiatomicRotor::new(Species::Hd, RotorConfig::default().with_j_max(4)).unwrap();
//! let lines: Vec<(f64, f64, String)> = hd
//!     .levels()
//!     .map(|level| (level.energy.get::<kelvin>(), level.degeneracy, format!("J={}", level.j)))
//!     .collect();
//!
//! assert_eq!(lines[1].1, 18.0);
//! assert_eq!(lines[3].2, "J=3");
//! ```

mod core;

pub use self::core::{
    AllowedParity, DiatomicRotor, Equilibrium, Level, NuclearDegeneracy, RotorConfig, RotorError,
    Species, SpeciesConstants,
};

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

/// Evaluates thermal equilibrium at the input temperature.
impl Model for DiatomicRotor {
    type Input = ThermodynamicTemperature;
    type Output = Equilibrium;
    type Error = RotorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.equilibrium(*input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn model_delegates_to_equilibrium() -> Result<(), RotorError> {
        let rotor = DiatomicRotor::new(Species::NormalH2, RotorConfig::default())?;
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);

        let output = rotor.call(&t)?;

        assert_eq!(output, rotor.equilibrium(t)?);
        assert_relative_eq!(output.populations.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn model_reports_invalid_temperature() {
        let rotor = DiatomicRotor::new(Species::Hd, RotorConfig::default()).unwrap();
        let t = ThermodynamicTemperature::new::<kelvin>(-1.0);

        assert_eq!(
            rotor.call(&t),
            Err(RotorError::InvalidTemperature { temperature: t })
        );
    }

    #[test]
    fn shared_across_threads() {
        let rotor = DiatomicRotor::new(Species::Hd, RotorConfig::default()).unwrap();

        let sums: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = [50.0, 100.0, 200.0]
                .map(|k| {
                    let rotor = &rotor;
                    s.spawn(move || {
                        rotor
                            .partition_sum(ThermodynamicTemperature::new::<kelvin>(k))
                            .unwrap()
                    })
                })
                .into_iter()
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(sums.windows(2).all(|w| w[0] < w[1]));
    }
}
