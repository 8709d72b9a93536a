//! # Rotor Models
//!
//! Rigid-rotor models of diatomic molecules for spectroscopy and astrophysics
//! modeling, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a molecular species, a rotor model enumerates the rotational levels
//! allowed by nuclear-spin statistics, computes their energies and
//! degeneracies, and derives Boltzmann populations and the partition sum at
//! a given temperature.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models, including [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use rotor_models::models::rotational::rotor::{DiatomicRotor, RotorConfig, Species};
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! let rotor = DiatomicRotor::new(Species::Hd, RotorConfig::default().with_j_max(5)).unwrap();
//! let populations = rotor
//!     .populations(ThermodynamicTemperature::new::<kelvin>(300.0))
//!     .unwrap();
//!
//! assert_eq!(populations.len(), 5);
//! assert!((populations.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
