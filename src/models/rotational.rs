//! Rotational spectroscopy models.
//!
//! This module contains models of molecular rotation, starting with the
//! rigid diatomic rotor.

pub mod rotor;
