//! Species registry.
//!
//! Known molecules carry fixed constants. [`Species::Generic`] is the escape
//! hatch for anything else and carries caller-supplied constants.

use std::{fmt, str::FromStr};

use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::support::constraint::StrictlyPositive;

use super::{AllowedParity, RotorError};

/// Rotational constant of H2 in Kelvin, shared by all spin isomers.
const B_H2: f64 = 87.567467;

/// Rotational constant of HD in Kelvin.
const B_HD: f64 = 65.681716;

/// Nuclear spin degeneracies for even and odd `J`.
///
/// At least one slot is nonzero. A zero slot forbids every level of that parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NuclearDegeneracy {
    even: u32,
    odd: u32,
}

impl NuclearDegeneracy {
    /// Constructs validated nuclear degeneracies `[g_even, g_odd]`.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::InvalidDegeneracy`] if both slots are zero.
    pub fn new(even: u32, odd: u32) -> Result<Self, RotorError> {
        if even == 0 && odd == 0 {
            return Err(RotorError::InvalidDegeneracy {
                g_even: even,
                g_odd: odd,
            });
        }
        Ok(Self { even, odd })
    }

    /// Returns the degeneracy of even-`J` levels.
    #[must_use]
    pub fn even(&self) -> u32 {
        self.even
    }

    /// Returns the degeneracy of odd-`J` levels.
    #[must_use]
    pub fn odd(&self) -> u32 {
        self.odd
    }

    /// Returns the degeneracy that applies to level `j`.
    #[must_use]
    pub fn for_j(&self, j: u32) -> u32 {
        if j % 2 == 0 { self.even } else { self.odd }
    }

    /// Returns which parities of `J` this spin pattern allows.
    #[must_use]
    pub fn allowed_parity(&self) -> AllowedParity {
        match (self.even, self.odd) {
            (0, _) => AllowedParity::Odd,
            (_, 0) => AllowedParity::Even,
            _ => AllowedParity::All,
        }
    }
}

impl fmt::Display for NuclearDegeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.even, self.odd)
    }
}

/// Resolved physical constants of a rigid diatomic rotor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesConstants {
    rotational_constant: TemperatureInterval,
    nuclear_degeneracy: NuclearDegeneracy,
}

impl SpeciesConstants {
    /// Constructs validated species constants.
    ///
    /// `b` is the rotational constant as a Kelvin-equivalent energy.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::InvalidRotationalConstant`] if `b` is not strictly
    /// positive and finite, or [`RotorError::InvalidDegeneracy`] if both
    /// degeneracy slots are zero.
    pub fn new(b: TemperatureInterval, g_even: u32, g_odd: u32) -> Result<Self, RotorError> {
        let b_kelvin = b.get::<delta_kelvin>();
        if StrictlyPositive::new(b_kelvin).is_err() || !b_kelvin.is_finite() {
            return Err(RotorError::InvalidRotationalConstant { b });
        }

        Ok(Self {
            rotational_constant: b,
            nuclear_degeneracy: NuclearDegeneracy::new(g_even, g_odd)?,
        })
    }

    /// Returns the placeholder constants `B = 1 K`, `g_nuc = [1, 1]`.
    ///
    /// These describe no real molecule. They exist so the `"generic"` tag can
    /// be parsed without explicit constants.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::known(1.0, 1, 1)
    }

    fn known(b_kelvin: f64, even: u32, odd: u32) -> Self {
        Self {
            rotational_constant: TemperatureInterval::new::<delta_kelvin>(b_kelvin),
            nuclear_degeneracy: NuclearDegeneracy { even, odd },
        }
    }

    /// Returns the rotational constant `B`.
    #[must_use]
    pub fn rotational_constant(&self) -> TemperatureInterval {
        self.rotational_constant
    }

    /// Returns the nuclear spin degeneracies.
    #[must_use]
    pub fn nuclear_degeneracy(&self) -> NuclearDegeneracy {
        self.nuclear_degeneracy
    }
}

/// A diatomic molecular species.
///
/// # Example
///
/// ```
/// use rotor_models::models::rotational::rotor::Species;
///
/// let species: Species = "para-H2".parse().unwrap();
/// assert_eq!(species, Species::ParaH2);
/// assert_eq!(species.constants().nuclear_degeneracy().odd(), 0);
///
/// assert!("CO".parse::<Species>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Species {
    /// Hydrogen deuteride.
    Hd,
    /// Hydrogen with the 3:1 ortho-to-para equilibrium mix of spin isomers.
    NormalH2,
    /// Para-hydrogen, even `J` only.
    ParaH2,
    /// Ortho-hydrogen, odd `J` only.
    OrthoH2,
    /// Any other rotor, with caller-supplied constants.
    Generic(SpeciesConstants),
}

impl Species {
    /// Returns the constants of this species.
    #[must_use]
    pub fn constants(&self) -> SpeciesConstants {
        match self {
            Species::Hd => SpeciesConstants::known(B_HD, 6, 6),
            Species::NormalH2 => SpeciesConstants::known(B_H2, 1, 3),
            Species::ParaH2 => SpeciesConstants::known(B_H2, 1, 0),
            Species::OrthoH2 => SpeciesConstants::known(B_H2, 0, 3),
            Species::Generic(constants) => *constants,
        }
    }

    /// Returns the canonical tag of this species.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Species::Hd => "HD",
            Species::NormalH2 => "normal-H2",
            Species::ParaH2 => "para-H2",
            Species::OrthoH2 => "ortho-H2",
            Species::Generic(_) => "generic",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Species {
    type Err = RotorError;

    /// Parses a species tag.
    ///
    /// The `"generic"` tag resolves to [`SpeciesConstants::placeholder`] and
    /// logs a warning. Use [`Species::Generic`] directly to supply real constants.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "HD" => Ok(Species::Hd),
            "normal-H2" | "normalH2" => Ok(Species::NormalH2),
            "para-H2" | "paraH2" => Ok(Species::ParaH2),
            "ortho-H2" | "orthoH2" => Ok(Species::OrthoH2),
            "generic" => {
                tracing::warn!(
                    "generic species without explicit constants: using placeholder B = 1 K, g_nuc = [1, 1]"
                );
                Ok(Species::Generic(SpeciesConstants::placeholder()))
            }
            _ => Err(RotorError::InvalidSpecies {
                tag: tag.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn known_constants() {
        let hd = Species::Hd.constants();
        assert_relative_eq!(hd.rotational_constant().get::<delta_kelvin>(), 65.681716);
        assert_eq!(hd.nuclear_degeneracy(), NuclearDegeneracy::new(6, 6).unwrap());

        for species in [Species::NormalH2, Species::ParaH2, Species::OrthoH2] {
            assert_relative_eq!(
                species.constants().rotational_constant().get::<delta_kelvin>(),
                87.567467
            );
        }

        let g = |s: Species| {
            let g = s.constants().nuclear_degeneracy();
            (g.even(), g.odd())
        };
        assert_eq!(g(Species::NormalH2), (1, 3));
        assert_eq!(g(Species::ParaH2), (1, 0));
        assert_eq!(g(Species::OrthoH2), (0, 3));
    }

    #[test]
    fn parse_tags() {
        assert_eq!("HD".parse::<Species>(), Ok(Species::Hd));
        assert_eq!("normalH2".parse::<Species>(), Ok(Species::NormalH2));
        assert_eq!("normal-H2".parse::<Species>(), Ok(Species::NormalH2));
        assert_eq!("paraH2".parse::<Species>(), Ok(Species::ParaH2));
        assert_eq!("ortho-H2".parse::<Species>(), Ok(Species::OrthoH2));
        assert_eq!(
            "generic".parse::<Species>(),
            Ok(Species::Generic(SpeciesConstants::placeholder()))
        );
    }

    #[test]
    fn tags_roundtrip_through_display() {
        for species in [
            Species::Hd,
            Species::NormalH2,
            Species::ParaH2,
            Species::OrthoH2,
        ] {
            assert_eq!(species.to_string().parse::<Species>(), Ok(species));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            "hd".parse::<Species>(),
            Err(RotorError::InvalidSpecies {
                tag: "hd".to_owned()
            })
        );
    }

    #[test]
    fn generic_constants_are_validated() {
        let b = |k: f64| TemperatureInterval::new::<delta_kelvin>(k);

        assert!(SpeciesConstants::new(b(10.0), 1, 1).is_ok());
        assert!(SpeciesConstants::new(b(10.0), 0, 2).is_ok());

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SpeciesConstants::new(b(bad), 1, 1),
                Err(RotorError::InvalidRotationalConstant { .. })
            ));
        }

        assert_eq!(
            SpeciesConstants::new(b(10.0), 0, 0),
            Err(RotorError::InvalidDegeneracy { g_even: 0, g_odd: 0 })
        );
    }

    #[test]
    fn parity_from_degeneracies() {
        let parity = |even, odd| NuclearDegeneracy::new(even, odd).unwrap().allowed_parity();
        assert_eq!(parity(1, 3), AllowedParity::All);
        assert_eq!(parity(1, 0), AllowedParity::Even);
        assert_eq!(parity(0, 3), AllowedParity::Odd);
    }

    #[test]
    fn degeneracy_by_parity() {
        let g = NuclearDegeneracy::new(1, 3).unwrap();
        assert_eq!(g.for_j(0), 1);
        assert_eq!(g.for_j(1), 3);
        assert_eq!(g.for_j(10), 1);
        assert_eq!(g.for_j(11), 3);
    }
}
