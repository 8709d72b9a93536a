//! Enumeration of allowed rotational levels.

use std::fmt;

use uom::si::f64::{Energy, TemperatureInterval};

use crate::support::{constraint::StrictlyPositive, units::KelvinEnergy};

use super::RotorError;

/// Parities of `J` allowed by nuclear spin statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowedParity {
    All,
    Even,
    Odd,
}

impl AllowedParity {
    /// Returns `true` if level `j` has an allowed parity.
    #[must_use]
    pub fn admits(self, j: u32) -> bool {
        match self {
            AllowedParity::All => true,
            AllowedParity::Even => j % 2 == 0,
            AllowedParity::Odd => j % 2 == 1,
        }
    }
}

impl fmt::Display for AllowedParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AllowedParity::All => "all",
            AllowedParity::Even => "even",
            AllowedParity::Odd => "odd",
        })
    }
}

/// A single allowed rotational level.
///
/// This is the record handed to level-diagram renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    /// Rotational quantum number.
    pub j: u32,

    /// Level energy as a Kelvin-equivalent energy.
    pub energy: TemperatureInterval,

    /// Total degeneracy, `rotational_degeneracy * nuclear_degeneracy`.
    pub degeneracy: f64,

    /// Nuclear spin degeneracy.
    pub nuclear_degeneracy: f64,

    /// Rotational degeneracy, `2J + 1`.
    pub rotational_degeneracy: f64,
}

impl Level {
    /// Returns the level energy in absolute units, `k_B · energy`.
    #[must_use]
    pub fn absolute_energy(&self) -> Energy {
        self.energy.to_energy()
    }
}

/// Returns the strictly increasing allowed `J` values below `j_max`.
///
/// # Errors
///
/// Returns [`RotorError::InvalidArgument`] if `j_max` is zero, or if no level
/// of the allowed parity lies below it (odd-only with `j_max = 1`).
pub(super) fn allowed_levels(parity: AllowedParity, j_max: u32) -> Result<Vec<u32>, RotorError> {
    let j_max = StrictlyPositive::new(j_max)
        .map_err(|err| RotorError::InvalidArgument {
            context: format!("j_max={j_max}: {err}"),
        })?
        .into_inner();

    let (first, step) = match parity {
        AllowedParity::All => (0, 1),
        AllowedParity::Even => (0, 2),
        AllowedParity::Odd => (1, 2),
    };
    let levels: Vec<u32> = (first..j_max).step_by(step).collect();

    if levels.is_empty() {
        return Err(RotorError::InvalidArgument {
            context: format!("j_max={j_max} admits no {parity} levels"),
        });
    }

    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_levels() {
        assert_eq!(
            allowed_levels(AllowedParity::All, 5).unwrap(),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn even_levels() {
        assert_eq!(
            allowed_levels(AllowedParity::Even, 7).unwrap(),
            vec![0, 2, 4, 6]
        );
        assert_eq!(allowed_levels(AllowedParity::Even, 6).unwrap(), vec![0, 2, 4]);
    }

    #[test]
    fn odd_levels() {
        assert_eq!(allowed_levels(AllowedParity::Odd, 6).unwrap(), vec![1, 3, 5]);
        assert_eq!(allowed_levels(AllowedParity::Odd, 2).unwrap(), vec![1]);
    }

    #[test]
    fn single_level_cutoff() {
        assert_eq!(allowed_levels(AllowedParity::All, 1).unwrap(), vec![0]);
        assert_eq!(allowed_levels(AllowedParity::Even, 1).unwrap(), vec![0]);
        assert!(matches!(
            allowed_levels(AllowedParity::Odd, 1),
            Err(RotorError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn zero_cutoff_is_rejected() {
        for parity in [AllowedParity::All, AllowedParity::Even, AllowedParity::Odd] {
            assert!(matches!(
                allowed_levels(parity, 0),
                Err(RotorError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn admits_matches_enumeration() {
        for parity in [AllowedParity::All, AllowedParity::Even, AllowedParity::Odd] {
            let levels = allowed_levels(parity, 20).unwrap();
            let admitted: Vec<u32> = (0..20).filter(|&j| parity.admits(j)).collect();
            assert_eq!(levels, admitted);
        }
    }
}
