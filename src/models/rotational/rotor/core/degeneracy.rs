//! Rigid-rotor level energies and degeneracies as pure functions of `J`.

use super::NuclearDegeneracy;

/// Rotational degeneracy `2J + 1`.
pub(super) fn rotational(j: u32) -> f64 {
    2.0 * f64::from(j) + 1.0
}

/// Nuclear spin degeneracy `g_nuc[J mod 2]`.
pub(super) fn nuclear(g_nuc: NuclearDegeneracy, j: u32) -> f64 {
    f64::from(g_nuc.for_j(j))
}

/// Total degeneracy, rotational times nuclear.
pub(super) fn total(g_nuc: NuclearDegeneracy, j: u32) -> f64 {
    rotational(j) * nuclear(g_nuc, j)
}

/// Rigid-rotor energy `B·J(J+1)`, in the units of `b`.
pub(super) fn energy(b: f64, j: u32) -> f64 {
    let j = f64::from(j);
    b * j * (j + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rotational_degeneracy() {
        assert_eq!(rotational(0), 1.0);
        assert_eq!(rotational(1), 3.0);
        assert_eq!(rotational(4), 9.0);
    }

    #[test]
    fn total_degeneracy() {
        let g = NuclearDegeneracy::new(1, 3).unwrap();
        assert_eq!(total(g, 0), 1.0);
        assert_eq!(total(g, 1), 9.0);
        assert_eq!(total(g, 2), 5.0);

        let para = NuclearDegeneracy::new(1, 0).unwrap();
        assert_eq!(total(para, 3), 0.0);
    }

    #[test]
    fn energies() {
        assert_eq!(energy(10.0, 0), 0.0);
        assert_eq!(energy(10.0, 1), 20.0);
        assert_eq!(energy(10.0, 2), 60.0);
        assert_relative_eq!(energy(65.681716, 2), 394.090296, epsilon = 1e-9);
    }

    #[test]
    fn energy_increases_with_j() {
        let b = 87.567467;
        for j in 0..1000 {
            assert!(energy(b, j + 1) > energy(b, j));
        }
    }
}
