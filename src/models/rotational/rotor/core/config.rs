/// Construction options for a [`DiatomicRotor`](super::DiatomicRotor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorConfig {
    /// Exclusive upper bound on enumerated rotational quantum numbers.
    pub j_max: u32,

    /// Emit `debug` trace events describing the resolved model.
    ///
    /// Has no effect on any computed value.
    pub diagnostics: bool,
}

impl Default for RotorConfig {
    fn default() -> Self {
        Self {
            j_max: 100,
            diagnostics: false,
        }
    }
}

impl RotorConfig {
    /// Returns this configuration with the given level cutoff.
    #[must_use]
    pub fn with_j_max(self, j_max: u32) -> Self {
        Self { j_max, ..self }
    }

    /// Returns this configuration with diagnostics toggled.
    #[must_use]
    pub fn with_diagnostics(self, diagnostics: bool) -> Self {
        Self {
            diagnostics,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RotorConfig::default();
        assert_eq!(config.j_max, 100);
        assert!(!config.diagnostics);
    }

    #[test]
    fn builders_keep_other_fields() {
        let config = RotorConfig::default()
            .with_diagnostics(true)
            .with_j_max(7);
        assert_eq!(
            config,
            RotorConfig {
                j_max: 7,
                diagnostics: true
            }
        );
    }
}
