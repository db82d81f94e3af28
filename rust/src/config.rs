//! Configuration for schedule computation.

use pyo3::prelude::*;

/// Engine configuration.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpmConfig {
    /// Verbosity level: 0=silent, 1=passes, 2=tasks, 3=trace.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Maximum number of critical paths to enumerate (primary included).
    /// Values below 1 are treated as 1.
    #[pyo3(get, set)]
    pub max_critical_paths: usize,
}

impl Default for CpmConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            max_critical_paths: 16,
        }
    }
}

#[pymethods]
impl CpmConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, max_critical_paths=None))]
    fn new(verbosity: Option<u8>, max_critical_paths: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            max_critical_paths: max_critical_paths.unwrap_or(defaults.max_critical_paths),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CpmConfig(verbosity={}, max_critical_paths={})",
            self.verbosity, self.max_critical_paths
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CpmConfig::default();
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.max_critical_paths, 16);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = CpmConfig::new(Some(2), None);
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.max_critical_paths, 16);
    }
}
