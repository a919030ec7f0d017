//! Configuration for a batch of gate trials.
//!
//! Quick examples
//!
//! Reference run (ten random vectors, fresh entropy):
//! ```
//! use tslock_gate::HarnessConfig;
//! let cfg = HarnessConfig::default();
//! assert_eq!(cfg.trials, 10);
//! ```
//!
//! Reproducible run:
//! ```
//! use tslock_gate::HarnessConfig;
//! let cfg = HarnessConfig::builder().trials(3).seed(Some(7)).build();
//! assert_eq!(cfg.seed, Some(7));
//! ```

/// Number of random vectors in a default run.
pub const DEFAULT_TRIALS: usize = 10;

/// Settings for [`crate::Harness`].
///
/// - trials: random input vectors to generate. Ignored when `inputs` is
///   non-empty.
/// - seed: fixed RNG seed, or `None` for OS entropy.
/// - inputs: explicit vectors (as raw integers) used verbatim and in order
///   instead of random ones. A value wider than the bus makes harness
///   construction fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of random trials.
    pub trials: usize,
    /// RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Fixed input vectors; overrides random generation when non-empty.
    pub inputs: Vec<u64>,
}

impl HarnessConfig {
    /// Starts a builder from the defaults.
    #[must_use]
    pub fn builder() -> HarnessConfigBuilder {
        HarnessConfigBuilder::default()
    }

    /// Number of trials a harness built from this config will run.
    #[must_use]
    pub fn trial_count(&self) -> usize {
        if self.inputs.is_empty() {
            self.trials
        } else {
            self.inputs.len()
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            inputs: Vec::new(),
        }
    }
}

/// Builder for [`HarnessConfig`].
#[derive(Clone, Debug, Default)]
pub struct HarnessConfigBuilder {
    /// Config under construction.
    config: HarnessConfig,
}

impl HarnessConfigBuilder {
    /// Sets the number of random trials.
    #[must_use]
    pub const fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    /// Sets or clears the RNG seed.
    #[must_use]
    pub const fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Uses fixed input vectors instead of random ones.
    #[must_use]
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = u64>) -> Self {
        self.config.inputs = inputs.into_iter().collect();
        self
    }

    /// Finishes the config.
    #[must_use]
    pub fn build(self) -> HarnessConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.trials, DEFAULT_TRIALS);
        assert!(cfg.seed.is_none());
        assert!(cfg.inputs.is_empty());
        assert_eq!(cfg.trial_count(), DEFAULT_TRIALS);
    }

    #[test]
    fn test_inputs_override_trials() {
        let cfg = HarnessConfig::builder()
            .trials(50)
            .inputs([0x2d, 0xff])
            .build();
        assert_eq!(cfg.trial_count(), 2);
    }
}
