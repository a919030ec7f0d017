//! Batch driver that sweeps every key combination over a series of inputs.
//!
//! One gate is shared by the whole run, so a `HiZ` evaluation reports
//! whatever the previous combination (or the previous trial) left on the
//! output.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::{BitVector, BitVectorError, HarnessConfig, KeyPair, Report, TristateGate};

/// How a trial's input vector was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputOrigin {
    /// Drawn from the harness RNG.
    Random,
    /// Supplied by the caller.
    Fixed,
}

impl fmt::Display for InputOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "Random"),
            Self::Fixed => write!(f, "Fixed"),
        }
    }
}

/// One input vector and the reports for all four key combinations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Trial<const N: usize> {
    /// 1-based position in the run.
    pub index: usize,
    /// Whether `input` was random or caller-supplied.
    pub origin: InputOrigin,
    /// Vector fed to the gate for every combination.
    pub input: BitVector<N>,
    /// Reports in [`KeyPair::ALL`] order.
    pub reports: Vec<Report<N>>,
}

impl<const N: usize> fmt::Display for Trial<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Input {}: {}", self.origin, self.index, self.input)?;
        writeln!(f)?;
        for report in &self.reports {
            writeln!(f, "{report}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Where a harness draws its input vectors from.
#[derive(Debug)]
enum InputSource<const N: usize> {
    /// Uniform random vectors.
    Random { rng: StdRng, remaining: usize },
    /// Caller-supplied vectors, in order.
    Fixed(std::vec::IntoIter<BitVector<N>>),
}

impl<const N: usize> InputSource<N> {
    /// Label attached to trials drawn from this source.
    const fn origin(&self) -> InputOrigin {
        match self {
            Self::Random { .. } => InputOrigin::Random,
            Self::Fixed(_) => InputOrigin::Fixed,
        }
    }
}

impl<const N: usize> Iterator for InputSource<N> {
    type Item = BitVector<N>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Random { rng, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                Some(BitVector::truncate(rng.gen_range(0..=BitVector::<N>::MASK)))
            },
            Self::Fixed(inputs) => inputs.next(),
        }
    }
}

/// Drives a single [`TristateGate`] through a configured batch of trials.
#[derive(Debug)]
pub struct Harness<const N: usize> {
    /// The gate under test, reused across all trials.
    gate: TristateGate<N>,
    /// Remaining input vectors.
    source: InputSource<N>,
    /// Trials produced so far.
    completed: usize,
}

impl<const N: usize> Harness<N> {
    /// Builds a harness around a freshly constructed gate.
    ///
    /// Fails if a fixed input does not fit in `N` bits.
    pub fn new(config: &HarnessConfig) -> Result<Self, BitVectorError> {
        Self::with_gate(config, TristateGate::new())
    }

    /// Builds a harness around an existing gate, keeping its retained output.
    ///
    /// Fails if a fixed input does not fit in `N` bits.
    pub fn with_gate(
        config: &HarnessConfig,
        gate: TristateGate<N>,
    ) -> Result<Self, BitVectorError> {
        let source = if config.inputs.is_empty() {
            let rng = match config.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            InputSource::Random {
                rng,
                remaining: config.trials,
            }
        } else {
            let inputs = config
                .inputs
                .iter()
                .map(|&v| BitVector::new(v))
                .collect::<Result<Vec<_>, _>>()?;
            InputSource::Fixed(inputs.into_iter())
        };

        info!(
            width = N,
            trials = config.trial_count(),
            seed = ?config.seed,
            fixed_inputs = !config.inputs.is_empty(),
            "created tristate harness"
        );

        Ok(Self {
            gate,
            source,
            completed: 0,
        })
    }

    /// The gate under test.
    #[must_use]
    pub const fn gate(&self) -> &TristateGate<N> {
        &self.gate
    }

    /// Runs `input` through all four key combinations.
    pub fn sweep(&mut self, input: BitVector<N>) -> Trial<N> {
        self.completed += 1;
        let reports = KeyPair::ALL
            .iter()
            .map(|&keys| {
                self.gate.set_key_pair(keys);
                self.gate.report(input)
            })
            .collect();

        debug!(index = self.completed, %input, "completed trial");

        Trial {
            index: self.completed,
            origin: self.source.origin(),
            input,
            reports,
        }
    }

    /// Runs every remaining trial.
    pub fn run(&mut self) -> Vec<Trial<N>> {
        let trials: Vec<_> = self.by_ref().collect();
        info!(count = trials.len(), "harness run finished");
        trials
    }
}

impl<const N: usize> Iterator for Harness<N> {
    type Item = Trial<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.source.next()?;
        Some(self.sweep(input))
    }
}
