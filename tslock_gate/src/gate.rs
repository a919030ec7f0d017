//! The tristate key logic-locking gate.
//!
//! A [`TristateGate`] does not compute the circuit's true function. Its two
//! key bits pick one of four modes, and a wrong key yields a wrong or
//! undefined output:
//!
//! | buffer | inverter | state      | output                 |
//! |--------|----------|------------|------------------------|
//! | 1      | 1        | `Unknown`  | all zero               |
//! | 1      | 0        | `Buffer`   | input                  |
//! | 0      | 1        | `Inverter` | `!input`               |
//! | 0      | 0        | `HiZ`      | previous output, kept  |
//!
//! The output value is the only state carried between evaluations.

use contracts::*;
use tracing::debug;

use crate::{BitVector, KeyPair, OutputState, Report};

/// A single tristate locking gate on an `N`-bit bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TristateGate<const N: usize> {
    /// Current key bits.
    keys: KeyPair,
    /// State resolved by the last evaluation.
    state: OutputState,
    /// Last driven output; held while the gate is in `HiZ`.
    output: BitVector<N>,
}

impl<const N: usize> TristateGate<N> {
    /// Creates a gate with both keys asserted.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_pair(KeyPair::default())
    }

    /// Creates a gate with explicit keys.
    #[must_use]
    pub fn with_keys(buffer_enable: bool, inverter_enable: bool) -> Self {
        Self::with_key_pair(KeyPair::new(buffer_enable, inverter_enable))
    }

    /// Creates a gate from a [`KeyPair`].
    ///
    /// The gate starts in `Unknown` with a zero output whatever the keys are;
    /// nothing is resolved until the first evaluation.
    #[must_use]
    #[ensures(ret.state == OutputState::Unknown && ret.output.is_zero())]
    pub fn with_key_pair(keys: KeyPair) -> Self {
        Self {
            keys,
            state: OutputState::Unknown,
            output: BitVector::zero(),
        }
    }

    /// Overwrites both keys. Takes effect at the next evaluation.
    pub const fn set_keys(&mut self, buffer_enable: bool, inverter_enable: bool) {
        self.keys = KeyPair::new(buffer_enable, inverter_enable);
    }

    /// Overwrites both keys from a [`KeyPair`].
    pub const fn set_key_pair(&mut self, keys: KeyPair) {
        self.keys = keys;
    }

    /// Current keys.
    #[must_use]
    pub const fn keys(&self) -> KeyPair {
        self.keys
    }

    /// State resolved by the most recent evaluation (`Unknown` before any).
    #[must_use]
    pub const fn state(&self) -> OutputState {
        self.state
    }

    /// Current output value.
    #[must_use]
    pub const fn output(&self) -> BitVector<N> {
        self.output
    }

    /// Resolves the keys and updates the output for `input`.
    ///
    /// Total: every key pair and every input is accepted.
    #[debug_ensures(ret == self.keys.resolve())]
    #[debug_ensures(ret.drives_output() || self.output == old(self.output))]
    pub fn evaluate(&mut self, input: BitVector<N>) -> OutputState {
        let state = self.keys.resolve();
        match state {
            OutputState::Unknown => self.output = BitVector::zero(),
            OutputState::Buffer => self.output = input,
            OutputState::Inverter => self.output = !input,
            OutputState::HiZ => {}
        }
        self.state = state;

        debug!(
            %input,
            buffer_enable = self.keys.buffer_enable,
            inverter_enable = self.keys.inverter_enable,
            %state,
            output = %self.output,
            "evaluated tristate gate"
        );

        state
    }

    /// Evaluates `input` and captures the outcome for display.
    pub fn report(&mut self, input: BitVector<N>) -> Report<N> {
        let state = self.evaluate(input);
        Report {
            input,
            keys: self.keys,
            state,
            output: self.output,
        }
    }
}

impl<const N: usize> Default for TristateGate<N> {
    fn default() -> Self {
        Self::new()
    }
}
