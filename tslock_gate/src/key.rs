//! Key inputs of the locked gate and the priority table they select through.

use serde::Serialize;

use crate::OutputState;

/// The two secret key bits of a tristate locking gate.
///
/// Any combination is legal. Asserting both is not an error; it resolves to
/// [`OutputState::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct KeyPair {
    /// Selects pass-through behavior.
    pub buffer_enable: bool,
    /// Selects complement behavior.
    pub inverter_enable: bool,
}

impl KeyPair {
    /// All four combinations in index order, see [`KeyPair::from_index`].
    pub const ALL: [Self; 4] = [
        Self::from_index(0),
        Self::from_index(1),
        Self::from_index(2),
        Self::from_index(3),
    ];

    /// Creates a key pair.
    #[must_use]
    pub const fn new(buffer_enable: bool, inverter_enable: bool) -> Self {
        Self {
            buffer_enable,
            inverter_enable,
        }
    }

    /// Key pair for a 2-bit combination index.
    ///
    /// Bit 1 is `buffer_enable` and bit 0 is `inverter_enable`. Bits above
    /// those are ignored.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index & 0b10 != 0, index & 0b01 != 0)
    }

    /// Inverse of [`KeyPair::from_index`].
    #[must_use]
    pub const fn index(&self) -> usize {
        ((self.buffer_enable as usize) << 1) | self.inverter_enable as usize
    }

    /// Resolves the keys to a gate mode.
    ///
    /// Both keys asserted resolves to `Unknown` before either single key is
    /// looked at; this ordering must not change.
    #[must_use]
    pub const fn resolve(&self) -> OutputState {
        match (self.buffer_enable, self.inverter_enable) {
            (true, true) => OutputState::Unknown,
            (true, false) => OutputState::Buffer,
            (false, true) => OutputState::Inverter,
            (false, false) => OutputState::HiZ,
        }
    }
}

impl Default for KeyPair {
    /// Both keys asserted.
    fn default() -> Self {
        Self::new(true, true)
    }
}
