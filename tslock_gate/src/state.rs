//! The four modes a locked gate can resolve to.

use std::fmt;

use serde::Serialize;

/// Functional mode a tristate gate resolves to for a given key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OutputState {
    /// Output follows the input.
    #[serde(rename = "BUFFER")]
    Buffer,
    /// Output is the bitwise complement of the input.
    #[serde(rename = "INVERTER")]
    Inverter,
    /// Output is undriven and holds its last value.
    #[serde(rename = "HI-Z")]
    HiZ,
    /// Both keys asserted; output forced to zero.
    #[serde(rename = "UNK")]
    Unknown,
}

impl OutputState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 4] = [Self::Buffer, Self::Inverter, Self::HiZ, Self::Unknown];

    /// True when evaluation in this state writes the output value.
    #[must_use]
    pub const fn drives_output(&self) -> bool {
        !matches!(self, Self::HiZ)
    }

    /// Short upper-case name used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Buffer => "BUFFER",
            Self::Inverter => "INVERTER",
            Self::HiZ => "HI-Z",
            Self::Unknown => "UNK",
        }
    }
}

impl fmt::Display for OutputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_state_display() {
        assert_eq!(format!("{}", OutputState::Buffer), "BUFFER");
        assert_eq!(format!("{}", OutputState::Inverter), "INVERTER");
        assert_eq!(format!("{}", OutputState::HiZ), "HI-Z");
        assert_eq!(format!("{}", OutputState::Unknown), "UNK");
    }

    #[test]
    fn test_only_hiz_leaves_output_undriven() {
        let undriven: Vec<_> = OutputState::ALL
            .iter()
            .filter(|s| !s.drives_output())
            .collect();
        assert_eq!(undriven, vec![&OutputState::HiZ]);
    }
}
