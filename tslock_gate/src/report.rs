//! Human-readable snapshot of one gate evaluation.

use std::fmt;

use serde::Serialize;

use crate::{BitVector, KeyPair, OutputState};

/// Inputs and outcome of a single [`crate::TristateGate::report`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Report<const N: usize> {
    /// Vector presented to the gate.
    pub input: BitVector<N>,
    /// Keys in force during the evaluation.
    pub keys: KeyPair,
    /// Resolved mode.
    pub state: OutputState,
    /// Output after the evaluation. In `HiZ` this is the retained value.
    pub output: BitVector<N>,
}

impl<const N: usize> Report<N> {
    /// True when the output was held rather than driven.
    #[must_use]
    pub const fn is_retained(&self) -> bool {
        matches!(self.state, OutputState::HiZ)
    }
}

impl<const N: usize> fmt::Display for Report<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.input)?;
        writeln!(
            f,
            "Buffer Key: {}\tInverter Key: {}",
            u8::from(self.keys.buffer_enable),
            u8::from(self.keys.inverter_enable)
        )?;
        write!(f, "Actual State: {}", self.state)?;

        match self.state {
            OutputState::Buffer | OutputState::Inverter => {
                write!(f, "\nActual Output: {}", self.output)
            },
            OutputState::HiZ => write!(f, "\nActual Output (Retained): {}", self.output),
            OutputState::Unknown => write!(
                f,
                "\tActual Output: {} (All bits set to 0 for undefined)",
                self.output
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TristateGate;

    fn byte(v: u64) -> BitVector<8> {
        BitVector::new(v).unwrap()
    }

    #[test]
    fn test_buffer_report_text() {
        let mut gate = TristateGate::<8>::with_keys(true, false);
        let report = gate.report(byte(0b0010_1101));
        assert_eq!(
            report.to_string(),
            "Input: 00101101\n\
             Buffer Key: 1\tInverter Key: 0\n\
             Actual State: BUFFER\n\
             Actual Output: 00101101"
        );
        assert!(!report.is_retained());
    }

    #[test]
    fn test_inverter_report_text() {
        let mut gate = TristateGate::<8>::with_keys(false, true);
        let report = gate.report(byte(0b0010_1101));
        assert_eq!(
            report.to_string(),
            "Input: 00101101\n\
             Buffer Key: 0\tInverter Key: 1\n\
             Actual State: INVERTER\n\
             Actual Output: 11010010"
        );
    }

    #[test]
    fn test_hiz_report_text() {
        let mut gate = TristateGate::<8>::with_keys(true, false);
        gate.evaluate(byte(0b1111_0000));
        gate.set_keys(false, false);
        let report = gate.report(byte(0b0010_1101));
        assert_eq!(
            report.to_string(),
            "Input: 00101101\n\
             Buffer Key: 0\tInverter Key: 0\n\
             Actual State: HI-Z\n\
             Actual Output (Retained): 11110000"
        );
        assert!(report.is_retained());
    }

    #[test]
    fn test_unknown_report_text() {
        let mut gate = TristateGate::<8>::new();
        let report = gate.report(byte(0b0010_1101));
        assert_eq!(
            report.to_string(),
            "Input: 00101101\n\
             Buffer Key: 1\tInverter Key: 1\n\
             Actual State: UNK\tActual Output: 00000000 (All bits set to 0 for undefined)"
        );
    }

    #[test]
    fn test_report_json() {
        let mut gate = TristateGate::<8>::with_keys(false, false);
        let json = serde_json::to_value(gate.report(byte(0b0000_0011))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": "00000011",
                "keys": { "buffer_enable": false, "inverter_enable": false },
                "state": "HI-Z",
                "output": "00000000",
            })
        );
    }
}
