//! Glob-importable surface of the crate.

pub use tracing;

pub use crate::{
    BitVector, BitVectorError, Byte, ByteGate, Harness, HarnessConfig, InputOrigin, KeyPair,
    OutputState, Report, Trial, TristateGate,
};
