//! Tristate key logic-locking gate model.
//!
//! A locked gate whose behavior (buffer, inverter, high impedance or
//! unknown) is picked by two key bits instead of the circuit's real function.
//! The crate provides the gate itself, the fixed-width values it operates on,
//! and a small harness that sweeps every key combination over a batch of
//! inputs.

mod bits;
mod config;
mod error;
mod gate;
mod harness;
mod key;
pub mod prelude;
mod report;
mod state;

pub use crate::bits::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::gate::*;
pub use crate::harness::*;
pub use crate::key::*;
pub use crate::report::*;
pub use crate::state::*;

/// Bus width used by the command-line driver.
pub const DEFAULT_WIDTH: usize = 8;

/// Gate on the default 8-bit bus.
pub type ByteGate = TristateGate<DEFAULT_WIDTH>;

/// Vector on the default 8-bit bus.
pub type Byte = BitVector<DEFAULT_WIDTH>;
