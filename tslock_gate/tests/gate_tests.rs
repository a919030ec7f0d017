#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use rstest::rstest;
use tslock_gate::prelude::*;

mod common;

use common::{byte, init_test_logger};

#[test]
fn test_reference_sequence_on_one_gate() {
    init_test_logger();

    let input = byte(0b0010_1101);
    let mut gate = ByteGate::new();

    gate.set_keys(true, false);
    assert_eq!(gate.evaluate(input), OutputState::Buffer);
    assert_eq!(gate.output(), byte(0b0010_1101));

    gate.set_keys(false, true);
    assert_eq!(gate.evaluate(input), OutputState::Inverter);
    assert_eq!(gate.output(), byte(0b1101_0010));

    gate.set_keys(true, true);
    assert_eq!(gate.evaluate(input), OutputState::Unknown);
    assert_eq!(gate.output(), byte(0b0000_0000));

    gate.set_keys(false, false);
    assert_eq!(gate.evaluate(input), OutputState::HiZ);
    assert_eq!(gate.output(), byte(0b0000_0000));
}

#[test]
fn test_first_call_hiz_retains_constructor_zero() {
    init_test_logger();

    let mut gate = ByteGate::with_keys(false, false);
    let report = gate.report(byte(0xff));
    assert_eq!(report.state, OutputState::HiZ);
    assert!(report.output.is_zero());
    assert!(report.is_retained());
}

#[rstest]
#[case(KeyPair::new(true, false), 0x5a)]
#[case(KeyPair::new(false, true), 0xa5)]
#[case(KeyPair::new(true, true), 0x00)]
fn test_hiz_after_driven_state(#[case] prior: KeyPair, #[case] retained: u64) {
    init_test_logger();

    let mut gate = ByteGate::with_key_pair(prior);
    gate.evaluate(byte(0x5a));

    gate.set_keys(false, false);
    assert_eq!(gate.evaluate(byte(0x0f)), OutputState::HiZ);
    assert_eq!(gate.output(), byte(retained));
}

#[test]
fn test_gates_do_not_share_retained_output() {
    let mut a = ByteGate::with_keys(true, false);
    let mut b = ByteGate::with_keys(false, false);

    a.evaluate(byte(0x77));
    b.evaluate(byte(0x11));

    assert_eq!(a.output(), byte(0x77));
    assert!(b.output().is_zero());
}

#[test]
fn test_report_does_not_mutate_beyond_evaluate() {
    let mut reported = ByteGate::with_keys(false, true);
    let mut evaluated = reported.clone();

    reported.report(byte(0x3c));
    evaluated.evaluate(byte(0x3c));

    assert_eq!(reported, evaluated);
}
