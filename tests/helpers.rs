//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[path = "fixtures/mod.rs"]
pub mod fixtures;

use energy_monitor::{DefaultConfig, Monitor, SampleScheduler};
use fixtures::{MockAdc, MockTx};

// ============================================================================
// Monitor Creation Helpers
// ============================================================================

/// Monitor with the default configuration.
pub type TestMonitor = Monitor<DefaultConfig, MockAdc, MockTx>;

/// Create a monitor whose first sample is due at tick `due`.
pub fn monitor_due_at(adc: MockAdc, due: u32) -> TestMonitor {
    Monitor::with_scheduler(adc, MockTx::new(), SampleScheduler::with_next_due(due))
}

/// Take one sample of `raw` at tick `ts` and return the transmitted line.
pub fn line_for(raw: u16, ts: u32) -> String {
    let mut monitor = monitor_due_at(MockAdc::constant(raw), ts);
    let record = monitor.poll(ts).unwrap();
    assert!(record.is_some(), "sample at {} should have been due", ts);
    monitor.tx().output()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that a field is canonical decimal: optional single '-', digits,
/// no leading zeros except the literal "0", no "-0".
pub fn assert_canonical_decimal(field: &str, allow_sign: bool) {
    let digits = match field.strip_prefix('-') {
        Some(rest) => {
            assert!(allow_sign, "unexpected sign in {:?}", field);
            assert_ne!(rest, "0", "negative zero in {:?}", field);
            rest
        }
        None => field,
    };
    assert!(!digits.is_empty(), "empty field {:?}", field);
    assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "non-digit in {:?}",
        field
    );
    assert!(
        digits == "0" || !digits.starts_with('0'),
        "leading zero in {:?}",
        field
    );
}

/// Assert that every line has the `<timestamp>,<current>` shape.
pub fn assert_wire_format(lines: &[String]) {
    for line in lines {
        let (ts, current) = line
            .split_once(',')
            .unwrap_or_else(|| panic!("no separator in {:?}", line));
        assert_canonical_decimal(ts, false);
        assert_canonical_decimal(current, true);
    }
}
