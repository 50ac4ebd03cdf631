//! Test fixtures for energy-monitor testing.
//!
//! Provides:
//! - `MockTx`: Test implementation of the ByteTx trait with output capture
//! - `MockAdc`: Scripted AdcSource returning queued codes
//! - `ClockedAdc`: AdcSource that advances a tick counter per conversion
//! - `XorShift`: Small deterministic PRNG for jitter simulation

#![allow(dead_code)]

use energy_monitor::{AdcSource, ByteTx, TickCounter};
use std::collections::VecDeque;

// ============================================================================
// MockTx - Test Transmit Implementation
// ============================================================================

/// Mock transmitter for testing.
///
/// Captures every byte in order. Can be told to fail after a number of bytes
/// to exercise error propagation.
#[derive(Debug, Default)]
pub struct MockTx {
    /// Output capture (collects all bytes)
    output: Vec<u8>,

    /// Remaining bytes before `put_byte` starts failing
    fail_after: Option<usize>,
}

/// Error reported by `MockTx` once its byte budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxStalled;

impl MockTx {
    /// Create MockTx with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockTx that accepts `bytes` bytes, then fails.
    pub fn failing_after(bytes: usize) -> Self {
        Self {
            output: Vec::new(),
            fail_after: Some(bytes),
        }
    }

    /// Captured output as bytes.
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Captured output as string.
    pub fn output(&self) -> String {
        String::from_utf8(self.output.clone()).expect("output is ASCII")
    }

    /// Captured output split into lines, terminators stripped.
    ///
    /// Panics if a line is not terminated by `\r\n`.
    pub fn lines(&self) -> Vec<String> {
        let text = self.output();
        let mut lines = Vec::new();
        let mut rest = text.as_str();
        while !rest.is_empty() {
            let end = rest.find("\r\n").expect("every line ends with CRLF");
            lines.push(rest[..end].to_string());
            rest = &rest[end + 2..];
        }
        lines
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl ByteTx for MockTx {
    type Error = TxStalled;

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if let Some(budget) = self.fail_after.as_mut() {
            if *budget == 0 {
                return Err(TxStalled);
            }
            *budget -= 1;
        }
        self.output.push(byte);
        Ok(())
    }
}

// ============================================================================
// MockAdc - Scripted Conversion Source
// ============================================================================

/// Conversion source returning queued codes.
///
/// Repeats the last code once the queue runs dry.
#[derive(Debug)]
pub struct MockAdc {
    queue: VecDeque<u16>,
    last: u16,
    conversions: usize,
}

impl MockAdc {
    /// Always return `code`.
    pub fn constant(code: u16) -> Self {
        Self {
            queue: VecDeque::new(),
            last: code,
            conversions: 0,
        }
    }

    /// Return `codes` in order, then repeat the last one.
    pub fn sequence(codes: &[u16]) -> Self {
        Self {
            queue: codes.iter().copied().collect(),
            last: codes.last().copied().unwrap_or(0),
            conversions: 0,
        }
    }

    /// Number of conversions performed.
    pub fn conversions(&self) -> usize {
        self.conversions
    }
}

impl AdcSource for MockAdc {
    type Error = ();

    fn start_and_wait(&mut self) -> Result<u16, Self::Error> {
        self.conversions += 1;
        Ok(self.queue.pop_front().unwrap_or(self.last))
    }
}

// ============================================================================
// ClockedAdc - Conversion Source That Consumes Time
// ============================================================================

/// Conversion source that advances `clock` while "converting".
///
/// Lets the blocking loop in `Monitor::run` make progress without a real
/// timer interrupt.
#[derive(Debug)]
pub struct ClockedAdc<'a> {
    pub clock: &'a TickCounter,
    pub ticks_per_conversion: u32,
    pub code: u16,
}

impl AdcSource for ClockedAdc<'_> {
    type Error = ();

    fn start_and_wait(&mut self) -> Result<u16, Self::Error> {
        for _ in 0..self.ticks_per_conversion {
            self.clock.on_tick();
        }
        Ok(self.code)
    }
}

// ============================================================================
// XorShift - Deterministic Jitter Source
// ============================================================================

/// xorshift32 PRNG (deterministic, seedable).
#[derive(Debug, Clone)]
pub struct XorShift(u32);

impl XorShift {
    /// Seed must be non-zero.
    pub fn new(seed: u32) -> Self {
        assert_ne!(seed, 0);
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Uniform value in `0..=max`.
    pub fn below_or_eq(&mut self, max: u32) -> u32 {
        self.next_u32() % (max + 1)
    }
}
