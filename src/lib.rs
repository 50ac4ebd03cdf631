//! # energy-monitor
//!
//! Interrupt-timed current sampling for small microcontrollers, with one CSV
//! line per sample on a serial link:
//!
//! ```text
//! <timestamp_ms>,<current_mA>\r\n
//! ```
//!
//! **Key properties:**
//! - **No heap, no floats, no `core::fmt`** on the data path
//! - **Tear-free time base** - the tick counter is only read inside a critical section
//! - **Drift-free schedule** - the due time advances by whole periods, never to "now"
//! - **Fixed-point conversion** - 64-bit intermediates, symmetric rounding, saturation
//! - **Hardware-agnostic** - UART and ADC are reached through [`ByteTx`] and [`AdcSource`]
//! - **Stream statistics** - [`CurrentStats`] gives mean, RMS and energy of parsed records
//!
//! Boards wire the pieces together like this:
//!
//! ```ignore
//! static CLOCK: TickCounter = TickCounter::new();
//!
//! // tick interrupt, once per millisecond
//! fn on_timer() {
//!     CLOCK.on_tick();
//! }
//!
//! let mut monitor: Monitor<DefaultConfig, _, _> = Monitor::new(adc, uart, CLOCK.snapshot());
//! monitor.run(&CLOCK)
//! ```
//!
//! ## Optional Features
//!
//! - `defmt` - Logging through `defmt`, and `defmt::Format` on public types
//! - `async` - `AsyncByteTx` and `Monitor::poll_async`
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Must come first so the logging macros are visible to the other modules.
#[macro_use]
mod fmt;

// ============================================================================
// Module Declarations
// ============================================================================

// Configuration & hardware seams
pub mod config;
pub mod io;

// Error handling
pub mod error;

// Time base and scheduling
pub mod scheduler;
pub mod time;

// Sampling and conversion
pub mod adc;
pub mod convert;

// Text output
pub mod encode;
pub mod record;

// Main loop
pub mod monitor;

// Host-side statistics
pub mod analysis;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{Acs712x05bConfig, DefaultConfig, MonitorConfig};

// Hardware seams
#[cfg(feature = "async")]
pub use io::AsyncByteTx;
pub use io::{AdcSource, ByteTx};

// Error types
pub use error::{MonitorError, ParseError};

// Core types
pub use adc::AnalogReader;
pub use analysis::CurrentStats;
pub use convert::{raw_to_milliamps, to_milliamps};
pub use monitor::{Monitor, MonitorState};
pub use record::Record;
pub use scheduler::SampleScheduler;
pub use time::TickCounter;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
