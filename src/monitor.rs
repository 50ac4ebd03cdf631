//! The sampling loop.
//!
//! Two states: `Idle` until the scheduler says a sample is due, then
//! `Emitting` for exactly one read, convert, transmit, reschedule pass.
//! There is no terminal state; [`Monitor::run`] only returns if a
//! collaborator reports an error.

use core::convert::Infallible;
use core::fmt;

use crate::adc::AnalogReader;
use crate::config::MonitorConfig;
use crate::convert::to_milliamps;
use crate::error::MonitorError;
use crate::io::{AdcSource, ByteTx};
use crate::record::Record;
use crate::scheduler::SampleScheduler;
use crate::time::TickCounter;

#[cfg(feature = "async")]
use crate::io::AsyncByteTx;

/// Where the loop currently is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    /// Waiting for the next due time
    Idle,

    /// Reading, converting and transmitting one record
    Emitting,
}

/// Periodic current sampler.
///
/// Generic over the configuration `C`, the conversion source `A` and the
/// transmitter `T`. The transmitter is [`ByteTx`] for [`poll`](Self::poll)
/// and `AsyncByteTx` for `poll_async`.
pub struct Monitor<C: MonitorConfig, A: AdcSource, T> {
    scheduler: SampleScheduler<C>,
    reader: AnalogReader<A, C>,
    tx: T,
    state: MonitorState,
    emitted: u32,
}

impl<C: MonitorConfig, A: AdcSource, T> Monitor<C, A, T> {
    /// Create a monitor whose first sample is one period after `now`.
    pub fn new(adc: A, tx: T, now: u32) -> Self {
        Self::with_scheduler(adc, tx, SampleScheduler::starting_at(now))
    }

    /// Create a monitor with an explicit schedule.
    pub fn with_scheduler(adc: A, tx: T, scheduler: SampleScheduler<C>) -> Self {
        Self {
            scheduler,
            reader: AnalogReader::new(adc),
            tx,
            state: MonitorState::Idle,
            emitted: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// The schedule.
    pub fn scheduler(&self) -> &SampleScheduler<C> {
        &self.scheduler
    }

    /// Records fully transmitted so far (wrapping).
    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    /// Access the transmitter.
    pub fn tx(&self) -> &T {
        &self.tx
    }

    /// Mutable access to the transmitter.
    pub fn tx_mut(&mut self) -> &mut T {
        &mut self.tx
    }

    /// Mutable access to the conversion source.
    pub fn adc_mut(&mut self) -> &mut A {
        self.reader.source_mut()
    }

    /// Take the due sample if there is one.
    ///
    /// Returns the record to send (or the conversion error), with the schedule
    /// already advanced and the state set to `Emitting`.
    fn begin_sample(&mut self, now: u32) -> Option<Result<Record, A::Error>> {
        if !self.scheduler.is_due(now) {
            return None;
        }

        let lag = self.scheduler.lag(now);
        if lag >= SampleScheduler::<C>::PERIOD as i32 {
            warn!("sample {=i32} ticks late", lag);
        }

        self.state = MonitorState::Emitting;
        // The slot is spent even if the conversion fails, so the schedule keeps
        // its fixed increments.
        self.scheduler.advance();

        let sample = self.reader.read().map(|raw| {
            let record = Record::new(now.wrapping_mul(C::TICK_MS), to_milliamps::<C>(raw));
            trace!(
                "raw={=u16} t={=u32} mA={=i32}",
                raw,
                record.timestamp_ms,
                record.current_ma
            );
            record
        });
        Some(sample)
    }

    fn finish_sample(&mut self) {
        self.state = MonitorState::Idle;
        self.emitted = self.emitted.wrapping_add(1);
    }
}

impl<C: MonitorConfig, A: AdcSource, T: ByteTx> Monitor<C, A, T> {
    /// Run one loop iteration at tick `now`.
    ///
    /// If a sample is due: read, convert, transmit the full line, advance the
    /// schedule by one period, and return the record. Otherwise `Ok(None)`.
    pub fn poll(&mut self, now: u32) -> Result<Option<Record>, MonitorError<T::Error, A::Error>> {
        let Some(sample) = self.begin_sample(now) else {
            return Ok(None);
        };

        let result = sample
            .map_err(MonitorError::Conversion)
            .and_then(|record| {
                record
                    .emit(&mut self.tx)
                    .map(|()| record)
                    .map_err(MonitorError::Transmit)
            });

        match result {
            Ok(record) => {
                self.finish_sample();
                Ok(Some(record))
            }
            Err(e) => {
                self.state = MonitorState::Idle;
                Err(e)
            }
        }
    }

    /// Sample forever, reading the time from `clock`.
    ///
    /// Only returns if the transmitter or the ADC reports an error.
    pub fn run(&mut self, clock: &TickCounter) -> Result<Infallible, MonitorError<T::Error, A::Error>> {
        debug!(
            "sampling every {=u32} ms, first at {=u32}",
            C::SAMPLE_PERIOD_MS,
            self.scheduler.next_due()
        );
        loop {
            self.poll(clock.snapshot())?;
        }
    }
}

#[cfg(feature = "async")]
impl<C: MonitorConfig, A: AdcSource, T: AsyncByteTx> Monitor<C, A, T> {
    /// Async variant of [`poll`](Self::poll) (requires `async` feature).
    ///
    /// Transmission suspends instead of spinning; bytes still go out in order
    /// and the record is complete before this returns.
    pub async fn poll_async(
        &mut self,
        now: u32,
    ) -> Result<Option<Record>, MonitorError<T::Error, A::Error>> {
        let Some(sample) = self.begin_sample(now) else {
            return Ok(None);
        };

        let record = match sample {
            Ok(record) => record,
            Err(e) => {
                self.state = MonitorState::Idle;
                return Err(MonitorError::Conversion(e));
            }
        };

        if let Err(e) = record.emit_async(&mut self.tx).await {
            self.state = MonitorState::Idle;
            return Err(MonitorError::Transmit(e));
        }

        self.finish_sample();
        Ok(Some(record))
    }
}

impl<C, A, T> fmt::Debug for Monitor<C, A, T>
where
    C: MonitorConfig,
    A: AdcSource + fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("scheduler", &self.scheduler)
            .field("reader", &self.reader)
            .field("tx", &self.tx)
            .field("state", &self.state)
            .field("emitted", &self.emitted)
            .finish()
    }
}
