//! Time sources and the round timer
//!
//! The timer is display-only: nothing in a round waits on it. It is read on demand
//! (for the once-a-second refresh in the UI) and frozen when the round ends.

use chrono::{Local, NaiveDate};
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current instant and calendar date
pub trait Clock {
    fn now(&self) -> Instant;
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Hand-driven clock for tests and scripted rounds
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
    today: Cell<NaiveDate>,
}

impl ManualClock {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
            today: Cell::new(today),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Elapsed time of one round, in whole seconds
#[derive(Debug, Clone, Copy)]
pub struct RoundTimer {
    started: Instant,
    stopped: Option<Duration>,
}

impl RoundTimer {
    #[must_use]
    pub fn start(clock: &dyn Clock) -> Self {
        Self {
            started: clock.now(),
            stopped: None,
        }
    }

    /// Time since start, or the frozen value once stopped
    #[must_use]
    pub fn elapsed(&self, clock: &dyn Clock) -> Duration {
        self.stopped.unwrap_or_else(|| {
            let raw = clock.now().saturating_duration_since(self.started);
            Duration::from_secs(raw.as_secs())
        })
    }

    /// Freeze the timer; later calls return the first stopped value
    pub fn stop(&mut self, clock: &dyn Clock) -> Duration {
        let elapsed = self.elapsed(clock);
        self.stopped = Some(elapsed);
        elapsed
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.stopped.is_none()
    }
}
