//! Session clock and timestamp policy

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The host monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to
///
/// Used by tests and benchmarks to produce exact timestamps.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Time elapsed since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Where elapsed time is counted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// The first non-empty read
    #[default]
    FirstInput,
    /// Process launch
    Launch,
}

/// What each timestamp is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Time since the previous chunk
    #[default]
    Relative,
    /// Time since the origin
    Absolute,
}

/// The two independent axes of timestamp semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimestampPolicy {
    pub origin: Origin,
    pub anchor: Anchor,
}

impl TimestampPolicy {
    pub fn new(absolute: bool, from_launch: bool) -> Self {
        Self {
            origin: if from_launch {
                Origin::Launch
            } else {
                Origin::FirstInput
            },
            anchor: if absolute {
                Anchor::Absolute
            } else {
                Anchor::Relative
            },
        }
    }
}

/// Timestamps assigned to the lines of one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkStamp {
    /// Stamp of the first line
    pub first: Duration,
    /// Stamp of every later line in the same chunk
    pub rest: Duration,
}

impl ChunkStamp {
    /// Stamp for the line at `index` within the chunk
    pub fn for_line(&self, index: usize) -> Duration {
        if index == 0 {
            self.first
        } else {
            self.rest
        }
    }
}

/// Session clock state, owned by the annotator for the whole run
#[derive(Debug, Clone)]
pub struct SessionClock {
    anchor: Anchor,
    start: Option<Instant>,
    previous: Option<Instant>,
}

impl SessionClock {
    /// Create the session state; `launch` is only used for [`Origin::Launch`]
    pub fn new(policy: TimestampPolicy, launch: Instant) -> Self {
        let start = match policy.origin {
            Origin::Launch => Some(launch),
            Origin::FirstInput => None,
        };
        Self {
            anchor: policy.anchor,
            start,
            previous: start,
        }
    }

    /// Instant the session started counting from, once known
    pub fn start(&self) -> Option<Instant> {
        self.start
    }

    /// Compute the stamps for a chunk that arrived at `now`
    ///
    /// The very first chunk of a first-input session always stamps zero.
    pub fn stamp_chunk(&mut self, now: Instant) -> ChunkStamp {
        let Some(start) = self.start else {
            self.start = Some(now);
            self.previous = Some(now);
            return ChunkStamp {
                first: Duration::ZERO,
                rest: self.rest_for(Duration::ZERO),
            };
        };

        let elapsed = match self.anchor {
            Anchor::Absolute => now.saturating_duration_since(start),
            Anchor::Relative => now.saturating_duration_since(self.previous.unwrap_or(start)),
        };
        self.previous = Some(now);

        ChunkStamp {
            first: elapsed,
            rest: self.rest_for(elapsed),
        }
    }

    fn rest_for(&self, first: Duration) -> Duration {
        match self.anchor {
            Anchor::Absolute => first,
            Anchor::Relative => Duration::ZERO,
        }
    }
}
