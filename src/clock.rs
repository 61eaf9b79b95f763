use chrono::{DateTime, Duration, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Source of wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = at;
        }
    }

    pub fn advance_ms(&self, ms: i64) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += Duration::milliseconds(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|t| *t).unwrap_or_else(|e| *e.into_inner())
    }
}

/// Start of the reference date: January 6, 2025 at 17:40 (UTC+1).
pub const DEFAULT_REFERENCE: &str = "2025-01-06T17:40:00+01:00";

/// How the reference instant of the main display is chosen at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceInstant {
    Fixed { at: String },
    DaysAgo { days: u32 },
    HoursAgo { hours: u32 },
    Now,
}

impl Default for ReferenceInstant {
    fn default() -> Self {
        ReferenceInstant::Fixed {
            at: DEFAULT_REFERENCE.into(),
        }
    }
}

impl ReferenceInstant {
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            ReferenceInstant::Fixed { at } => match DateTime::<FixedOffset>::parse_from_rfc3339(at)
            {
                Ok(t) => t.with_timezone(&Utc),
                Err(e) => {
                    tracing::warn!(
                        "reference instant '{}' is invalid ({e}); using {}",
                        at,
                        DEFAULT_REFERENCE
                    );
                    default_reference()
                }
            },
            ReferenceInstant::DaysAgo { days } => {
                back_from(now, Duration::try_days(i64::from(*days)), "days", *days)
            }
            ReferenceInstant::HoursAgo { hours } => {
                back_from(now, Duration::try_hours(i64::from(*hours)), "hours", *hours)
            }
            ReferenceInstant::Now => now,
        }
    }
}

/// `now - span`, or the default reference when that leaves chrono's range.
fn back_from(now: DateTime<Utc>, span: Option<Duration>, unit: &str, n: u32) -> DateTime<Utc> {
    match span.and_then(|d| now.checked_sub_signed(d)) {
        Some(t) => t,
        None => {
            tracing::warn!(
                "reference of {n} {unit} ago is out of range; using {}",
                DEFAULT_REFERENCE
            );
            default_reference()
        }
    }
}

fn default_reference() -> DateTime<Utc> {
    DateTime::<FixedOffset>::parse_from_rfc3339(DEFAULT_REFERENCE)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Milliseconds from `from` to `to`, never negative.
pub fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    (to - from).num_milliseconds().max(0) as u64
}

/// Drives the main display: a fixed reference point plus a clock.
pub struct TimeSource {
    clock: Arc<dyn Clock>,
    reference: DateTime<Utc>,
}

impl TimeSource {
    /// Resolves `reference` against the clock once; it never moves afterwards.
    pub fn new(clock: Arc<dyn Clock>, reference: &ReferenceInstant) -> Self {
        let reference = reference.resolve(clock.now());
        tracing::debug!(%reference, "main stopwatch reference resolved");
        Self { clock, reference }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Time since the reference, zero while the reference lies ahead.
    pub fn elapsed_ms(&self) -> u64 {
        millis_between(self.reference, self.now())
    }

    /// Caption for the main display, e.g. `January 6, 2025 at 17:40`.
    pub fn started_on(&self) -> String {
        self.reference
            .with_timezone(&Local)
            .format("%B %-d, %Y at %H:%M")
            .to_string()
    }
}
