//! The Hour-Glass: a real-time regenerating resource pool.
//!
//! Each combatant owns one hour-glass. Sand regenerates one grain per fixed
//! interval of real time (default 1 s), up to a fixed capacity (default 6),
//! regardless of how often or how irregularly the engine is polled.
//!
//! ## Timekeeping
//!
//! The clock never reads wall time itself. The session advances a combat
//! clock (a [`Duration`] since encounter start) and passes it to
//! [`HourGlass::accrue`]; tests drive the same path with synthetic times.
//!
//! Accrual uses carry-forward remainder accounting: `last_update` advances
//! by `grains_regenerated * interval`, not by the full elapsed time, so
//! fractional progress toward the next grain survives across polls. Polling
//! every 100 ms for a second yields exactly the same sand as one 1 s poll.

use std::time::Duration;

/// A combatant's sand pool, regenerating on real time.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use duat_combat::core::HourGlass;
///
/// let mut glass = HourGlass::new();
/// assert_eq!(glass.current(), 0);
///
/// // Ten 100ms polls accrue exactly one grain
/// for tick in 1..=10u64 {
///     glass.accrue(Duration::from_millis(tick * 100));
/// }
/// assert_eq!(glass.current(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct HourGlass {
    current: u32,
    capacity: u32,
    interval: Duration,
    /// Position on the combat clock of the last whole-grain accounting.
    last_update: Duration,
}

impl HourGlass {
    /// Default sand capacity.
    pub const DEFAULT_CAPACITY: u32 = 6;

    /// Absolute capacity ceiling; buffs cannot raise capacity past this.
    pub const CAPACITY_CEILING: u32 = 8;

    /// Default regeneration interval: one grain per second.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// Create an empty hour-glass with default capacity and interval.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty hour-glass with the given capacity.
    ///
    /// Panics if `capacity` is 0 or above [`HourGlass::CAPACITY_CEILING`].
    #[must_use]
    pub fn with_capacity(capacity: u32) -> Self {
        assert!(capacity > 0, "Hour-glass capacity must be positive");
        assert!(
            capacity <= Self::CAPACITY_CEILING,
            "Hour-glass capacity must not exceed {}",
            Self::CAPACITY_CEILING
        );

        Self {
            current: 0,
            capacity,
            interval: Self::DEFAULT_INTERVAL,
            last_update: Duration::ZERO,
        }
    }

    /// Set the regeneration interval (builder pattern).
    ///
    /// Panics if `interval` is zero.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Regeneration interval must be positive");
        self.interval = interval;
        self
    }

    /// Current sand count.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Sand capacity.
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Regeneration interval per grain.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check whether the pool covers a given cost.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.current >= cost
    }

    /// Attempt to spend sand.
    ///
    /// Returns true on success. On failure (unaffordable, or a cost above
    /// capacity that no pool state could ever cover) the pool is unchanged;
    /// there is no partial spend.
    pub fn spend(&mut self, cost: u32) -> bool {
        if cost > self.capacity || !self.can_afford(cost) {
            return false;
        }
        self.current -= cost;
        true
    }

    /// Set the sand count directly, clamped to `[0, capacity]`.
    ///
    /// Used for non-time-based grants and encounter setup.
    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.capacity);
    }

    /// Add sand, capped at capacity. Returns the grains actually added.
    pub fn gain(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = (self.current + amount).min(self.capacity);
        self.current - before
    }

    /// Raise the capacity by `amount`, refusing past the ceiling.
    ///
    /// Returns true if the capacity changed.
    pub fn raise_capacity(&mut self, amount: u32) -> bool {
        let new_capacity = self.capacity + amount;
        if new_capacity > Self::CAPACITY_CEILING {
            return false;
        }
        self.capacity = new_capacity;
        true
    }

    /// Account regeneration up to combat-clock time `now`.
    ///
    /// Regenerates one grain per whole interval elapsed since the last
    /// accounting and returns the grains added. `last_update` advances by
    /// `grains * interval` so the fractional remainder carries forward;
    /// when the pool is or becomes full it snaps to `now` instead, so no
    /// banked progress can instantly refill grains after a later spend.
    pub fn accrue(&mut self, now: Duration) -> u32 {
        if self.current >= self.capacity {
            self.last_update = now;
            return 0;
        }

        let elapsed = now.saturating_sub(self.last_update);
        let whole = elapsed.as_nanos() / self.interval.as_nanos();
        let grains = whole.min(u128::from(self.capacity - self.current)) as u32;

        self.current += grains;
        if self.current >= self.capacity {
            self.last_update = now;
        } else {
            self.last_update += self.interval * grains;
        }

        grains
    }

    /// Time remaining until the next whole grain, or `None` when full
    /// (no further regeneration is meaningful).
    ///
    /// Returns [`Duration::ZERO`] if a grain is already overdue at `now`.
    #[must_use]
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        if self.current >= self.capacity {
            return None;
        }
        let into_interval = now.saturating_sub(self.last_update);
        Some(self.interval.saturating_sub(into_interval))
    }
}

impl Default for HourGlass {
    fn default() -> Self {
        Self::new()
    }
}
