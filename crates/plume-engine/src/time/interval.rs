use std::time::{Duration, Instant};

/// Fixed-period timer that reports how many periods elapsed between polls.
///
/// Catch-up after a stall is capped so a paused or suspended driver does not
/// fast-forward the animation when it resumes.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    next: Instant,
    max_catch_up: u32,
    fired: u64,
}

impl IntervalTimer {
    /// Default cap on periods reported by a single poll.
    pub const DEFAULT_MAX_CATCH_UP: u32 = 8;

    /// Starts a timer whose first period ends one `interval` from now.
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Starts a timer whose first period ends one `interval` after `start`.
    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        let interval = interval.max(Duration::from_nanos(1));
        Self {
            interval,
            next: start + interval,
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
            fired: 0,
        }
    }

    /// Overrides the catch-up cap (at least 1).
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total periods reported so far.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Rebases the schedule so the next period ends one interval after `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }

    /// Time left until the next period ends.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Number of periods that ended by `now` since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if now < self.next {
            return 0;
        }

        let behind = now.duration_since(self.next).as_nanos() / self.interval.as_nanos();
        let due = behind.saturating_add(1);

        let reported = if due > self.max_catch_up as u128 {
            // Drop the backlog rather than replaying it.
            self.reset(now);
            self.max_catch_up
        } else {
            // `due` <= max_catch_up, so it fits in u32.
            let due = due as u32;
            self.next += self.interval * due;
            due
        };

        self.fired += reported as u64;
        reported
    }

    /// [`poll`](Self::poll) against the current time.
    #[inline]
    pub fn poll_now(&mut self) -> u32 {
        self.poll(Instant::now())
    }
}
