//! Countdown display and the one-second tick schedule.
use chrono::{DateTime, Duration, Utc};

pub const TICK_INTERVAL_SECONDS: i64 = 1;

/// Formats whole seconds as `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Share of the time limit still left, floored at zero.
pub fn time_percent(remaining: u32, total: u32) -> f32 {
    let total = f64::from(total.max(1));
    ((f64::from(remaining) * 100.0) / total).max(0.0) as f32
}

/// Holds the deadline of the next tick. The deadline is only moved forward
/// after a tick has finished, so ticks never overlap.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    next_at: Option<DateTime<Utc>>,
}

impl Ticker {
    /// A ticker whose first tick is due one interval after `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        let mut ticker = Self { next_at: None };
        ticker.schedule_after(now);
        ticker
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_at.is_some_and(|at| now >= at)
    }

    pub fn schedule_after(&mut self, now: DateTime<Utc>) {
        self.next_at = Some(now + Duration::seconds(TICK_INTERVAL_SECONDS));
    }

    pub fn stop(&mut self) {
        self.next_at = None;
    }

    pub fn is_stopped(&self) -> bool {
        self.next_at.is_none()
    }

    /// Time until the next tick; `None` once stopped.
    pub fn until_next(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        let at = self.next_at?;
        Some((at - now).to_std().unwrap_or_default())
    }
}
