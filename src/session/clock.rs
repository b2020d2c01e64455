use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of "now" for the session, so elapsed time can be driven by hand
/// in tests.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    #[default]
    System,
    /// Shared manual time; clones observe each other's `advance` calls.
    Manual(Rc<Cell<DateTime<Utc>>>),
}

impl Clock {
    pub fn manual(at: DateTime<Utc>) -> Self {
        Self::Manual(Rc::new(Cell::new(at)))
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Manual(at) => at.get(),
        }
    }

    /// Moves a manual clock forward. No effect on the system clock.
    pub fn advance(&self, delta: Duration) {
        if let Clock::Manual(at) = self {
            at.set(at.get() + delta);
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a manual clock set to [`FIXED_TEST_TIMESTAMP`].
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
pub fn fixed_clock() -> Clock {
    let at = DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid");
    Clock::manual(at)
}
