//! Elapsed solve time.

use std::fmt::{self, Display};

/// The elapsed solve time, fed by the presentation layer's one-second tick.
///
/// The clock never schedules anything itself: callers invoke
/// [`SolveClock::tick`] once per second while it is running and read
/// [`SolveClock::elapsed_seconds`] for display. [`SolveClock::start`]
/// resets the count and supersedes any prior run, so two tick streams can
/// never accumulate into the same counter.
///
/// # Examples
///
/// ```
/// use ninefold_game::SolveClock;
///
/// let mut clock = SolveClock::new();
/// clock.start();
/// for _ in 0..65 {
///     clock.tick();
/// }
/// assert_eq!(clock.elapsed_seconds(), 65);
/// assert_eq!(clock.to_string(), "01:05");
///
/// clock.stop();
/// clock.tick(); // ignored once stopped
/// assert_eq!(clock.elapsed_seconds(), 65);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveClock {
    seconds: u64,
    running: bool,
}

impl SolveClock {
    /// Creates a stopped clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seconds: 0,
            running: false,
        }
    }

    /// Starts a fresh run from zero, superseding any prior run.
    pub const fn start(&mut self) {
        self.seconds = 0;
        self.running = true;
    }

    /// Stops the clock, freezing the elapsed value.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the clock is currently counting.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the clock by one second if it is running.
    pub const fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }

    /// The elapsed whole seconds of the current run.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.seconds
    }
}

impl Display for SolveClock {
    /// Formats the elapsed time as `MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.seconds / 60;
        let seconds = self.seconds % 60;
        write!(f, "{minutes:02}:{seconds:02}")
    }
}
