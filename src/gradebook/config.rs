use log::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Runtime settings for a gradebook session, built from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterConfig {
    /// Cap on invalid answers to a single prompt. `None` re-prompts forever.
    pub max_attempts: Option<u32>,

    /// Colorize status messages.
    pub color: bool,

    pub log_level: LevelFilter,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            color: true,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl RosterConfig {
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        // Zero attempts would reject every prompt before it is shown.
        self.max_attempts = max_attempts.filter(|&n| n > 0);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Map a `-v` count to a level: 0 keeps the default, 1 is debug, 2+ is trace.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        self.log_level = match verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        self
    }
}
