use clap::Parser;
use gradebook::config::RosterConfig;

#[derive(Parser, Debug)]
#[command(name = "gradebook", bin_name = "gradebook", version)]
#[command(about = "Interactive student roster and grade manager", long_about = None)]
pub struct Cli {
    /// Give up on a prompt after this many invalid answers, at least 1 (default: never)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Disable colored status messages
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> RosterConfig {
        RosterConfig::default()
            .with_max_attempts(self.max_attempts)
            .with_color(!self.no_color)
            .with_verbosity(self.verbose)
    }
}
