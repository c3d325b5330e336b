use std::num::ParseIntError;
use std::time::Duration;

use clap::Parser;

use crate::rule_set::RuleSet;

/// Everything the driver needs to know to run a simulation
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "life", version, about = "Conway's Game of Life in the terminal")]
pub struct Config {
    /// Number of rows of the universe
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Number of columns of the universe
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub cols: u32,

    /// Side length of a single cell, in braille dots
    #[arg(
        long = "pixels",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pixel_size: u32,

    /// Pause between two generations, in milliseconds
    #[arg(long, default_value = "10", value_parser = parse_millis)]
    pub delay: Duration,

    /// Birth/survival rule, e.g. B3/S23
    #[arg(long = "rule", default_value_t = RuleSet::default())]
    pub rules: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 200,
            cols: 200,
            pixel_size: 1,
            delay: Duration::from_millis(10),
            rules: RuleSet::default(),
        }
    }
}

impl Config {
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    pub fn pixel_size(&self) -> usize {
        self.pixel_size as usize
    }
}

fn parse_millis(s: &str) -> Result<Duration, ParseIntError> {
    Ok(Duration::from_millis(s.parse()?))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use clap::error::ErrorKind;
    use clap::Parser;

    use super::Config;
    use crate::rule_set::RuleSet;

    fn parse(s: &str) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("life").chain(s.split_whitespace()))
    }

    #[test]
    fn defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn all_flags() {
        let config = parse("--rows 20 --cols 30 --pixels 2 --delay 50 --rule b36/s23").unwrap();

        assert_eq!(config.rows(), 20);
        assert_eq!(config.cols(), 30);
        assert_eq!(config.pixel_size(), 2);
        assert_eq!(config.delay, Duration::from_millis(50));
        assert_eq!(config.rules, RuleSet::new(0b100_1000, 0b1100));
    }

    #[test]
    fn bad_flags() {
        let kind = |s| parse(s).unwrap_err().kind();

        assert!(parse("--rows").is_err());
        assert!(parse("--cols -3").is_err());
        assert_eq!(kind("--rows 0"), ErrorKind::ValueValidation);
        assert_eq!(kind("--pixels 0"), ErrorKind::ValueValidation);
        assert_eq!(kind("--delay soon"), ErrorKind::ValueValidation);
        assert_eq!(kind("--speed 3"), ErrorKind::UnknownArgument);
        assert_eq!(kind("--rule 3/23"), ErrorKind::ValueValidation);
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;

        Config::command().debug_assert();
    }
}
