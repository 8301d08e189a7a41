//! Session settings from a TOML file, overridden by command-line flags.

use crate::cli::Cli;
use crate::players::{Controller, Seat};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use xo::Mark;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Who controls x.
    pub x: Controller,
    /// Who controls o.
    pub o: Controller,
    /// Rounds two computers play; negative counts as zero.
    pub rounds: i64,
    /// Mark that moves first.
    pub first: Mark,
    /// Seed for choosing among equally good computer moves.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            x: Controller::Human,
            o: Controller::Computer,
            rounds: 50,
            first: Mark::X,
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file; missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SettingsError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            SettingsError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(?settings, "Settings loaded successfully");
        Ok(settings)
    }

    /// Applies every flag given on the command line.
    pub fn merge(mut self, cli: &Cli) -> Self {
        if let Some(x) = cli.x {
            self.x = x;
        }
        if let Some(o) = cli.o {
            self.o = o;
        }
        if let Some(rounds) = cli.rounds {
            self.rounds = rounds;
        }
        if let Some(first) = cli.first {
            self.first = first;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self
    }

    /// Who controls `mark`.
    pub fn controller(&self, mark: Mark) -> Controller {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// The seat that opens, then the other one.
    pub fn seats(&self) -> (Seat, Seat) {
        let second = self.first.other();
        (
            Seat::new(self.first, self.controller(self.first)),
            Seat::new(second, self.controller(second)),
        )
    }

    /// Rounds to play, clamped at zero.
    pub fn rounds(&self) -> u32 {
        u32::try_from(self.rounds.max(0)).unwrap_or(u32::MAX)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn settings_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.controller(Mark::X), Controller::Human);
        assert_eq!(settings.controller(Mark::O), Controller::Computer);
        assert_eq!(settings.rounds(), 50);
        assert_eq!(settings.first, Mark::X);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = settings_file("o = \"human\"\nfirst = \"o\"\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.x, Controller::Human);
        assert_eq!(settings.o, Controller::Human);
        assert_eq!(settings.first, Mark::O);
        assert_eq!(settings.rounds, 50);
    }

    #[test]
    fn test_full_file() {
        let file = settings_file(
            "x = \"computer\"\no = \"computer\"\nrounds = 7\nfirst = \"x\"\nseed = 11\n",
        );
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.rounds(), 7);
        assert_eq!(settings.seed, Some(11));
        assert_eq!(settings.controller(Mark::X), Controller::Computer);
    }

    #[test]
    fn test_bad_file() {
        let file = settings_file("first = \"z\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));

        let file = settings_file("colour = \"red\"\n");
        assert!(Settings::from_file(file.path()).is_err());

        assert!(Settings::from_file("/nonexistent/xo.toml").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = settings_file("x = \"computer\"\nrounds = 3\n");
        let cli = Cli::parse_from(["xo", "-x", "human", "-r", "9", "-f", "o", "--seed", "5"]);
        let settings = Settings::from_file(file.path()).unwrap().merge(&cli);

        assert_eq!(settings.x, Controller::Human);
        assert_eq!(settings.o, Controller::Computer);
        assert_eq!(settings.rounds(), 9);
        assert_eq!(settings.first, Mark::O);
        assert_eq!(settings.seed, Some(5));
    }

    #[test]
    fn test_negative_rounds_clamp() {
        let cli = Cli::parse_from(["xo", "--rounds", "-4"]);
        assert_eq!(Settings::default().merge(&cli).rounds(), 0);
    }

    #[test]
    fn test_seats_follow_first() {
        let settings = Settings {
            first: Mark::O,
            ..Settings::default()
        };
        let (first, second) = settings.seats();
        assert_eq!(first, Seat::new(Mark::O, Controller::Computer));
        assert_eq!(second, Seat::new(Mark::X, Controller::Human));
    }
}
