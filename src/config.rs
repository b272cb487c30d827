use crate::consts;
use crate::engine::Grid;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameSettings,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("cubesnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Validated gameplay settings
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameSettings")]
pub(crate) struct GameSettings {
    /// The board
    pub(crate) grid: Grid,

    /// Time between snake movements at the start of a game
    pub(crate) initial_interval: Duration,

    /// Lower bound on the time between snake movements
    pub(crate) min_interval: Duration,

    /// Amount by which the time between movements shrinks per food eaten
    pub(crate) speed_step: Duration,

    /// Seconds counted down before the snake starts moving
    pub(crate) countdown: u32,
}

impl Default for GameSettings {
    fn default() -> GameSettings {
        GameSettings {
            grid: Grid::default(),
            initial_interval: consts::INITIAL_TICK_INTERVAL,
            min_interval: consts::MIN_TICK_INTERVAL,
            speed_step: consts::SPEED_STEP,
            countdown: consts::COUNTDOWN_START,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawGameSettings {
    grid_size: u16,
    initial_interval_ms: u64,
    min_interval_ms: u64,
    speed_step_ms: u64,
    countdown: u32,
}

impl Default for RawGameSettings {
    fn default() -> RawGameSettings {
        RawGameSettings {
            grid_size: consts::GRID_SIZE,
            initial_interval_ms: millis(consts::INITIAL_TICK_INTERVAL),
            min_interval_ms: millis(consts::MIN_TICK_INTERVAL),
            speed_step_ms: millis(consts::SPEED_STEP),
            countdown: consts::COUNTDOWN_START,
        }
    }
}

impl TryFrom<RawGameSettings> for GameSettings {
    type Error = SettingsError;

    fn try_from(value: RawGameSettings) -> Result<GameSettings, SettingsError> {
        let grid = Grid::new(value.grid_size)
            .filter(|g| (consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&g.side()))
            .ok_or(SettingsError::GridSize(value.grid_size))?;
        if value.min_interval_ms == 0 || value.min_interval_ms > value.initial_interval_ms {
            return Err(SettingsError::Intervals {
                min: value.min_interval_ms,
                initial: value.initial_interval_ms,
            });
        }
        if !(1..=consts::MAX_COUNTDOWN).contains(&value.countdown) {
            return Err(SettingsError::Countdown(value.countdown));
        }
        Ok(GameSettings {
            grid,
            initial_interval: Duration::from_millis(value.initial_interval_ms),
            min_interval: Duration::from_millis(value.min_interval_ms),
            speed_step: Duration::from_millis(value.speed_step_ms),
            countdown: value.countdown,
        })
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Where & how much to log
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// File to append log messages to.  Nothing is logged if this is not set.
    pub(crate) file: Option<PathBuf>,

    /// Filter directives used when `RUST_LOG` is not set
    pub(crate) level: String,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("grid-size must be an even number from {min} to {max}, got {0}", min = consts::MIN_GRID_SIZE, max = consts::MAX_GRID_SIZE)]
    GridSize(u16),
    #[error("min-interval-ms ({min}) must be at least 1 and at most initial-interval-ms ({initial})")]
    Intervals { min: u64, initial: u64 },
    #[error("countdown must be from 1 to {max}, got {0}", max = consts::MAX_COUNTDOWN)]
    Countdown(u32),
}
