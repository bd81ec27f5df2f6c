//! Command-line configuration
//!
//! [`Cli`] is the raw `clap` surface. [`Config::from_cli`] turns it into the
//! validated pieces the rest of the program uses: the initial
//! [`PuzzleParams`], the [`PlaybackConfig`] timing and the display
//! [`Labels`].
//!
//! Peg names and disk colours are purely presentational. When they cannot be
//! parsed the defaults are used and a warning is logged; a bad label never
//! stops the program.

use crate::puzzle::{self, Move, Peg};
use crate::session::PuzzleParams;
use ratatui::style::Color;
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Tower of Hanoi solver with step-by-step terminal playback
#[derive(Debug, Clone, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Number of disks (1-64, only up to 12 are animated)
    #[arg(short = 'n', long, default_value = "4", value_parser = puzzle::parse_disks)]
    pub disks: u32,

    /// Start peg (0, 1 or 2)
    #[arg(long = "from", default_value = "0", value_parser = puzzle::parse_peg)]
    pub start: Peg,

    /// End peg (0, 1 or 2)
    #[arg(long = "to", default_value = "2", value_parser = puzzle::parse_peg)]
    pub end: Peg,

    /// Display names of the three pegs, comma separated
    #[arg(long, value_name = "A,B,C")]
    pub peg_names: Option<String>,

    /// Disk colours as comma separated `#rrggbb`, cycled by disk size
    #[arg(long, value_name = "LIST")]
    pub disk_colors: Option<String>,

    /// Playback speed multiplier (0.5-3.0)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Milliseconds per step at 1x speed
    #[arg(long, default_value_t = DEFAULT_BASE_MS)]
    pub base_ms: u64,

    /// Hide the arrow for the pending move
    #[arg(long)]
    pub no_arrow: bool,

    /// Print the step count and move list instead of opening the TUI
    #[arg(long)]
    pub print: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Errors for malformed presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Peg name list without exactly three entries
    #[error("Expected three peg names, got {count}")]
    InvalidPegNames { count: usize },

    /// One of the three peg names is blank
    #[error("Peg names must not be empty")]
    EmptyPegName,

    /// Colour entry that is not `#rrggbb`
    #[error("Invalid colour '{entry}': expected #rrggbb")]
    InvalidColor { entry: String },

    /// Empty colour list
    #[error("Colour list is empty")]
    EmptyColorList,
}

pub const DEFAULT_BASE_MS: u64 = 600;
pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 3.0;
pub const SPEED_STEP: f64 = 0.1;

/// Shortest step interval regardless of speed
pub const MIN_STEP_INTERVAL: Duration = Duration::from_millis(20);

pub const DEFAULT_PEG_NAMES: [&str; 3] = ["Left", "Middle", "Right"];

pub const DEFAULT_DISK_PALETTE: [Color; 4] = [
    Color::Rgb(0xff, 0xff, 0x00),
    Color::Rgb(0x00, 0x00, 0xff),
    Color::Rgb(0x00, 0xff, 0x00),
    Color::Rgb(0xff, 0x00, 0x00),
];

/// Timing and display switches for playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    pub base_ms: u64,
    speed: f64,
    pub show_arrow: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            base_ms: DEFAULT_BASE_MS,
            speed: 1.0,
            show_arrow: true,
        }
    }
}

impl PlaybackConfig {
    pub fn new(base_ms: u64, speed: f64, show_arrow: bool) -> Self {
        let mut config = PlaybackConfig {
            base_ms,
            speed: 1.0,
            show_arrow,
        };
        config.set_speed(speed);
        config
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the multiplier, clamped and rounded to one decimal
    pub fn set_speed(&mut self, speed: f64) {
        let speed = if speed.is_finite() { speed } else { 1.0 };
        self.speed = ((speed.clamp(MIN_SPEED, MAX_SPEED)) * 10.0).round() / 10.0;
    }

    pub fn faster(&mut self) {
        self.set_speed(self.speed + SPEED_STEP);
    }

    pub fn slower(&mut self) {
        self.set_speed(self.speed - SPEED_STEP);
    }

    /// Time between automatic steps: `base_ms / speed`, at least 20ms
    pub fn step_interval(&self) -> Duration {
        let ms = (self.base_ms as f64 / self.speed).round() as u64;
        Duration::from_millis(ms).max(MIN_STEP_INTERVAL)
    }
}

/// Display names for pegs and colours for disks
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    peg_names: [String; 3],
    disk_colors: FxHashMap<u32, Color>,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            peg_names: DEFAULT_PEG_NAMES.map(String::from),
            disk_colors: color_table(&DEFAULT_DISK_PALETTE),
        }
    }
}

impl Labels {
    /// Build labels from optional user input, falling back to the defaults
    /// for anything that does not parse.
    pub fn from_input(peg_names: Option<&str>, disk_colors: Option<&str>) -> Self {
        let mut labels = Labels::default();

        if let Some(input) = peg_names {
            match parse_peg_names(input) {
                Ok(names) => labels.peg_names = names,
                Err(e) => log::warn!("{e}; using default peg names"),
            }
        }

        if let Some(input) = disk_colors {
            match parse_palette(input) {
                Ok(palette) => labels.disk_colors = color_table(&palette),
                Err(e) => log::warn!("{e}; using default disk colours"),
            }
        }

        labels
    }

    pub fn peg_name(&self, peg: Peg) -> &str {
        &self.peg_names[peg.index()]
    }

    pub fn disk_color(&self, size: u32) -> Color {
        self.disk_colors
            .get(&size)
            .copied()
            .unwrap_or_else(|| default_color(size))
    }

    /// One line of the move list, numbered from 1
    pub fn describe_move(&self, index: usize, mv: Move) -> String {
        format!(
            "{}. {} -> {}",
            index + 1,
            self.peg_name(mv.from),
            self.peg_name(mv.to)
        )
    }

    /// The whole move list, one numbered line per move
    pub fn move_list_text(&self, moves: &[Move]) -> String {
        moves
            .iter()
            .enumerate()
            .map(|(i, &mv)| self.describe_move(i, mv))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Fully validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub params: PuzzleParams,
    pub playback: PlaybackConfig,
    pub labels: Labels,
    pub print_only: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            params: PuzzleParams {
                disks: cli.disks,
                start: cli.start,
                end: cli.end,
            },
            playback: PlaybackConfig::new(cli.base_ms, cli.speed, !cli.no_arrow),
            labels: Labels::from_input(cli.peg_names.as_deref(), cli.disk_colors.as_deref()),
            print_only: cli.print,
            log_file: cli.log_file.clone(),
        }
    }
}

/// Parse `A,B,C` into exactly three trimmed, non-empty names
pub fn parse_peg_names(input: &str) -> Result<[String; 3], ConfigError> {
    let names: Vec<String> = input.split(',').map(|s| s.trim().to_string()).collect();
    match <[String; 3]>::try_from(names) {
        Ok(names) if names.iter().all(|n| !n.is_empty()) => Ok(names),
        Ok(_) => Err(ConfigError::EmptyPegName),
        Err(names) => Err(ConfigError::InvalidPegNames { count: names.len() }),
    }
}

/// Parse a comma separated list of `#rrggbb` colours
pub fn parse_palette(input: &str) -> Result<Vec<Color>, ConfigError> {
    let palette = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_hex_color)
        .collect::<Result<Vec<_>, _>>()?;
    if palette.is_empty() {
        return Err(ConfigError::EmptyColorList);
    }
    Ok(palette)
}

/// Parse a single `#rrggbb` colour
pub fn parse_hex_color(entry: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        entry: entry.to_string(),
    };
    let hex = entry.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Colour for every possible disk size, cycling through `palette`
fn color_table(palette: &[Color]) -> FxHashMap<u32, Color> {
    (1..=puzzle::MAX_DISKS)
        .map(|size| (size, palette[(size as usize - 1) % palette.len()]))
        .collect()
}

fn default_color(size: u32) -> Color {
    DEFAULT_DISK_PALETTE[(size.max(1) as usize - 1) % DEFAULT_DISK_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_step_interval() {
        let mut config = PlaybackConfig::default();
        assert_eq!(config.step_interval(), Duration::from_millis(600));
        config.set_speed(2.0);
        assert_eq!(config.step_interval(), Duration::from_millis(300));

        let fast = PlaybackConfig::new(30, 3.0, true);
        assert_eq!(fast.step_interval(), MIN_STEP_INTERVAL);
    }

    #[test]
    fn test_speed_clamped() {
        let mut config = PlaybackConfig::new(600, 10.0, true);
        assert_eq!(config.speed(), MAX_SPEED);
        config.faster();
        assert_eq!(config.speed(), MAX_SPEED);
        for _ in 0..40 {
            config.slower();
        }
        assert_eq!(config.speed(), MIN_SPEED);
        config.faster();
        assert_eq!(config.speed(), 0.6);
    }

    #[test]
    fn test_peg_names() {
        assert_eq!(
            parse_peg_names("A, B ,C").unwrap(),
            ["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert_eq!(
            parse_peg_names("A,B"),
            Err(ConfigError::InvalidPegNames { count: 2 })
        );
        assert_eq!(parse_peg_names("A,,C"), Err(ConfigError::EmptyPegName));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_hex_color("#ff8000"), Ok(Color::Rgb(255, 128, 0)));
        assert!(parse_hex_color("ff8000").is_err());
        assert!(parse_hex_color("#ff80").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert_eq!(parse_palette(" , "), Err(ConfigError::EmptyColorList));
    }

    #[test]
    fn test_labels_fallback() {
        let labels = Labels::from_input(Some("only-one"), Some("#zzzzzz"));
        assert_eq!(labels, Labels::default());
        assert_eq!(labels.peg_name(Peg::Center), "Middle");
        assert_eq!(labels.disk_color(1), Color::Rgb(0xff, 0xff, 0x00));
        assert_eq!(labels.disk_color(5), Color::Rgb(0xff, 0xff, 0x00));
    }

    #[test]
    fn test_labels_custom() {
        let labels = Labels::from_input(Some("A,B,C"), Some("#010203,#040506"));
        assert_eq!(labels.disk_color(1), Color::Rgb(1, 2, 3));
        assert_eq!(labels.disk_color(2), Color::Rgb(4, 5, 6));
        assert_eq!(labels.disk_color(3), Color::Rgb(1, 2, 3));
        assert_eq!(
            labels.move_list_text(&[Move::new(Peg::Left, Peg::Center), Move::new(Peg::Left, Peg::Right)]),
            "1. A -> B\n2. A -> C"
        );
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hanoitty"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.params, PuzzleParams::default());
        assert!(config.playback.show_arrow);
        assert!(!config.print_only);
    }

    #[test]
    fn test_cli_rejects_bad_peg() {
        assert!(Cli::try_parse_from(["hanoitty", "--from", "3"]).is_err());
        let cli = Cli::try_parse_from(["hanoitty", "-n", "99", "--from", "1", "--to", "1"]).unwrap();
        assert_eq!(cli.disks, 64);
        assert_eq!(cli.start, Peg::Center);
        assert_eq!(cli.end, Peg::Center);
    }
}
