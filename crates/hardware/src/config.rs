//! Configuration system for the paging simulator.
//!
//! This module defines the parameters of a simulation run. It provides:
//! 1. **Defaults:** Frame count, TLB size and policies used when nothing is specified.
//! 2. **Enums:** Replacement algorithm and write policy, parseable from CLI strings and JSON.
//! 3. **Validation:** Rejection of unusable settings before any table is allocated.
//!
//! Configuration is supplied by the CLI flags, optionally layered over a JSON file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Physical frames available to the address space.
    pub const NUM_FRAMES: usize = 3;

    /// TLB entries; zero disables the TLB.
    pub const TLB_SIZE: usize = 0;
}

/// Page replacement algorithms.
///
/// Specifies how the victim frame is chosen when a page fault occurs and
/// every frame is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// First In First Out.
    ///
    /// Evicts frames in the order they were filled, ignoring hits.
    #[default]
    #[serde(alias = "Fifo", alias = "fifo")]
    Fifo,
    /// Least Recently Used.
    ///
    /// Evicts the frame whose last access is oldest.
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
    /// Second-chance clock.
    ///
    /// Sweeps a hand over the frames, clearing reference bits until it finds
    /// an unreferenced frame.
    #[serde(alias = "Clock", alias = "clock")]
    Clock,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "clock" => Ok(Self::Clock),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Clock => "CLOCK",
        };
        f.write_str(name)
    }
}

/// Handling of stores with respect to backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum WritePolicy {
    /// Every store goes straight through; frames never become dirty.
    #[default]
    #[serde(
        rename = "Write-Through",
        alias = "WriteThrough",
        alias = "write-through",
        alias = "wt"
    )]
    WriteThrough,
    /// Stores mark the frame dirty; dirty frames are written back on eviction.
    #[serde(
        rename = "Write-Back",
        alias = "WriteBack",
        alias = "write-back",
        alias = "wb"
    )]
    WriteBack,
}

impl WritePolicy {
    /// True when stores leave the frame dirty.
    #[inline(always)]
    pub const fn is_write_back(self) -> bool {
        matches!(self, Self::WriteBack)
    }
}

impl FromStr for WritePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            // `t`/`b` keep `-wt`/`-wb` working as short-flag clusters.
            "wt" | "t" | "write-through" | "writethrough" => Ok(Self::WriteThrough),
            "wb" | "b" | "write-back" | "writeback" => Ok(Self::WriteBack),
            _ => Err(ConfigError::UnknownWritePolicy(s.to_string())),
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WriteThrough => "Write-Through",
            Self::WriteBack => "Write-Back",
        };
        f.write_str(name)
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{Algorithm, Config, WritePolicy};
///
/// let config = Config::default();
/// assert_eq!(config.algorithm, Algorithm::Fifo);
/// assert_eq!(config.num_frames, 3);
/// assert_eq!(config.tlb_size, 0);
/// assert_eq!(config.write_policy, WritePolicy::WriteThrough);
/// ```
///
/// Deserializing from JSON; missing fields take their defaults:
///
/// ```
/// use pagesim_core::config::{Algorithm, Config, WritePolicy};
///
/// let json = r#"{ "algorithm": "CLOCK", "tlb_size": 8, "write_policy": "wb" }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.algorithm, Algorithm::Clock);
/// assert_eq!(config.num_frames, 3);
/// assert_eq!(config.tlb_size, 8);
/// assert_eq!(config.write_policy, WritePolicy::WriteBack);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Replacement algorithm for the frame table.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Number of physical frames; must be positive.
    #[serde(default = "Config::default_num_frames")]
    pub num_frames: usize,

    /// Number of TLB entries; zero disables the TLB.
    #[serde(default = "Config::default_tlb_size")]
    pub tlb_size: usize,

    /// Store handling policy.
    #[serde(default)]
    pub write_policy: WritePolicy,
}

impl Config {
    const fn default_num_frames() -> usize {
        defaults::NUM_FRAMES
    }

    const fn default_tlb_size() -> usize {
        defaults::TLB_SIZE
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input and
    /// [`ConfigError::InvalidFrameCount`] when `num_frames` is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from JSON without validating it.
    ///
    /// For callers that layer further settings on top and validate the
    /// result themselves (see [`apply_overrides`](Self::apply_overrides)).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input.
    pub fn parse_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies command-line overrides, then validates the result.
    ///
    /// Only the settings present in `overrides` change. A negative TLB size
    /// disables the TLB.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFrameCount`] for a non-positive frame
    /// override, or when the final frame count is zero.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(algorithm) = overrides.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(frames) = overrides.num_frames {
            self.num_frames = Self::frame_count(frames)?;
        }
        if let Some(tlb) = overrides.tlb_size {
            self.tlb_size = Self::tlb_entries(tlb);
        }
        if let Some(policy) = overrides.write_policy {
            self.write_policy = policy;
        }
        self.validate()
    }

    /// Checks that the configuration can be simulated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFrameCount`] when `num_frames` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_frames == 0 {
            return Err(ConfigError::InvalidFrameCount(0));
        }
        Ok(())
    }

    /// Converts a user-supplied frame count, rejecting non-positive values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFrameCount`] for `n <= 0`.
    pub fn frame_count(n: i64) -> Result<usize, ConfigError> {
        usize::try_from(n)
            .ok()
            .filter(|&frames| frames > 0)
            .ok_or(ConfigError::InvalidFrameCount(n))
    }

    /// Converts a user-supplied TLB size; negative values disable the TLB.
    pub fn tlb_entries(n: i64) -> usize {
        usize::try_from(n).unwrap_or(0)
    }

    /// Whether the TLB takes part in translation.
    #[inline(always)]
    pub const fn tlb_enabled(&self) -> bool {
        self.tlb_size > 0
    }
}

/// Settings given on the command line, as typed by the user.
///
/// Counts stay signed so that out-of-range input is reported (frames) or
/// clamped (TLB) by [`Config::apply_overrides`] rather than by the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replacement algorithm.
    pub algorithm: Option<Algorithm>,
    /// Physical frame count.
    pub num_frames: Option<i64>,
    /// TLB entries.
    pub tlb_size: Option<i64>,
    /// Write policy.
    pub write_policy: Option<WritePolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            num_frames: defaults::NUM_FRAMES,
            tlb_size: defaults::TLB_SIZE,
            write_policy: WritePolicy::default(),
        }
    }
}
