//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reflexa.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REFLEXA_ENTRIES_PATH`, `REFLEXA_EMOTIONS`, …
//! 4. **Command-line arguments** – `--entries-path`/`-f`, `--emotions`/`-e`, …
//!
//! # Configuration File
//!
//! ```toml
//! entries_path = "journal.json"
//! catalog_path = "emotions.json"
//! match_all_emotions = false
//! swap_inverted_ranges = false
//! discard_filters_on_close = false
//! ```

use camino::Utf8Path;
use chrono::NaiveDate;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::ReflexaError;
use crate::journal::{EmotionId, parse_date};
use crate::search::{EmotionMatch, InvertedRangePolicy, QueryOptions, RetentionPolicy};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print entries matching the configured filters and exit.
    Search,
    /// Browse and search the journal interactively.
    BrowseTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reflexa::ReflexaConfig;
///
/// let config = ReflexaConfig::load().expect("failed to load configuration");
/// let path = config.require_entries_path().expect("journal path required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REFLEXA",
    discovery(
        dotfile_name = ".reflexa.toml",
        config_file_name = "reflexa.toml",
        app_name = "reflexa"
    )
)]
pub struct ReflexaConfig {
    /// Path to the journal JSON file.
    ///
    /// Can be provided via:
    /// - CLI: `--entries-path <PATH>` or `-f <PATH>`
    /// - Environment: `REFLEXA_ENTRIES_PATH`
    /// - Config file: `entries_path = "..."`
    #[ortho_config(cli_short = 'f')]
    pub entries_path: Option<String>,

    /// Path to a JSON emotion catalog. The built-in catalog is used when
    /// absent.
    #[ortho_config()]
    pub catalog_path: Option<String>,

    /// Comma-separated emotion ids to search for (e.g. `joy,calm`).
    #[ortho_config(cli_short = 'e')]
    pub emotions: Option<String>,

    /// Inclusive start date, `YYYY-MM-DD`.
    #[ortho_config()]
    pub from: Option<String>,

    /// Inclusive end date, `YYYY-MM-DD`.
    #[ortho_config()]
    pub to: Option<String>,

    /// Restricts the search to bookmarked entries.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so use the CLI or the config file.
    #[ortho_config(cli_short = 'b')]
    pub bookmarked: bool,

    /// Launches the interactive journal browser.
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Requires entries to carry every selected emotion instead of any.
    #[ortho_config()]
    pub match_all_emotions: bool,

    /// Swaps inverted date ranges instead of treating them as empty.
    #[ortho_config()]
    pub swap_inverted_ranges: bool,

    /// Clears filter values when the search form is dismissed unsubmitted.
    #[ortho_config()]
    pub discard_filters_on_close: bool,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

impl ReflexaConfig {
    /// Returns the journal path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReflexaError::Configuration`] when no path is configured.
    pub fn require_entries_path(&self) -> Result<&Utf8Path, ReflexaError> {
        self.entries_path
            .as_deref()
            .map(Utf8Path::new)
            .ok_or_else(|| ReflexaError::Configuration {
                message: "journal path is required (use --entries-path or -f)".to_owned(),
            })
    }

    /// Returns the catalog path, if one is configured.
    #[must_use]
    pub fn catalog_path(&self) -> Option<&Utf8Path> {
        self.catalog_path.as_deref().map(Utf8Path::new)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::BrowseTui
        } else {
            OperationMode::Search
        }
    }

    /// Emotion ids listed in `emotions`, in the order given.
    ///
    /// Blank items are skipped and surrounding whitespace is trimmed.
    #[must_use]
    pub fn emotion_ids(&self) -> Vec<EmotionId> {
        self.emotions
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(EmotionId::from)
            .collect()
    }

    /// Parses the configured start date.
    ///
    /// # Errors
    ///
    /// Returns [`ReflexaError::Configuration`] when `from` is not a date.
    pub fn start_date(&self) -> Result<Option<NaiveDate>, ReflexaError> {
        parse_optional_date("from", self.from.as_deref())
    }

    /// Parses the configured end date.
    ///
    /// # Errors
    ///
    /// Returns [`ReflexaError::Configuration`] when `to` is not a date.
    pub fn end_date(&self) -> Result<Option<NaiveDate>, ReflexaError> {
        parse_optional_date("to", self.to.as_deref())
    }

    /// Query options derived from the matching flags.
    #[must_use]
    pub const fn query_options(&self) -> QueryOptions {
        QueryOptions {
            inverted_range: if self.swap_inverted_ranges {
                InvertedRangePolicy::Swap
            } else {
                InvertedRangePolicy::Empty
            },
            emotion_match: if self.match_all_emotions {
                EmotionMatch::All
            } else {
                EmotionMatch::Any
            },
        }
    }

    /// Search form retention policy derived from `discard_filters_on_close`.
    #[must_use]
    pub const fn retention_policy(&self) -> RetentionPolicy {
        if self.discard_filters_on_close {
            RetentionPolicy::DiscardOnClose
        } else {
            RetentionPolicy::Retain
        }
    }
}

fn parse_optional_date(
    field: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ReflexaError> {
    value
        .map(|text| {
            parse_date(text).map_err(|error| ReflexaError::Configuration {
                message: format!("--{field}: {error}"),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests;
