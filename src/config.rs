//! Settings types for gdswitch.
//!
//! gdswitch persists a single user preference (where external monitors are
//! placed in a join mode) and an optional override for the `gdctl` binary.
//!
//! # Settings Format
//!
//! ```toml
//! join_position = "left"
//! gdctl = "/usr/bin/gdctl"
//! ```
//!
//! Parsing is forgiving: a missing file, broken TOML, or an unrecognised
//! `join_position` all fall back to [`Settings::default`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Default program name for the display configuration tool.
pub const DEFAULT_GDCTL: &str = "gdctl";

/// Where each monitor is placed relative to the previous one in a join mode.
///
/// Maps to gdctl's logical monitor placement flags:
/// - `Left`: `--left-of`
/// - `Right`: `--right-of`
/// - `Above`: `--above`
/// - `Below`: `--below`
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum JoinPosition {
    /// Place to the left of the previous monitor.
    Left,
    /// Place to the right of the previous monitor.
    #[default]
    Right,
    /// Place above the previous monitor.
    Above,
    /// Place below the previous monitor.
    Below,
}

impl JoinPosition {
    /// All positions, in menu order.
    pub const ALL: [JoinPosition; 4] = [
        JoinPosition::Left,
        JoinPosition::Right,
        JoinPosition::Above,
        JoinPosition::Below,
    ];

    /// Look up a position by name, ignoring case.
    ///
    /// Anything unrecognised maps to [`JoinPosition::Right`].
    ///
    /// ```
    /// use gdswitch::config::JoinPosition;
    ///
    /// assert_eq!(JoinPosition::from_name("Above"), JoinPosition::Above);
    /// assert_eq!(JoinPosition::from_name("diagonal"), JoinPosition::Right);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => JoinPosition::Left,
            "right" => JoinPosition::Right,
            "above" => JoinPosition::Above,
            "below" => JoinPosition::Below,
            _ => JoinPosition::default(),
        }
    }

    /// Convert to the gdctl placement flag.
    pub fn to_gdctl_flag(&self) -> &'static str {
        match self {
            JoinPosition::Left => "--left-of",
            JoinPosition::Right => "--right-of",
            JoinPosition::Above => "--above",
            JoinPosition::Below => "--below",
        }
    }

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            JoinPosition::Left => "Left",
            JoinPosition::Right => "Right",
            JoinPosition::Above => "Above",
            JoinPosition::Below => "Below",
        }
    }
}

impl fmt::Display for JoinPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

/// On-disk shape, kept loose so bad values degrade instead of failing.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    join_position: Option<String>,
    #[serde(default)]
    gdctl: Option<String>,
}

/// User settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Placement of monitors when joining displays.
    pub join_position: JoinPosition,
    /// Override for the `gdctl` program path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdctl: Option<String>,
}

impl Settings {
    /// Parse settings from a TOML string.
    ///
    /// Never fails: malformed TOML yields the defaults, an unrecognised
    /// `join_position` yields [`JoinPosition::Right`].
    pub fn from_toml(toml_str: &str) -> Self {
        let raw: RawSettings = match toml::from_str(toml_str) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Settings are not valid TOML, using defaults");
                return Settings::default();
            }
        };

        let join_position = match raw.join_position.as_deref() {
            Some(name) => {
                let position = JoinPosition::from_name(name);
                if !name.trim().eq_ignore_ascii_case(position.label()) {
                    warn!(join_position = %name, "Unrecognised join_position, using right");
                }
                position
            }
            None => JoinPosition::default(),
        };

        let gdctl = raw.gdctl.filter(|p| !p.trim().is_empty());

        Settings {
            join_position,
            gdctl,
        }
    }

    /// Serialize settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Program to invoke for `gdctl` commands.
    pub fn gdctl_program(&self) -> &str {
        self.gdctl.as_deref().unwrap_or(DEFAULT_GDCTL)
    }
}
