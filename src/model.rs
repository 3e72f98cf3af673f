//! Display arrangement types shared by the parser and planner.
//!
//! - [`Monitor`]: one physical output reported by `gdctl show`
//! - [`LogicalGroup`]: one logical monitor and the outputs it spans
//! - [`Mode`]: the semantic arrangement gdswitch switches between

use clap::ValueEnum;
use std::fmt;

/// A physical monitor, keyed by its connector id (e.g. `eDP-1`, `DP-2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Connector id, unique within one `gdctl show` snapshot.
    pub id: String,
    /// Text found in parentheses after the id. May be empty.
    pub description: String,
    /// Whether this is the panel built into the chassis.
    pub builtin: bool,
}

impl Monitor {
    /// Create a monitor record.
    pub fn new(id: impl Into<String>, description: impl Into<String>, builtin: bool) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            builtin,
        }
    }
}

/// A logical monitor: one addressable desktop area made of one or more outputs.
///
/// Only lives for the duration of a parse; used to classify the current mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalGroup {
    /// Connector ids of member monitors, in listed order.
    pub monitor_ids: Vec<String>,
    /// Marked `Primary: yes` by gdctl.
    pub primary: bool,
    /// At least one member is a built-in monitor.
    pub builtin: bool,
}

/// Display arrangement.
///
/// `Unknown` is what the parser reports when it cannot tell; it is never a
/// valid target for switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// Only the built-in panel is active.
    Builtin,
    /// Only external monitors are active.
    External,
    /// Built-in and external extend the desktop, built-in is primary.
    JoinBuiltin,
    /// Built-in and external extend the desktop, an external is primary.
    JoinExternal,
    /// Arrangement could not be classified.
    #[value(skip)]
    Unknown,
}

impl Mode {
    /// Modes a user can switch to, in menu order.
    pub const SELECTABLE: [Mode; 4] = [
        Mode::JoinBuiltin,
        Mode::JoinExternal,
        Mode::External,
        Mode::Builtin,
    ];

    /// Canonical name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Builtin => "builtin",
            Mode::External => "external",
            Mode::JoinBuiltin => "join-builtin",
            Mode::JoinExternal => "join-external",
            Mode::Unknown => "unknown",
        }
    }

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Builtin => "Built-in only",
            Mode::External => "External only",
            Mode::JoinBuiltin => "Join displays (built-in primary)",
            Mode::JoinExternal => "Join displays (external primary)",
            Mode::Unknown => "Unknown",
        }
    }

    /// Whether monitors are chained side by side in this mode.
    pub fn is_join(&self) -> bool {
        matches!(self, Mode::JoinBuiltin | Mode::JoinExternal)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_match_cli_values() {
        for mode in Mode::SELECTABLE {
            let parsed = Mode::from_str(mode.as_str(), true).unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_unknown_is_not_selectable() {
        assert!(Mode::from_str("unknown", true).is_err());
        assert!(!Mode::SELECTABLE.contains(&Mode::Unknown));
    }

    #[test]
    fn test_is_join() {
        assert!(Mode::JoinBuiltin.is_join());
        assert!(Mode::JoinExternal.is_join());
        assert!(!Mode::Builtin.is_join());
        assert!(!Mode::Unknown.is_join());
    }
}
