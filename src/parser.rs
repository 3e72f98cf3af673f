//! `gdctl show` output parsing.
//!
//! gdctl prints two tree-drawn sections, each introduced by a header at
//! column 0 and terminated by a blank line:
//!
//! ```text
//! Monitors:
//! ├──Monitor eDP-1 (Built-in display)
//! │   └──Vendor: BOE
//! └──Monitor DP-2 (DELL U2720Q)
//!
//! Logical monitors:
//! ├──Logical monitor #1
//! │   ├──Primary: yes
//! │   └──Monitors: (1)
//! │       └──eDP-1 (Built-in display)
//! └──Logical monitor #2
//!     ├──Primary: no
//!     └──Monitors: (1)
//!         └──DP-2 (DELL U2720Q)
//! ```
//!
//! The format is not a stable contract, so nothing here fails: missing or
//! unrecognised sections degrade to an empty monitor list and
//! [`Mode::Unknown`].

use crate::model::{LogicalGroup, Mode, Monitor};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

const MONITORS_HEADER: &str = "Monitors:";
const LOGICAL_MONITORS_HEADER: &str = "Logical monitors:";

static MONITOR_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Monitor\s+([^\s(]+)(?:\s*\((.*)\))?").unwrap());
static BUILTIN_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)eDP|LVDS|DSI|built-in").unwrap());
static BUILTIN_CONNECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)eDP|LVDS|DSI").unwrap());
static LOGICAL_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Logical monitor\b").unwrap());
static PRIMARY_YES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPrimary:\s*yes\b").unwrap());
static MEMBERS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Monitors:").unwrap());
// A bare connector id, optionally followed by a description. `Scale: 1.0` is rejected.
static MEMBER_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9_.\-]*)(?:\s|$)").unwrap());

/// Result of parsing one `gdctl show` snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Physical monitors, deduplicated by id, in listed order.
    pub monitors: Vec<Monitor>,
    /// Current arrangement.
    pub mode: Mode,
}

impl Snapshot {
    fn unknown(monitors: Vec<Monitor>) -> Self {
        Self {
            monitors,
            mode: Mode::Unknown,
        }
    }
}

/// Parse `gdctl show` output into monitors and the current mode.
///
/// ```
/// use gdswitch::model::Mode;
/// use gdswitch::parser::parse;
///
/// let snapshot = parse("no sections here");
/// assert!(snapshot.monitors.is_empty());
/// assert_eq!(snapshot.mode, Mode::Unknown);
/// ```
pub fn parse(output: &str) -> Snapshot {
    let Some(monitor_block) = section(output, MONITORS_HEADER) else {
        debug!("No monitors section in gdctl output");
        return Snapshot::unknown(Vec::new());
    };
    let monitors = parse_monitors(&monitor_block);

    let Some(logical_block) = section(output, LOGICAL_MONITORS_HEADER) else {
        debug!(monitors = monitors.len(), "No logical monitors section in gdctl output");
        return Snapshot::unknown(monitors);
    };
    let groups = parse_logical_groups(&logical_block, &monitors);
    let mode = classify(&groups);

    debug!(
        monitors = monitors.len(),
        logical_monitors = groups.len(),
        %mode,
        "Parsed gdctl output"
    );

    Snapshot { monitors, mode }
}

/// Whether a connector id or description denotes a built-in panel.
///
/// Either one matching is enough, so monitors without a description are
/// still recognised by connector family (`eDP`, `LVDS`, `DSI`).
pub fn is_builtin(id: &str, description: &str) -> bool {
    BUILTIN_DESCRIPTION.is_match(description) || BUILTIN_CONNECTOR.is_match(id)
}

/// Parse the entries of the `Monitors:` section.
///
/// Lines that are not `Monitor <id> [(<description>)]` are skipped. When an
/// id repeats, the first entry wins.
pub fn parse_monitors(block: &[&str]) -> Vec<Monitor> {
    let mut seen = HashSet::new();
    let mut monitors = Vec::new();

    for line in block {
        let Some(caps) = MONITOR_ENTRY.captures(strip_tree(line)) else {
            continue;
        };
        let id = caps[1].trim();
        if !seen.insert(id.to_string()) {
            continue;
        }
        let description = caps.get(2).map_or("", |m| m.as_str().trim());
        monitors.push(Monitor::new(id, description, is_builtin(id, description)));
    }

    monitors
}

/// Parse the entries of the `Logical monitors:` section.
///
/// A group is flushed when the next `Logical monitor` entry starts or the
/// block ends. Members are built-in when they name a built-in entry of
/// `monitors`.
pub fn parse_logical_groups(block: &[&str], monitors: &[Monitor]) -> Vec<LogicalGroup> {
    let mut groups = Vec::new();
    let mut current: Option<LogicalGroup> = None;
    let mut in_members = false;

    for line in block {
        let entry = strip_tree(line);

        if LOGICAL_ENTRY.is_match(entry) {
            groups.extend(current.take());
            current = Some(LogicalGroup::default());
            in_members = false;
            continue;
        }

        let Some(group) = current.as_mut() else {
            continue;
        };

        if PRIMARY_YES.is_match(entry) {
            group.primary = true;
        } else if MEMBERS_HEADER.is_match(entry) {
            in_members = true;
        } else if in_members {
            if let Some(caps) = MEMBER_ENTRY.captures(entry) {
                let id = &caps[1];
                if monitors.iter().any(|m| m.builtin && m.id == id) {
                    group.builtin = true;
                }
                group.monitor_ids.push(id.to_string());
            }
        }
    }

    groups.extend(current);
    groups
}

/// Classify logical groups into a [`Mode`].
///
/// - no groups: `Unknown`
/// - one group: `Builtin` or `External`
/// - several: the first primary group decides between `JoinBuiltin` and
///   `JoinExternal`; with no primary group, `Unknown`
pub fn classify(groups: &[LogicalGroup]) -> Mode {
    match groups {
        [] => Mode::Unknown,
        [only] if only.builtin => Mode::Builtin,
        [_] => Mode::External,
        _ => match groups.iter().find(|g| g.primary) {
            Some(primary) if primary.builtin => Mode::JoinBuiltin,
            Some(_) => Mode::JoinExternal,
            None => Mode::Unknown,
        },
    }
}

/// Lines following `header` (exact, at column 0) up to the next blank line.
fn section<'a>(output: &'a str, header: &str) -> Option<Vec<&'a str>> {
    let mut lines = output.lines();
    lines.by_ref().find(|line| line.trim_end() == header)?;
    Some(lines.take_while(|line| !line.trim().is_empty()).collect())
}

/// Strip leading box-drawing glyphs and whitespace.
fn strip_tree(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_whitespace() || ('\u{2500}'..='\u{257F}').contains(&c))
        .trim_end()
}
