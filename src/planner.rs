//! `gdctl set` argument planning.
//!
//! Turns a target [`Mode`] and the detected monitors into the arguments that
//! follow `gdctl set`. Each monitor gets its own logical monitor; in a join
//! mode every monitor after the first is placed relative to the one before
//! it, which chains them in list order.
//!
//! # Example
//!
//! ```
//! use gdswitch::config::JoinPosition;
//! use gdswitch::model::{Mode, Monitor};
//! use gdswitch::planner::plan;
//!
//! let monitors = vec![
//!     Monitor::new("eDP-1", "Built-in display", true),
//!     Monitor::new("HDMI-1", "", false),
//! ];
//! let args = plan(Mode::JoinBuiltin, &monitors, JoinPosition::Right).unwrap();
//! assert_eq!(
//!     args.join(" "),
//!     "--logical-monitor --monitor eDP-1 --primary \
//!      --logical-monitor --monitor HDMI-1 --right-of eDP-1"
//! );
//! ```

use crate::config::JoinPosition;
use crate::model::{Mode, Monitor};

/// Build `gdctl set` arguments for switching to `mode`.
///
/// | mode            | monitors used         | primary            |
/// |-----------------|-----------------------|--------------------|
/// | `Builtin`       | built-in              | first built-in     |
/// | `External`      | external              | first external     |
/// | `JoinBuiltin`   | built-in then external| first built-in     |
/// | `JoinExternal`  | built-in then external| first external     |
///
/// Returns `None` when the primary's kind has no connected monitor, and
/// always for [`Mode::Unknown`].
pub fn plan(mode: Mode, monitors: &[Monitor], join: JoinPosition) -> Option<Vec<String>> {
    let builtin = ids_where(monitors, true);
    let external = ids_where(monitors, false);

    let (ids, primary) = match mode {
        Mode::Builtin => (builtin.clone(), *builtin.first()?),
        Mode::External => (external.clone(), *external.first()?),
        Mode::JoinBuiltin => ([&builtin[..], &external[..]].concat(), *builtin.first()?),
        Mode::JoinExternal => ([&builtin[..], &external[..]].concat(), *external.first()?),
        Mode::Unknown => return None,
    };

    let mut args = Vec::new();
    let mut prev: Option<&str> = None;

    for id in ids {
        args.extend(["--logical-monitor", "--monitor", id].map(String::from));
        if mode.is_join() {
            if let Some(prev) = prev {
                args.extend([join.to_gdctl_flag(), prev].map(String::from));
            }
        }
        if id == primary {
            args.push("--primary".to_string());
        }
        prev = Some(id);
    }

    Some(args)
}

/// Ids of monitors whose built-in flag equals `builtin`, in listed order.
fn ids_where(monitors: &[Monitor], builtin: bool) -> Vec<&str> {
    monitors
        .iter()
        .filter(|m| m.builtin == builtin)
        .map(|m| m.id.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop_and_hdmi() -> Vec<Monitor> {
        vec![
            Monitor::new("eDP-1", "Built-in display", true),
            Monitor::new("HDMI-1", "", false),
        ]
    }

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_join_external_left() {
        let planned = plan(Mode::JoinExternal, &laptop_and_hdmi(), JoinPosition::Left);
        assert_eq!(
            planned,
            Some(args(
                "--logical-monitor --monitor eDP-1 \
                 --logical-monitor --monitor HDMI-1 --left-of eDP-1 --primary"
            ))
        );
    }

    #[test]
    fn test_builtin_only() {
        let monitors = vec![Monitor::new("eDP-1", "", true)];
        let planned = plan(Mode::Builtin, &monitors, JoinPosition::Right);
        assert_eq!(
            planned,
            Some(args("--logical-monitor --monitor eDP-1 --primary"))
        );
    }

    #[test]
    fn test_external_uses_external_monitors_only() {
        let planned = plan(Mode::External, &laptop_and_hdmi(), JoinPosition::Below);
        assert_eq!(
            planned,
            Some(args("--logical-monitor --monitor HDMI-1 --primary"))
        );
    }

    #[test]
    fn test_non_join_never_places() {
        let monitors = vec![
            Monitor::new("DP-1", "", false),
            Monitor::new("DP-2", "", false),
        ];
        let planned = plan(Mode::External, &monitors, JoinPosition::Left).unwrap();
        assert!(!planned.iter().any(|a| a == "--left-of"));
        assert_eq!(
            planned,
            args("--logical-monitor --monitor DP-1 --primary --logical-monitor --monitor DP-2")
        );
    }

    #[test]
    fn test_join_chains_builtin_before_external() {
        let monitors = vec![
            Monitor::new("DP-1", "", false),
            Monitor::new("eDP-1", "", true),
            Monitor::new("DP-2", "", false),
        ];
        let planned = plan(Mode::JoinBuiltin, &monitors, JoinPosition::Above);
        assert_eq!(
            planned,
            Some(args(
                "--logical-monitor --monitor eDP-1 --primary \
                 --logical-monitor --monitor DP-1 --above eDP-1 \
                 --logical-monitor --monitor DP-2 --above DP-1"
            ))
        );
    }

    #[test]
    fn test_missing_partition_returns_none() {
        let externals = vec![Monitor::new("DP-1", "", false)];
        let builtins = vec![Monitor::new("eDP-1", "", true)];

        assert_eq!(plan(Mode::Builtin, &externals, JoinPosition::Right), None);
        assert_eq!(plan(Mode::JoinBuiltin, &externals, JoinPosition::Right), None);
        assert_eq!(plan(Mode::External, &builtins, JoinPosition::Right), None);
        assert_eq!(plan(Mode::JoinExternal, &builtins, JoinPosition::Right), None);
        assert_eq!(plan(Mode::Builtin, &[], JoinPosition::Right), None);
    }

    #[test]
    fn test_join_with_single_kind_still_plans() {
        let builtins = vec![Monitor::new("eDP-1", "", true)];
        assert_eq!(
            plan(Mode::JoinBuiltin, &builtins, JoinPosition::Right),
            Some(args("--logical-monitor --monitor eDP-1 --primary"))
        );
    }

    #[test]
    fn test_unknown_mode_never_plans() {
        assert_eq!(plan(Mode::Unknown, &laptop_and_hdmi(), JoinPosition::Right), None);
    }

    #[test]
    fn test_unrecognised_position_places_right() {
        let join = JoinPosition::from_name("northwest");
        let planned = plan(Mode::JoinBuiltin, &laptop_and_hdmi(), join).unwrap();
        assert_eq!(&planned[planned.len() - 2..], &args("--right-of eDP-1")[..]);
    }
}
