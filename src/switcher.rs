//! Mode detection and switching.
//!
//! Ties the pieces together: read status from a [`DisplayTool`], parse it,
//! plan the `set` arguments, apply them, and read status again to confirm.

use crate::config::JoinPosition;
use crate::error::{Result, SwitchError};
use crate::gdctl::DisplayTool;
use crate::model::Mode;
use crate::parser::{self, Snapshot};
use crate::planner;
use tracing::{info, warn};

/// Outcome of a successful switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switched {
    /// Arguments passed after `set`.
    pub args: Vec<String>,
    /// Mode parsed from status after applying.
    pub mode: Mode,
}

/// Read and parse the current display status.
pub fn detect(tool: &dyn DisplayTool) -> Result<Snapshot> {
    let output = tool.show()?;
    Ok(parser::parse(&output))
}

/// Plan the arguments for switching to `mode` without applying them.
///
/// # Errors
///
/// - [`SwitchError::ToolError`] if status cannot be read
/// - [`SwitchError::CannotApply`] if no monitor of the required kind is connected
pub fn preview(tool: &dyn DisplayTool, mode: Mode, join: JoinPosition) -> Result<Vec<String>> {
    let snapshot = detect(tool)?;
    planner::plan(mode, &snapshot.monitors, join).ok_or(SwitchError::CannotApply(mode))
}

/// Switch to `mode`, then re-read status to report the resulting mode.
///
/// `gdctl set` is only invoked when a plan exists.
pub fn apply(tool: &dyn DisplayTool, mode: Mode, join: JoinPosition) -> Result<Switched> {
    let args = preview(tool, mode, join)?;
    tool.set(&args)?;

    let confirmed = detect(tool)?.mode;
    if confirmed == mode {
        info!(%mode, "Switched display mode");
    } else {
        warn!(requested = %mode, detected = %confirmed, "Display mode differs after switching");
    }

    Ok(Switched {
        args,
        mode: confirmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const BUILTIN_ONLY: &str = "\
Monitors:
├──Monitor eDP-1 (Built-in display)
└──Monitor HDMI-1 (LG HDR 4K)

Logical monitors:
└──Logical monitor #1
    ├──Primary: yes
    └──Monitors: (1)
        └──eDP-1 (Built-in display)
";

    const JOINED_EXTERNAL: &str = "\
Monitors:
├──Monitor eDP-1 (Built-in display)
└──Monitor HDMI-1 (LG HDR 4K)

Logical monitors:
├──Logical monitor #1
│   └──Monitors: (1)
│       └──eDP-1 (Built-in display)
└──Logical monitor #2
    ├──Primary: yes
    └──Monitors: (1)
        └──HDMI-1 (LG HDR 4K)
";

    /// Replays status snapshots in order and records `set` calls.
    struct FakeTool {
        shows: RefCell<Vec<&'static str>>,
        sets: RefCell<Vec<Vec<String>>>,
        fail_set: bool,
    }

    impl FakeTool {
        fn new(shows: &[&'static str]) -> Self {
            Self {
                shows: RefCell::new(shows.iter().rev().copied().collect()),
                sets: RefCell::new(Vec::new()),
                fail_set: false,
            }
        }
    }

    impl DisplayTool for FakeTool {
        fn show(&self) -> Result<String> {
            self.shows
                .borrow_mut()
                .pop()
                .map(String::from)
                .ok_or_else(|| SwitchError::ToolError {
                    command: "gdctl show --verbose".into(),
                    reason: "exit status: 1".into(),
                })
        }

        fn set(&self, args: &[String]) -> Result<()> {
            self.sets.borrow_mut().push(args.to_vec());
            if self.fail_set {
                return Err(SwitchError::ToolError {
                    command: "gdctl set".into(),
                    reason: "exit status: 1".into(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_detect() {
        let tool = FakeTool::new(&[JOINED_EXTERNAL]);
        let snapshot = detect(&tool).unwrap();
        assert_eq!(snapshot.mode, Mode::JoinExternal);
        assert_eq!(snapshot.monitors.len(), 2);
    }

    #[test]
    fn test_apply_sets_and_confirms() {
        let tool = FakeTool::new(&[BUILTIN_ONLY, JOINED_EXTERNAL]);
        let switched = apply(&tool, Mode::JoinExternal, JoinPosition::Left).unwrap();

        assert_eq!(switched.mode, Mode::JoinExternal);
        assert_eq!(tool.sets.borrow().len(), 1);
        assert_eq!(tool.sets.borrow()[0], switched.args);
        assert!(switched.args.contains(&"--left-of".to_string()));
    }

    #[test]
    fn test_apply_reports_mode_actually_detected() {
        let tool = FakeTool::new(&[BUILTIN_ONLY, BUILTIN_ONLY]);
        let switched = apply(&tool, Mode::External, JoinPosition::Right).unwrap();
        assert_eq!(switched.mode, Mode::Builtin);
    }

    #[test]
    fn test_cannot_apply_skips_set() {
        let only_laptop = "Monitors:\n└──Monitor eDP-1\n";
        let tool = FakeTool::new(&[only_laptop]);
        let err = apply(&tool, Mode::External, JoinPosition::Right).unwrap_err();

        assert!(matches!(err, SwitchError::CannotApply(Mode::External)));
        assert_eq!(err.to_string(), "Cannot apply mode 'external'");
        assert!(tool.sets.borrow().is_empty());
    }

    #[test]
    fn test_set_failure_propagates() {
        let mut tool = FakeTool::new(&[BUILTIN_ONLY]);
        tool.fail_set = true;
        let err = apply(&tool, Mode::JoinBuiltin, JoinPosition::Right).unwrap_err();
        assert!(matches!(err, SwitchError::ToolError { .. }));
    }

    #[test]
    fn test_show_failure_propagates() {
        let tool = FakeTool::new(&[]);
        assert!(detect(&tool).is_err());
        assert!(tool.sets.borrow().is_empty());
    }

    #[test]
    fn test_preview_does_not_set() {
        let tool = FakeTool::new(&[BUILTIN_ONLY]);
        let args = preview(&tool, Mode::Builtin, JoinPosition::Right).unwrap();
        assert_eq!(
            args,
            vec!["--logical-monitor", "--monitor", "eDP-1", "--primary"]
        );
        assert!(tool.sets.borrow().is_empty());
    }
}
