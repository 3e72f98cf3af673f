//! Menu model.
//!
//! [`render`] maps the current state to plain rows; a front end only draws
//! them and sends the row's [`MenuAction`] back when it is picked.

use crate::config::JoinPosition;
use crate::model::Mode;

/// What selecting a row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Switch to a display mode.
    SelectMode(Mode),
    /// Persist a new join position.
    SetJoinPosition(JoinPosition),
}

/// One menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub checked: bool,
    pub action: MenuAction,
}

/// Build the menu for the current mode and join position.
///
/// Mode rows come first; none is checked when the mode is
/// [`Mode::Unknown`]. Join position rows follow, with the active one checked.
pub fn render(current: Mode, join: JoinPosition) -> Vec<MenuItem> {
    let modes = Mode::SELECTABLE.into_iter().map(|mode| MenuItem {
        label: mode.label().to_string(),
        checked: mode == current,
        action: MenuAction::SelectMode(mode),
    });

    let positions = JoinPosition::ALL.into_iter().map(|position| MenuItem {
        label: format!("Join position: {}", position.label()),
        checked: position == join,
        action: MenuAction::SetJoinPosition(position),
    });

    modes.chain(positions).collect()
}
