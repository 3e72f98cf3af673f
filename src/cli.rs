//! Command-line interface for gdswitch.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::config::JoinPosition;
use crate::model::Mode;
use clap::Parser;

/// Command-line arguments for gdswitch.
///
/// # Examples
///
/// ```bash
/// # Show the current mode and connected monitors
/// gdswitch
///
/// # Extend the desktop onto an external monitor placed left of the laptop
/// gdswitch -m join-builtin -j left
///
/// # Print the gdctl command for external-only without running it
/// gdswitch -m external --dry-run
/// ```
#[derive(Parser, Debug)]
#[command(name = "gdswitch")]
#[command(version)]
#[command(about = "Switch GNOME display modes with gdctl")]
#[command(long_about = "Gdswitch reads the current monitor layout from `gdctl show` and \
    switches between built-in only, external only, and joined layouts.\n\n\
    The join position is remembered between runs.")]
pub struct Cli {
    /// Display mode to switch to.
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Where external monitors go when joining displays (saved).
    #[arg(short, long, value_enum, value_name = "POSITION")]
    pub join: Option<JoinPosition>,

    /// Print the gdctl command instead of running it.
    #[arg(short = 'n', long, requires = "mode")]
    pub dry_run: bool,

    /// Print the current mode and monitors (default action).
    #[arg(short, long)]
    pub status: bool,

    /// Print the mode menu with the current selections checked.
    #[arg(long)]
    pub menu: bool,
}
