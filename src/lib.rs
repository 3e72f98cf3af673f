//! # Gdswitch
//!
//! A display mode switcher for GNOME, driven by `gdctl`.
//!
//! Gdswitch reads the tree-drawn output of `gdctl show`, works out which
//! arrangement is active, and builds the `gdctl set` arguments to move to
//! another one.
//!
//! ## Modes
//!
//! - **builtin**: only the laptop panel is on
//! - **external**: only external monitors are on
//! - **join-builtin**: all monitors extend the desktop, laptop panel primary
//! - **join-external**: all monitors extend the desktop, an external primary
//!
//! In join modes monitors are chained in order (built-in first), each placed
//! left of, right of, above or below the previous one according to the saved
//! join position.
//!
//! ## Quick Example
//!
//! ```
//! use gdswitch::config::JoinPosition;
//! use gdswitch::model::Mode;
//! use gdswitch::{parser, planner};
//!
//! let output = "\
//! Monitors:
//! ├──Monitor eDP-1 (Built-in display)
//! └──Monitor DP-2 (DELL U2720Q)
//!
//! Logical monitors:
//! └──Logical monitor #1
//!     ├──Primary: yes
//!     └──Monitors: (1)
//!         └──eDP-1 (Built-in display)
//! ";
//!
//! let snapshot = parser::parse(output);
//! assert_eq!(snapshot.mode, Mode::Builtin);
//!
//! let args = planner::plan(Mode::External, &snapshot.monitors, JoinPosition::Right).unwrap();
//! assert_eq!(args, ["--logical-monitor", "--monitor", "DP-2", "--primary"]);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`model`]: Monitor, logical monitor and mode types
//! - [`parser`]: `gdctl show` parsing and mode classification
//! - [`planner`]: `gdctl set` argument planning
//! - [`gdctl`]: Process invocation behind the [`gdctl::DisplayTool`] trait
//! - [`switcher`]: Detect / preview / apply workflow
//! - [`menu`]: Declarative menu rows for front ends
//! - [`config`]: Settings types and join position
//! - [`loader`]: Settings file discovery, loading and saving
//! - [`cli`]: Command-line argument parsing with clap
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod gdctl;
pub mod loader;
pub mod menu;
pub mod model;
pub mod parser;
pub mod planner;
pub mod switcher;

pub use config::{JoinPosition, Settings};
pub use error::{Result, SwitchError};
pub use model::{LogicalGroup, Mode, Monitor};
pub use parser::Snapshot;
