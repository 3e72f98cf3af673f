//! Gdswitch CLI entry point.
//!
//! This binary provides the `gdswitch` command for inspecting and switching
//! GNOME display modes through `gdctl`.

use clap::Parser;
use gdswitch::cli::Cli;
use gdswitch::config::{JoinPosition, Settings};
use gdswitch::error::Result;
use gdswitch::gdctl::{command_line, Gdctl};
use gdswitch::model::Mode;
use gdswitch::{loader, menu, switcher};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = loader::load_default_settings();

    if let Some(join) = cli.join {
        save_join_position(&mut settings, join)?;
    }

    let tool = Gdctl::new(settings.gdctl_program());

    if let Some(mode) = cli.mode {
        return run_switch(&tool, mode, settings.join_position, cli.dry_run);
    }

    if cli.menu {
        let current = switcher::detect(&tool)?.mode;
        print_menu(current, settings.join_position);
        return Ok(());
    }

    // Status is the default when only --join (or nothing) was given.
    if cli.status || cli.join.is_none() {
        print_status(&tool)?;
    }

    Ok(())
}

/// Persist a new join position.
fn save_join_position(settings: &mut Settings, join: JoinPosition) -> Result<()> {
    if settings.join_position == join {
        return Ok(());
    }
    settings.join_position = join;
    let path = loader::save_default_settings(settings)?;
    println!("Join position set to {} ({})", join, path.display());
    Ok(())
}

/// Switch modes, or print the planned command for a dry run.
fn run_switch(tool: &Gdctl, mode: Mode, join: JoinPosition, dry_run: bool) -> Result<()> {
    if dry_run {
        let args = switcher::preview(tool, mode, join)?;
        let mut full = vec!["set"];
        full.extend(args.iter().map(String::as_str));
        println!("{}", command_line(tool.program(), &full));
        return Ok(());
    }

    let switched = switcher::apply(tool, mode, join)?;
    if switched.mode == mode {
        println!("Switched to {}.", mode);
    } else {
        warn!(requested = %mode, detected = %switched.mode, "gdctl accepted the layout but it was not detected afterwards");
        println!("Applied {}, but gdctl now reports {}.", mode, switched.mode);
    }
    Ok(())
}

/// Print the current mode and connected monitors.
fn print_status(tool: &Gdctl) -> Result<()> {
    let snapshot = switcher::detect(tool)?;
    println!("Mode: {}", snapshot.mode);

    if snapshot.monitors.is_empty() {
        println!("No monitors detected");
        return Ok(());
    }

    println!("\nMonitors:");
    for monitor in &snapshot.monitors {
        let kind = if monitor.builtin { "built-in" } else { "external" };
        if monitor.description.is_empty() {
            println!("  {} [{}]", monitor.id, kind);
        } else {
            println!("  {} ({}) [{}]", monitor.id, monitor.description, kind);
        }
    }
    Ok(())
}

/// Print the menu with check marks.
fn print_menu(current: Mode, join: JoinPosition) {
    for item in menu::render(current, join) {
        let mark = if item.checked { "✓" } else { " " };
        println!("{} {}", mark, item.label);
    }
}
