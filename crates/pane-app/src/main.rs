// ABOUTME: Command line entry point.
// ABOUTME: Loads a pane group, applies one operation, and prints the layout.

mod group_file;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pane_core::{Config, LayoutStore, PaneId};
use pane_layout::{resolve_pane_size, PaneGroup, ResizeKey};

use group_file::GroupFile;

#[derive(Debug, Parser)]
#[command(name = "splitpane", version, about = "Resize and inspect pane group layouts")]
struct Cli {
    /// Config file (defaults to ~/.config/splitpane/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restore the stored layout for this group first, and store the result
    #[arg(long)]
    persist: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// TOML file describing the pane group
    group: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current layout
    Show,
    /// Resolve a requested size for the pane at an index
    Resolve {
        #[arg(long)]
        index: usize,
        #[arg(long, allow_negative_numbers = true)]
        size: f64,
    },
    /// Print aria-valuemin/max/now for a resize handle
    Aria {
        #[arg(long)]
        handle: usize,
    },
    /// Resize a pane toward a size
    Resize {
        #[arg(long)]
        pane: u64,
        #[arg(long, allow_negative_numbers = true)]
        size: f64,
    },
    /// Collapse a collapsible pane
    Collapse {
        #[arg(long)]
        pane: u64,
    },
    /// Expand a collapsed pane
    Expand {
        #[arg(long)]
        pane: u64,
    },
    /// Drag a resize handle by a percentage
    Drag {
        #[arg(long)]
        handle: usize,
        #[arg(long, allow_negative_numbers = true)]
        delta: f64,
    },
    /// Press a key on a focused resize handle
    Key {
        #[arg(long)]
        handle: usize,
        #[arg(long, value_enum)]
        key: KeyArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeyArg {
    Increase,
    Decrease,
    Home,
    End,
}

impl From<KeyArg> for ResizeKey {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Increase => ResizeKey::Increase,
            KeyArg::Decrease => ResizeKey::Decrease,
            KeyArg::Home => ResizeKey::Home,
            KeyArg::End => ResizeKey::End,
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn print_layout(group: &PaneGroup) {
    for (id, size) in group.panes().iter().zip(group.layout()) {
        println!("{}\t{:.*}", id, group.precision() as usize, size);
    }
}

/// Run one command, returning whether the layout changed
fn run(command: Command, group: &mut PaneGroup) -> Result<bool> {
    let changed = match command {
        Command::Show => false,
        Command::Resolve { index, size } => {
            if index >= group.constraints().len() {
                bail!("No pane at index {} ({} panes)", index, group.constraints().len());
            }
            if !size.is_finite() {
                bail!("Size must be a finite number, got {}", size);
            }
            let resolved = resolve_pane_size(group.constraints(), index, size, group.precision());
            println!("{}", resolved);
            return Ok(false);
        }
        Command::Aria { handle } => {
            let aria = group.aria_values(handle)?;
            println!("aria-valuemin={}", aria.value_min);
            println!("aria-valuemax={}", aria.value_max);
            println!("aria-valuenow={}", aria.value_now);
            return Ok(false);
        }
        Command::Resize { pane, size } => group.resize_pane(PaneId(pane), size)?,
        Command::Collapse { pane } => group.collapse_pane(PaneId(pane))?,
        Command::Expand { pane } => group.expand_pane(PaneId(pane))?,
        Command::Drag { handle, delta } => group.drag_handle(handle, delta)?,
        Command::Key { handle, key } => group.keyboard_resize(handle, key.into())?,
    };

    if !changed {
        tracing::info!("Layout unchanged");
    }
    print_layout(group);
    Ok(changed)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let file = GroupFile::load(&cli.group)?;
    let mut group = file.build(&config)?;
    tracing::debug!(id = %file.id, panes = group.panes().len(), "Loaded pane group");

    let persist = cli.persist || config.persist_layouts;
    let mut store = if persist {
        LayoutStore::load_or_default()
    } else {
        LayoutStore::new()
    };

    if let Some(saved) = store.get(&file.id).filter(|_| persist) {
        match group.restore(saved) {
            Ok(()) => tracing::info!("Restored stored layout for {}", file.id),
            Err(e) => tracing::warn!("Ignoring stored layout for {}: {}", file.id, e),
        }
    }

    let changed = run(cli.command, &mut group)?;

    if persist && changed {
        store.insert(file.id.clone(), group.snapshot());
        let path = store.save_to_default()?;
        tracing::info!("Stored layout for {} in {}", file.id, path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pane_core::PaneConstraints;

    fn sidebar() -> PaneGroup {
        let panes = [
            (PaneId(1), PaneConstraints::new(10.0, 60.0)),
            (PaneId(2), PaneConstraints::default()),
        ];
        PaneGroup::new(panes, &Config::default()).unwrap()
    }

    #[test]
    fn negative_numbers_parse_for_every_size_argument() {
        for args in [
            ["splitpane", "g.toml", "resolve", "--index", "0", "--size", "-5"],
            ["splitpane", "g.toml", "resize", "--pane", "1", "--size", "-5"],
            ["splitpane", "g.toml", "drag", "--handle", "0", "--delta", "-5"],
        ] {
            assert!(Cli::try_parse_from(args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn resolve_rejects_non_finite_size() {
        let mut group = sidebar();
        let command = Command::Resolve {
            index: 0,
            size: f64::NAN,
        };
        assert!(run(command, &mut group).is_err());
    }

    #[test]
    fn resize_reports_non_finite_size() {
        let mut group = sidebar();
        let command = Command::Resize {
            pane: 1,
            size: f64::INFINITY,
        };
        assert!(run(command, &mut group).is_err());
        assert_eq!(group.layout(), &[50.0, 50.0]);
    }

    #[test]
    fn drag_changes_layout() {
        let mut group = sidebar();
        let command = Command::Drag {
            handle: 0,
            delta: -10.0,
        };
        assert!(run(command, &mut group).unwrap());
        assert_eq!(group.layout(), &[40.0, 60.0]);
    }
}
