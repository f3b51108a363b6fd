//! Command-line inspector for modmeta plugins.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modmeta_host::PluginLocator;

/// Inspect plugin metadata without initializing the plugin.
#[derive(Parser, Debug)]
#[command(name = "modmeta")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Show the descriptor of one module.
    Info {
        /// Path to the module.
        path: PathBuf,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List plugins found in a directory.
    List {
        /// Directory to scan.
        dir: PathBuf,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Info { path, json } => {
            let locator = PluginLocator::new();
            let guard = locator
                .locate(&path)
                .with_context(|| format!("no plugin descriptor in {}", path.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(guard.descriptor())?);
            } else {
                println!("name:        {}", guard.name());
                println!("author:      {}", guard.author());
                println!("description: {}", guard.description());
                println!("version:     {}", guard.version());
            }

            guard.release();
        }
        Command::List { dir, json } => {
            let mut locator = PluginLocator::new();
            locator.add_search_path(&dir);
            let found = locator.discover();

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                println!("no plugins found in {}", dir.display());
            } else {
                for plugin in &found {
                    println!("{}  {}", plugin.descriptor, plugin.path.display());
                }
            }
        }
    }

    Ok(())
}
