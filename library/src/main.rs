//! Unified Hearth launcher
//!
//! # Commands
//!
//! - `hearth platforms` - List registered platforms and their capabilities
//! - `hearth resolve <name>` - Show the canonical id for a platform name
//! - `hearth load <platform> --file NAME=SHA1 ...` - Print configuration slots
//! - `hearth launch <platform> --file NAME=SHA1 ...` - Load media and start the emulator
//!
//! # Example
//!
//! ```bash
//! hearth load c64 --file game.tap=3f2a... --file game2.d64=9bc1... --model c64
//! hearth launch atari-st --file disk.st=77aa...
//! ```

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hearth_core::{LaunchContext, settings};
use hearth_library::commands::{self, LaunchArgs, MediaArgs};

/// Hearth - multi-platform emulator launcher
#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Multi-platform emulator launcher")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered platforms and their capabilities
    Platforms,

    /// Show the canonical id and display name for a platform name
    Resolve {
        /// Platform name in any known spelling
        name: String,
    },

    /// Run the platform loader and print the resulting configuration
    Load(MediaArgs),

    /// Load media and start the platform's emulator
    Launch(LaunchArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Platforms => commands::list_platforms(&mut out),
        Commands::Resolve { name } => commands::resolve(&name, &mut out),
        Commands::Load(args) => {
            let ctx = LaunchContext::new(settings::load());
            commands::load(&args, &ctx, &mut out)
        }
        Commands::Launch(args) => {
            let ctx = LaunchContext::new(settings::load());
            tracing::debug!("Content store: {}", ctx.settings.content.store.display());
            commands::launch(&args, &ctx, &mut out)
        }
    }
}
