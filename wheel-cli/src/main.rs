//! Cipher Wheel CLI
//!
//! Shift cipher text transform and wheel geometry from the command line.

mod config;
mod state;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wheel_cipher::AlphabetMapping;
use wheel_core::{Mode, Shift};
use wheel_geometry::{WheelGeometry, WheelLayout};

use config::{Settings, SettingsStore};
use state::WheelState;

#[derive(Parser)]
#[command(name = "wheel")]
#[command(about = "Cipher wheel - Caesar shift cipher with two-ring geometry")]
#[command(version)]
struct Cli {
    /// Settings file (default: ~/.config/cipher-wheel/config.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text
    Encrypt {
        /// Plaintext (default: text from settings)
        text: Option<String>,

        /// Shift amount, any integer; non-numeric means 0
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,
    },

    /// Decrypt text
    Decrypt {
        /// Ciphertext (default: text from settings)
        text: Option<String>,

        /// Shift amount, any integer; non-numeric means 0
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,
    },

    /// Show the original vs shifted alphabet
    Mapping {
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,

        /// encrypt or decrypt
        #[arg(short, long)]
        mode: Option<Mode>,
    },

    /// Show letter positions on both rings
    Layout {
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,

        #[arg(short, long)]
        mode: Option<Mode>,

        /// Include input/output text as well (uses settings text)
        #[arg(long)]
        full: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the 26 outer-to-inner connector lines
    Connectors {
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,

        #[arg(short, long)]
        mode: Option<Mode>,

        #[arg(long)]
        json: bool,
    },

    /// Try every shift against a ciphertext
    Bruteforce {
        /// Ciphertext
        text: String,
    },

    /// Settings file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print effective settings
    Show,

    /// Print settings file location
    Path,

    /// Write default settings
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = match &cli.config {
        Some(path) => SettingsStore::at_path(path),
        None => SettingsStore::default_location(),
    };

    match cli.command {
        Commands::Config { command } => cmd_config(&store, command),
        command => {
            let settings = store.load()?;
            run(command, &settings)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "wheel_cli={level},wheel_cipher={level},wheel_geometry={level},wheel_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Shift from the command line, or the configured one
fn shift_or(input: Option<&str>, settings: &Settings) -> Shift {
    input.map(Shift::parse).unwrap_or(settings.shift)
}

fn run(command: Commands, settings: &Settings) -> Result<()> {
    let geometry = WheelGeometry::new(settings.wheel)?;

    match command {
        Commands::Encrypt { text, shift } => {
            cmd_transform(text, shift, Mode::Encrypt, settings);
            Ok(())
        }

        Commands::Decrypt { text, shift } => {
            cmd_transform(text, shift, Mode::Decrypt, settings);
            Ok(())
        }

        Commands::Mapping { shift, mode } => {
            let shift = shift_or(shift.as_deref(), settings);
            let mode = mode.unwrap_or(settings.mode);
            let mapping = AlphabetMapping::new(shift, mode);

            println!("\n  ALPHABET MAPPING (shift {}, {})", shift, mode);
            println!("  ==============================\n");
            for line in mapping.to_string().lines() {
                println!("  {}", line);
            }
            println!();
            println!("  {}, ..., {}", mapping.examples(3).join(", "), mapping.examples(26)[25]);
            Ok(())
        }

        Commands::Layout { shift, mode, full, json } => {
            let mut state = WheelState::from_settings(settings);
            if let Some(input) = shift.as_deref() {
                state.set_shift_input(input);
            }
            if let Some(mode) = mode {
                state.set_mode(mode);
            }

            if full {
                let snapshot = state.snapshot(&geometry);
                if json {
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                } else {
                    println!("\n  Input:  {}", snapshot.input);
                    println!("  Output: {}", snapshot.output);
                    print_layout(&snapshot.layout);
                }
                return Ok(());
            }

            let layout = WheelLayout::compute(&geometry, state.shift, state.mode);
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                print_layout(&layout);
            }
            Ok(())
        }

        Commands::Connectors { shift, mode, json } => {
            let shift = shift_or(shift.as_deref(), settings);
            let mode = mode.unwrap_or(settings.mode);
            let connectors = geometry.produce_connectors(shift, mode);

            if json {
                println!("{}", serde_json::to_string_pretty(&connectors)?);
                return Ok(());
            }

            println!("\n  CONNECTORS (shift {}, {})", shift, mode);
            println!("  =========================\n");
            for c in &connectors {
                println!(
                    "  {} -> {}  ({:8.3}, {:8.3}) -> ({:8.3}, {:8.3})",
                    c.outer_index.letter(),
                    c.inner_index.letter(),
                    c.from.x,
                    c.from.y,
                    c.to.x,
                    c.to.y,
                );
            }
            Ok(())
        }

        Commands::Bruteforce { text } => {
            println!("\n  CAESAR BRUTEFORCE");
            println!("  ==================\n");
            println!("  Ciphertext: {}\n", text);

            for (shift, decrypted) in wheel_cipher::bruteforce(&text) {
                println!("  [{:2}] {}", shift, decrypted);
            }
            Ok(())
        }

        Commands::Config { .. } => bail!("config commands do not need a loaded wheel"),
    }
}

fn cmd_transform(text: Option<String>, shift: Option<String>, mode: Mode, settings: &Settings) {
    let mut state = WheelState::from_settings(settings);
    state.set_mode(mode);
    if let Some(text) = text {
        state.set_text(text);
    }
    if let Some(input) = shift.as_deref() {
        state.set_shift_input(input);
    }

    tracing::info!(shift = %state.shift, %mode, "transforming");
    println!("{}", state.output());
}

fn print_layout(layout: &WheelLayout) {
    println!("\n  WHEEL LAYOUT (shift {}, {})", layout.center_label(), layout.mode);
    println!("  ==========================\n");
    println!(
        "  center ({}, {})  outer r={}  inner r={}\n",
        layout.center.x, layout.center.y, layout.outer_radius, layout.inner_radius
    );
    println!("  IDX  OUTER                    INNER");
    for (outer, inner) in layout.outer.iter().zip(&layout.inner) {
        println!(
            "  {:>3}  {} ({:8.3}, {:8.3})   {} ({:8.3}, {:8.3})",
            outer.index,
            outer.letter,
            outer.position.x,
            outer.position.y,
            inner.letter,
            inner.position.x,
            inner.position.y,
        );
    }
}

fn cmd_config(store: &SettingsStore, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let settings = store.load()?;
            print!("{}", serde_yaml::to_string(&settings)?);
            Ok(())
        }

        ConfigCommands::Path => {
            println!("{}", store.path().display());
            Ok(())
        }

        ConfigCommands::Init { force } => {
            if store.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    store.path().display()
                );
            }
            store.save(&Settings::default())?;
            println!("  Wrote {}", store.path().display());
            Ok(())
        }
    }
}
