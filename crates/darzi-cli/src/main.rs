//! darzi CLI - garment pattern drafting
//!
//! Drafts a garment from a TOML measurement file, writes the SVG (or
//! an HTML wrapper for printing), and manages the saved-draft store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use darzi::{draft, Exporter, Garment, HtmlExporter, Measurements, RenderOptions};
use darzi_draft::{DraftStore, JsonFileStore};

#[derive(Parser)]
#[command(name = "darzi")]
#[command(about = "Garment pattern drafting from body measurements", long_about = None)]
struct Cli {
    /// Directory of the draft store
    #[arg(long, default_value = "drafts", global = true)]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a garment and write its SVG
    Draft {
        /// Garment to draft (kurta, izar, pehran, rida, saya, jhabla)
        garment: Garment,
        /// TOML file with measurements (missing ones use defaults)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Client name to record on the draft
        #[arg(short, long)]
        client: Option<String>,
        /// Output SVG path (default: <garment>.svg)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Also export a print-ready HTML file into this directory
        #[arg(long)]
        html: Option<PathBuf>,
        /// Save the draft record into the store
        #[arg(long)]
        save: bool,
        /// Skip the 1-inch grid
        #[arg(long)]
        no_grid: bool,
        /// Skip measurement labels
        #[arg(long)]
        no_labels: bool,
        /// Seam allowance in inches (0 disables)
        #[arg(long, default_value_t = 0.5)]
        seam: f64,
    },
    /// List saved drafts
    List,
    /// Print a saved draft as JSON
    Show {
        /// Draft key (as printed by `list`)
        key: String,
    },
    /// Delete a saved draft
    Delete {
        /// Draft key
        key: String,
    },
    /// Read or write a store setting
    Setting {
        /// Setting name (e.g. "units")
        name: String,
        /// New value; omit to print the current one
        value: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Draft {
            garment,
            input,
            client,
            out,
            html,
            save,
            no_grid,
            no_labels,
            seam,
        } => {
            let measurements = match input {
                Some(path) => read_measurements(&path)?,
                None => Measurements::default(),
            };
            let opts = RenderOptions {
                seam_allowance: seam,
                show_grid: !no_grid,
                show_measurements: !no_labels,
            };
            let result = draft(garment, &measurements, &opts, client.as_deref());

            let out = out.unwrap_or_else(|| PathBuf::from(format!("{garment}.svg")));
            std::fs::write(&out, &result.svg)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {}", out.display());

            if let Some(dir) = html {
                let exporter = HtmlExporter::new(dir);
                match exporter.export(
                    &result.svg,
                    result.width_in,
                    result.height_in,
                    &result.record.key,
                ) {
                    Some(path) => println!("Exported HTML to {}", path.display()),
                    None => println!("HTML export failed"),
                }
            }

            if save {
                let store = JsonFileStore::open(&cli.store)?;
                store.put(&result.record)?;
                println!("Saved draft {}", result.record.key);
            }

            for (name, value) in &result.record.calculated {
                println!("  {name}: {value}");
            }
        }
        Commands::List => {
            let store = JsonFileStore::open(&cli.store)?;
            let mut drafts = store.list()?;
            drafts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            if drafts.is_empty() {
                println!("No saved drafts in {}", cli.store.display());
            }
            for d in drafts {
                let client = d.client_name.as_deref().unwrap_or("-");
                println!("{}  {}  {}  {}", d.key, d.garment, client, d.timestamp);
            }
        }
        Commands::Show { key } => {
            let store = JsonFileStore::open(&cli.store)?;
            match store.get(&key)? {
                Some(d) => println!("{}", serde_json::to_string_pretty(&d)?),
                None => anyhow::bail!("no draft with key {key}"),
            }
        }
        Commands::Delete { key } => {
            let store = JsonFileStore::open(&cli.store)?;
            store.delete(&key)?;
            println!("Deleted {key}");
        }
        Commands::Setting { name, value } => {
            let store = JsonFileStore::open(&cli.store)?;
            match value {
                Some(value) => {
                    store.set_setting(&name, &value)?;
                    println!("Set {name} = {value}");
                }
                None => match store.get_setting(&name)? {
                    Some(value) => println!("{value}"),
                    None => println!("{name} is not set"),
                },
            }
        }
    }

    Ok(())
}

fn read_measurements(path: &PathBuf) -> Result<Measurements> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
