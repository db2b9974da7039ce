use clap::{Parser, Subcommand};
use kairo::diagnostics;
use kairo::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Flattens node-editor workflows into execution-ready prompt graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a saved workflow and print the prompt graph as JSON
    Convert {
        /// Path to the workflow JSON file
        workflow_path: PathBuf,

        /// Optional resolver options JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the graph to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List the workflows and folders of a workflow directory
    List {
        /// Folder to list, relative to the root
        #[arg(default_value = ".")]
        subpath: String,

        /// Workflow directory
        #[arg(short, long, default_value = "user/default/workflows")]
        root: PathBuf,
    },

    /// List the available locale files
    Locales {
        /// Locale directory
        #[arg(short, long, default_value = "locales")]
        root: PathBuf,
    },

    /// Print the raw contents of one locale file
    Locale {
        /// Locale file name, e.g. `en.json`
        filename: String,

        /// Locale directory
        #[arg(short, long, default_value = "locales")]
        root: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            workflow_path,
            config,
            output,
            compact,
        } => run_convert(workflow_path, config, output, compact),
        Command::List { subpath, root } => {
            let listing = JsonStore::new(root)
                .list(&subpath)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to list workflows: {}", e)));
            print_json(&listing);
        }
        Command::Locales { root } => {
            let store = JsonStore::new(root);
            store
                .ensure_root()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to create locale directory: {}", e)));
            let listing = store
                .list(".")
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to list locales: {}", e)));
            print_json(&serde_json::json!({
                "directory": "locales",
                "files": listing.files,
            }));
        }
        Command::Locale { filename, root } => {
            let content = JsonStore::new(root)
                .read_to_string(&filename)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to read locale: {}", e)));
            println!("{}", content);
        }
    }
}

fn run_convert(
    workflow_path: PathBuf,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    compact: bool,
) {
    let total_start = Instant::now();

    // --- 1. Options ---
    let options = match config {
        Some(path) => ResolverOptions::from_json_file(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load options: {}", e))),
        None => ResolverOptions::default(),
    };

    // --- 2. File Loading ---
    let workflow_json = fs::read_to_string(&workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            workflow_path.display(),
            e
        ))
    });
    let workflow = Workflow::from_json(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));

    // --- 3. Resolution ---
    let resolve_start = Instant::now();
    let resolver = Resolver::builder().with_options(options).build();
    let resolution = resolver.resolve(&workflow);
    let resolve_duration = resolve_start.elapsed();

    let rendered = resolution
        .graph
        .to_json(!compact)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));

    match output {
        Some(path) => {
            fs::write(&path, rendered).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
            });
            eprintln!("  -> Wrote resolved graph to '{}'", path.display());
        }
        None => println!("{}", rendered),
    }

    // --- 4. Summary ---
    if !resolution.diagnostics.is_empty() {
        eprintln!("\n--- Diagnostics ---");
        eprintln!("{}", diagnostics::summarize(&resolution.diagnostics));
    }
    eprintln!("\n--- Summary ---");
    eprintln!("Workflow Nodes:    {}", workflow.nodes.len());
    eprintln!("Resolved Nodes:    {}", resolution.graph.len());
    eprintln!("Diagnostics:       {}", resolution.diagnostics.len());
    eprintln!("Resolution:        {:?}", resolve_duration);
    eprintln!("Total Execution:   {:?}", total_start.elapsed());
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
